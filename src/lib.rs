// Library exports for percolate
pub mod collinear;
pub mod deque;
pub mod error;
pub mod logging;
pub mod percolation;
pub mod percolation_stats;
pub mod permutation;
pub mod point;
pub mod point_io;
pub mod randomized_queue;
pub mod union_find;

pub use error::{Error, Result};
