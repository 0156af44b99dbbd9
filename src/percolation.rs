//! n×n percolation grid backed by two union-find forests.
//!
//! Site `(row, col)` (1-indexed) lives at arena index `(row - 1) * n + col`.
//! Index `0` is the virtual top and `n² + 1` the virtual bottom. Only the
//! `flow` forest ever joins the virtual bottom, so `full` answers "connected to
//! the top" without backwash once the grid percolates.

use log::trace;

use crate::error::{Axis, Error, Result};
use crate::union_find::UnionFind;

const TOP: usize = 0;

/// Which forests a union is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sentinels {
    /// Both the top-only and the top+bottom forest
    Both,
    /// Only the forest that tracks the virtual bottom
    BottomOnly,
}

/// Arena length for an n×n grid: every site plus the two sentinels
pub(crate) fn arena_len(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "grid size must be a positive integer".to_string(),
        ));
    }
    n.checked_mul(n)
        .and_then(|sites| sites.checked_add(2))
        .ok_or_else(|| Error::InvalidArgument(format!("grid size {n} is too large")))
}

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_sites: usize,
    bottom: usize,
    /// Top sentinel only; answers `is_full`
    full: UnionFind,
    /// Top and bottom sentinels; answers `percolates`
    flow: UnionFind,
}

impl Percolation {
    /// Create an n×n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        let length = arena_len(n)?;

        let bottom = length - 1;
        let mut open = vec![false; length];
        open[TOP] = true;
        open[bottom] = true;

        Ok(Percolation {
            n,
            open,
            open_sites: 0,
            bottom,
            full: UnionFind::new(length),
            flow: UnionFind::new(length),
        })
    }

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.n
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row == 0 || row > self.n {
            return Err(Error::OutOfRange {
                axis: Axis::Row,
                index: row,
                n: self.n,
            });
        }
        if col == 0 || col > self.n {
            return Err(Error::OutOfRange {
                axis: Axis::Column,
                index: col,
                n: self.n,
            });
        }
        Ok(())
    }

    /// Arena index of an already validated site
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    fn link(&mut self, a: usize, b: usize, sentinels: Sentinels) {
        if sentinels == Sentinels::Both {
            self.full.union(a, b);
        }
        self.flow.union(a, b);
    }

    /// Open site (row, col) if it is not open already
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;
        let site = self.index(row, col);
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_sites += 1;
        trace!("opened site ({row}, {col})");

        if row == 1 {
            self.link(TOP, site, Sentinels::Both);
        }

        let n = self.n;
        let neighbours = [
            (row > 1).then(|| site - n),
            (row < n).then(|| site + n),
            (col > 1).then(|| site - 1),
            (col < n).then(|| site + 1),
        ];
        for neighbour in neighbours.into_iter().flatten() {
            if self.open[neighbour] {
                self.link(site, neighbour, Sentinels::Both);
            }
        }

        if row == n {
            self.link(self.bottom, site, Sentinels::BottomOnly);
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.open[self.index(row, col)])
    }

    /// True if the site is open and connected to the top row
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        let site = self.index(row, col);
        Ok(self.open[site] && self.full.connected(TOP, site))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// True if an open path connects the top row to the bottom row
    pub fn percolates(&mut self) -> bool {
        self.flow.connected(TOP, self.bottom)
    }
}
