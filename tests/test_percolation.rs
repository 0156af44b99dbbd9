/// Percolation grid tests against a breadth-first-search reference
///
/// The union-find answers for `is_full` and `percolates` must match a plain
/// flood fill over the open sites, for any order of openings.
use std::collections::VecDeque;

use percolate::error::Error;
use percolate::percolation::Percolation;
use proptest::prelude::*;

/// Flood fill from every open top-row site; returns the wet sites
fn flood_from_top(open: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = open.len();
    let mut wet = vec![vec![false; n]; n];
    let mut queue = VecDeque::new();
    for col in 0..n {
        if open[0][col] {
            wet[0][col] = true;
            queue.push_back((0usize, col));
        }
    }
    while let Some((row, col)) = queue.pop_front() {
        let mut neighbours = Vec::with_capacity(4);
        if row > 0 {
            neighbours.push((row - 1, col));
        }
        if row + 1 < n {
            neighbours.push((row + 1, col));
        }
        if col > 0 {
            neighbours.push((row, col - 1));
        }
        if col + 1 < n {
            neighbours.push((row, col + 1));
        }
        for (r, c) in neighbours {
            if open[r][c] && !wet[r][c] {
                wet[r][c] = true;
                queue.push_back((r, c));
            }
        }
    }
    wet
}

#[test]
fn test_fresh_grids() {
    for n in 1..=6 {
        let mut perc = Percolation::new(n).unwrap();
        assert_eq!(perc.number_of_open_sites(), 0);
        assert!(!perc.percolates(), "fresh {n}x{n} grid must not percolate");
        assert_eq!(perc.size(), n);
    }
}

#[test]
fn test_invalid_size() {
    assert!(matches!(Percolation::new(0), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_out_of_range_coordinates() {
    let mut perc = Percolation::new(5).unwrap();
    for (row, col) in [(0, 1), (1, 0), (6, 1), (1, 6), (0, 0)] {
        assert!(
            matches!(perc.open(row, col), Err(Error::OutOfRange { .. })),
            "({row}, {col}) should be rejected"
        );
        assert!(perc.is_open(row, col).is_err());
        assert!(perc.is_full(row, col).is_err());
    }
    assert_eq!(perc.number_of_open_sites(), 0);
}

#[test]
fn test_backwash_regression() {
    // Classic input: a percolating column on the left plus isolated bottom sites
    let n = 5;
    let mut perc = Percolation::new(n).unwrap();
    for row in 1..=n {
        perc.open(row, 1).unwrap();
    }
    perc.open(5, 3).unwrap();
    perc.open(4, 3).unwrap();
    perc.open(5, 5).unwrap();

    assert!(perc.percolates());
    assert!(!perc.is_full(5, 3).unwrap());
    assert!(!perc.is_full(4, 3).unwrap());
    assert!(!perc.is_full(5, 5).unwrap());
    assert!(perc.is_full(5, 1).unwrap());

    // Independent grids are unaffected
    let mut tiny = Percolation::new(1).unwrap();
    tiny.open(1, 1).unwrap();
    assert!(tiny.is_full(1, 1).unwrap());
    assert!(tiny.percolates());

    let mut other = Percolation::new(2).unwrap();
    assert!(!other.percolates());
    other.open(2, 1).unwrap();
    assert!(!other.is_full(2, 1).unwrap());
}

#[test]
fn test_snake_path() {
    // Path winding through a 3x3 grid: (1,1) (2,1) (2,2) (2,3) (3,3)
    let mut perc = Percolation::new(3).unwrap();
    for (row, col) in [(1, 1), (2, 1), (2, 2), (2, 3)] {
        perc.open(row, col).unwrap();
        assert!(!perc.percolates());
    }
    perc.open(3, 3).unwrap();
    assert!(perc.percolates());
    assert_eq!(perc.number_of_open_sites(), 5);
    assert!(!perc.is_full(3, 1).unwrap());
}

proptest! {
    #[test]
    fn prop_matches_flood_fill(
        n in 1usize..8,
        openings in prop::collection::vec((0usize..8, 0usize..8), 0..80)
    ) {
        let mut perc = Percolation::new(n).unwrap();
        let mut open = vec![vec![false; n]; n];
        let mut distinct = 0;

        for (r, c) in openings {
            let (row, col) = (r % n, c % n);
            if !open[row][col] {
                distinct += 1;
            }
            open[row][col] = true;
            perc.open(row + 1, col + 1).unwrap();
            prop_assert_eq!(perc.number_of_open_sites(), distinct);
        }

        let wet = flood_from_top(&open);
        for row in 0..n {
            for col in 0..n {
                prop_assert_eq!(perc.is_open(row + 1, col + 1).unwrap(), open[row][col]);
                prop_assert_eq!(
                    perc.is_full(row + 1, col + 1).unwrap(),
                    wet[row][col],
                    "site ({}, {})", row + 1, col + 1
                );
            }
        }
        prop_assert_eq!(perc.percolates(), wet[n - 1].iter().any(|&w| w));
    }
}
