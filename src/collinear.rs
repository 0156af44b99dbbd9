//! Detection of line segments through 4 or more collinear points.
//!
//! [`FastCollinearPoints`] sorts by slope around each anchor and sweeps runs
//! of equal slope. [`BruteCollinearPoints`] checks every quadruple and serves
//! as the reference the fast variant is tested against.

use indexmap::IndexSet;
use log::{debug, info};

use crate::error::{Error, Result};
use crate::point::{LineSegment, Point};

/// Minimum number of other points sharing a slope with the anchor
const MIN_RUN: usize = 3;

/// Common interface of the collinear finders
pub trait CollinearSegments {
    /// Number of maximal segments found
    fn number_of_segments(&self) -> usize;

    /// Copy of the maximal segments found, in no particular order
    fn segments(&self) -> Vec<LineSegment>;
}

/// Which finder to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Fast,
    Brute,
}

impl std::str::FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Method::Fast),
            "brute" | "brute-force" => Ok(Method::Brute),
            other => Err(Error::InvalidArgument(format!(
                "unknown method '{other}', expected 'fast' or 'brute'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollinearConfig {
    pub method: Method,
}

/// Run the configured finder over `points`
pub fn find_segments(points: &[Point], config: &CollinearConfig) -> Result<Vec<LineSegment>> {
    let segments = match config.method {
        Method::Fast => FastCollinearPoints::new(points)?.segments(),
        Method::Brute => BruteCollinearPoints::new(points)?.segments(),
    };
    info!(
        "{:?} search over {} points found {} segments",
        config.method,
        points.len(),
        segments.len()
    );
    Ok(segments)
}

/// Copy and sort the points, rejecting duplicates
fn sorted_unique(points: &[Point]) -> Result<Vec<Point>> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::DuplicatePoint(pair[0]));
    }
    Ok(sorted)
}

/// Sort-by-slope collinear finder, O(n² log n)
#[derive(Debug, Clone)]
pub struct FastCollinearPoints {
    segments: Vec<LineSegment>,
}

impl FastCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self> {
        let natural = sorted_unique(points)?;
        let mut work = natural.clone();
        let mut segments = Vec::new();

        for &anchor in natural.iter().take(natural.len().saturating_sub(MIN_RUN)) {
            // Stable sort over naturally ordered points keeps each run in
            // natural order: run[start] is its smallest point, run[end - 1]
            // its largest.
            work.copy_from_slice(&natural);
            work.sort_by(anchor.slope_order());

            let mut start = 0;
            while start < work.len() {
                let slope = anchor.slope_to(&work[start]);
                let mut end = start + 1;
                while end < work.len() && anchor.slope_to(&work[end]) == slope {
                    end += 1;
                }

                if end - start >= MIN_RUN && anchor < work[start] {
                    let segment = LineSegment::new(anchor, work[end - 1]);
                    debug!(
                        "segment {segment} through {} points, slope {:.3}",
                        end - start + 1,
                        slope.as_f64()
                    );
                    segments.push(segment);
                }
                start = end;
            }
        }

        Ok(FastCollinearPoints { segments })
    }
}

impl CollinearSegments for FastCollinearPoints {
    fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }
}

/// Exhaustive quadruple search, O(n⁴); reference for small inputs
#[derive(Debug, Clone)]
pub struct BruteCollinearPoints {
    segments: Vec<LineSegment>,
}

impl BruteCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self> {
        let a = sorted_unique(points)?;
        let n = a.len();
        let mut candidates: IndexSet<LineSegment> = IndexSet::new();

        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    // No fourth point can help if the first three are not collinear
                    if !a[i].collinear_with(&a[j], &a[k]) {
                        continue;
                    }
                    for m in k + 1..n {
                        if a[i].collinear_with(&a[k], &a[m]) {
                            candidates.insert(LineSegment::new(a[i], a[m]));
                        }
                    }
                }
            }
        }

        // Lines of 5+ points also yield their sub-segments; keep the maximal ones
        let segments: Vec<LineSegment> = candidates
            .iter()
            .filter(|seg| {
                !candidates
                    .iter()
                    .any(|other| other != *seg && other.covers(seg))
            })
            .copied()
            .collect();
        debug!(
            "{} candidate segments, {} maximal",
            candidates.len(),
            segments.len()
        );

        Ok(BruteCollinearPoints { segments })
    }
}

impl CollinearSegments for BruteCollinearPoints {
    fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }
}
