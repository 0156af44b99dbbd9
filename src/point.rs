use std::cmp::Ordering;
use std::fmt;

/// Immutable point on the integer grid, ordered by y then x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Slope of the line from this point to `other`
    pub fn slope_to(&self, other: &Point) -> Slope {
        let rise = other.y as i64 - self.y as i64;
        let run = other.x as i64 - self.x as i64;
        match (rise, run) {
            (0, 0) => Slope::Degenerate,
            (_, 0) => Slope::Vertical,
            // Keep the run positive so cross-multiplication preserves order
            _ if run < 0 => Slope::Finite {
                rise: -rise,
                run: -run,
            },
            _ => Slope::Finite { rise, run },
        }
    }

    /// Comparator ordering points by the slope they make with this point
    pub fn slope_order(&self) -> impl Fn(&Point, &Point) -> Ordering + '_ {
        move |a: &Point, b: &Point| self.slope_to(a).cmp(&self.slope_to(b))
    }

    /// True if `b` and `c` lie on one line through this point
    pub fn collinear_with(&self, b: &Point, c: &Point) -> bool {
        self.slope_to(b) == self.slope_to(c)
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Exact slope between two points.
///
/// Ordering runs `Degenerate < Finite (by value) < Vertical`, matching
/// -inf, the real slope and +inf. Finite slopes compare by
/// cross-multiplication so equal ratios are equal regardless of scale.
#[derive(Debug, Clone, Copy)]
pub enum Slope {
    /// The point compared with itself
    Degenerate,
    /// `rise / run` with `run > 0`; horizontal lines have `rise == 0`
    Finite { rise: i64, run: i64 },
    Vertical,
}

impl Slope {
    fn rank(&self) -> u8 {
        match self {
            Slope::Degenerate => 0,
            Slope::Finite { .. } => 1,
            Slope::Vertical => 2,
        }
    }

    /// Floating point view of the slope
    pub fn as_f64(&self) -> f64 {
        match *self {
            Slope::Degenerate => f64::NEG_INFINITY,
            Slope::Vertical => f64::INFINITY,
            Slope::Finite { rise: 0, .. } => 0.0,
            Slope::Finite { rise, run } => rise as f64 / run as f64,
        }
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Slope::Finite { rise: r1, run: d1 }, Slope::Finite { rise: r2, run: d2 }) => {
                (r1 as i128 * d2 as i128).cmp(&(r2 as i128 * d1 as i128))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

/// Segment between the two extreme points of a collinear set.
///
/// Endpoints are stored in natural order, so `(p, q)` and `(q, p)` are the
/// same segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            LineSegment { p: a, q: b }
        } else {
            LineSegment { p: b, q: a }
        }
    }

    /// Naturally smaller endpoint
    pub fn start(&self) -> Point {
        self.p
    }

    /// Naturally larger endpoint
    pub fn end(&self) -> Point {
        self.q
    }

    /// True if `point` lies on this segment, endpoints included
    pub fn contains(&self, point: &Point) -> bool {
        let on_line = *point == self.p || self.p.collinear_with(&self.q, point);
        on_line && self.p <= *point && *point <= self.q
    }

    /// True if both endpoints of `other` lie on this segment
    pub fn covers(&self, other: &LineSegment) -> bool {
        self.contains(&other.p) && self.contains(&other.q)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}
