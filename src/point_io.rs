//! Reader for point-set text files
//!
//! The format is a point count followed by that many `x y` integer pairs,
//! all separated by arbitrary whitespace:
//!
//! ```text
//! 3
//! 10000 0
//! 0 10000
//! 3000 7000
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;
use nom::branch::alt;
use nom::character::complete::{digit1, multispace0, multispace1, one_of};
use nom::combinator::{eof, map_res, opt, peek, recognize};
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::error::{Error, Result};
use crate::point::Point;

/// Open a point file, decompressing `.gz` inputs transparently
pub fn open_point_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_compressed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_compressed {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read a whole point set from `path`
pub fn read_point_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let points = read_points(open_point_input(path)?)?;
    debug!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Read a whole point set from any reader
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<Point>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_points(&text)
}

/// Optionally signed decimal integer after any leading whitespace.
/// The integer must be followed by whitespace or the end of input.
fn integer(input: &str) -> IResult<&str, i64> {
    preceded(
        multispace0,
        terminated(
            map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
                s.parse::<i64>()
            }),
            peek(alt((multispace1, eof))),
        ),
    )(input)
}

/// Snippet of the input for error messages
fn near(input: &str) -> String {
    input.split_whitespace().next().unwrap_or("").chars().take(20).collect()
}

fn coordinate(value: i64, index: usize) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| Error::InvalidInput(format!("coordinate {value} of point #{index} out of range")))
}

/// Parse the count-prefixed point format
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let (mut rest, count) =
        integer(text).map_err(|_| Error::InvalidInput("missing point count".to_string()))?;
    let expected = usize::try_from(count)
        .map_err(|_| Error::InvalidInput(format!("invalid point count {count}")))?;

    let mut points = Vec::with_capacity(expected.min(1 << 20));
    for index in 0..expected {
        if rest.trim_start().is_empty() {
            return Err(Error::MissingPoint { index, expected });
        }
        let (after_x, x) = integer(rest).map_err(|_| {
            Error::InvalidInput(format!("malformed point #{index} near '{}'", near(rest)))
        })?;
        if after_x.trim_start().is_empty() {
            return Err(Error::MissingPoint { index, expected });
        }
        let (after_y, y) = integer(after_x).map_err(|_| {
            Error::InvalidInput(format!(
                "point #{index} has no valid y coordinate near '{}'",
                near(after_x)
            ))
        })?;
        points.push(Point::new(coordinate(x, index)?, coordinate(y, index)?));
        rest = after_y;
    }

    if !rest.trim().is_empty() {
        return Err(Error::InvalidInput(format!(
            "unexpected trailing input near '{}'",
            near(rest)
        )));
    }

    Ok(points)
}
