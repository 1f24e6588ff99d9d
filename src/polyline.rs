//! Route geometry as decoded coordinate sequences, plus the decoder
//! for the provider's compact encoded format.
//!
//! Directions responses carry geometry as encoded polyline strings
//! (5-bit groups, offset 63, zig-zag signed deltas at 1e-5 degree
//! precision). Decoding happens once at the provider boundary; the
//! rest of the crate works with plain coordinate points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::Coord;

/// Error for a malformed encoded polyline.
///
/// Carries the byte offset where decoding could not continue, either
/// because the input ended mid-value or a byte was outside the
/// encodable range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed polyline at byte {index}")]
pub struct DecodeError {
    pub index: usize,
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coord>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    ///
    /// The loop is explicitly bounded: every byte access is checked
    /// against the input length, so truncated or corrupt input yields a
    /// `DecodeError` instead of a panic. The whole string is consumed;
    /// a trailing half-read value is an error.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        let bytes = encoded.as_bytes();
        let mut index = 0usize;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;
        let mut points = Vec::new();

        while index < bytes.len() {
            lat += next_value(bytes, &mut index)?;
            lng += next_value(bytes, &mut index)?;
            points.push((lat as f64 / 1e5, lng as f64 / 1e5));
        }

        Ok(Self::new(points))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coord> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends another polyline's points to this one.
    pub fn extend(&mut self, other: Polyline) {
        self.points.extend(other.points);
    }
}

/// Reads one zig-zag encoded value, advancing `index` past it.
fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, DecodeError> {
    let mut accumulator: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index).ok_or(DecodeError { index: *index })?;
        let digit = byte.checked_sub(63).ok_or(DecodeError { index: *index })?;
        // Valid digits fit in 6 bits; a continuation chain long enough
        // to exhaust the shift register cannot come from a real encoder.
        if digit & 0x40 != 0 || shift >= 64 {
            return Err(DecodeError { index: *index });
        }
        *index += 1;
        accumulator |= u64::from(digit & 0x1f) << shift;
        shift += 5;
        if digit & 0x20 == 0 {
            break;
        }
    }

    let magnitude = (accumulator >> 1) as i64;
    Ok(if accumulator & 1 == 1 {
        !magnitude
    } else {
        magnitude
    })
}
