//! Bounding box structure

use crate::errors::{WarpError, WarpResult};
use crate::geometry::{valid_number, Point, Ring};

/// A bounding box, optionally carrying a height range
///
/// The array form is `[min_x, min_y, max_x, max_y]`, or
/// `[min_x, min_y, min_h, max_x, max_y, max_h]` when heights are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Optional (min, max) height, passed through unchanged
    pub heights: Option<(f64, f64)>,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            heights: None,
        }
    }

    /// Attach a height range
    pub fn with_heights(mut self, min_h: f64, max_h: f64) -> Self {
        self.heights = Some((min_h, max_h));
        self
    }

    /// Build from a 4- or 6-element array
    pub fn from_slice(values: &[f64]) -> WarpResult<Self> {
        for v in values {
            valid_number(*v)?;
        }
        match values {
            [min_x, min_y, max_x, max_y] => Ok(BoundingBox::new(*min_x, *min_y, *max_x, *max_y)),
            [min_x, min_y, min_h, max_x, max_y, max_h] => {
                Ok(BoundingBox::new(*min_x, *min_y, *max_x, *max_y).with_heights(*min_h, *max_h))
            }
            _ => Err(WarpError::InvalidBounds),
        }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy" or the 6-value form)
    pub fn from_string(bbox_str: &str) -> WarpResult<Self> {
        let values = bbox_str
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| WarpError::GenericError(format!("Invalid bounding box value: '{}'", part.trim())))
            })
            .collect::<WarpResult<Vec<f64>>>()?;
        Self::from_slice(&values)
    }

    /// Smallest box covering the given points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Array form, 4 or 6 elements
    pub fn to_vec(&self) -> Vec<f64> {
        match self.heights {
            Some((min_h, max_h)) => vec![self.min_x, self.min_y, min_h, self.max_x, self.max_y, max_h],
            None => vec![self.min_x, self.min_y, self.max_x, self.max_y],
        }
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box already wraps around (right < left)
    pub fn is_wrapped(&self) -> bool {
        self.max_x < self.min_x
    }

    /// Counter-clockwise ring along the four corners
    pub fn to_ring(&self) -> WarpResult<Ring> {
        Ring::new(vec![
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
            Point::new(self.min_x, self.min_y),
        ])
    }
}
