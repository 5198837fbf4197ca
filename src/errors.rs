//! Custom error types for ring normalization

use std::fmt;
use std::io;

/// Error kinds raised while validating, cutting or transforming rings
#[derive(Debug)]
pub enum WarpError {
    /// A coordinate value is NaN or infinite
    InvalidNumber,
    /// A point has fewer than two components or a non-finite component
    InvalidPoint,
    /// A point sequence contains an invalid point
    InvalidPoints,
    /// A ring is too short or not closed
    InvalidLinearRing,
    /// The ring encloses both the north and the south pole
    EnclosingBothPoles,
    /// A pole-enclosing ring crosses the auxiliary meridian other than exactly once
    InvalidLinearRingEnclosingPole,
    /// A bounding box does not have 4 or 6 elements
    InvalidBounds,
    /// A bounding box is already wrapped (right < left)
    NotAllowedWarpBounds,
    /// A produced ring fragment intersects itself
    InvalidSelfintersection,
    /// Cutting a bounding box at the antimeridian failed
    FailedCuttingAntimeridian(Box<WarpError>),
    /// An exterior ring is clockwise
    NotAllowedCwLinearRing,
    /// Unknown EPSG code
    InvalidCode(String),
    /// The projection engine rejected a definition or a point
    Projection(String),
    /// I/O error
    IoError(io::Error),
    /// JSON (de)serialization error
    JsonError(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for WarpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarpError::InvalidNumber => write!(f, "not a finite number"),
            WarpError::InvalidPoint => write!(f, "point must have 2 or more finite components"),
            WarpError::InvalidPoints => write!(f, "points must be a sequence of valid points"),
            WarpError::InvalidLinearRing => write!(f, "invalid linear ring"),
            WarpError::EnclosingBothPoles => {
                write!(f, "linear rings enclosing both the north and south poles are not supported")
            }
            WarpError::InvalidLinearRingEnclosingPole => write!(f, "invalid linear ring enclosing the pole"),
            WarpError::InvalidBounds => write!(f, "invalid bounds"),
            WarpError::NotAllowedWarpBounds => write!(f, "wrapped bounds (right < left) are not supported"),
            WarpError::InvalidSelfintersection => write!(f, "ring fragment is self-intersecting"),
            WarpError::FailedCuttingAntimeridian(cause) => {
                write!(f, "failed cutting at the antimeridian: {}", cause)
            }
            WarpError::NotAllowedCwLinearRing => write!(f, "clockwise linear rings are not supported"),
            WarpError::InvalidCode(code) => write!(f, "unsupported EPSG code: {}", code),
            WarpError::Projection(msg) => write!(f, "projection error: {}", msg),
            WarpError::IoError(e) => write!(f, "I/O error: {}", e),
            WarpError::JsonError(e) => write!(f, "JSON error: {}", e),
            WarpError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WarpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WarpError::FailedCuttingAntimeridian(cause) => Some(cause.as_ref()),
            WarpError::IoError(e) => Some(e),
            WarpError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WarpError {
    fn from(error: io::Error) -> Self {
        WarpError::IoError(error)
    }
}

impl From<serde_json::Error> for WarpError {
    fn from(error: serde_json::Error) -> Self {
        WarpError::JsonError(error)
    }
}

impl From<String> for WarpError {
    fn from(msg: String) -> Self {
        WarpError::GenericError(msg)
    }
}

/// Result type for ring operations
pub type WarpResult<T> = Result<T, WarpError>;
