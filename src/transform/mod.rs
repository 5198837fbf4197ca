//! Ring transformation into geographic coordinates
//!
//! Densifies and reprojects rings, and rebuilds rings that enclose a pole.

mod pole;
mod ring_transformer;
#[cfg(test)]
pub(crate) mod testing;

pub use self::pole::Pole;
pub use self::ring_transformer::{transform_ring, RingTransformer, TransformOptions};
