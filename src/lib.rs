//! Pointer-tracking and hover selection for floating hotbox menus.
//!
//! A [`Hotbox`] owns an ordered set of [`Region`]s and resolves, for each
//! pointer-move event, which single region (if any) is under the pointer.
//! Coordinate conversion between the surface and region-local spaces lives in
//! [`geometry`]; the host applies the returned [`SelectionChange`]s to its
//! own rendering. The surface never draws anything itself.

pub mod geometry;
pub mod hotbox;
pub mod region;
pub mod tracing_sub;

pub use geometry::{Point, Size};
pub use hotbox::{Hotbox, SelectionChange};
pub use region::Region;
