//! Placement - Relative positioning for floating menu panels
//!
//! This crate turns a trigger anchor, a measured content rectangle, and a
//! set of placement preferences into concrete coordinates for a floating
//! panel. It provides:
//! - Plain geometry value types (anchor, content layout, insets, viewport)
//! - Placement preferences (side, alignment, offsets, collision avoidance)
//! - A pure positioning engine with side-flip and edge clamping
//! - A small cache that only recomputes when one of its inputs changed
//!
//! # Example
//!
//! ```rust
//! use placement::{compute_placement, AnchorPoint, ContentLayout, PlacementPrefs, Side, Viewport};
//!
//! let anchor = AnchorPoint::from_point(100.0, 500.0);
//! let content = ContentLayout::new(0.0, 0.0, 200.0, 150.0);
//! let prefs = PlacementPrefs::default().with_side_offset(4.0);
//!
//! let style = compute_placement(&anchor, Some(&content), &prefs, &Viewport::new(400.0, 600.0));
//! assert_eq!(style.side, Side::Top);
//! assert_eq!(style.top, 346.0);
//! ```

mod geometry;
mod prefs;
mod engine;
mod cache;

pub use geometry::*;
pub use prefs::*;
pub use engine::*;
pub use cache::*;
