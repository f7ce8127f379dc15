//! Relative positioning engine
//!
//! Computes where a floating panel should render relative to its anchor.
//! The vertical axis is resolved first (including the side flip), then the
//! horizontal axis is clamped independently, so the two axes never
//! interact. The engine is total: degenerate geometry yields a best-effort
//! clamped position rather than an error.

use crate::{
    Align, AnchorPoint, ContentLayout, Insets, PlacementPrefs, Side, UnmeasuredPolicy, Viewport,
};
use serde::{Deserialize, Serialize};

/// Whether the panel should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    /// Mounted but not yet positioned; render with zero opacity
    Hidden,
}

/// Absolute placement for the floating panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementStyle {
    pub top: f64,
    pub left: f64,
    /// Bound so wide content wraps instead of leaving the screen
    pub max_width: f64,
    pub max_height: f64,
    /// Side actually used after collision avoidance
    pub side: Side,
    pub align: Align,
    pub visibility: Visibility,
}

impl PlacementStyle {
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

/// Compute the panel placement with the default unmeasured policy.
///
/// See [`compute_placement_with`].
pub fn compute_placement(
    anchor: &AnchorPoint,
    content: Option<&ContentLayout>,
    prefs: &PlacementPrefs,
    viewport: &Viewport,
) -> PlacementStyle {
    compute_placement_with(anchor, content, prefs, viewport, UnmeasuredPolicy::default())
}

/// Compute the panel placement.
///
/// `content` is `None` until the panel has been measured; that transient
/// state produces a hidden style according to `policy`.
pub fn compute_placement_with(
    anchor: &AnchorPoint,
    content: Option<&ContentLayout>,
    prefs: &PlacementPrefs,
    viewport: &Viewport,
    policy: UnmeasuredPolicy,
) -> PlacementStyle {
    let insets = &prefs.insets;
    let max_width = (viewport.width - insets.horizontal()).max(0.0);
    let max_height = (viewport.height - insets.vertical()).max(0.0);

    let Some(content) = content else {
        let (top, left) = match policy {
            UnmeasuredPolicy::Transparent => (
                side_position(anchor, 0.0, prefs.side, prefs.side_offset),
                align_position(anchor, 0.0, prefs.align, prefs.align_offset),
            ),
            UnmeasuredPolicy::Offscreen => (-viewport.height, -viewport.width),
        };
        tracing::trace!(
            target: "placement::engine",
            ?policy,
            top,
            left,
            "content not measured yet"
        );
        return PlacementStyle {
            top,
            left,
            max_width,
            max_height,
            side: prefs.side,
            align: prefs.align,
            visibility: Visibility::Hidden,
        };
    };

    let candidate_top = side_position(anchor, content.height, prefs.side, prefs.side_offset);
    let candidate_left = align_position(anchor, content.width, prefs.align, prefs.align_offset);

    let (top, side, left) = if prefs.avoid_collisions {
        let (top, side) = resolve_vertical(anchor, content, prefs, viewport, candidate_top);
        let left = clamp_horizontal(candidate_left, content.width, insets, viewport);
        (top, side, left)
    } else {
        (candidate_top, prefs.side, candidate_left)
    };

    tracing::trace!(
        target: "placement::engine",
        requested = prefs.side.as_str(),
        resolved = side.as_str(),
        top,
        left,
        "placement computed"
    );

    PlacementStyle {
        top,
        left,
        max_width,
        max_height,
        side,
        align: prefs.align,
        visibility: Visibility::Visible,
    }
}

/// Primary-axis (vertical) position for a side
fn side_position(anchor: &AnchorPoint, content_height: f64, side: Side, side_offset: f64) -> f64 {
    match side {
        Side::Bottom => anchor.y + anchor.height + side_offset,
        Side::Top => anchor.y - content_height - side_offset,
    }
}

/// Cross-axis (horizontal) position for an alignment
fn align_position(
    anchor: &AnchorPoint,
    content_width: f64,
    align: Align,
    align_offset: f64,
) -> f64 {
    match align {
        Align::Start => anchor.x + align_offset,
        Align::Center => anchor.as_rect().center_x() - content_width / 2.0 + align_offset,
        Align::End => anchor.x + anchor.width - content_width + align_offset,
    }
}

/// Whether a panel top edge overflows the edge opposite the anchor
fn overflows(
    top: f64,
    content_height: f64,
    side: Side,
    insets: &Insets,
    viewport: &Viewport,
) -> bool {
    match side {
        Side::Bottom => top + content_height > viewport.height - insets.bottom,
        Side::Top => top < insets.top,
    }
}

/// Pick the vertical side and position, flipping when the requested side
/// overflows and the opposite one fits.
fn resolve_vertical(
    anchor: &AnchorPoint,
    content: &ContentLayout,
    prefs: &PlacementPrefs,
    viewport: &Viewport,
    candidate_top: f64,
) -> (f64, Side) {
    let insets = &prefs.insets;
    if !overflows(candidate_top, content.height, prefs.side, insets, viewport) {
        return (candidate_top, prefs.side);
    }

    let flipped_side = prefs.side.opposite();
    let flipped_top = side_position(anchor, content.height, flipped_side, prefs.side_offset);
    if !overflows(flipped_top, content.height, flipped_side, insets, viewport) {
        tracing::trace!(
            target: "placement::engine",
            from = prefs.side.as_str(),
            to = flipped_side.as_str(),
            "flipped side to avoid collision"
        );
        return (flipped_top, flipped_side);
    }

    // Both sides overflow: keep the requested side and pin to the insets.
    let min_top = insets.top;
    let max_top = (viewport.height - insets.bottom - content.height).max(min_top);
    (candidate_top.clamp(min_top, max_top), prefs.side)
}

/// Clamp the left edge into the viewport minus insets. When the content is
/// wider than the available span it is pinned to the left inset.
fn clamp_horizontal(
    candidate_left: f64,
    content_width: f64,
    insets: &Insets,
    viewport: &Viewport,
) -> f64 {
    let min_left = insets.left;
    let max_left = viewport.width - insets.right - content_width;
    if max_left < min_left {
        min_left
    } else {
        candidate_left.clamp(min_left, max_left)
    }
}
