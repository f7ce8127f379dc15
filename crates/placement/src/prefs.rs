//! Placement preferences supplied by the content surface

use crate::Insets;
use serde::{Deserialize, Serialize};

/// Which edge of the anchor the panel emanates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    #[default]
    Bottom,
}

impl Side {
    /// The side on the other end of the vertical axis
    pub fn opposite(&self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Cross-axis alignment of the panel relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

/// What to emit while the content has not been measured yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmeasuredPolicy {
    /// Keep the anchor-relative position but hide the panel
    #[default]
    Transparent,
    /// Move the panel fully off-screen
    Offscreen,
}

/// Declarative placement configuration for one rendered panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPrefs {
    pub side: Side,
    pub align: Align,
    /// Gap between the anchor and the panel along the side axis
    pub side_offset: f64,
    /// Shift along the alignment axis
    pub align_offset: f64,
    /// Flip and clamp to keep the panel inside the viewport minus insets
    pub avoid_collisions: bool,
    pub insets: Insets,
}

impl Default for PlacementPrefs {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            side_offset: 0.0,
            align_offset: 0.0,
            avoid_collisions: true,
            insets: Insets::ZERO,
        }
    }
}

impl PlacementPrefs {
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_side_offset(mut self, offset: f64) -> Self {
        self.side_offset = offset;
        self
    }

    pub fn with_align_offset(mut self, offset: f64) -> Self {
        self.align_offset = offset;
        self
    }

    pub fn with_avoid_collisions(mut self, avoid: bool) -> Self {
        self.avoid_collisions = avoid;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }
}
