//! Placement cache
//!
//! Placement is recomputed only when one of its inputs changes. The cache
//! keeps the last input tuple and its style; a lookup with an equal tuple
//! returns the stored style without calling into the engine.

use crate::{
    compute_placement_with, AnchorPoint, ContentLayout, PlacementPrefs, PlacementStyle,
    UnmeasuredPolicy, Viewport,
};

/// The full set of inputs that determine a placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementInputs {
    pub anchor: AnchorPoint,
    pub content: Option<ContentLayout>,
    pub prefs: PlacementPrefs,
    pub viewport: Viewport,
    pub policy: UnmeasuredPolicy,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementCacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl PlacementCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Single-entry memo of the last computed placement
#[derive(Debug, Clone, Default)]
pub struct PlacementCache {
    last: Option<(PlacementInputs, PlacementStyle)>,
    stats: PlacementCacheStats,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the placement for `inputs`, recomputing only if they differ
    /// from the previous call.
    pub fn resolve(&mut self, inputs: PlacementInputs) -> PlacementStyle {
        if let Some((last_inputs, style)) = &self.last {
            if *last_inputs == inputs {
                self.stats.hits += 1;
                return *style;
            }
        }

        self.stats.misses += 1;
        let style = compute_placement_with(
            &inputs.anchor,
            inputs.content.as_ref(),
            &inputs.prefs,
            &inputs.viewport,
            inputs.policy,
        );
        self.last = Some((inputs, style));
        style
    }

    /// The last computed style, if any
    pub fn last_style(&self) -> Option<&PlacementStyle> {
        self.last.as_ref().map(|(_, style)| style)
    }

    /// Drop the stored entry so the next lookup recomputes
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn stats(&self) -> PlacementCacheStats {
        self.stats
    }
}
