//! Menu configuration
//!
//! Defaults for content placement and press behavior. Loaded from JSON;
//! a missing or malformed file falls back to defaults so a bad config
//! never blocks a menu from opening.

use crate::ConfigError;
use menu_state::AnchorMode;
use placement::{PlacementPrefs, UnmeasuredPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration shared by every component of one context menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Placement of the root menu content
    pub content: PlacementPrefs,
    /// Placement of submenu content
    pub sub_content: PlacementPrefs,
    /// How unmeasured content is rendered
    pub unmeasured: UnmeasuredPolicy,
    /// What the root menu anchors on
    pub anchor_mode: AnchorMode,
    /// Default for items that do not set their own
    pub close_on_item_press: bool,
    pub close_on_overlay_press: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            content: PlacementPrefs::default(),
            sub_content: PlacementPrefs::default(),
            unmeasured: UnmeasuredPolicy::Transparent,
            anchor_mode: AnchorMode::PressPoint,
            close_on_item_press: true,
            close_on_overlay_press: true,
        }
    }
}

impl MenuConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a config file, or return defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    target: "context_menu::config",
                    "Failed to load menu config {}, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement::{Align, Side};
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert!(config.close_on_item_press);
        assert!(config.close_on_overlay_press);
        assert_eq!(config.anchor_mode, AnchorMode::PressPoint);
        assert!(config.content.avoid_collisions);
    }

    #[test]
    fn test_partial_json() {
        let config = MenuConfig::from_json(
            r#"{
                "content": { "side": "top", "align": "end", "side_offset": 6 },
                "anchor_mode": "trigger_rect",
                "close_on_item_press": false
            }"#,
        )
        .unwrap();

        assert_eq!(config.content.side, Side::Top);
        assert_eq!(config.content.align, Align::End);
        assert_eq!(config.content.side_offset, 6.0);
        assert!(config.content.avoid_collisions);
        assert_eq!(config.anchor_mode, AnchorMode::TriggerRect);
        assert!(!config.close_on_item_press);
        assert!(config.close_on_overlay_press);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = MenuConfig::from_json(r#"{"content": {"side": "left"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = MenuConfig::load_or_default("/nonexistent/context-menu/config.json");
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(MenuConfig::load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(MenuConfig::load_or_default(&path), MenuConfig::default());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.json");
        std::fs::write(&path, r#"{ "close_on_overlay_press": false }"#).unwrap();

        let config = MenuConfig::load_or_default(&path);
        assert!(!config.close_on_overlay_press);
        assert!(config.close_on_item_press);
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let mut config = MenuConfig::default();
        config.content.side_offset = 4.0;
        let parsed = MenuConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
