//! Submenus
//!
//! A submenu owns its own session. Its trigger toggles rather than opens,
//! and its content anchors on the trigger's layout rectangle instead of a
//! press point.

use crate::{require_menu, AccessibilityProps, Content, ContentProps, MenuContext, Role};
use menu_state::{BackActionStack, MenuCoordinator, MenuError, Transition};
use placement::{ContentLayout, PlacementPrefs, Rect, UnmeasuredPolicy, Viewport};
use serde::Serialize;

/// Declares a named submenu session
#[derive(Debug, Clone)]
pub struct Sub {
    pub name: String,
}

impl Sub {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Start the submenu's independent session
    pub fn create_session(&self, back_stack: &BackActionStack) -> MenuCoordinator {
        MenuCoordinator::submenu(back_stack.clone())
    }
}

/// Item inside the parent menu that toggles the submenu
#[derive(Debug, Clone, Default)]
pub struct SubTrigger {
    pub text_value: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubTriggerProps {
    pub id: String,
    pub accessibility: AccessibilityProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
}

impl SubTrigger {
    pub fn new(text_value: impl Into<String>) -> Self {
        Self {
            text_value: Some(text_value.into()),
            disabled: false,
        }
    }

    /// The trigger sits in the parent menu, so the parent context is required
    pub fn props(
        &self,
        parent: Option<&MenuContext>,
        sub: &MenuContext,
    ) -> Result<SubTriggerProps, MenuError> {
        require_menu(parent, "ContextMenu.SubTrigger")?;
        Ok(SubTriggerProps {
            id: sub.id.trigger_id(),
            accessibility: AccessibilityProps::new(Role::MenuItem)
                .expanded(sub.open)
                .disabled(self.disabled)
                .controls(sub.id.content_id()),
            text_value: self.text_value.clone(),
        })
    }

    /// Press toggles the submenu. Ignored while disabled.
    pub fn press(&self, sub: &mut MenuCoordinator) -> Option<Transition> {
        if self.disabled {
            return None;
        }
        Some(sub.on_sub_trigger_press())
    }

    pub fn on_layout(&self, sub: &mut MenuCoordinator, rect: Rect) {
        sub.set_trigger_layout(rect);
    }
}

/// Floating panel of a submenu
#[derive(Debug, Clone, Default)]
pub struct SubContent {
    pub prefs: PlacementPrefs,
    pub unmeasured: UnmeasuredPolicy,
    pub force_mount: bool,
}

impl SubContent {
    pub fn new(prefs: PlacementPrefs) -> Self {
        Self {
            prefs,
            ..Self::default()
        }
    }

    pub fn props(&self, sub: &mut MenuCoordinator, viewport: &Viewport) -> ContentProps {
        Content {
            prefs: self.prefs,
            unmeasured: self.unmeasured,
            force_mount: self.force_mount,
        }
        .props(sub, viewport)
    }

    pub fn on_layout(&self, sub: &mut MenuCoordinator, layout: ContentLayout) -> bool {
        sub.on_content_layout(layout)
    }
}
