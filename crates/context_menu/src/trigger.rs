//! Root menu trigger

use crate::{AccessibilityProps, MenuContext, Role};
use menu_state::{MenuCoordinator, MenuError, Transition, LONG_PRESS_ACTION};
use placement::Rect;
use serde::Serialize;

/// The element that opens the root menu on long-press
#[derive(Debug, Clone, Default)]
pub struct Trigger {
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerProps {
    pub id: String,
    pub accessibility: AccessibilityProps,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn props(&self, context: &MenuContext) -> TriggerProps {
        TriggerProps {
            id: context.id.trigger_id(),
            accessibility: AccessibilityProps::new(Role::Button)
                .expanded(context.open)
                .disabled(self.disabled)
                .controls(context.id.content_id())
                .action(LONG_PRESS_ACTION),
        }
    }

    /// Long-press at screen point (x, y). Ignored while disabled.
    pub fn long_press(&self, menu: &mut MenuCoordinator, x: f64, y: f64) -> Option<Transition> {
        if self.disabled {
            return None;
        }
        Some(menu.on_long_press(x, y))
    }

    /// Named accessibility action. Ignored while disabled.
    pub fn accessibility_action(
        &self,
        menu: &mut MenuCoordinator,
        action: &str,
    ) -> Result<Option<Transition>, MenuError> {
        if self.disabled {
            return Ok(None);
        }
        menu.handle_accessibility_action(action).map(Some)
    }

    /// Layout measurement of the trigger itself
    pub fn on_layout(&self, menu: &mut MenuCoordinator, rect: Rect) {
        menu.set_trigger_layout(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_state::BackActionStack;

    #[test]
    fn test_props_follow_session() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let trigger = Trigger::new();

        let closed = trigger.props(&MenuContext::of(&menu));
        assert_eq!(closed.accessibility.expanded, Some(false));
        assert_eq!(closed.accessibility.actions, vec!["longpress".to_string()]);
        assert_eq!(closed.id, menu.id().trigger_id());

        trigger.long_press(&mut menu, 5.0, 5.0);
        let open = trigger.props(&MenuContext::of(&menu));
        assert_eq!(open.accessibility.expanded, Some(true));
        assert_eq!(open.accessibility.controls, Some(menu.id().content_id()));
    }

    #[test]
    fn test_disabled_trigger_ignores_activation() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let trigger = Trigger::new().disabled(true);

        assert!(trigger.long_press(&mut menu, 5.0, 5.0).is_none());
        assert!(trigger.accessibility_action(&mut menu, "longpress").unwrap().is_none());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_accessibility_action_opens() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let transition = Trigger::new()
            .accessibility_action(&mut menu, "longpress")
            .unwrap();

        assert!(transition.is_some_and(|t| t.open_changed()));
        assert!(menu.is_open());
    }
}
