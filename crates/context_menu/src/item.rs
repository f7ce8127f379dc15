//! Menu items, groups, labels, and separators

use crate::{require_menu, AccessibilityProps, MenuContext, Role};
use menu_state::{MenuCoordinator, MenuError};
use serde::Serialize;

/// Props shared by every selectable item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemProps {
    pub accessibility: AccessibilityProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
}

/// A selectable menu entry
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Text used for typeahead and accessibility labels
    pub text_value: Option<String>,
    pub disabled: bool,
    /// Overrides the menu-wide default when set
    pub close_on_press: Option<bool>,
}

impl Item {
    pub fn new(text_value: impl Into<String>) -> Self {
        Self {
            text_value: Some(text_value.into()),
            ..Self::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn close_on_press(mut self, close: bool) -> Self {
        self.close_on_press = Some(close);
        self
    }

    pub fn props(&self, context: Option<&MenuContext>) -> Result<ItemProps, MenuError> {
        require_menu(context, "ContextMenu.Item")?;
        Ok(ItemProps {
            accessibility: AccessibilityProps::new(Role::MenuItem).disabled(self.disabled),
            text_value: self.text_value.clone(),
        })
    }

    /// Select the item. `on_select` runs before the menu closes.
    ///
    /// Returns false when the item is disabled or the menu is closed.
    pub fn press<F>(&self, menu: &mut MenuCoordinator, close_by_default: bool, on_select: F) -> bool
    where
        F: FnOnce(),
    {
        if self.disabled {
            return false;
        }
        let close = self.close_on_press.unwrap_or(close_by_default);
        menu.select_item(|_| on_select(), close)
    }
}

/// Groups related items
#[derive(Debug, Clone, Default)]
pub struct Group;

impl Group {
    pub fn props(&self, context: Option<&MenuContext>) -> Result<AccessibilityProps, MenuError> {
        require_menu(context, "ContextMenu.Group")?;
        Ok(AccessibilityProps::new(Role::Group))
    }
}

/// Non-interactive heading
#[derive(Debug, Clone, Default)]
pub struct Label;

impl Label {
    pub fn props(&self, context: Option<&MenuContext>) -> Result<AccessibilityProps, MenuError> {
        require_menu(context, "ContextMenu.Label")?;
        Ok(AccessibilityProps::new(Role::Label))
    }
}

/// Visual divider between items
#[derive(Debug, Clone, Default)]
pub struct Separator {
    /// Decorative separators are hidden from assistive technology
    pub decorative: bool,
}

impl Separator {
    /// None for decorative separators
    pub fn props(
        &self,
        context: Option<&MenuContext>,
    ) -> Result<Option<AccessibilityProps>, MenuError> {
        require_menu(context, "ContextMenu.Separator")?;
        if self.decorative {
            return Ok(None);
        }
        Ok(Some(AccessibilityProps::new(Role::Separator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_state::BackActionStack;

    fn open_menu() -> MenuCoordinator {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        menu.on_long_press(10.0, 10.0);
        menu
    }

    #[test]
    fn test_item_outside_menu_fails() {
        let err = Item::new("Copy").props(None).unwrap_err();
        assert!(matches!(
            err,
            MenuError::MissingContext {
                component: "ContextMenu.Item",
                ..
            }
        ));
    }

    #[test]
    fn test_item_props() {
        let menu = open_menu();
        let props = Item::new("Copy")
            .disabled(true)
            .props(Some(&MenuContext::of(&menu)))
            .unwrap();

        assert_eq!(props.accessibility.role, Role::MenuItem);
        assert!(props.accessibility.disabled);
        assert_eq!(props.text_value.as_deref(), Some("Copy"));
    }

    #[test]
    fn test_item_press_selects_then_closes() {
        let mut menu = open_menu();
        let mut selected = false;

        assert!(Item::new("Copy").press(&mut menu, true, || selected = true));
        assert!(selected);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_item_close_override() {
        let mut menu = open_menu();
        assert!(Item::new("Pin").close_on_press(false).press(&mut menu, true, || {}));
        assert!(menu.is_open());
    }

    #[test]
    fn test_disabled_item_press_is_ignored() {
        let mut menu = open_menu();
        let mut selected = false;

        assert!(!Item::new("Cut").disabled(true).press(&mut menu, true, || selected = true));
        assert!(!selected);
        assert!(menu.is_open());
    }

    #[test]
    fn test_structural_components_require_menu() {
        assert!(Group.props(None).is_err());
        assert!(Label.props(None).is_err());
        assert!(Separator::default().props(None).is_err());

        let menu = open_menu();
        let context = MenuContext::of(&menu);
        assert_eq!(Label.props(Some(&context)).unwrap().role, Role::Label);
        assert!(Separator { decorative: true }.props(Some(&context)).unwrap().is_none());
    }
}
