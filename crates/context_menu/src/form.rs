//! Checkbox and radio items
//!
//! Form-selection state lives beside the menu session, not inside it. A
//! radio item needs its enclosing group; an indicator only reads the state
//! of its item and treats a missing one as "not selected".

use crate::{
    optional_or_default, require, require_menu, AccessibilityProps, ItemProps, MenuContext, Role,
};
use menu_state::{MenuCoordinator, MenuError};

/// Selection state an item hands to its indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormItemState {
    pub selected: bool,
}

/// An item with an on/off state
#[derive(Debug, Clone, Default)]
pub struct CheckboxItem {
    pub checked: bool,
    pub text_value: Option<String>,
    pub disabled: bool,
    pub close_on_press: Option<bool>,
}

impl CheckboxItem {
    pub fn new(text_value: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            text_value: Some(text_value.into()),
            ..Self::default()
        }
    }

    pub fn close_on_press(mut self, close: bool) -> Self {
        self.close_on_press = Some(close);
        self
    }

    pub fn props(&self, context: Option<&MenuContext>) -> Result<ItemProps, MenuError> {
        require_menu(context, "ContextMenu.CheckboxItem")?;
        Ok(ItemProps {
            accessibility: AccessibilityProps::new(Role::MenuItemCheckbox)
                .checked(self.checked)
                .disabled(self.disabled),
            text_value: self.text_value.clone(),
        })
    }

    pub fn form_state(&self) -> FormItemState {
        FormItemState {
            selected: self.checked,
        }
    }

    /// Toggle: reports the new checked value, then closes if configured
    pub fn press<F>(
        &self,
        menu: &mut MenuCoordinator,
        close_by_default: bool,
        on_checked_change: F,
    ) -> bool
    where
        F: FnOnce(bool),
    {
        if self.disabled {
            return false;
        }
        let next = !self.checked;
        let close = self.close_on_press.unwrap_or(close_by_default);
        menu.select_item(|_| on_checked_change(next), close)
    }
}

/// Holds the selected value for its radio items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroup {
    pub value: Option<String>,
}

impl RadioGroup {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
        }
    }

    pub fn props(&self, context: Option<&MenuContext>) -> Result<AccessibilityProps, MenuError> {
        require_menu(context, "ContextMenu.RadioGroup")?;
        Ok(AccessibilityProps::new(Role::Group))
    }
}

/// One choice within a `RadioGroup`
#[derive(Debug, Clone, Default)]
pub struct RadioItem {
    pub value: String,
    pub text_value: Option<String>,
    pub disabled: bool,
    pub close_on_press: Option<bool>,
}

impl RadioItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn close_on_press(mut self, close: bool) -> Self {
        self.close_on_press = Some(close);
        self
    }

    fn group<'a>(&self, group: Option<&'a RadioGroup>) -> Result<&'a RadioGroup, MenuError> {
        require(group, "ContextMenu.RadioItem", "ContextMenu.RadioGroup")
    }

    pub fn props(
        &self,
        context: Option<&MenuContext>,
        group: Option<&RadioGroup>,
    ) -> Result<ItemProps, MenuError> {
        require_menu(context, "ContextMenu.RadioItem")?;
        let state = self.form_state(group)?;
        Ok(ItemProps {
            accessibility: AccessibilityProps::new(Role::MenuItemRadio)
                .checked(state.selected)
                .disabled(self.disabled),
            text_value: self.text_value.clone(),
        })
    }

    pub fn form_state(&self, group: Option<&RadioGroup>) -> Result<FormItemState, MenuError> {
        let group = self.group(group)?;
        Ok(FormItemState {
            selected: group.value.as_deref() == Some(self.value.as_str()),
        })
    }

    /// Select this value: reports it to the group, then closes if configured
    pub fn press<F>(
        &self,
        menu: &mut MenuCoordinator,
        group: Option<&RadioGroup>,
        close_by_default: bool,
        on_value_change: F,
    ) -> Result<bool, MenuError>
    where
        F: FnOnce(&str),
    {
        self.group(group)?;
        if self.disabled {
            return Ok(false);
        }
        let close = self.close_on_press.unwrap_or(close_by_default);
        Ok(menu.select_item(|_| on_value_change(&self.value), close))
    }
}

/// Check mark or dot shown for selected checkbox/radio items
#[derive(Debug, Clone, Default)]
pub struct ItemIndicator {
    pub force_mount: bool,
}

impl ItemIndicator {
    pub fn is_rendered(&self, state: Option<&FormItemState>) -> bool {
        self.force_mount || optional_or_default(state).selected
    }
}
