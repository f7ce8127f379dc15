//! Accessibility props exposed to the host bridge

use serde::Serialize;

/// Semantic role of a surface element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Button,
    Menu,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Group,
    Label,
    Separator,
}

/// Accessibility flags and relationships for one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityProps {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    pub disabled: bool,
    /// Host id of the element that labels this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labelled_by: Option<String>,
    /// Host id of the element this one expands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<String>,
    /// Named actions offered as an alternative to touch gestures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

impl AccessibilityProps {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            expanded: None,
            checked: None,
            disabled: false,
            labelled_by: None,
            controls: None,
            actions: Vec::new(),
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    pub fn controls(mut self, id: impl Into<String>) -> Self {
        self.controls = Some(id.into());
        self
    }

    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.actions.push(name.into());
        self
    }
}
