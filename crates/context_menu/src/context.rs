//! Explicit contexts passed to surface components
//!
//! Components never look their session up ambiently. The caller hands each
//! one the context it was rendered under. Structurally required ancestors
//! go through [`require`], which fails fast when the context is absent;
//! optionally enriching ancestors go through [`optional_or_default`].

use menu_state::{MenuCoordinator, MenuError, MenuKind, SessionId};

/// Read-only view of one session, handed down to its components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    pub id: SessionId,
    pub open: bool,
    pub kind: MenuKind,
}

impl MenuContext {
    pub fn of(coordinator: &MenuCoordinator) -> Self {
        Self {
            id: coordinator.id(),
            open: coordinator.is_open(),
            kind: coordinator.kind(),
        }
    }
}

/// Access a structurally required ancestor context
pub fn require<'a, T>(
    context: Option<&'a T>,
    component: &'static str,
    provider: &'static str,
) -> Result<&'a T, MenuError> {
    context.ok_or(MenuError::MissingContext {
        component,
        provider,
    })
}

/// Access an optionally enriching ancestor context, falling back to its default
pub fn optional_or_default<T: Clone + Default>(context: Option<&T>) -> T {
    context.cloned().unwrap_or_default()
}

/// Shorthand for components that must sit inside a menu session
pub fn require_menu<'a>(
    context: Option<&'a MenuContext>,
    component: &'static str,
) -> Result<&'a MenuContext, MenuError> {
    require(context, component, "ContextMenu")
}
