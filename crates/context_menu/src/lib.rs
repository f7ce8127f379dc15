//! Context Menu - Compound surface components
//!
//! Thin consumers of the placement engine and menu sessions. Each component
//! is a plain options struct; given its explicit context it returns a props
//! object (ids, accessibility flags, placement style) that the host attaches
//! to whatever concrete element it renders. Events flow back through the
//! component into the owning `MenuCoordinator`.
//!
//! `ContextMenu` ties one root session, any number of named submenu
//! sessions, the shared back-action stack, and the portal together.

mod error;
mod config;
mod context;
mod a11y;
mod trigger;
mod content;
mod item;
mod form;
mod sub;
mod menu;

pub use error::*;
pub use config::*;
pub use context::*;
pub use a11y::*;
pub use trigger::*;
pub use content::*;
pub use item::*;
pub use form::*;
pub use sub::*;
pub use menu::*;

pub use menu_state::{
    AnchorMode, BackActionStack, MenuCoordinator, MenuError, MenuKind, PortalHost, PortalKey,
    SessionId, SessionPhase, Transition,
};
pub use placement::{
    Align, AnchorPoint, ContentLayout, Insets, PlacementPrefs, PlacementStyle, Rect, Side,
    UnmeasuredPolicy, Viewport, Visibility,
};
