//! Menu State - Sessions and interaction coordination for context menus
//!
//! This crate owns the open/closed lifecycle of a menu:
//! - One `MenuSession` per root menu and per nested submenu
//! - A three-phase state machine (closed, open pending layout, open positioned)
//! - A back-action stack that routes back/escape to the deepest open session
//! - A coordinator that wires activation, measurement, selection, and
//!   back events into a session and re-runs placement when inputs change
//! - The portal mounting contract keyed by session id

mod error;
mod session_id;
mod session;
mod back;
mod coordinator;
mod portal;

pub use error::*;
pub use session_id::*;
pub use session::*;
pub use back::*;
pub use coordinator::*;
pub use portal::*;
