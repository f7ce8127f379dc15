//! Back-action stack
//!
//! Open sessions register themselves here while they are open. A back or
//! escape action is consumed by the most recently registered session, so
//! the deepest open submenu closes before its ancestors.
//!
//! Registrations are RAII guards: dropping one (on close, or when the
//! owning coordinator is torn down) removes it from the stack no matter
//! which transition caused the exit.

use crate::SessionId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct StackInner {
    /// (registration token, session), oldest first
    entries: Vec<(u64, SessionId)>,
    next_token: u64,
}

/// Shared registry of open sessions, single-threaded
#[derive(Debug, Clone, Default)]
pub struct BackActionStack {
    inner: Rc<RefCell<StackInner>>,
}

impl BackActionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` on top of the stack
    pub fn register(&self, session: SessionId) -> BackRegistration {
        let mut inner = self.inner.borrow_mut();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.entries.push((token, session));
        tracing::debug!(
            target: "menu_state::back",
            %session,
            depth = inner.entries.len(),
            "back handler registered"
        );
        BackRegistration {
            stack: Rc::clone(&self.inner),
            token,
            session,
        }
    }

    /// The session that would consume the next back action
    pub fn top(&self) -> Option<SessionId> {
        self.inner.borrow().entries.last().map(|(_, session)| *session)
    }

    pub fn contains(&self, session: SessionId) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|(_, registered)| *registered == session)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

/// A live registration; removed from the stack when dropped
#[derive(Debug)]
pub struct BackRegistration {
    stack: Rc<RefCell<StackInner>>,
    token: u64,
    session: SessionId,
}

impl BackRegistration {
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether this registration is the one that handles the next back action
    pub fn is_top(&self) -> bool {
        self.stack
            .borrow()
            .entries
            .last()
            .is_some_and(|(token, _)| *token == self.token)
    }
}

impl Drop for BackRegistration {
    fn drop(&mut self) {
        let mut inner = self.stack.borrow_mut();
        inner.entries.retain(|(token, _)| *token != self.token);
        tracing::debug!(
            target: "menu_state::back",
            session = %self.session,
            depth = inner.entries.len(),
            "back handler released"
        );
    }
}
