//! Menu session store
//!
//! Holds one menu's open flag, captured anchor, and measured content
//! layout. Closing resets all three together so an anchor is never kept
//! while the menu is closed.

use crate::SessionId;
use placement::{AnchorPoint, ContentLayout};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Closed,
    /// Anchor captured, content mounted but not measured yet
    OpenPendingLayout,
    /// Anchor and content layout both known
    OpenPositioned,
}

impl SessionPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, SessionPhase::Closed)
    }
}

/// Result of a state-changing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SessionPhase,
    pub to: SessionPhase,
}

impl Transition {
    /// Whether the open flag flipped
    pub fn open_changed(&self) -> bool {
        self.from.is_open() != self.to.is_open()
    }
}

/// One menu's open/anchor/layout state
#[derive(Debug, Clone)]
pub struct MenuSession {
    id: SessionId,
    open: bool,
    anchor: Option<AnchorPoint>,
    content_layout: Option<ContentLayout>,
    activation_count: u64,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            open: false,
            anchor: None,
            content_layout: None,
            activation_count: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Option<&AnchorPoint> {
        self.anchor.as_ref()
    }

    pub fn content_layout(&self) -> Option<&ContentLayout> {
        self.content_layout.as_ref()
    }

    /// Number of activations over the session's lifetime
    pub fn activation_count(&self) -> u64 {
        self.activation_count
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.open, self.content_layout.is_some()) {
            (false, _) => SessionPhase::Closed,
            (true, false) => SessionPhase::OpenPendingLayout,
            (true, true) => SessionPhase::OpenPositioned,
        }
    }

    /// Open the session at `anchor`.
    ///
    /// A fresh gesture on an already open session replaces the anchor
    /// wholesale and keeps the mounted panel's measurement.
    pub fn activate(&mut self, anchor: AnchorPoint) -> Transition {
        let from = self.phase();
        if !self.open {
            self.content_layout = None;
        }
        self.anchor = Some(anchor);
        self.open = true;
        self.activation_count += 1;

        let transition = Transition {
            from,
            to: self.phase(),
        };
        tracing::debug!(
            target: "menu_state::session",
            session = %self.id,
            x = anchor.x,
            y = anchor.y,
            activations = self.activation_count,
            from = ?transition.from,
            to = ?transition.to,
            "session activated"
        );
        transition
    }

    /// Open when closed, close when open
    pub fn toggle(&mut self, anchor: AnchorPoint) -> Transition {
        if self.open {
            let from = self.phase();
            self.close();
            Transition {
                from,
                to: self.phase(),
            }
        } else {
            self.activate(anchor)
        }
    }

    /// Close the session, clearing anchor and layout together.
    ///
    /// Returns false when the session was already closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.anchor = None;
        self.content_layout = None;
        tracing::debug!(target: "menu_state::session", session = %self.id, "session closed");
        true
    }

    /// Store the measured content layout.
    ///
    /// Measurements delivered after the session closed are discarded and
    /// the method returns false.
    pub fn record_content_layout(&mut self, layout: ContentLayout) -> bool {
        if !self.open {
            tracing::debug!(
                target: "menu_state::session",
                session = %self.id,
                "discarding stale content measurement"
            );
            return false;
        }
        self.content_layout = Some(layout);
        true
    }
}

impl Default for MenuSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed_invariant(session: &MenuSession) {
        if !session.is_open() {
            assert!(session.anchor().is_none());
            assert!(session.content_layout().is_none());
        }
    }

    #[test]
    fn test_new_session_is_closed() {
        let session = MenuSession::new();
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_closed_invariant(&session);
    }

    #[test]
    fn test_activate_then_measure() {
        let mut session = MenuSession::new();
        let transition = session.activate(AnchorPoint::from_point(10.0, 20.0));
        assert_eq!(transition.from, SessionPhase::Closed);
        assert_eq!(transition.to, SessionPhase::OpenPendingLayout);
        assert!(transition.open_changed());
        assert_eq!(session.anchor(), Some(&AnchorPoint::from_point(10.0, 20.0)));

        assert!(session.record_content_layout(ContentLayout::sized(100.0, 50.0)));
        assert_eq!(session.phase(), SessionPhase::OpenPositioned);
    }

    #[test]
    fn test_reactivation_replaces_anchor() {
        let mut session = MenuSession::new();
        session.activate(AnchorPoint::from_point(10.0, 20.0));
        session.record_content_layout(ContentLayout::sized(100.0, 50.0));

        let transition = session.activate(AnchorPoint::from_point(30.0, 40.0));
        assert!(!transition.open_changed());
        assert_eq!(session.anchor(), Some(&AnchorPoint::from_point(30.0, 40.0)));
        assert_eq!(session.phase(), SessionPhase::OpenPositioned);
        assert_eq!(session.activation_count(), 2);
    }

    #[test]
    fn test_close_resets_everything() {
        let mut session = MenuSession::new();
        session.activate(AnchorPoint::from_point(10.0, 20.0));
        session.record_content_layout(ContentLayout::sized(100.0, 50.0));

        assert!(session.close());
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_closed_invariant(&session);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut session = MenuSession::new();
        assert!(!session.close());
        session.activate(AnchorPoint::ORIGIN);
        assert!(session.close());
        assert!(!session.close());
        assert_closed_invariant(&session);
    }

    #[test]
    fn test_stale_measurement_is_discarded() {
        let mut session = MenuSession::new();
        session.activate(AnchorPoint::from_point(10.0, 20.0));
        session.close();

        assert!(!session.record_content_layout(ContentLayout::sized(100.0, 50.0)));
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert!(session.content_layout().is_none());
    }

    #[test]
    fn test_reopen_requires_new_measurement() {
        let mut session = MenuSession::new();
        session.activate(AnchorPoint::from_point(10.0, 20.0));
        session.record_content_layout(ContentLayout::sized(100.0, 50.0));
        session.close();

        session.activate(AnchorPoint::from_point(10.0, 20.0));
        assert_eq!(session.phase(), SessionPhase::OpenPendingLayout);
    }

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut session = MenuSession::new();
        let first = session.toggle(AnchorPoint::ORIGIN);
        let second = session.toggle(AnchorPoint::ORIGIN);

        assert_eq!(first.to, SessionPhase::OpenPendingLayout);
        assert_eq!(second.to, SessionPhase::Closed);
        assert_closed_invariant(&session);
    }
}
