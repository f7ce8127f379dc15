//! Interaction coordinator
//!
//! Wires trigger activation, layout measurement, overlay presses, item
//! selection, and back actions into one session. Root menus open on a
//! press point; submenus toggle and anchor on their own trigger rectangle.
//!
//! The coordinator holds the session's back-action registration while the
//! session is open. Dropping the coordinator drops the registration.

use crate::{
    BackActionStack, BackRegistration, MenuError, MenuSession, Result, SessionId, SessionPhase,
    Transition,
};
use placement::{
    AnchorPoint, ContentLayout, PlacementCache, PlacementCacheStats, PlacementInputs,
    PlacementPrefs, PlacementStyle, Rect, UnmeasuredPolicy, Viewport,
};
use serde::{Deserialize, Serialize};

/// Accessibility action that opens a menu
pub const LONG_PRESS_ACTION: &str = "longpress";

/// Whether a coordinator drives a root menu or a nested submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Root,
    Submenu,
}

/// What a root menu anchors on when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// The raw press location (zero-size anchor)
    #[default]
    PressPoint,
    /// The trigger's own layout rectangle
    TriggerRect,
}

type OpenChangeListener = Box<dyn FnMut(bool)>;

/// Drives one menu session
pub struct MenuCoordinator {
    kind: MenuKind,
    session: MenuSession,
    anchor_mode: AnchorMode,
    trigger_rect: Option<Rect>,
    back_stack: BackActionStack,
    registration: Option<BackRegistration>,
    cache: PlacementCache,
    on_open_change: Option<OpenChangeListener>,
}

impl MenuCoordinator {
    /// Coordinator for a root menu
    pub fn root(back_stack: BackActionStack) -> Self {
        Self::new(MenuKind::Root, back_stack)
    }

    /// Coordinator for a nested submenu
    pub fn submenu(back_stack: BackActionStack) -> Self {
        Self::new(MenuKind::Submenu, back_stack)
    }

    fn new(kind: MenuKind, back_stack: BackActionStack) -> Self {
        Self {
            kind,
            session: MenuSession::new(),
            anchor_mode: match kind {
                MenuKind::Root => AnchorMode::PressPoint,
                MenuKind::Submenu => AnchorMode::TriggerRect,
            },
            trigger_rect: None,
            back_stack,
            registration: None,
            cache: PlacementCache::new(),
            on_open_change: None,
        }
    }

    /// Choose what a root menu anchors on. Submenus always use their trigger.
    pub fn with_anchor_mode(mut self, mode: AnchorMode) -> Self {
        if self.kind == MenuKind::Root {
            self.anchor_mode = mode;
        }
        self
    }

    /// Listener called with the new open flag after every open/close
    pub fn set_on_open_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_open_change = Some(Box::new(listener));
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    pub fn session(&self) -> &MenuSession {
        &self.session
    }

    pub fn id(&self) -> SessionId {
        self.session.id()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn trigger_rect(&self) -> Option<&Rect> {
        self.trigger_rect.as_ref()
    }

    /// Whether this session currently holds a back-action registration
    pub fn is_back_registered(&self) -> bool {
        self.registration.is_some()
    }

    /// Record the trigger's measured layout
    pub fn set_trigger_layout(&mut self, rect: Rect) {
        self.trigger_rect = Some(rect);
    }

    /// Primary press or long-press on a root trigger at screen point (x, y)
    pub fn on_long_press(&mut self, x: f64, y: f64) -> Transition {
        let anchor = match (self.anchor_mode, self.trigger_rect) {
            (AnchorMode::TriggerRect, Some(rect)) => AnchorPoint::from_rect(rect),
            _ => AnchorPoint::from_point(x, y),
        };
        self.activate(anchor)
    }

    /// Press on a submenu trigger; toggles the submenu
    pub fn on_sub_trigger_press(&mut self) -> Transition {
        let anchor = self
            .trigger_rect
            .map(AnchorPoint::from_rect)
            .unwrap_or(AnchorPoint::ORIGIN);
        let transition = self.session.toggle(anchor);
        self.apply(transition);
        transition
    }

    /// Assistive-technology action delivered to the trigger
    pub fn handle_accessibility_action(&mut self, action: &str) -> Result<Transition> {
        if action != LONG_PRESS_ACTION {
            return Err(MenuError::UnknownAccessibilityAction(action.to_string()));
        }
        let transition = match self.kind {
            MenuKind::Root => {
                let anchor = match (self.anchor_mode, self.trigger_rect) {
                    (AnchorMode::TriggerRect, Some(rect)) => AnchorPoint::from_rect(rect),
                    _ => AnchorPoint::ORIGIN,
                };
                self.activate(anchor)
            }
            MenuKind::Submenu => self.on_sub_trigger_press(),
        };
        Ok(transition)
    }

    /// Open at an explicit anchor
    pub fn activate(&mut self, anchor: AnchorPoint) -> Transition {
        let transition = self.session.activate(anchor);
        self.apply(transition);
        transition
    }

    /// Layout measurement delivered by the host for the mounted content.
    ///
    /// Returns false when the measurement arrived after the session closed.
    pub fn on_content_layout(&mut self, layout: ContentLayout) -> bool {
        self.session.record_content_layout(layout)
    }

    /// Press on the overlay behind the content
    pub fn on_overlay_press(&mut self) -> bool {
        self.close()
    }

    /// Item selection: the callback runs while the session is still open,
    /// then the session closes if `close_on_press` is set.
    pub fn select_item<F>(&mut self, on_select: F, close_on_press: bool) -> bool
    where
        F: FnOnce(&MenuSession),
    {
        if !self.session.is_open() {
            return false;
        }
        on_select(&self.session);
        if close_on_press {
            self.close();
        }
        true
    }

    /// Back/escape action. Consumed (returns true) only when this session
    /// is open and sits on top of the back-action stack.
    pub fn handle_back_action(&mut self) -> bool {
        let is_top = self
            .registration
            .as_ref()
            .is_some_and(BackRegistration::is_top);
        if !is_top {
            return false;
        }
        self.close()
    }

    /// Close the session; no-op when already closed
    pub fn close(&mut self) -> bool {
        let from = self.session.phase();
        if !self.session.close() {
            return false;
        }
        self.apply(Transition {
            from,
            to: self.session.phase(),
        });
        true
    }

    /// Placement for the session's content, or None while closed.
    ///
    /// Recomputes only when the anchor, content layout, prefs, viewport, or
    /// policy differ from the previous call.
    pub fn placement(
        &mut self,
        prefs: &PlacementPrefs,
        viewport: &Viewport,
        policy: UnmeasuredPolicy,
    ) -> Option<PlacementStyle> {
        let anchor = *self.session.anchor()?;
        Some(self.cache.resolve(PlacementInputs {
            anchor,
            content: self.session.content_layout().copied(),
            prefs: *prefs,
            viewport: *viewport,
            policy,
        }))
    }

    pub fn placement_stats(&self) -> PlacementCacheStats {
        self.cache.stats()
    }

    fn apply(&mut self, transition: Transition) {
        if !transition.open_changed() {
            return;
        }
        let open = transition.to.is_open();
        if open {
            self.registration = Some(self.back_stack.register(self.session.id()));
        } else {
            self.registration = None;
            self.cache.invalidate();
        }
        tracing::debug!(
            target: "menu_state::coordinator",
            session = %self.session.id(),
            kind = ?self.kind,
            open,
            "open state changed"
        );
        if let Some(listener) = self.on_open_change.as_mut() {
            listener(open);
        }
    }
}

impl std::fmt::Debug for MenuCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuCoordinator")
            .field("kind", &self.kind)
            .field("session", &self.session)
            .field("anchor_mode", &self.anchor_mode)
            .field("trigger_rect", &self.trigger_rect)
            .field("back_registered", &self.registration.is_some())
            .finish()
    }
}
