//! Context menu aggregate
//!
//! Owns the root session, the named submenu sessions, and the back-action
//! stack they share. Sessions stay independent: closing the root does not
//! close open submenus unless the caller asks for it with `close_all`.

use crate::{MenuConfig, MenuContext, Result, Sub, SurfaceError};
use menu_state::{BackActionStack, MenuCoordinator, PortalHost, PortalSync, SessionId, Transition};
use placement::{ContentLayout, PlacementStyle, Rect, Viewport};
use std::collections::BTreeMap;

pub struct ContextMenu {
    config: MenuConfig,
    viewport: Viewport,
    back_stack: BackActionStack,
    root: MenuCoordinator,
    submenus: BTreeMap<String, MenuCoordinator>,
    portal: PortalSync,
}

impl ContextMenu {
    pub fn new(config: MenuConfig, viewport: Viewport) -> Self {
        let back_stack = BackActionStack::new();
        let root = MenuCoordinator::root(back_stack.clone()).with_anchor_mode(config.anchor_mode);
        let portal = PortalSync::new(root.id().portal_key());
        tracing::debug!(
            target: "context_menu::menu",
            session = %root.id(),
            "context menu created"
        );
        Self {
            config,
            viewport,
            back_stack,
            root,
            submenus: BTreeMap::new(),
            portal,
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Screen size changed (rotation, window resize)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn id(&self) -> SessionId {
        self.root.id()
    }

    pub fn root(&self) -> &MenuCoordinator {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut MenuCoordinator {
        &mut self.root
    }

    pub fn context(&self) -> MenuContext {
        MenuContext::of(&self.root)
    }

    pub fn back_stack(&self) -> &BackActionStack {
        &self.back_stack
    }

    pub fn set_on_open_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.root.set_on_open_change(listener);
    }

    // Root events

    pub fn trigger_layout(&mut self, rect: Rect) {
        self.root.set_trigger_layout(rect);
    }

    pub fn long_press(&mut self, x: f64, y: f64) -> Transition {
        self.root.on_long_press(x, y)
    }

    pub fn accessibility_action(&mut self, action: &str) -> Result<Transition> {
        Ok(self.root.handle_accessibility_action(action)?)
    }

    pub fn content_layout(&mut self, layout: ContentLayout) -> bool {
        self.root.on_content_layout(layout)
    }

    pub fn overlay_press(&mut self) -> bool {
        self.config.close_on_overlay_press && self.root.on_overlay_press()
    }

    /// Select a root item using the configured close behavior
    pub fn select_item<F>(&mut self, on_select: F) -> bool
    where
        F: FnOnce(),
    {
        let close = self.config.close_on_item_press;
        self.root.select_item(|_| on_select(), close)
    }

    /// Route a back/escape action to the most recently opened session.
    ///
    /// Returns true when a session consumed it.
    pub fn back_action(&mut self) -> bool {
        let Some(top) = self.back_stack.top() else {
            return false;
        };
        let consumed = if top == self.root.id() {
            self.root.handle_back_action()
        } else {
            self.submenus
                .values_mut()
                .find(|sub| sub.id() == top)
                .is_some_and(MenuCoordinator::handle_back_action)
        };
        tracing::debug!(
            target: "context_menu::menu",
            session = %top,
            consumed,
            "back action dispatched"
        );
        consumed
    }

    /// Root placement through the session cache, None while closed
    pub fn placement(&mut self) -> Option<PlacementStyle> {
        self.root
            .placement(&self.config.content, &self.viewport, self.config.unmeasured)
    }

    /// Close every submenu, then the root
    pub fn close_all(&mut self) -> bool {
        let mut changed = false;
        for sub in self.submenus.values_mut() {
            changed |= sub.close();
        }
        changed | self.root.close()
    }

    // Submenus

    pub fn add_submenu(&mut self, sub: &Sub) -> Result<SessionId> {
        if self.submenus.contains_key(&sub.name) {
            return Err(SurfaceError::DuplicateSubmenu(sub.name.clone()));
        }
        let coordinator = sub.create_session(&self.back_stack);
        let id = coordinator.id();
        self.submenus.insert(sub.name.clone(), coordinator);
        Ok(id)
    }

    /// Tear a submenu down; an open submenu releases its back handler
    pub fn remove_submenu(&mut self, name: &str) -> Result<()> {
        self.submenus
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| SurfaceError::UnknownSubmenu(name.to_string()))
    }

    pub fn submenu(&self, name: &str) -> Result<&MenuCoordinator> {
        self.submenus
            .get(name)
            .ok_or_else(|| SurfaceError::UnknownSubmenu(name.to_string()))
    }

    pub fn submenu_mut(&mut self, name: &str) -> Result<&mut MenuCoordinator> {
        self.submenus
            .get_mut(name)
            .ok_or_else(|| SurfaceError::UnknownSubmenu(name.to_string()))
    }

    pub fn submenu_names(&self) -> impl Iterator<Item = &str> {
        self.submenus.keys().map(String::as_str)
    }

    pub fn sub_trigger_layout(&mut self, name: &str, rect: Rect) -> Result<()> {
        self.submenu_mut(name)?.set_trigger_layout(rect);
        Ok(())
    }

    pub fn sub_toggle(&mut self, name: &str) -> Result<Transition> {
        Ok(self.submenu_mut(name)?.on_sub_trigger_press())
    }

    pub fn sub_content_layout(&mut self, name: &str, layout: ContentLayout) -> Result<bool> {
        Ok(self.submenu_mut(name)?.on_content_layout(layout))
    }

    pub fn sub_placement(&mut self, name: &str) -> Result<Option<PlacementStyle>> {
        let prefs = self.config.sub_content;
        let policy = self.config.unmeasured;
        let viewport = self.viewport;
        Ok(self.submenu_mut(name)?.placement(&prefs, &viewport, policy))
    }

    // Portal

    /// Mount or unmount the root content's portal to match the session
    pub fn sync_portal(&mut self, host: &mut dyn PortalHost, force_mount: bool) -> bool {
        self.portal.sync(self.root.is_open(), force_mount, host)
    }

    pub fn is_portal_mounted(&self) -> bool {
        self.portal.is_mounted()
    }

    /// Tear the menu down, withdrawing its portal
    pub fn teardown(mut self, host: &mut dyn PortalHost) {
        self.portal.release(host);
    }
}

impl std::fmt::Debug for ContextMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextMenu")
            .field("root", &self.root)
            .field("submenus", &self.submenus)
            .field("viewport", &self.viewport)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_state::SessionPhase;

    fn menu() -> ContextMenu {
        ContextMenu::new(MenuConfig::default(), Viewport::new(400.0, 600.0))
    }

    #[test]
    fn test_duplicate_submenu_rejected() {
        let mut menu = menu();
        menu.add_submenu(&Sub::new("share")).unwrap();
        assert!(matches!(
            menu.add_submenu(&Sub::new("share")),
            Err(SurfaceError::DuplicateSubmenu(_))
        ));
    }

    #[test]
    fn test_unknown_submenu() {
        let mut menu = menu();
        assert!(matches!(menu.sub_toggle("missing"), Err(SurfaceError::UnknownSubmenu(_))));
    }

    #[test]
    fn test_back_routes_to_deepest_session() {
        let mut menu = menu();
        menu.add_submenu(&Sub::new("share")).unwrap();

        menu.long_press(50.0, 50.0);
        menu.sub_trigger_layout("share", Rect::new(0.0, 80.0, 200.0, 40.0))
            .unwrap();
        menu.sub_toggle("share").unwrap();

        assert!(menu.back_action());
        assert_eq!(menu.submenu("share").unwrap().phase(), SessionPhase::Closed);
        assert!(menu.root().is_open());

        assert!(menu.back_action());
        assert!(!menu.root().is_open());
        assert!(!menu.back_action());
    }

    #[test]
    fn test_closing_root_leaves_submenu_open() {
        let mut menu = menu();
        menu.add_submenu(&Sub::new("share")).unwrap();
        menu.long_press(50.0, 50.0);
        menu.sub_toggle("share").unwrap();

        assert!(menu.overlay_press());
        assert!(menu.submenu("share").unwrap().is_open());

        assert!(menu.close_all());
        assert!(menu.back_stack().is_empty());
    }

    #[test]
    fn test_remove_open_submenu_releases_back_handler() {
        let mut menu = menu();
        menu.add_submenu(&Sub::new("share")).unwrap();
        menu.sub_toggle("share").unwrap();
        assert_eq!(menu.back_stack().len(), 1);

        menu.remove_submenu("share").unwrap();
        assert!(menu.back_stack().is_empty());
        assert!(menu.remove_submenu("share").is_err());
    }

    #[test]
    fn test_overlay_press_respects_config() {
        let config = MenuConfig {
            close_on_overlay_press: false,
            ..MenuConfig::default()
        };
        let mut menu = ContextMenu::new(config, Viewport::new(400.0, 600.0));
        menu.long_press(1.0, 1.0);

        assert!(!menu.overlay_press());
        assert!(menu.root().is_open());
    }
}
