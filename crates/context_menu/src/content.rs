//! Portal, overlay, and content surfaces
//!
//! These decide whether the floating panel is rendered and where. The
//! content reads its placement through the coordinator's cache, so the
//! engine only runs again after the anchor, measurement, prefs, or
//! viewport changed.

use crate::{AccessibilityProps, MenuContext, Role};
use menu_state::{MenuCoordinator, PortalHost, PortalSync};
use placement::{ContentLayout, PlacementPrefs, PlacementStyle, UnmeasuredPolicy, Viewport};
use serde::Serialize;

/// Mounts the content subtree into the host's portal
#[derive(Debug, Clone, Default)]
pub struct Portal {
    pub force_mount: bool,
}

impl Portal {
    /// Portal state for a session, keyed by its id
    pub fn state_for(context: &MenuContext) -> PortalSync {
        PortalSync::new(context.id.portal_key())
    }

    /// Mount or unmount the subtree to match the session.
    ///
    /// Returns true when the host was called.
    pub fn sync(
        &self,
        state: &mut PortalSync,
        context: &MenuContext,
        host: &mut dyn PortalHost,
    ) -> bool {
        state.sync(context.open, self.force_mount, host)
    }
}

/// Full-screen press target behind the content
#[derive(Debug, Clone)]
pub struct Overlay {
    pub close_on_press: bool,
    pub force_mount: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            close_on_press: true,
            force_mount: false,
        }
    }
}

impl Overlay {
    pub fn is_rendered(&self, context: &MenuContext) -> bool {
        context.open || self.force_mount
    }

    /// Overlay press; closes the menu when `close_on_press` is set
    pub fn press(&self, menu: &mut MenuCoordinator) -> bool {
        self.close_on_press && menu.on_overlay_press()
    }
}

/// The floating panel
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub prefs: PlacementPrefs,
    pub unmeasured: UnmeasuredPolicy,
    pub force_mount: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentProps {
    pub id: String,
    pub accessibility: AccessibilityProps,
    /// None while closed, even when force-mounted
    pub style: Option<PlacementStyle>,
    pub rendered: bool,
}

impl Content {
    pub fn new(prefs: PlacementPrefs) -> Self {
        Self {
            prefs,
            ..Self::default()
        }
    }

    pub fn force_mount(mut self, force_mount: bool) -> Self {
        self.force_mount = force_mount;
        self
    }

    pub fn unmeasured(mut self, policy: UnmeasuredPolicy) -> Self {
        self.unmeasured = policy;
        self
    }

    pub fn props(&self, menu: &mut MenuCoordinator, viewport: &Viewport) -> ContentProps {
        let id = menu.id();
        let open = menu.is_open();
        let style = menu.placement(&self.prefs, viewport, self.unmeasured);

        ContentProps {
            id: id.content_id(),
            accessibility: AccessibilityProps::new(Role::Menu).labelled_by(id.trigger_id()),
            style,
            rendered: open || self.force_mount,
        }
    }

    /// Layout measurement of the rendered panel
    pub fn on_layout(&self, menu: &mut MenuCoordinator, layout: ContentLayout) -> bool {
        menu.on_content_layout(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_state::{BackActionStack, PortalKey};
    use placement::Side;

    #[derive(Default)]
    struct Host {
        mounted: Vec<PortalKey>,
    }

    impl PortalHost for Host {
        fn mount(&mut self, key: &PortalKey) {
            self.mounted.push(key.clone());
        }

        fn unmount(&mut self, key: &PortalKey) {
            self.mounted.retain(|k| k != key);
        }
    }

    #[test]
    fn test_content_hidden_until_measured() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let content = Content::new(PlacementPrefs::default().with_side_offset(4.0));
        let viewport = Viewport::new(400.0, 600.0);

        let closed = content.props(&mut menu, &viewport);
        assert!(!closed.rendered);
        assert!(closed.style.is_none());

        menu.on_long_press(100.0, 500.0);
        let pending = content.props(&mut menu, &viewport);
        assert!(pending.rendered);
        assert!(!pending.style.unwrap().is_visible());

        assert!(content.on_layout(&mut menu, ContentLayout::sized(200.0, 150.0)));
        let settled = content.props(&mut menu, &viewport).style.unwrap();
        assert!(settled.is_visible());
        assert_eq!(settled.side, Side::Top);
        assert_eq!(settled.top, 346.0);
        assert_eq!(settled.left, 100.0);
    }

    #[test]
    fn test_force_mount_renders_while_closed() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let props = Content::default()
            .force_mount(true)
            .props(&mut menu, &Viewport::new(400.0, 600.0));

        assert!(props.rendered);
        assert!(props.style.is_none());
    }

    #[test]
    fn test_overlay_press() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        menu.on_long_press(1.0, 1.0);

        let sticky = Overlay {
            close_on_press: false,
            force_mount: false,
        };
        assert!(!sticky.press(&mut menu));
        assert!(menu.is_open());

        assert!(Overlay::default().press(&mut menu));
        assert!(!Overlay::default().is_rendered(&MenuContext::of(&menu)));
    }

    #[test]
    fn test_portal_follows_open_state() {
        let mut menu = MenuCoordinator::root(BackActionStack::new());
        let mut host = Host::default();
        let portal = Portal::default();
        let mut state = Portal::state_for(&MenuContext::of(&menu));

        menu.on_long_press(1.0, 1.0);
        assert!(portal.sync(&mut state, &MenuContext::of(&menu), &mut host));
        assert_eq!(host.mounted, vec![menu.id().portal_key()]);

        menu.close();
        assert!(portal.sync(&mut state, &MenuContext::of(&menu), &mut host));
        assert!(host.mounted.is_empty());
    }
}
