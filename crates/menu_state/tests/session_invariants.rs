//! Randomized event sequences against root and submenu coordinators
//!
//! At every observed state a closed session must hold neither an anchor
//! nor a content layout, and the back-action stack must only contain the
//! sessions that are open.

use menu_state::{BackActionStack, MenuCoordinator, SessionPhase};
use placement::{ContentLayout, Rect};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    LongPress(f64, f64),
    Accessibility,
    SubToggle,
    RootLayout(f64, f64),
    SubLayout(f64, f64),
    OverlayPress,
    SelectItem(bool),
    Back,
    Close,
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0.0..500.0f64, 0.0..800.0f64).prop_map(|(x, y)| Event::LongPress(x, y)),
        Just(Event::Accessibility),
        Just(Event::SubToggle),
        (1.0..300.0f64, 1.0..300.0f64).prop_map(|(w, h)| Event::RootLayout(w, h)),
        (1.0..300.0f64, 1.0..300.0f64).prop_map(|(w, h)| Event::SubLayout(w, h)),
        Just(Event::OverlayPress),
        any::<bool>().prop_map(Event::SelectItem),
        Just(Event::Back),
        Just(Event::Close),
    ]
}

fn check(menu: &MenuCoordinator, stack: &BackActionStack) -> Result<(), TestCaseError> {
    let session = menu.session();
    if !session.is_open() {
        prop_assert!(session.anchor().is_none());
        prop_assert!(session.content_layout().is_none());
        prop_assert_eq!(session.phase(), SessionPhase::Closed);
    } else {
        prop_assert!(session.anchor().is_some());
    }
    prop_assert_eq!(stack.contains(menu.id()), session.is_open());
    Ok(())
}

proptest! {
    #[test]
    fn closed_sessions_hold_no_geometry(events in prop::collection::vec(event(), 0..40)) {
        let stack = BackActionStack::new();
        let mut root = MenuCoordinator::root(stack.clone());
        let mut sub = MenuCoordinator::submenu(stack.clone());
        sub.set_trigger_layout(Rect::new(0.0, 40.0, 120.0, 32.0));

        for event in events {
            match event {
                Event::LongPress(x, y) => {
                    root.on_long_press(x, y);
                }
                Event::Accessibility => {
                    root.handle_accessibility_action("longpress").unwrap();
                }
                Event::SubToggle => {
                    sub.on_sub_trigger_press();
                }
                Event::RootLayout(w, h) => {
                    root.on_content_layout(ContentLayout::sized(w, h));
                }
                Event::SubLayout(w, h) => {
                    sub.on_content_layout(ContentLayout::sized(w, h));
                }
                Event::OverlayPress => {
                    root.on_overlay_press();
                }
                Event::SelectItem(close) => {
                    root.select_item(|_| {}, close);
                }
                Event::Back => {
                    let top = stack.top();
                    let consumed = sub.handle_back_action() || root.handle_back_action();
                    prop_assert_eq!(consumed, top.is_some());
                }
                Event::Close => {
                    root.close();
                }
            }
            check(&root, &stack)?;
            check(&sub, &stack)?;
        }
    }

    #[test]
    fn close_is_idempotent(x in 0.0..500.0f64, y in 0.0..800.0f64) {
        let stack = BackActionStack::new();
        let mut root = MenuCoordinator::root(stack.clone());
        root.on_long_press(x, y);
        root.close();

        let phase = root.phase();
        prop_assert!(!root.close());
        prop_assert_eq!(root.phase(), phase);
        prop_assert!(root.session().anchor().is_none());
    }
}

#[test]
fn test_stale_measurement_after_close_is_ignored() {
    let stack = BackActionStack::new();
    let mut root = MenuCoordinator::root(stack);

    root.on_long_press(100.0, 500.0);
    root.close();
    let accepted = root.on_content_layout(ContentLayout::sized(200.0, 150.0));

    assert!(!accepted);
    assert_eq!(root.phase(), SessionPhase::Closed);
    assert!(root.session().content_layout().is_none());
    assert!(root.session().anchor().is_none());
}

#[test]
fn test_submenu_double_toggle_returns_to_closed() {
    let stack = BackActionStack::new();
    let mut sub = MenuCoordinator::submenu(stack.clone());
    sub.set_trigger_layout(Rect::new(0.0, 0.0, 80.0, 24.0));

    sub.on_sub_trigger_press();
    sub.on_sub_trigger_press();

    assert_eq!(sub.phase(), SessionPhase::Closed);
    assert!(stack.is_empty());
}
