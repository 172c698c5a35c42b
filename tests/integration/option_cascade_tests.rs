use super::test_helpers::{screen, settled, titled, Harness};
use navstack::controller::{FabHost, ParentController, Promise, ViewController};
use navstack::headless::{ContainerEvent, HeadlessAnimator, LifecycleEvent, Screen};
use navstack::options::{FabOptions, Options};

/// Inner stack pushed as the only child of an outer stack
fn nested() -> (Harness, Harness) {
    let outer = Harness::build("outer", Options::default(), HeadlessAnimator::immediate());
    let inner = Harness::build("inner", Options::default(), HeadlessAnimator::immediate());
    outer.stack.push(inner.stack.clone(), Promise::noop());
    (outer, inner)
}

fn fab(id: &str) -> Options {
    let mut options = Options::default();
    options.fab = FabOptions {
        id: Some(id.to_string()),
        ..FabOptions::default()
    };
    options
}

#[test]
fn test_merge_forwards_sanitized_copy_to_parent() {
    let (outer, inner) = nested();
    let a = Screen::with_fab("a", Options::default());
    inner.push(&a);

    let mut options = titled("Inbox");
    options.bottom_tabs.visible = Some(false);
    options.fab = fab("compose").fab;
    options.animations.pop.enabled = Some(false);
    a.merge_options(&options);

    let inner_options = inner.container.options();
    assert_eq!(inner_options.top_bar.title.as_deref(), Some("Inbox"));
    assert_eq!(inner.stack.options().top_bar.title.as_deref(), Some("Inbox"));
    assert_eq!(inner.animator.options().pop.enabled, Some(false));
    assert_eq!(a.fab().and_then(|fab| fab.id).as_deref(), Some("compose"));

    let outer_options = outer.container.options();
    assert_eq!(outer_options.top_bar.title, None);
    assert_eq!(outer_options.fab, FabOptions::default());
    assert_eq!(outer_options.bottom_tabs.visible, Some(false));
    assert_eq!(outer.animator.options().pop.enabled, None);
    assert!(outer
        .container
        .events()
        .contains(&ContainerEvent::ChildOptionsMerged {
            child: "a".to_string()
        }));
}

#[test]
fn test_apply_resolves_against_initial_options() {
    let mut initial = titled("Default");
    initial.layout.background_color = Some("white".to_string());
    let outer = Harness::new();
    let inner = Harness::build("inner", initial, HeadlessAnimator::immediate());
    outer.stack.push(inner.stack.clone(), Promise::noop());

    let mut own = Options::default();
    own.top_bar.subtitle = Some("Sub".to_string());
    let a = Screen::new("a", own);
    inner.push(&a);
    a.apply_options();

    let resolved = inner.container.options();
    assert_eq!(resolved.top_bar.title.as_deref(), Some("Default"));
    assert_eq!(resolved.top_bar.subtitle.as_deref(), Some("Sub"));
    assert_eq!(inner.stack.options(), resolved);

    let forwarded = outer.container.options();
    assert_eq!(forwarded.top_bar.title, None);
    assert_eq!(forwarded.layout.background_color.as_deref(), Some("white"));
}

#[test]
fn test_fab_only_reaches_hosts() {
    let harness = Harness::new();
    let plain = screen("plain");
    let host = Screen::with_fab("host", fab("add"));
    harness.push(&plain);
    harness.push(&host);

    host.apply_options();
    assert_eq!(host.fab().and_then(|fab| fab.id).as_deref(), Some("add"));

    // A plain screen has no button to touch, the merge still reaches the chrome
    plain.merge_options(&fab("other"));
    assert_eq!(host.fab().and_then(|fab| fab.id).as_deref(), Some("add"));
    assert_eq!(harness.container.options().fab.id.as_deref(), Some("other"));
}

#[test]
fn test_merge_without_fab_leaves_button_alone() {
    let harness = Harness::new();
    let host = Screen::with_fab("host", Options::default());
    harness.push(&host);

    host.merge_options(&fab("add"));
    host.merge_options(&titled("Title only"));
    assert_eq!(host.fab().and_then(|fab| fab.id).as_deref(), Some("add"));

    let mut hide = Options::default();
    hide.fab.visible = Some(false);
    host.merge_options(&hide);
    assert_eq!(host.fab(), None);
}

#[test]
fn test_initial_animation_options_survive_child_apply() {
    let mut initial = Options::default();
    initial.animations.pop.enabled = Some(false);
    let harness = Harness::build("stack", initial, HeadlessAnimator::manual());
    harness.push_all(&["a", "b"]);

    let mut receiver = harness.animate_pop();

    // Disabled transitions complete without waiting on the animator
    assert_eq!(settled(&mut receiver).unwrap().unwrap(), "b");
    assert_eq!(harness.animator.pending(), 0);
    assert!(harness.animator.transitions()[0].skipped);
}

#[test]
fn test_merged_animation_options_reach_animator() {
    let harness = Harness::manual();
    let a = screen("a");
    harness.push(&a);

    let mut options = Options::default();
    options.animations.push.enabled = Some(false);
    options.animations.push.duration_ms = Some(120);
    a.merge_options(&options);

    let mut receiver = harness.animate_push(&screen("b"));

    assert_eq!(settled(&mut receiver).unwrap().unwrap(), "b");
    let transitions = harness.animator.transitions();
    assert!(transitions[0].skipped);
    assert_eq!(transitions[0].duration_ms, Some(120));
}

#[test]
fn test_popping_nested_stack_destroys_its_children() {
    let outer = Harness::new();
    let inner = Harness::build("inner", Options::default(), HeadlessAnimator::immediate());
    let x = screen("x");
    outer.push(&x);
    outer.stack.push(inner.stack.clone(), Promise::noop());
    let screens = inner.push_all(&["a", "b"]);
    assert_eq!(outer.attached(), vec!["inner/stack"]);

    let mut receiver = outer.pop();

    assert_eq!(settled(&mut receiver).unwrap().unwrap(), "inner");
    assert!(inner.stack.is_destroyed());
    assert_eq!(inner.top_bar.clear_count(), 1);
    assert!(screens.iter().all(|screen| screen.destroy_count() == 1));
    assert_eq!(screens[1].lifecycle()[0], LifecycleEvent::WillDisappear);
    assert_eq!(x.lifecycle(), vec![LifecycleEvent::WillAppear]);
    assert_eq!(outer.attached(), vec!["x"]);
}

#[test]
fn test_dropped_parent_stops_cascade() {
    let (outer, inner) = nested();
    let a = screen("a");
    inner.push(&a);
    drop(outer);

    a.merge_options(&titled("Orphaned"));

    assert_eq!(inner.container.options().top_bar.title.as_deref(), Some("Orphaned"));
    assert_eq!(inner.stack.options().top_bar.title.as_deref(), Some("Orphaned"));
}

#[test]
fn test_popped_screen_cannot_change_chrome() {
    let harness = Harness::new();
    let a = Screen::new("a", titled("Home"));
    let b = screen("b");
    harness.push(&a);
    harness.push(&b);
    harness.pop();
    assert_eq!(harness.container.options().top_bar.title.as_deref(), Some("Home"));

    b.merge_options(&titled("Ghost"));
    b.apply_options();

    assert!(!b.has_parent());
    assert_eq!(harness.stack.ids(), vec!["a"]);
    assert_eq!(harness.container.options().top_bar.title.as_deref(), Some("Home"));
    assert_eq!(harness.stack.options().top_bar.title.as_deref(), Some("Home"));
}

#[test]
fn test_options_from_non_resident_child_are_ignored() {
    let harness = Harness::new();
    harness.push_all(&["a"]);
    let stranger = Screen::with_fab("stranger", Options::default());

    harness
        .stack
        .merge_child_options(&fab("ghost").merged(&titled("Ghost")), stranger.as_ref());
    harness
        .stack
        .apply_child_options(&titled("Ghost"), stranger.as_ref());

    assert_eq!(harness.container.options().top_bar.title, None);
    assert_eq!(harness.stack.options().top_bar.title, None);
    assert_eq!(stranger.fab(), None);
    assert!(!harness
        .container
        .events()
        .iter()
        .any(|event| matches!(event, ContainerEvent::ChildOptionsMerged { child } if child == "stranger")));
}
