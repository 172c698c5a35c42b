//! Stack controller and the collaborator contracts it drives
//!
//! The controller never renders or animates anything itself:
//! - `ViewContainer` owns the physical view tree
//! - `Animator` performs the visual push/pop transitions
//! - `TopBarController` owns the chrome above the stack
//! - `ViewController` is a screen resident in the stack
//!
//! All of these are used from a single UI thread, so they are shared through
//! `Rc` and mutated through `RefCell`, never across threads.

pub mod fab;
pub mod promise;
pub mod stack_controller;

pub use fab::FabPresenter;
pub use promise::{Promise, PromiseReceiver};
pub use stack_controller::StackController;

use crate::options::{AnimationsOptions, FabOptions, Options};
use serde::Serialize;
use std::fmt;
use std::rc::{Rc, Weak};

/// Handle to a visual node owned by a view controller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct View(String);

impl View {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout size requested when attaching a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    MatchParent,
    Px(u32),
}

/// Single-shot continuation invoked by an animator when a transition ends
pub type Completion = Box<dyn FnOnce()>;

/// Continuation handed to the container before a pop; receives the container
/// itself so it can reorder views once the container is ready
pub type OnReady = Box<dyn FnOnce(&mut dyn ViewContainer)>;

/// Shared handle to a screen resident in a stack
pub type ControllerRef = Rc<dyn ViewController>;

/// A navigable screen
pub trait ViewController {
    fn id(&self) -> &str;

    fn view(&self) -> View;

    /// Snapshot of the active options
    fn options(&self) -> Options;

    /// Record the owning parent; the reference is non-owning
    fn set_parent(&self, parent: Weak<dyn ParentController>);

    /// Whether `id` is resident somewhere below this controller
    fn hosts(&self, _id: &str) -> bool {
        false
    }

    fn on_view_will_appear(&self) {}

    fn on_view_will_disappear(&self) {}

    /// Returns true when the back action was consumed
    fn handle_back(&self) -> bool {
        false
    }

    fn send_on_navigation_button_pressed(&self, _button_id: &str) {}

    /// Screens able to host a floating action button expose it here
    fn as_fab_host(&self) -> Option<&dyn FabHost> {
        None
    }

    /// Tear the controller down. Called exactly once, after its view is detached.
    fn destroy(&self);
}

/// A controller that hosts children and absorbs their option changes
pub trait ParentController {
    /// Authoritative application of a child's options
    fn apply_child_options(&self, options: &Options, child: &dyn ViewController);

    /// Incremental merge of a child's options
    fn merge_child_options(&self, options: &Options, child: &dyn ViewController);
}

/// Capability of screens that render a floating action button
pub trait FabHost {
    fn fab(&self) -> Option<FabOptions>;

    /// Show `Some(fab)` or remove the button with `None`
    fn set_fab(&self, fab: Option<FabOptions>);
}

pub trait ViewContainer {
    fn add_view(&mut self, view: &View, width: Dimension, height: Dimension);

    fn add_view_at(&mut self, view: &View, index: usize);

    fn remove_view(&mut self, view: &View);

    fn index_of_child(&self, view: &View) -> Option<usize>;

    /// Re-apply every option effect from `options`
    fn apply_options(&mut self, options: &Options);

    fn apply_child_options(&mut self, options: &Options, child: &dyn ViewController);

    fn merge_child_options(&mut self, options: &Options, child: &dyn ViewController);

    /// Prepare for a pop transition; `on_ready` must be invoked exactly once
    fn on_child_will_disappear(&mut self, exiting: &Options, entering: &Options, on_ready: OnReady);
}

pub trait Animator {
    fn set_options(&mut self, options: &AnimationsOptions);

    fn merge_options(&mut self, options: &AnimationsOptions);

    /// Animate `entering` in; `on_complete` must be invoked exactly once
    fn animate_push(&mut self, entering: &View, on_complete: Completion);

    /// Animate `exiting` out; `on_complete` must be invoked exactly once
    fn animate_pop(&mut self, exiting: &View, on_complete: Completion);
}

pub trait TopBarController {
    /// Release everything the top bar holds
    fn clear(&mut self);

    fn clear_top_tabs(&mut self);
}
