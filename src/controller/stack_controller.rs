use super::{
    Animator, ControllerRef, Dimension, FabPresenter, ParentController, Promise, TopBarController,
    View, ViewContainer, ViewController,
};
use crate::errors::{NavError, Result};
use crate::options::Options;
use crate::stack::IdStack;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

/// Orchestrates an ordered stack of screens inside one view container.
///
/// Every operation reports its outcome through the [`Promise`] it is given.
/// Animated operations return before the transition ends; the promise settles
/// when the animator fires its completion, so callers must wait on the
/// promise rather than on the call returning. Operations on one controller
/// must be serialized by the caller.
pub struct StackController {
    id: String,
    view: View,
    this: Weak<StackController>,
    stack: RefCell<IdStack<ControllerRef>>,
    container: RefCell<Box<dyn ViewContainer>>,
    animator: RefCell<Box<dyn Animator>>,
    top_bar: RefCell<Box<dyn TopBarController>>,
    fab_presenter: FabPresenter,
    initial_options: Options,
    options: RefCell<Options>,
    parent: RefCell<Option<Weak<dyn ParentController>>>,
    destroyed: Cell<bool>,
}

impl StackController {
    pub fn new(
        id: impl Into<String>,
        initial_options: Options,
        container: Box<dyn ViewContainer>,
        mut animator: Box<dyn Animator>,
        top_bar: Box<dyn TopBarController>,
    ) -> Rc<Self> {
        let id = id.into();
        animator.set_options(&initial_options.animations);

        Rc::new_cyclic(|this| Self {
            view: View::new(format!("{id}/stack")),
            id,
            this: this.clone(),
            stack: RefCell::new(IdStack::new()),
            container: RefCell::new(container),
            animator: RefCell::new(animator),
            top_bar: RefCell::new(top_bar),
            fab_presenter: FabPresenter,
            options: RefCell::new(initial_options.clone()),
            initial_options,
            parent: RefCell::new(None),
            destroyed: Cell::new(false),
        })
    }

    /// Push `child` without animation, detaching the previous top immediately
    pub fn push(&self, child: ControllerRef, promise: Promise) {
        match self.attach(&child) {
            Ok(previous) => {
                if let Some(previous) = previous {
                    self.container.borrow_mut().remove_view(&previous.view());
                }
                debug!("Pushed '{}' onto stack '{}'", child.id(), self.id);
                promise.resolve(child.id());
            }
            Err(e) => {
                warn!("Rejected push of '{}' onto stack '{}': {}", child.id(), self.id, e);
                promise.reject_with(e);
            }
        }
    }

    /// Push `child` with a transition; the previous top stays attached until
    /// the animation completes
    pub fn animate_push(&self, child: ControllerRef, promise: Promise) {
        let previous = match self.attach(&child) {
            Ok(previous) => previous,
            Err(e) => {
                warn!("Rejected push of '{}' onto stack '{}': {}", child.id(), self.id, e);
                promise.reject_with(e);
                return;
            }
        };

        let id = child.id().to_string();
        let Some(previous) = previous else {
            debug!("Pushed root '{}' onto stack '{}'", id, self.id);
            promise.resolve(id);
            return;
        };

        debug!("Animating push of '{}' onto stack '{}'", id, self.id);
        let this = self.this.clone();
        let exiting = previous.view();
        self.animator.borrow_mut().animate_push(
            &child.view(),
            Box::new(move || {
                if let Some(stack) = this.upgrade() {
                    stack.container.borrow_mut().remove_view(&exiting);
                }
                promise.resolve(id);
            }),
        );
    }

    /// Pop the top screen without animation
    pub fn pop(&self, promise: Promise) {
        let (exiting, entering) = match self.take_top() {
            Ok(pair) => pair,
            Err(e) => {
                debug!("Pop rejected on stack '{}': {}", self.id, e);
                promise.reject_with(e);
                return;
            }
        };

        self.prepare_pop(&exiting, &entering);
        self.finish_popping(&exiting, promise, Resolution::Exiting);
    }

    /// Pop the top screen; it is destroyed once the animator completes
    pub fn animate_pop(&self, promise: Promise) {
        self.animate_pop_resolving(promise, Resolution::Exiting);
    }

    fn animate_pop_resolving(&self, promise: Promise, resolution: Resolution) {
        let (exiting, entering) = match self.take_top() {
            Ok(pair) => pair,
            Err(e) => {
                debug!("Pop rejected on stack '{}': {}", self.id, e);
                promise.reject_with(e);
                return;
            }
        };

        self.prepare_pop(&exiting, &entering);

        debug!("Animating pop of '{}' from stack '{}'", exiting.id(), self.id);
        let this = self.this.clone();
        let exiting_view = exiting.view();
        self.animator.borrow_mut().animate_pop(
            &exiting_view,
            Box::new(move || match this.upgrade() {
                Some(stack) => stack.finish_popping(&exiting, promise, resolution),
                None => {
                    exiting.destroy();
                    promise.resolve(resolution.into_id(exiting.as_ref()));
                }
            }),
        );
    }

    /// Pop a specific screen. The top goes through a full animated pop; any
    /// other screen is not visible and is removed and destroyed directly.
    pub fn pop_specific(&self, id: &str, promise: Promise) {
        if self.stack.borrow().is_top(id) {
            self.animate_pop(promise);
            return;
        }

        let removed = self.stack.borrow_mut().remove(id);
        match removed {
            Some(child) => {
                child.destroy();
                debug!("Removed '{}' from the middle of stack '{}'", id, self.id);
                promise.resolve(child.id());
            }
            None => promise.reject_with(NavError::not_found(id)),
        }
    }

    /// Pop every screen above `id`. Intermediate screens are discarded
    /// silently; only the last transition, onto `id`, is animated and the
    /// promise settles with `id` once it completes.
    pub fn pop_to(&self, id: &str, promise: Promise) {
        let depth = self.stack.borrow().depth_of(id);
        match depth {
            None => {
                debug!("Pop-to target '{}' is not in stack '{}'", id, self.id);
                promise.reject();
            }
            Some(0) => promise.resolve(id),
            Some(depth) => {
                for _ in 1..depth {
                    self.pop(Promise::noop());
                }
                self.animate_pop_resolving(promise, Resolution::Target(id.to_string()));
            }
        }
    }

    /// Pop down to the root; only the final pop onto the root is animated and
    /// only that pop settles `promise`
    pub fn pop_to_root(&self, promise: Promise) {
        if !self.can_pop() {
            promise.reject();
            return;
        }

        while self.size() > 2 {
            self.pop(Promise::noop());
        }
        self.animate_pop(promise);
    }

    /// The root can never be popped
    pub fn can_pop(&self) -> bool {
        self.stack.borrow().len() > 1
    }

    /// Overwrite the active options and have the container re-apply them
    pub fn apply_options(&self, options: Options) {
        self.container.borrow_mut().apply_options(&options);
        *self.options.borrow_mut() = options;
    }

    /// Reset to the initial options and clear the top bar
    pub fn clear_options(&self) {
        *self.options.borrow_mut() = self.initial_options.clone();
        self.top_bar.borrow_mut().clear();
    }

    pub fn clear_top_tabs(&self) {
        self.top_bar.borrow_mut().clear_top_tabs();
    }

    pub fn peek(&self) -> Option<ControllerRef> {
        self.stack.borrow().peek().cloned()
    }

    pub fn size(&self) -> usize {
        self.stack.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.borrow().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stack.borrow().contains_id(id)
    }

    /// Resident ids, bottom to top
    pub fn ids(&self) -> Vec<String> {
        self.stack.borrow().iter().map(String::from).collect()
    }

    /// Resident children, bottom to top
    pub fn child_controllers(&self) -> Vec<ControllerRef> {
        let stack = self.stack.borrow();
        stack.iter().filter_map(|id| stack.get(id).cloned()).collect()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    fn as_parent(&self) -> Weak<dyn ParentController> {
        self.this.clone()
    }

    fn parent(&self) -> Option<Rc<dyn ParentController>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Push `child` onto the stack and attach its view, returning the previous top
    fn attach(&self, child: &ControllerRef) -> Result<Option<ControllerRef>> {
        let previous = self.peek();
        self.stack.borrow_mut().push(child.id(), Rc::clone(child))?;
        child.set_parent(self.as_parent());
        self.container.borrow_mut().add_view(
            &child.view(),
            Dimension::MatchParent,
            Dimension::MatchParent,
        );
        Ok(previous)
    }

    /// Remove the top and return it with the screen it uncovers
    fn take_top(&self) -> Result<(ControllerRef, ControllerRef)> {
        if !self.can_pop() {
            return Err(NavError::Rejected);
        }

        let mut stack = self.stack.borrow_mut();
        let exiting = stack.pop()?;
        let entering = stack.peek().cloned().ok_or(NavError::EmptyStack)?;
        Ok((exiting, entering))
    }

    fn prepare_pop(&self, exiting: &ControllerRef, entering: &ControllerRef) {
        exiting.on_view_will_disappear();
        entering.on_view_will_appear();

        let exiting_options = exiting.options();
        let entering_options = entering.options();
        let exiting_view = exiting.view();
        let entering_view = entering.view();

        // Entering view goes directly beneath the still visible exiting view
        self.container.borrow_mut().on_child_will_disappear(
            &exiting_options,
            &entering_options,
            Box::new(move |container: &mut dyn ViewContainer| {
                match container.index_of_child(&exiting_view) {
                    Some(index) => container.add_view_at(&entering_view, index),
                    None => container.add_view(
                        &entering_view,
                        Dimension::MatchParent,
                        Dimension::MatchParent,
                    ),
                }
            }),
        );
    }

    fn finish_popping(&self, exiting: &ControllerRef, promise: Promise, resolution: Resolution) {
        self.container.borrow_mut().remove_view(&exiting.view());
        exiting.destroy();
        debug!("Popped '{}' from stack '{}'", exiting.id(), self.id);
        promise.resolve(resolution.into_id(exiting.as_ref()));
    }
}

/// Which id a completed pop settles its promise with
enum Resolution {
    Exiting,
    Target(String),
}

impl Resolution {
    fn into_id(self, exiting: &dyn ViewController) -> String {
        match self {
            Resolution::Exiting => exiting.id().to_string(),
            Resolution::Target(id) => id,
        }
    }
}

impl ParentController for StackController {
    fn apply_child_options(&self, options: &Options, child: &dyn ViewController) {
        if !self.hosts(child.id()) {
            debug!("Ignoring options from '{}', not resident in stack '{}'", child.id(), self.id);
            return;
        }

        let resolved = self.initial_options.merged(options);
        *self.options.borrow_mut() = resolved.clone();

        self.container
            .borrow_mut()
            .apply_child_options(&resolved, child);
        if let Some(host) = child.as_fab_host() {
            self.fab_presenter.apply_options(&resolved.fab, host);
        }
        if let Some(parent) = self.parent() {
            parent.apply_child_options(&resolved.for_parent(), child);
        }
        self.animator.borrow_mut().set_options(&resolved.animations);
    }

    fn merge_child_options(&self, options: &Options, child: &dyn ViewController) {
        if !self.hosts(child.id()) {
            debug!("Ignoring options from '{}', not resident in stack '{}'", child.id(), self.id);
            return;
        }

        self.options.borrow_mut().merge_with(options);

        self.container
            .borrow_mut()
            .merge_child_options(options, child);
        self.animator.borrow_mut().merge_options(&options.animations);
        if options.fab.has_value() {
            if let Some(host) = child.as_fab_host() {
                self.fab_presenter.merge_options(&options.fab, host);
            }
        }
        if let Some(parent) = self.parent() {
            parent.merge_child_options(&options.for_parent(), child);
        }
    }
}

impl ViewController for StackController {
    fn id(&self) -> &str {
        &self.id
    }

    fn view(&self) -> View {
        self.view.clone()
    }

    fn options(&self) -> Options {
        self.options.borrow().clone()
    }

    fn set_parent(&self, parent: Weak<dyn ParentController>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Resident here or inside a resident child stack
    fn hosts(&self, id: &str) -> bool {
        if self.contains(id) {
            return true;
        }
        self.child_controllers()
            .iter()
            .any(|child| child.hosts(id))
    }

    fn on_view_will_appear(&self) {
        if let Some(top) = self.peek() {
            top.on_view_will_appear();
        }
    }

    fn on_view_will_disappear(&self) {
        if let Some(top) = self.peek() {
            top.on_view_will_disappear();
        }
    }

    fn handle_back(&self) -> bool {
        if self.can_pop() {
            self.animate_pop(Promise::noop());
            return true;
        }
        false
    }

    fn send_on_navigation_button_pressed(&self, button_id: &str) {
        if let Some(top) = self.peek() {
            top.send_on_navigation_button_pressed(button_id);
        }
    }

    fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }

        self.parent.borrow_mut().take();
        self.top_bar.borrow_mut().clear();
        let children = self.stack.borrow_mut().drain();
        for child in &children {
            self.container.borrow_mut().remove_view(&child.view());
            child.destroy();
        }
        info!(
            "Destroyed stack '{}' and {} child controller(s)",
            self.id,
            children.len()
        );
    }
}
