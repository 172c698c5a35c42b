use crate::controller::{FabHost, ParentController, View, ViewController};
use crate::options::{FabOptions, Options};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    WillAppear,
    WillDisappear,
    ButtonPressed(String),
    Destroyed,
}

/// Leaf screen with no content of its own
pub struct Screen {
    id: String,
    view: View,
    options: RefCell<Options>,
    parent: RefCell<Option<Weak<dyn ParentController>>>,
    hosts_fab: bool,
    fab: RefCell<Option<FabOptions>>,
    lifecycle: RefCell<Vec<LifecycleEvent>>,
    destroy_count: Cell<usize>,
}

impl Screen {
    pub fn new(id: impl Into<String>, options: Options) -> Rc<Self> {
        Rc::new(Self::build(id.into(), options, false))
    }

    /// Screen that can render a floating action button
    pub fn with_fab(id: impl Into<String>, options: Options) -> Rc<Self> {
        Rc::new(Self::build(id.into(), options, true))
    }

    fn build(id: String, options: Options, hosts_fab: bool) -> Self {
        Self {
            view: View::new(id.clone()),
            id,
            options: RefCell::new(options),
            parent: RefCell::new(None),
            hosts_fab,
            fab: RefCell::new(None),
            lifecycle: RefCell::new(Vec::new()),
            destroy_count: Cell::new(0),
        }
    }

    /// Push this screen's full options up to its parent
    pub fn apply_options(&self) {
        let options = self.options();
        if let Some(parent) = self.parent() {
            parent.apply_child_options(&options, self);
        }
    }

    /// Merge `options` into this screen and cascade the change to its parent
    pub fn merge_options(&self, options: &Options) {
        self.options.borrow_mut().merge_with(options);
        if let Some(parent) = self.parent() {
            parent.merge_child_options(options, self);
        }
    }

    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroy_count.get() > 0
    }

    pub fn destroy_count(&self) -> usize {
        self.destroy_count.get()
    }

    pub fn lifecycle(&self) -> Vec<LifecycleEvent> {
        self.lifecycle.borrow().clone()
    }

    fn parent(&self) -> Option<Rc<dyn ParentController>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }
}

impl ViewController for Screen {
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

    fn on_view_will_appear(&self) {
        self.lifecycle.borrow_mut().push(LifecycleEvent::WillAppear);
        self.apply_options();
    }

    fn on_view_will_disappear(&self) {
        self.lifecycle.borrow_mut().push(LifecycleEvent::WillDisappear);
    }

    fn send_on_navigation_button_pressed(&self, button_id: &str) {
        self.lifecycle
            .borrow_mut()
            .push(LifecycleEvent::ButtonPressed(button_id.to_string()));
    }

    fn as_fab_host(&self) -> Option<&dyn FabHost> {
        if self.hosts_fab {
            Some(self)
        } else {
            None
        }
    }

    fn destroy(&self) {
        self.parent.borrow_mut().take();
        self.destroy_count.set(self.destroy_count.get() + 1);
        self.lifecycle.borrow_mut().push(LifecycleEvent::Destroyed);
    }
}

impl FabHost for Screen {
    fn fab(&self) -> Option<FabOptions> {
        self.fab.borrow().clone()
    }

    fn set_fab(&self, fab: Option<FabOptions>) {
        *self.fab.borrow_mut() = fab;
    }
}
