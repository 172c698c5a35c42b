use crate::controller::{Dimension, OnReady, View, ViewContainer, ViewController};
use crate::options::Options;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a [`HeadlessContainer`] was asked to do, in order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ContainerEvent {
    Attached { view: String, index: usize },
    Detached { view: String },
    OptionsApplied,
    ChildOptionsApplied { child: String },
    ChildOptionsMerged { child: String },
    ChildWillDisappear {
        exiting_title: Option<String>,
        entering_title: Option<String>,
    },
}

#[derive(Debug, Default)]
struct ContainerState {
    children: Vec<View>,
    options: Options,
    events: Vec<ContainerEvent>,
}

/// View container that keeps an ordered child list instead of real views.
///
/// Index 0 is the bottom of the z-order, the last child is what the user sees.
#[derive(Debug, Clone, Default)]
pub struct HeadlessContainer {
    state: Rc<RefCell<ContainerState>>,
}

impl HeadlessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached views, bottom to top
    pub fn children(&self) -> Vec<View> {
        self.state.borrow().children.clone()
    }

    pub fn child_tags(&self) -> Vec<String> {
        self.state
            .borrow()
            .children
            .iter()
            .map(|view| view.tag().to_string())
            .collect()
    }

    /// The visible view
    pub fn top_child(&self) -> Option<View> {
        self.state.borrow().children.last().cloned()
    }

    /// Options currently applied to the chrome
    pub fn options(&self) -> Options {
        self.state.borrow().options.clone()
    }

    pub fn events(&self) -> Vec<ContainerEvent> {
        self.state.borrow().events.clone()
    }

    fn insert(&mut self, view: &View, index: Option<usize>) {
        let mut state = self.state.borrow_mut();
        // Re-attaching moves the view
        state.children.retain(|child| child != view);
        let index = index
            .unwrap_or(state.children.len())
            .min(state.children.len());
        state.children.insert(index, view.clone());
        state.events.push(ContainerEvent::Attached {
            view: view.tag().to_string(),
            index,
        });
    }
}

impl ViewContainer for HeadlessContainer {
    fn add_view(&mut self, view: &View, _width: Dimension, _height: Dimension) {
        self.insert(view, None);
    }

    fn add_view_at(&mut self, view: &View, index: usize) {
        self.insert(view, Some(index));
    }

    fn remove_view(&mut self, view: &View) {
        let mut state = self.state.borrow_mut();
        if let Some(position) = state.children.iter().position(|child| child == view) {
            state.children.remove(position);
            state.events.push(ContainerEvent::Detached {
                view: view.tag().to_string(),
            });
        }
    }

    fn index_of_child(&self, view: &View) -> Option<usize> {
        self.state
            .borrow()
            .children
            .iter()
            .position(|child| child == view)
    }

    fn apply_options(&mut self, options: &Options) {
        let mut state = self.state.borrow_mut();
        state.options = options.clone();
        state.events.push(ContainerEvent::OptionsApplied);
    }

    fn apply_child_options(&mut self, options: &Options, child: &dyn ViewController) {
        let mut state = self.state.borrow_mut();
        state.options = options.clone();
        state.events.push(ContainerEvent::ChildOptionsApplied {
            child: child.id().to_string(),
        });
    }

    fn merge_child_options(&mut self, options: &Options, child: &dyn ViewController) {
        let mut state = self.state.borrow_mut();
        state.options.merge_with(options);
        state.events.push(ContainerEvent::ChildOptionsMerged {
            child: child.id().to_string(),
        });
    }

    fn on_child_will_disappear(&mut self, exiting: &Options, entering: &Options, on_ready: OnReady) {
        self.state
            .borrow_mut()
            .events
            .push(ContainerEvent::ChildWillDisappear {
                exiting_title: exiting.top_bar.title.clone(),
                entering_title: entering.top_bar.title.clone(),
            });
        on_ready(self);
    }
}
