//! In-process collaborators for driving a stack without a UI toolkit
//!
//! Each collaborator keeps its state behind a shared handle, so a clone kept
//! by the caller observes everything the controller does to the boxed copy.

pub mod animator;
pub mod container;
pub mod screen;

pub use animator::{CompletionMode, HeadlessAnimator, TransitionKind, TransitionRecord};
pub use container::{ContainerEvent, HeadlessContainer};
pub use screen::{LifecycleEvent, Screen};

use crate::controller::TopBarController;
use std::cell::Cell;
use std::rc::Rc;

/// Top bar that only counts what it was asked to do
#[derive(Debug, Clone, Default)]
pub struct HeadlessTopBar {
    clears: Rc<Cell<usize>>,
    top_tab_clears: Rc<Cell<usize>>,
}

impl HeadlessTopBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    pub fn top_tab_clear_count(&self) -> usize {
        self.top_tab_clears.get()
    }
}

impl TopBarController for HeadlessTopBar {
    fn clear(&mut self) {
        self.clears.set(self.clears.get() + 1);
    }

    fn clear_top_tabs(&mut self) {
        self.top_tab_clears.set(self.top_tab_clears.get() + 1);
    }
}
