use crate::controller::{Animator, Completion, View};
use crate::options::{AnimationOptions, AnimationsOptions};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Push,
    Pop,
}

/// One transition the animator was asked to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    pub kind: TransitionKind,
    pub view: String,
    pub duration_ms: Option<u64>,
    /// Disabled by options; completed without animating
    pub skipped: bool,
}

/// When completions fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Inside the `animate_*` call
    #[default]
    Immediate,
    /// Only when the owner calls `finish_next` / `finish_all`
    Manual,
}

#[derive(Default)]
struct AnimatorState {
    options: AnimationsOptions,
    pending: VecDeque<Completion>,
    transitions: Vec<TransitionRecord>,
}

/// Animator that records transitions instead of drawing them
#[derive(Clone, Default)]
pub struct HeadlessAnimator {
    mode: CompletionMode,
    state: Rc<RefCell<AnimatorState>>,
}

impl HeadlessAnimator {
    pub fn new(mode: CompletionMode) -> Self {
        Self {
            mode,
            state: Rc::default(),
        }
    }

    pub fn immediate() -> Self {
        Self::new(CompletionMode::Immediate)
    }

    pub fn manual() -> Self {
        Self::new(CompletionMode::Manual)
    }

    /// Transitions still waiting for completion
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Complete the oldest pending transition
    pub fn finish_next(&self) -> bool {
        let next = self.state.borrow_mut().pending.pop_front();
        match next {
            Some(on_complete) => {
                on_complete();
                true
            }
            None => false,
        }
    }

    /// Complete every pending transition, returning how many ran
    pub fn finish_all(&self) -> usize {
        let mut finished = 0;
        while self.finish_next() {
            finished += 1;
        }
        finished
    }

    pub fn transitions(&self) -> Vec<TransitionRecord> {
        self.state.borrow().transitions.clone()
    }

    pub fn options(&self) -> AnimationsOptions {
        self.state.borrow().options.clone()
    }

    fn run(&self, kind: TransitionKind, view: &View, on_complete: Completion) {
        let defer = {
            let mut state = self.state.borrow_mut();
            let animation: &AnimationOptions = match kind {
                TransitionKind::Push => &state.options.push,
                TransitionKind::Pop => &state.options.pop,
            };
            let record = TransitionRecord {
                kind,
                view: view.tag().to_string(),
                duration_ms: animation.duration_ms,
                skipped: !animation.is_enabled(),
            };
            let defer = !record.skipped && self.mode == CompletionMode::Manual;
            state.transitions.push(record);
            defer
        };

        if defer {
            self.state.borrow_mut().pending.push_back(on_complete);
        } else {
            on_complete();
        }
    }
}

impl Animator for HeadlessAnimator {
    fn set_options(&mut self, options: &AnimationsOptions) {
        self.state.borrow_mut().options = options.clone();
    }

    fn merge_options(&mut self, options: &AnimationsOptions) {
        self.state.borrow_mut().options.merge_with(options);
    }

    fn animate_push(&mut self, entering: &View, on_complete: Completion) {
        self.run(TransitionKind::Push, entering, on_complete);
    }

    fn animate_pop(&mut self, exiting: &View, on_complete: Completion) {
        self.run(TransitionKind::Pop, exiting, on_complete);
    }
}
