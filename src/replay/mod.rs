//! Scripted navigation over the headless collaborators
//!
//! A script names a root screen and a list of steps. The replayer builds a
//! [`StackController`] over a headless container and an animator that
//! completes inline, runs every step, waits on each step's promise and
//! reports what happened.

pub mod script;

pub use script::{ScreenSpec, Script, Step};

use crate::config::Settings;
use crate::controller::{Promise, PromiseReceiver, StackController, ViewController};
use crate::errors::{NavError, Result};
use crate::headless::{HeadlessAnimator, HeadlessContainer, HeadlessTopBar, Screen, TransitionRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Resolved { id: String },
    Rejected { reason: String },
    Back { handled: bool },
    Applied,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub stack_id: String,
    pub steps: Vec<StepReport>,
    /// Resident screens, bottom to top
    pub final_stack: Vec<String>,
    /// Views attached to the container, bottom to top
    pub attached_views: Vec<String>,
    /// Destroyed screens in creation order
    pub destroyed: Vec<String>,
    pub transitions: Vec<TransitionRecord>,
    pub top_bar_title: Option<String>,
}

pub struct Replayer {
    settings: Settings,
    controller: Rc<StackController>,
    container: HeadlessContainer,
    animator: HeadlessAnimator,
    screens: HashMap<String, Rc<Screen>>,
    created: Vec<Rc<Screen>>,
}

impl Replayer {
    pub fn new(settings: Settings) -> Self {
        let container = HeadlessContainer::new();
        let animator = HeadlessAnimator::immediate();
        let controller = StackController::new(
            settings.navigation.stack_id.clone(),
            settings.initial_options(),
            Box::new(container.clone()),
            Box::new(animator.clone()),
            Box::new(HeadlessTopBar::new()),
        );

        Self {
            settings,
            controller,
            container,
            animator,
            screens: HashMap::new(),
            created: Vec::new(),
        }
    }

    pub fn controller(&self) -> &Rc<StackController> {
        &self.controller
    }

    /// Run `script` to completion and report the outcome
    pub async fn run(mut self, script: &Script) -> Result<ReplayReport> {
        info!(
            "Replaying {} step(s) on stack '{}'",
            script.steps.len(),
            self.settings.navigation.stack_id
        );

        let root = self.screen_for(&script.root);
        let (promise, receiver) = Promise::channel();
        self.controller.push(root, promise);
        receiver.wait().await?;

        let mut steps = Vec::with_capacity(script.steps.len());
        for (index, step) in script.steps.iter().enumerate() {
            let outcome = self.apply(step).await?;
            debug!("Step {} '{}' -> {:?}", index, step.describe(), outcome);
            steps.push(StepReport {
                index,
                step: step.describe(),
                outcome,
            });
        }

        Ok(self.report(steps))
    }

    async fn apply(&mut self, step: &Step) -> Result<StepOutcome> {
        let controller = Rc::clone(&self.controller);
        match step {
            Step::Push { screen, animated } => {
                let screen = self.screen_for(screen);
                let (promise, receiver) = Promise::channel();
                if animated.unwrap_or(self.settings.navigation.animate_push) {
                    controller.animate_push(screen, promise);
                } else {
                    controller.push(screen, promise);
                }
                settle(receiver).await
            }
            Step::Pop { animated } => {
                let (promise, receiver) = Promise::channel();
                if animated.unwrap_or(self.settings.navigation.animate_pop) {
                    controller.animate_pop(promise);
                } else {
                    controller.pop(promise);
                }
                settle(receiver).await
            }
            Step::PopTo { id } => {
                let (promise, receiver) = Promise::channel();
                controller.pop_to(id, promise);
                settle(receiver).await
            }
            Step::PopToRoot => {
                let (promise, receiver) = Promise::channel();
                controller.pop_to_root(promise);
                settle(receiver).await
            }
            Step::PopSpecific { id } => {
                let (promise, receiver) = Promise::channel();
                controller.pop_specific(id, promise);
                settle(receiver).await
            }
            Step::Back => Ok(StepOutcome::Back {
                handled: controller.handle_back(),
            }),
            Step::MergeOptions { id, options } => {
                let screen = self
                    .screens
                    .get(id)
                    .ok_or_else(|| NavError::script(format!("Unknown screen '{id}'")))?;
                if screen.is_destroyed() {
                    return Err(NavError::script(format!("Screen '{id}' was destroyed")));
                }
                screen.merge_options(options);
                Ok(StepOutcome::Applied)
            }
            Step::ApplyOptions { options } => {
                controller.apply_options(options.clone());
                Ok(StepOutcome::Applied)
            }
            Step::ButtonPressed { button_id } => {
                controller.send_on_navigation_button_pressed(button_id);
                Ok(StepOutcome::Applied)
            }
        }
    }

    /// Screen for `template`. A resident screen with the same id is returned as is,
    /// so pushing it again surfaces the duplicate-id rejection.
    fn screen_for(&mut self, template: &ScreenSpec) -> Rc<Screen> {
        let id = template
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Some(existing) = self.screens.get(&id) {
            if !existing.is_destroyed() {
                return Rc::clone(existing);
            }
        }

        let screen = if template.fab {
            Screen::with_fab(id.clone(), template.options.clone())
        } else {
            Screen::new(id.clone(), template.options.clone())
        };
        self.screens.insert(id, Rc::clone(&screen));
        self.created.push(Rc::clone(&screen));
        screen
    }

    fn report(self, steps: Vec<StepReport>) -> ReplayReport {
        ReplayReport {
            stack_id: self.controller.id().to_string(),
            steps,
            final_stack: self.controller.ids(),
            attached_views: self.container.child_tags(),
            destroyed: self
                .created
                .iter()
                .filter(|screen| screen.is_destroyed())
                .map(|screen| screen.id().to_string())
                .collect(),
            transitions: self.animator.transitions(),
            top_bar_title: self.container.options().top_bar.title,
        }
    }
}

async fn settle(receiver: PromiseReceiver) -> Result<StepOutcome> {
    match receiver.wait().await {
        Ok(id) => Ok(StepOutcome::Resolved { id }),
        Err(NavError::PromiseDropped) => Err(NavError::PromiseDropped),
        Err(e) => Ok(StepOutcome::Rejected {
            reason: e.to_string(),
        }),
    }
}
