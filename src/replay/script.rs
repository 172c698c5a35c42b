use crate::errors::{NavError, Result};
use crate::options::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A screen to create; a missing id gets a generated one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSpec {
    pub id: Option<String>,
    pub options: Options,
    /// Whether the screen can host a floating action button
    pub fab: bool,
}

/// One navigation command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Push {
        screen: ScreenSpec,
        animated: Option<bool>,
    },
    Pop {
        animated: Option<bool>,
    },
    PopTo {
        id: String,
    },
    PopToRoot,
    PopSpecific {
        id: String,
    },
    Back,
    MergeOptions {
        id: String,
        options: Options,
    },
    ApplyOptions {
        options: Options,
    },
    ButtonPressed {
        button_id: String,
    },
}

/// A root screen plus the steps to run against its stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub root: ScreenSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| NavError::script(format!("Failed to parse script: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NavError::script(format!("Failed to read script {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }
}

impl Step {
    /// Short human readable form used in reports
    pub fn describe(&self) -> String {
        let animated = |flag: &Option<bool>| match flag {
            Some(true) => " (animated)",
            Some(false) => " (instant)",
            None => "",
        };

        match self {
            Step::Push { screen, animated: flag } => format!(
                "push {}{}",
                screen.id.as_deref().unwrap_or("<generated>"),
                animated(flag)
            ),
            Step::Pop { animated: flag } => format!("pop{}", animated(flag)),
            Step::PopTo { id } => format!("pop to {id}"),
            Step::PopToRoot => "pop to root".to_string(),
            Step::PopSpecific { id } => format!("pop {id}"),
            Step::Back => "back".to_string(),
            Step::MergeOptions { id, .. } => format!("merge options into {id}"),
            Step::ApplyOptions { .. } => "apply stack options".to_string(),
            Step::ButtonPressed { button_id } => format!("press {button_id}"),
        }
    }
}
