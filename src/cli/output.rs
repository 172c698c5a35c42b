use crate::replay::{ReplayReport, StepOutcome};
use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print an error message with X mark
    pub fn error<T: Display>(message: T) {
        println!("{} {}", style("✗").red(), message);
    }

    /// Print a warning message
    pub fn warning<T: Display>(message: T) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    /// Print a sub-item with arrow prefix
    pub fn sub_item<T: Display>(message: T) {
        println!("  {} {}", style("→").dim(), message);
    }

    /// Print a section header
    pub fn section<T: Display>(title: T) {
        println!("\n{}", style(title).bold().underlined());
    }

    /// Print a tip/suggestion
    pub fn tip<T: Display>(message: T) {
        println!("{} {}", style("TIP:").cyan(), style(message).dim());
    }

    /// Print a stack bottom to top, marking the visible screen
    pub fn stack(ids: &[String]) {
        if ids.is_empty() {
            Self::sub_item(style("(empty)").dim());
            return;
        }

        for (position, id) in ids.iter().enumerate().rev() {
            if position + 1 == ids.len() {
                println!("  {} {}", style("▶").cyan(), style(id).bold());
            } else {
                println!("    {}", id);
            }
        }
    }

    /// Print a full replay report
    pub fn replay_report(report: &ReplayReport) {
        Self::section(format!("Steps on stack '{}'", report.stack_id));
        for step in &report.steps {
            let line = format!("{:>3}. {}", step.index + 1, step.step);
            match &step.outcome {
                StepOutcome::Resolved { id } => {
                    Self::success(format!("{line} {}", style(format!("→ {id}")).dim()))
                }
                StepOutcome::Rejected { reason } => Self::error(format!("{line}: {reason}")),
                StepOutcome::Back { handled: true } => Self::success(format!("{line} (handled)")),
                StepOutcome::Back { handled: false } => {
                    Self::warning(format!("{line} (not handled)"))
                }
                StepOutcome::Applied => Self::success(line),
            }
        }

        Self::section("Final stack");
        Self::stack(&report.final_stack);

        if let Some(title) = &report.top_bar_title {
            Self::sub_item(format!("Top bar: {}", style(title).cyan()));
        }
        Self::sub_item(format!("Attached views: {}", report.attached_views.join(", ")));
        Self::sub_item(format!("Transitions run: {}", report.transitions.len()));
        if !report.destroyed.is_empty() {
            Self::sub_item(format!("Destroyed: {}", report.destroyed.join(", ")));
        }
    }
}
