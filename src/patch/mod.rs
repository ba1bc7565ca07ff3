//! The two-step patch: drop one line, then swap one literal for another.
//!
//! Each step reads the whole target, transforms it in memory, and overwrites
//! the file. Steps run strictly in order and nothing is rolled back.

pub mod delete_line;
pub mod replace_literal;

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::PatchPlan;
use crate::diff::render_unified;
use crate::error::{PatchError, Result};
use crate::utils::fs::read_file_to_string;

pub use delete_line::{count_lines, delete_line, delete_line_in_file, LineDeletion};
pub use replace_literal::{replace_literal, replace_literal_in_file, Replacement};

/// Printed once after a successful run, whether or not anything matched
pub const SUCCESS_MESSAGE: &str = "File updated successfully";

/// Where a [`Patcher`] is in its `Start -> LineDeleted -> Replaced` sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStage {
    Start,
    LineDeleted,
    Replaced,
}

impl fmt::Display for PatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchStage::Start => write!(f, "start"),
            PatchStage::LineDeleted => write!(f, "line-deleted"),
            PatchStage::Replaced => write!(f, "replaced"),
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub target: PathBuf,
    pub deletion: LineDeletion,
    pub replacement: Replacement,
}

/// Both steps computed in memory, nothing written
#[derive(Debug, Clone)]
pub struct PatchPreview {
    pub target: PathBuf,
    pub original: String,
    pub patched: String,
    pub line_removed: bool,
    pub occurrences: usize,
}

impl PatchPreview {
    pub fn is_noop(&self) -> bool {
        self.original == self.patched
    }

    pub fn diff(&self) -> String {
        render_unified(&self.original, &self.patched, &self.target)
    }
}

/// Applies a [`PatchPlan`] to its target file
#[derive(Debug)]
pub struct Patcher {
    plan: PatchPlan,
    stage: PatchStage,
}

impl Patcher {
    pub fn new(plan: PatchPlan) -> Self {
        Self {
            plan,
            stage: PatchStage::Start,
        }
    }

    pub fn plan(&self) -> &PatchPlan {
        &self.plan
    }

    pub fn stage(&self) -> PatchStage {
        self.stage
    }

    fn target(&self) -> &Path {
        &self.plan.target
    }

    fn expect_stage(&self, expected: PatchStage) -> Result<()> {
        if self.stage != expected {
            return Err(PatchError::out_of_order(expected, self.stage));
        }
        Ok(())
    }

    /// Step 1: remove the planned line and overwrite the target
    pub fn delete_step(&mut self) -> Result<LineDeletion> {
        self.expect_stage(PatchStage::Start)?;

        let deletion = delete_line_in_file(self.target(), self.plan.delete_line)?;
        self.stage = PatchStage::LineDeleted;
        Ok(deletion)
    }

    /// Step 2: replace the planned literal and overwrite the target
    pub fn replace_step(&mut self) -> Result<Replacement> {
        self.expect_stage(PatchStage::LineDeleted)?;

        let replacement =
            replace_literal_in_file(self.target(), &self.plan.needle, &self.plan.replacement)?;
        self.stage = PatchStage::Replaced;
        Ok(replacement)
    }

    /// Run both steps in sequence
    pub fn run(mut self) -> Result<PatchReport> {
        info!("Patching {}", self.target().display());

        let deletion = self.delete_step()?;
        let replacement = self.replace_step()?;

        debug!(
            "Patch finished: line removed: {}, replacements: {}",
            deletion.removed(),
            replacement.occurrences
        );

        Ok(PatchReport {
            target: self.plan.target,
            deletion,
            replacement,
        })
    }

    /// Compute what [`Patcher::run`] would write without touching the file
    pub fn preview(&self) -> Result<PatchPreview> {
        let original = read_file_to_string(self.target())?;
        let (without_line, line_removed) = delete_line(&original, self.plan.delete_line);
        let (patched, occurrences) =
            replace_literal(&without_line, &self.plan.needle, &self.plan.replacement);

        Ok(PatchPreview {
            target: self.plan.target.clone(),
            original,
            patched,
            line_removed,
            occurrences,
        })
    }
}
