use crate::operations::{apply_text_patch, copy_file, copy_tree};
use crate::plan::PlanConfig;
use crate::types::{PatchResult, PatchStep, StepOp, StepReport};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("Source root not found: {0:?}. Export the app before running sdkgraft.")]
    MissingSourceRoot(PathBuf),
    #[error("Target root not found: {0:?}. Scaffold the project before running sdkgraft.")]
    MissingTargetRoot(PathBuf),
}

/// Both roots must exist before any step runs; nothing is touched otherwise.
pub fn validate_roots(config: &PlanConfig) -> Result<(), PreconditionError> {
    if !config.source_root.is_dir() {
        return Err(PreconditionError::MissingSourceRoot(
            config.source_root.clone(),
        ));
    }
    if !config.target_root.is_dir() {
        return Err(PreconditionError::MissingTargetRoot(
            config.target_root.clone(),
        ));
    }
    Ok(())
}

#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<StepReport>,
}

impl RunSummary {
    pub fn applied(&self) -> usize {
        self.count(|r| matches!(r, PatchResult::Applied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|r| {
            matches!(
                r,
                PatchResult::SkippedAlreadyApplied | PatchResult::SkippedMissingSource
            )
        })
    }

    pub fn failed(&self) -> usize {
        self.count(|r| r.is_failed())
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&PatchResult) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.result)).count()
    }
}

/// Runs every step in plan order. Steps are not transactional against each
/// other: a failed step is reported and the remaining steps still run.
pub fn execute_plan(steps: &[PatchStep], dry_run: bool) -> RunSummary {
    let mut reports = Vec::with_capacity(steps.len());

    for step in steps {
        println!("--- {}: {:?}", step.label, step.target);
        let result = run_step(step, dry_run);
        reports.push(StepReport {
            label: step.label.clone(),
            result,
        });
    }

    RunSummary { reports }
}

fn run_step(step: &PatchStep, dry_run: bool) -> PatchResult {
    match &step.op {
        StepOp::Copy { source } => run_copy(step, source, dry_run),
        StepOp::Patch(patch) => match apply_text_patch(&step.target, patch, dry_run) {
            Ok(result) => {
                report_patch(step, &result, dry_run);
                result
            }
            Err(e) => {
                println!("    [ERROR] {:#}", e);
                PatchResult::Failed(format!("{:#}", e))
            }
        },
    }
}

fn run_copy(step: &PatchStep, source: &std::path::Path, dry_run: bool) -> PatchResult {
    if !source.exists() {
        if step.optional {
            log::warn!("optional source missing: {:?}", source);
            println!("    [SKIP] Optional source not found: {:?}", source);
            return PatchResult::SkippedMissingSource;
        }
        println!("    [ERROR] Source not found: {:?}", source);
        return PatchResult::Failed(format!("source not found: {:?}", source));
    }

    if dry_run {
        println!("    [DRY RUN] Would copy {:?} to {:?}", source, step.target);
        return PatchResult::Applied;
    }

    let outcome = if source.is_dir() {
        copy_tree(source, &step.target)
            .map(|n| format!("Copied {} file(s) to {:?}", n, step.target))
    } else {
        copy_file(source, &step.target).map(|_| format!("Copied to {:?}", step.target))
    };

    match outcome {
        Ok(msg) => {
            println!("    [SUCCESS] {}", msg);
            PatchResult::Applied
        }
        Err(e) => {
            println!("    [ERROR] {:#}", e);
            PatchResult::Failed(format!("{:#}", e))
        }
    }
}

fn report_patch(step: &PatchStep, result: &PatchResult, dry_run: bool) {
    match result {
        PatchResult::Applied if dry_run => {
            println!("    [DRY RUN] Patch would be applied.")
        }
        PatchResult::Applied => println!("    [SUCCESS] Patch applied."),
        PatchResult::SkippedAlreadyApplied => println!("    [SKIP] Already applied."),
        PatchResult::SkippedMissingSource => {
            println!("    [SKIP] Target file not found: {:?}", step.target)
        }
        PatchResult::Failed(reason) => {
            println!("    [ERROR] {} in {:?}", reason, step.target)
        }
    }
}
