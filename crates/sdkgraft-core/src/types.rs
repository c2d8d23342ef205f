use std::path::PathBuf;

/// Marker-guarded anchored replacement. `replacement` must embed `marker`
/// so a later run detects the patch and skips it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPatch {
    pub marker: String,
    pub anchor: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOp {
    Copy { source: PathBuf },
    Patch(TextPatch),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchStep {
    pub label: String,
    pub target: PathBuf,
    pub op: StepOp,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatchResult {
    Applied,
    SkippedAlreadyApplied,
    SkippedMissingSource,
    Failed(String),
}

impl PatchResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, PatchResult::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub label: String,
    pub result: PatchResult,
}
