pub mod operations;
pub mod plan;
pub mod runner;
pub mod types;

pub use operations::{apply_text_patch, copy_file, copy_tree};
pub use plan::{build_plan, PlanConfig};
pub use runner::{execute_plan, validate_roots, PreconditionError, RunSummary};
pub use types::{PatchResult, PatchStep, StepOp, StepReport, TextPatch};
