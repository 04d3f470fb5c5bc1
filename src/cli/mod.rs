//! Command-line layer: token scanning and workflow orchestration.

pub mod orchestration;
pub mod tokens;

pub use orchestration::{run_bump_workflow, WorkflowResult, WriteReport};
pub use tokens::Invocation;
