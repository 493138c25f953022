pub mod orchestration;

pub use orchestration::{run_version_workflow, VersionReport, VersionWorkflowArgs};
