//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate the agent team for this project".

pub mod generate_service;
pub mod merger;
pub mod scanner;

pub use generate_service::{GenerateReport, GenerateService};
pub use merger::{DocumentMerger, GUIDANCE_DOC, MergeOutcome};
pub use scanner::Scanner;
