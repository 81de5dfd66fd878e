//! Social identity verification workflow
//!
//! Two independent provider checks (Twitter handle, GitHub org membership)
//! coordinated into a single error banner and a never-blocking gate.

mod check;
mod claim;
mod coordinator;

pub use check::CheckCompletion;
pub use claim::{Provider, VerificationOutcome};
pub use coordinator::VerificationCoordinator;
