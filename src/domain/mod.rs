pub mod capabilities;
pub mod decision;
pub mod error;
pub mod manifest;
pub mod outcome;
pub mod owner;
pub mod readme;
pub mod workspace;

pub use capabilities::{Capabilities, REQUIRED_TOOLS};
pub use decision::SetupDecision;
pub use error::AppError;
pub use outcome::StepOutcome;
pub use owner::OwnerCandidate;
pub use workspace::Workspace;
