use super::AppError;

/// Result of a single pipeline step.
///
/// The orchestrator inspects the tag to decide whether to continue; only
/// `Fatal` aborts the remaining pipeline.
#[derive(Debug)]
pub enum StepOutcome {
    Success,
    /// The step failed, was logged, and the pipeline continues.
    Tolerated { operation: String, details: String },
    /// The step failed and the remaining pipeline must not run.
    Fatal(AppError),
}

impl StepOutcome {
    /// Record a tolerated failure: the attempted operation and the underlying
    /// diagnostic are logged before execution continues.
    pub fn tolerated(operation: impl Into<String>, error: &AppError) -> Self {
        let operation = operation.into();
        let details = error.to_string();
        tracing::warn!(%operation, %details, "step failed; continuing");
        StepOutcome::Tolerated { operation, details }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success)
    }

    /// Collapse the outcome for callers that only distinguish fatal from not.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            StepOutcome::Success | StepOutcome::Tolerated { .. } => Ok(()),
            StepOutcome::Fatal(error) => Err(error),
        }
    }
}
