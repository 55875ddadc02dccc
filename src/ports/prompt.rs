use crate::domain::AppError;

/// A single-select entry: label plus optional description.
#[derive(Debug, Clone)]
pub struct SelectItem {
    pub label: String,
    pub description: Option<String>,
}

/// Interactive request/response boundary.
///
/// Every method blocks until the user responds. `Ok(None)` means the user
/// aborted the prompt outright, which is distinct from a negative answer.
pub trait PromptPort {
    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError>;

    /// Ask the user to pick one of the items; returns the chosen index.
    fn select(&self, message: &str, items: &[SelectItem]) -> Result<Option<usize>, AppError>;

    /// Ask for free text, offering a default value.
    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError>;
}
