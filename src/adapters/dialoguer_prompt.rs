use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::{PromptPort, SelectItem};

/// Terminal prompts backed by dialoguer.
///
/// Esc/abort surfaces as `Ok(None)` so the caller can treat cancellation as
/// its own outcome.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptPort for DialoguerPrompt {
    fn confirm(&self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()
            .map_err(|e| AppError::Prompt(format!("Failed to read confirmation: {e}")))
    }

    fn select(&self, message: &str, items: &[SelectItem]) -> Result<Option<usize>, AppError> {
        let rendered: Vec<String> = items
            .iter()
            .map(|item| match &item.description {
                Some(description) => format!("{}: {}", item.label, description),
                None => item.label.clone(),
            })
            .collect();

        Select::new()
            .with_prompt(message)
            .items(&rendered)
            .default(0)
            .interact_opt()
            .map_err(|e| AppError::Prompt(format!("Failed to read selection: {e}")))
    }

    fn input(&self, message: &str, default: &str) -> Result<Option<String>, AppError> {
        match Input::new().with_prompt(message).default(default.to_string()).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(format!("Failed to read input: {err}"))),
        }
    }
}
