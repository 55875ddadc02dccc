use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{PromptPort, SelectItem};

/// A scripted prompt answer; `None` simulates the user aborting the prompt.
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    Confirm(Option<bool>),
    Select(Option<usize>),
    Input(Option<String>),
}

/// Replays a fixed sequence of answers and records every issued prompt.
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    issued: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<ScriptedAnswer>) -> Self {
        Self { answers: Mutex::new(answers.into()), issued: Mutex::new(Vec::new()) }
    }

    /// Messages of the prompts issued so far, in order.
    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }

    fn next(&self, message: &str) -> Option<ScriptedAnswer> {
        self.issued.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front()
    }
}

impl PromptPort for ScriptedPrompt {
    fn confirm(&self, message: &str, _default: bool) -> Result<Option<bool>, AppError> {
        match self.next(message) {
            Some(ScriptedAnswer::Confirm(answer)) => Ok(answer),
            other => {
                Err(AppError::Prompt(format!("unexpected confirm '{message}', got {other:?}")))
            }
        }
    }

    fn select(&self, message: &str, _items: &[SelectItem]) -> Result<Option<usize>, AppError> {
        match self.next(message) {
            Some(ScriptedAnswer::Select(answer)) => Ok(answer),
            other => {
                Err(AppError::Prompt(format!("unexpected select '{message}', got {other:?}")))
            }
        }
    }

    fn input(&self, message: &str, _default: &str) -> Result<Option<String>, AppError> {
        match self.next(message) {
            Some(ScriptedAnswer::Input(answer)) => Ok(answer),
            other => Err(AppError::Prompt(format!("unexpected input '{message}', got {other:?}"))),
        }
    }
}
