use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::VcsPort;

/// Records git operations and tracks which remotes exist; individual
/// operations can be forced to fail.
#[derive(Default)]
pub struct FakeVcs {
    calls: Mutex<Vec<String>>,
    remotes: Mutex<Vec<String>>,
    fail_init: bool,
    fail_fetch: bool,
    fail_checkout: bool,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given remotes already present, as after a failed run.
    pub fn with_remotes(remotes: &[&str]) -> Self {
        let vcs = Self::default();
        *vcs.remotes.lock().unwrap() = remotes.iter().map(|name| name.to_string()).collect();
        vcs
    }

    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn with_failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn with_failing_checkout(mut self) -> Self {
        self.fail_checkout = true;
        self
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remotes(&self) -> Vec<String> {
        self.remotes.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn forced(command: &str) -> AppError {
        AppError::Git { command: command.to_string(), details: "forced failure".to_string() }
    }
}

impl VcsPort for FakeVcs {
    fn init(&self) -> Result<(), AppError> {
        self.record("init".to_string());
        if self.fail_init {
            return Err(Self::forced("git init"));
        }
        Ok(())
    }

    fn remote_add(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.record(format!("remote add {name} {url}"));
        self.remotes.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn remote_remove(&self, name: &str) -> Result<(), AppError> {
        self.record(format!("remote remove {name}"));
        let mut remotes = self.remotes.lock().unwrap();
        match remotes.iter().position(|remote| remote == name) {
            Some(index) => {
                remotes.remove(index);
                Ok(())
            }
            None => Err(AppError::Git {
                command: format!("git remote remove {name}"),
                details: "no such remote".to_string(),
            }),
        }
    }

    fn fetch_all(&self) -> Result<(), AppError> {
        self.record("fetch --all".to_string());
        if self.fail_fetch {
            return Err(Self::forced("git fetch --all"));
        }
        Ok(())
    }

    fn checkout_ref(&self, reference: &str, pathspec: &str) -> Result<(), AppError> {
        self.record(format!("checkout {reference} {pathspec}"));
        if self.fail_checkout {
            return Err(Self::forced("git checkout"));
        }
        Ok(())
    }
}
