use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::InstallerPort;

/// Counts install invocations and returns a fixed exit code.
pub struct FakeInstaller {
    exit_code: i32,
    runs: Mutex<usize>,
}

impl FakeInstaller {
    pub fn succeeding() -> Self {
        Self::with_exit_code(0)
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self { exit_code, runs: Mutex::new(0) }
    }

    pub fn runs(&self) -> usize {
        *self.runs.lock().unwrap()
    }
}

impl InstallerPort for FakeInstaller {
    fn install(&self) -> Result<i32, AppError> {
        *self.runs.lock().unwrap() += 1;
        Ok(self.exit_code)
    }
}
