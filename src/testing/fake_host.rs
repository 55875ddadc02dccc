use std::sync::Mutex;

use crate::domain::{AppError, OwnerCandidate};
use crate::ports::HostPort;

/// Scripted hosting provider; queries and creation can be forced to fail.
pub struct FakeHost {
    user: OwnerCandidate,
    organizations: Vec<OwnerCandidate>,
    created: Mutex<Vec<String>>,
    fail_queries: bool,
    fail_create: bool,
}

impl FakeHost {
    pub fn new(login: &str) -> Self {
        Self {
            user: OwnerCandidate { login: login.to_string(), description: None },
            organizations: Vec::new(),
            created: Mutex::new(Vec::new()),
            fail_queries: false,
            fail_create: false,
        }
    }

    /// Provider whose identity/organization queries fail outright.
    pub fn failing(login: &str) -> Self {
        let mut host = Self::new(login);
        host.fail_queries = true;
        host
    }

    pub fn with_organizations(mut self, logins: &[&str]) -> Self {
        self.organizations = logins
            .iter()
            .map(|login| OwnerCandidate { login: login.to_string(), description: None })
            .collect();
        self
    }

    pub fn with_failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl HostPort for FakeHost {
    fn authenticated_user(&self) -> Result<OwnerCandidate, AppError> {
        if self.fail_queries {
            return Err(AppError::Provider {
                operation: "gh api /user".to_string(),
                details: "provider unavailable".to_string(),
            });
        }
        Ok(self.user.clone())
    }

    fn organizations(&self) -> Result<Vec<OwnerCandidate>, AppError> {
        if self.fail_queries {
            return Err(AppError::Provider {
                operation: "gh api /user/orgs".to_string(),
                details: "provider unavailable".to_string(),
            });
        }
        Ok(self.organizations.clone())
    }

    fn create_repository(&self, full_name: &str) -> Result<(), AppError> {
        if self.fail_create {
            return Err(AppError::Provider {
                operation: format!("gh repo create {full_name}"),
                details: "name already exists on this account".to_string(),
            });
        }
        self.created.lock().unwrap().push(full_name.to_string());
        Ok(())
    }
}
