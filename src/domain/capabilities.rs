use std::collections::BTreeMap;

/// Tools probed before the pipeline decides which paths are viable.
pub const REQUIRED_TOOLS: [&str; 3] = ["git", "gh", "npm"];

/// Map of tool name to availability, built once per run and immutable after.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    available: BTreeMap<String, bool>,
}

impl Capabilities {
    pub fn new(available: BTreeMap<String, bool>) -> Self {
        Self { available }
    }

    /// Whether the named tool was found on the host. Unprobed tools count as
    /// absent.
    pub fn has(&self, tool: &str) -> bool {
        self.available.get(tool).copied().unwrap_or(false)
    }
}
