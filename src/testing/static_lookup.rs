use std::collections::BTreeSet;

use crate::ports::ToolLookup;

/// Capability probe answering from a fixed set of available tools.
pub struct StaticToolLookup {
    available: BTreeSet<String>,
}

impl StaticToolLookup {
    pub fn with(tools: &[&str]) -> Self {
        Self { available: tools.iter().map(|tool| tool.to_string()).collect() }
    }
}

impl ToolLookup for StaticToolLookup {
    fn is_available(&self, tool: &str) -> bool {
        self.available.contains(tool)
    }
}
