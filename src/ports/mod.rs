mod host;
mod installer;
mod prompt;
mod tool_lookup;
mod vcs;

pub use host::HostPort;
pub use installer::InstallerPort;
pub use prompt::{PromptPort, SelectItem};
pub use tool_lookup::ToolLookup;
pub use vcs::VcsPort;
