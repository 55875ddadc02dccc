pub mod dialoguer_prompt;
pub mod git_command;
pub mod github_command;
pub mod npm_command;
pub mod which_lookup;

pub use dialoguer_prompt::DialoguerPrompt;
pub use git_command::GitCommandAdapter;
pub use github_command::GitHubCommandAdapter;
pub use npm_command::NpmCommandAdapter;
pub use which_lookup::WhichToolLookup;
