//! Test doubles for the port traits.

mod fake_host;
mod fake_installer;
mod fake_vcs;
mod scripted_prompt;
mod static_lookup;

pub use fake_host::FakeHost;
pub use fake_installer::FakeInstaller;
pub use fake_vcs::FakeVcs;
pub use scripted_prompt::{ScriptedAnswer, ScriptedPrompt};
pub use static_lookup::StaticToolLookup;
