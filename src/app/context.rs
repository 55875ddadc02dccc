use crate::ports::{HostPort, InstallerPort, PromptPort, ToolLookup, VcsPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<V: VcsPort, H: HostPort, P: PromptPort, I: InstallerPort, L: ToolLookup> {
    vcs: V,
    host: H,
    prompt: P,
    installer: I,
    lookup: L,
}

impl<V: VcsPort, H: HostPort, P: PromptPort, I: InstallerPort, L: ToolLookup>
    AppContext<V, H, P, I, L>
{
    /// Create a new application context.
    pub fn new(vcs: V, host: H, prompt: P, installer: I, lookup: L) -> Self {
        Self { vcs, host, prompt, installer, lookup }
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}
