//! Extension-module manifest metadata.
//!
//! Each extension crate exports a `MANIFEST` const describing what it wires
//! together. Declaration-only modules (no behavior of their own) still carry
//! one; the manifest is the whole of their contract.

use serde::Serialize;

/// Static metadata describing an extension module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleManifest {
    /// Machine name of the module.
    pub name: &'static str,
    /// One-line human summary.
    pub summary: &'static str,
    /// Module version, independent of crate version.
    pub version: &'static str,
    /// Machine names of the modules this one extends or wires together.
    pub depends: &'static [&'static str],
}

impl ModuleManifest {
    /// Whether this module declares a dependency on `module`.
    pub fn depends_on(&self, module: &str) -> bool {
        self.depends.contains(&module)
    }
}
