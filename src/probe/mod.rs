//! Throwaway compile probes against SDKMAN-provisioned JDKs.

pub mod inspector;
pub mod runner;
pub mod workspace;

pub use runner::MavenProbe;
pub use workspace::ProbeWorkspace;

use crate::config::{JdkVersion, MavenPackage};
use crate::error::Result;

/// Narrow capability surface over the external toolchain.
///
/// The compatibility search and the experiment driver only ever talk to this
/// trait, so they can be exercised with fakes; the real commands are slow
/// and depend on SDKMAN and Maven being present.
pub trait ProbeHost {
    /// Ensure a JDK is available locally. False on any failure.
    fn provision(&mut self, version: &JdkVersion) -> bool;

    /// Compile a minimal throwaway project under `version`, optionally
    /// declaring `package` as its single dependency. False on any failure,
    /// including provisioning and timeouts; never raises.
    fn compile_probe(&mut self, version: &JdkVersion, package: Option<&MavenPackage>) -> bool;

    /// The concrete version Maven selects for `package` under the newest
    /// configured JDK. `Ok(None)` when resolution fails or the version can't
    /// be extracted; `Err` only when the newest JDK can't be provisioned at
    /// all.
    fn resolve_version(&mut self, package: &MavenPackage) -> Result<Option<String>>;
}
