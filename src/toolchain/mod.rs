//! JDK provisioning via SDKMAN.

pub mod provisioner;

pub use provisioner::{JdkProvisioner, ProvisionerContext};

/// Shell prelude making the `sdk` function available. SDKMAN is a shell
/// function, not a binary, so every invocation sources its init script first.
pub const SDKMAN_INIT: &str = "source ~/.sdkman/bin/sdkman-init.sh";
