//! Idempotent JDK installation.
//!
//! The provisioner never raises: any failure along the way (SDKMAN missing,
//! listing times out, installer exits non-zero) degrades to "not available",
//! which downstream code treats as a failed probe.

use crate::config::JdkVersion;
use crate::shell::{self, CommandOptions};
use crate::toolchain::SDKMAN_INIT;
use std::collections::HashSet;
use std::time::Duration;

/// Deadline for the installed-versions listing.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for an installation. Generous, since a JDK download runs to
/// hundreds of megabytes.
const INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Mockable dependencies for the provisioner.
pub struct ProvisionerContext<'a> {
    /// Return the version manager's listing output, or `None` on any failure.
    pub query_installed: &'a dyn Fn() -> Option<String>,

    /// Install a JDK, returning true on success.
    pub install: &'a dyn Fn(&JdkVersion) -> bool,
}

impl ProvisionerContext<'static> {
    /// Build the real SDKMAN-backed context.
    pub fn sdkman() -> Self {
        Self {
            query_installed: &|| {
                let options = CommandOptions {
                    timeout: Some(LIST_TIMEOUT),
                    ..Default::default()
                };
                match shell::execute(&format!("{SDKMAN_INIT} && sdk list java"), &options) {
                    Ok(result) if result.success => Some(result.stdout),
                    _ => None,
                }
            },
            install: &|version| {
                let options = CommandOptions {
                    timeout: Some(INSTALL_TIMEOUT),
                    ..Default::default()
                };
                shell::execute(
                    &format!("{SDKMAN_INIT} && sdk install java {version}"),
                    &options,
                )
                .map(|result| result.success)
                .unwrap_or(false)
            },
        }
    }
}

/// Ensures specific JDK versions are installed, installing on demand.
///
/// Versions confirmed installed are cached for the run, so repeated calls for
/// the same version (every binary-search probe provisions first) cost nothing
/// after the first.
pub struct JdkProvisioner<'a> {
    ctx: ProvisionerContext<'a>,
    installed: HashSet<String>,
}

impl<'a> JdkProvisioner<'a> {
    /// Create a provisioner over the given context.
    pub fn new(ctx: ProvisionerContext<'a>) -> Self {
        Self {
            ctx,
            installed: HashSet::new(),
        }
    }

    /// Ensure `version` is installed. Idempotent; returns false on any
    /// failure instead of raising.
    pub fn ensure_installed(&mut self, version: &JdkVersion) -> bool {
        if self.installed.contains(version.as_str()) {
            return true;
        }

        if self.listed_as_installed(version) {
            self.installed.insert(version.as_str().to_string());
            return true;
        }

        tracing::info!("Installing JDK {version}");
        if (self.ctx.install)(version) {
            self.installed.insert(version.as_str().to_string());
            true
        } else {
            tracing::warn!("Failed to install JDK {version}");
            false
        }
    }

    /// Check the version manager's listing for an installed marker on this
    /// version. Listing failures count as "not installed".
    fn listed_as_installed(&self, version: &JdkVersion) -> bool {
        let Some(listing) = (self.ctx.query_installed)() else {
            return false;
        };
        listing
            .lines()
            .any(|line| line.contains("installed") && line.contains(version.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // A listing in SDKMAN's broadsheet format, with 11.0.25-tem installed.
    const LISTING: &str = "\
 Temurin       |     | 23.0.1       | tem     |            | 23.0.1-tem
               |     | 21.0.5       | tem     |            | 21.0.5-tem
               | >>> | 11.0.25      | tem     | installed  | 11.0.25-tem
";

    #[test]
    fn already_installed_version_skips_install() {
        let installs = Cell::new(0u32);
        let install = |_: &JdkVersion| {
            installs.set(installs.get() + 1);
            true
        };
        let query = || Some(LISTING.to_string());
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        assert!(provisioner.ensure_installed(&JdkVersion::new("11.0.25-tem")));
        assert_eq!(installs.get(), 0);
    }

    #[test]
    fn missing_version_is_installed_once() {
        let installs = Cell::new(0u32);
        let install = |_: &JdkVersion| {
            installs.set(installs.get() + 1);
            true
        };
        let query = || Some(LISTING.to_string());
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        let version = JdkVersion::new("21.0.5-tem");
        assert!(provisioner.ensure_installed(&version));
        assert_eq!(installs.get(), 1);

        // Second call hits the run cache, no further install.
        assert!(provisioner.ensure_installed(&version));
        assert_eq!(installs.get(), 1);
    }

    #[test]
    fn listing_failure_counts_as_not_installed() {
        let installs = Cell::new(0u32);
        let install = |_: &JdkVersion| {
            installs.set(installs.get() + 1);
            true
        };
        let query = || None;
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        assert!(provisioner.ensure_installed(&JdkVersion::new("11.0.25-tem")));
        assert_eq!(installs.get(), 1);
    }

    #[test]
    fn install_failure_returns_false() {
        let install = |_: &JdkVersion| false;
        let query = || Some(String::new());
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        assert!(!provisioner.ensure_installed(&JdkVersion::new("8.0.432-tem")));
    }

    #[test]
    fn failed_install_is_retried_on_next_call() {
        let attempts = Cell::new(0u32);
        let install = |_: &JdkVersion| {
            attempts.set(attempts.get() + 1);
            attempts.get() > 1
        };
        let query = || Some(String::new());
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        let version = JdkVersion::new("17.0.13-tem");
        assert!(!provisioner.ensure_installed(&version));
        assert!(provisioner.ensure_installed(&version));
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn version_without_installed_marker_is_not_matched() {
        // 23.0.1-tem appears in the listing but has no installed marker.
        let installs = Cell::new(0u32);
        let install = |_: &JdkVersion| {
            installs.set(installs.get() + 1);
            true
        };
        let query = || Some(LISTING.to_string());
        let mut provisioner = JdkProvisioner::new(ProvisionerContext {
            query_installed: &query,
            install: &install,
        });

        assert!(provisioner.ensure_installed(&JdkVersion::new("23.0.1-tem")));
        assert_eq!(installs.get(), 1);
    }
}
