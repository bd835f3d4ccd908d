//! The SDKMAN + Maven probe host.

use crate::config::{JdkVersion, MavenPackage};
use crate::error::{JdkspanError, Result};
use crate::probe::workspace::ProbeWorkspace;
use crate::probe::{inspector, ProbeHost};
use crate::shell::{self, CommandOptions, CommandResult};
use crate::toolchain::{JdkProvisioner, ProvisionerContext, SDKMAN_INIT};
use std::path::Path;
use std::time::Duration;

/// Deadline for a `mvn compile` probe.
const COMPILE_TIMEOUT: Duration = Duration::from_secs(120);

/// Deadline for each of the resolve and tree invocations.
const RESOLVE_TIMEOUT: Duration = Duration::from_secs(60);

/// [`ProbeHost`] implementation that spawns real SDKMAN and Maven processes.
pub struct MavenProbe<'a> {
    provisioner: JdkProvisioner<'a>,
    jdks: Vec<JdkVersion>,
}

impl<'a> MavenProbe<'a> {
    /// Create a probe host over the given provisioner context and the
    /// configured JDK list (oldest first; the last entry is used for
    /// version resolution).
    pub fn new(ctx: ProvisionerContext<'a>, jdks: Vec<JdkVersion>) -> Self {
        Self {
            provisioner: JdkProvisioner::new(ctx),
            jdks,
        }
    }

    /// Run a Maven goal in `workspace` with `version` activated.
    fn mvn(
        &self,
        version: &JdkVersion,
        goal: &str,
        workspace: &Path,
        timeout: Duration,
    ) -> Result<CommandResult> {
        let command = format!("{SDKMAN_INIT} && sdk use java {version} && mvn {goal}");
        let options = CommandOptions {
            cwd: Some(workspace.to_path_buf()),
            timeout: Some(timeout),
            ..Default::default()
        };
        shell::execute(&command, &options)
    }

    fn run_compile(&self, version: &JdkVersion, package: Option<&MavenPackage>) -> Result<bool> {
        let release = version
            .release_number()
            .ok_or_else(|| JdkspanError::MalformedVersion {
                version: version.to_string(),
            })?;

        let workspace = ProbeWorkspace::create()?;
        workspace.write_pom(package, release)?;
        workspace.write_entrypoint()?;

        let result = self.mvn(version, "compile", workspace.path(), COMPILE_TIMEOUT)?;
        if result.timed_out {
            tracing::warn!("mvn compile timed out under JDK {version}");
        }
        Ok(result.success)
    }
}

impl ProbeHost for MavenProbe<'_> {
    fn provision(&mut self, version: &JdkVersion) -> bool {
        self.provisioner.ensure_installed(version)
    }

    fn compile_probe(&mut self, version: &JdkVersion, package: Option<&MavenPackage>) -> bool {
        if !self.provisioner.ensure_installed(version) {
            return false;
        }

        match self.run_compile(version, package) {
            Ok(compiled) => compiled,
            Err(e) => {
                tracing::debug!("compile probe under JDK {version} errored: {e}");
                false
            }
        }
    }

    fn resolve_version(&mut self, package: &MavenPackage) -> Result<Option<String>> {
        let Some(newest) = self.jdks.last().cloned() else {
            return Ok(None);
        };

        // Resolution is meaningless without a working toolchain, so unlike a
        // compile probe this failure is surfaced.
        if !self.provisioner.ensure_installed(&newest) {
            return Err(JdkspanError::ProvisionFailed {
                version: newest.to_string(),
            });
        }

        let release = newest
            .release_number()
            .ok_or_else(|| JdkspanError::MalformedVersion {
                version: newest.to_string(),
            })?;

        let workspace = ProbeWorkspace::create()?;
        workspace.write_pom(Some(package), release)?;

        let resolve = self.mvn(
            &newest,
            "dependency:resolve",
            workspace.path(),
            RESOLVE_TIMEOUT,
        )?;
        if !resolve.success {
            return Ok(None);
        }

        let tree = self.mvn(
            &newest,
            "dependency:tree",
            workspace.path(),
            RESOLVE_TIMEOUT,
        )?;
        if !tree.success {
            return Ok(None);
        }

        Ok(inspector::extract_resolved_version(&tree.stdout, package))
    }
}
