//! Ephemeral Maven project directories.
//!
//! Each probe gets a fresh, exclusively-owned directory holding a generated
//! `pom.xml` and (for compile probes) an empty `Main.java`. The directory is
//! removed when the workspace is dropped, on every exit path; cleanup never
//! raises, and individual files that refuse to go are left behind rather
//! than failing the probe.

use crate::config::MavenPackage;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// An exclusively-owned throwaway project directory.
#[derive(Debug)]
pub struct ProbeWorkspace {
    root: PathBuf,
}

impl ProbeWorkspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn create() -> Result<Self> {
        let root = tempfile::Builder::new().prefix("jdkspan-").tempdir()?.keep();
        Ok(Self { root })
    }

    /// Workspace root, used as the working directory for Maven.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write the project's `pom.xml`: fixed `test:test:1.0-SNAPSHOT`
    /// identity, compiler source/target pinned to `release`, and at most one
    /// dependency.
    pub fn write_pom(&self, package: Option<&MavenPackage>, release: u32) -> Result<()> {
        let mut pom = String::new();
        pom.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        pom.push_str("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n");
        pom.push_str("         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
        pom.push_str("         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0\n");
        pom.push_str("         http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n");
        pom.push_str("    <modelVersion>4.0.0</modelVersion>\n");
        pom.push_str("    <groupId>test</groupId>\n");
        pom.push_str("    <artifactId>test</artifactId>\n");
        pom.push_str("    <version>1.0-SNAPSHOT</version>\n");
        pom.push_str("    <properties>\n");
        pom.push_str(&format!(
            "        <maven.compiler.source>{release}</maven.compiler.source>\n"
        ));
        pom.push_str(&format!(
            "        <maven.compiler.target>{release}</maven.compiler.target>\n"
        ));
        pom.push_str("        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>\n");
        pom.push_str("    </properties>\n");

        if let Some(pkg) = package {
            pom.push_str("    <dependencies>\n");
            pom.push_str("        <dependency>\n");
            pom.push_str(&format!("            <groupId>{}</groupId>\n", pkg.group_id));
            pom.push_str(&format!(
                "            <artifactId>{}</artifactId>\n",
                pkg.artifact_id
            ));
            pom.push_str(&format!(
                "            <version>{}</version>\n",
                pkg.version_range
            ));
            pom.push_str("        </dependency>\n");
            pom.push_str("    </dependencies>\n");
        }

        pom.push_str("</project>\n");

        fs::write(self.root.join("pom.xml"), pom)?;
        Ok(())
    }

    /// Write the dependency-agnostic entry point. The stub is identical with
    /// or without a package under test: the experiment measures resolution
    /// and toolchain-level compatibility, not API usage.
    pub fn write_entrypoint(&self) -> Result<()> {
        let src_dir = self.root.join("src").join("main").join("java");
        fs::create_dir_all(&src_dir)?;
        fs::write(
            src_dir.join("Main.java"),
            "public class Main { public static void main(String[] args) {} }\n",
        )?;
        Ok(())
    }
}

impl Drop for ProbeWorkspace {
    fn drop(&mut self) {
        remove_tree_best_effort(&self.root);
    }
}

/// Recursive delete that swallows individual failures. A path that can't be
/// removed is skipped, not fatal.
fn remove_tree_best_effort(root: &Path) {
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                remove_tree_best_effort(&path);
            } else {
                let _ = fs::remove_file(&path);
            }
        }
    }
    let _ = fs::remove_dir(root);
}
