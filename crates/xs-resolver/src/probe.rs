//! Installed-package version probing.
//!
//! The resolver gates behavior on the installed xishui-ui release, so the
//! first resolution call probes `node_modules` for the library's
//! `package.json`. Probing is best-effort and never fails: a missing install,
//! an unreadable file, or a malformed manifest all fall back to the supplied
//! default, silently degrading to default-version semantics instead of
//! halting the build.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

/// npm package the resolver targets.
pub(crate) const PACKAGE_NAME: &str = "xishui-ui";

/// The dependency-related subset of `package.json` the probe cares about.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Resolve the installed library version.
///
/// Checks `node_modules/xishui-ui/package.json` in the project root and then
/// each ancestor directory, since package managers hoist dependencies into
/// parent workspaces.
pub(crate) async fn installed_version(project_root: &Path, fallback: &str) -> String {
    for dir in project_root.ancestors() {
        let manifest = dir
            .join("node_modules")
            .join(PACKAGE_NAME)
            .join("package.json");
        if let Some(version) = manifest_version(&manifest).await {
            debug!(
                "[xs-resolver] found {PACKAGE_NAME}@{version} at {}",
                manifest.display()
            );
            return version;
        }
    }

    warn!(
        "[xs-resolver] {PACKAGE_NAME} not found under {}, assuming {fallback}",
        project_root.display()
    );
    fallback.to_string()
}

async fn manifest_version(path: &Path) -> Option<String> {
    let content = tokio::fs::read_to_string(path).await.ok()?;
    let manifest: PackageManifest = serde_json::from_str(&content).ok()?;
    manifest.version
}
