//! Auto-import resolver for Xishui UI
//!
//! This crate decides, for each identifier a source file references, whether
//! it belongs to the Xishui UI component library and what to import for it:
//! the module path the name comes from plus any stylesheet modules that must
//! be imported as side effects. The host build tool discovers identifiers and
//! rewrites imports; this crate only answers the per-identifier question.
//!
//! ## Architecture
//!
//! ```text
//! identifier → options (probed once) → no-style forcing → exclusion filter
//!            → component match + version gate
//!            → directive match + version gate
//!            → import source + style side effects → ResolvedImport
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use xs_resolver::XishuiResolver;
//!
//! # async fn example() {
//! let resolver = XishuiResolver::new(PathBuf::from("."));
//! if let Some(import) = resolver.resolve("XsTableColumn").await {
//!     println!("import {} from {}", import.name, import.import_source);
//! }
//! # }
//! ```

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use xs_core::Version;

mod config;
mod matcher;
mod probe;
mod style;

pub use config::{ResolverConfig, StyleImport};
pub use matcher::{DirectiveEntry, DirectiveTable};
pub use xs_core::{ImportResolver, ResolvedImport, SideEffects};

use config::{DEFAULT_VERSION, ResolvedOptions};
use style::StyleLayout;

/// Library version components have been importable from.
const COMPONENTS_SINCE: &str = "1.0.7-beta.10";

/// Library version directives have been importable from.
const DIRECTIVES_SINCE: &str = "1.1.0-beta.1";

/// Layout gates, highest threshold first. A version satisfying no row does
/// not resolve; adding a threshold for a future layout change is one new row.
const COMPONENT_GATES: &[(&str, StyleLayout)] = &[(COMPONENTS_SINCE, StyleLayout::Modern)];
const DIRECTIVE_GATES: &[(&str, StyleLayout)] = &[(DIRECTIVES_SINCE, StyleLayout::Modern)];

/// Resolver that maps Xishui UI identifiers to their imports
///
/// One instance serves a whole build: the effective options (including the
/// probed library version) are computed once on first use, and every
/// subsequent call resolves against that immutable snapshot. Cloning shares
/// the snapshot.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use xs_resolver::{ResolverConfig, StyleImport, XishuiResolver};
///
/// let config = ResolverConfig::new().with_import_style(StyleImport::Sass);
/// let resolver = XishuiResolver::with_config(config, PathBuf::from("."));
/// ```
#[derive(Debug, Clone)]
pub struct XishuiResolver {
    /// Caller-supplied configuration
    config: ResolverConfig,

    /// Directives the library publishes, injectable per instance
    directives: DirectiveTable,

    /// Effective options, computed at most once
    /// Uses tokio::sync::OnceCell so concurrent first callers await the same
    /// in-flight probe
    options: Arc<tokio::sync::OnceCell<ResolvedOptions>>,

    /// Project root the installed package is probed from
    project_root: PathBuf,
}

impl XishuiResolver {
    /// Create a resolver with default configuration
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_config(ResolverConfig::default(), project_root)
    }

    /// Create a resolver with custom configuration
    pub fn with_config(config: ResolverConfig, project_root: PathBuf) -> Self {
        Self {
            config,
            directives: DirectiveTable::default(),
            options: Arc::new(tokio::sync::OnceCell::new()),
            project_root,
        }
    }

    /// Replace the directive table
    ///
    /// The table ships empty; hosts populate it as the library publishes
    /// directives.
    pub fn with_directive_table(mut self, directives: DirectiveTable) -> Self {
        self.directives = directives;
        self
    }

    /// Resolve one identifier, or `None` if nothing should be imported for it
    ///
    /// `None` covers every unmatched case (wrong naming convention, excluded,
    /// version below threshold, unknown directive) and is the expected
    /// outcome for most identifiers a build encounters.
    pub async fn resolve(&self, identifier: &str) -> Option<ResolvedImport> {
        let options = self.options().await;

        let resolved = if options.no_style.contains(identifier) {
            self.resolve_with(identifier, &options.without_styles())
        } else {
            self.resolve_with(identifier, options)
        };

        if let Some(import) = &resolved {
            debug!(
                "[xs-resolver] {identifier} -> {} from {}",
                import.name, import.import_source
            );
        }
        resolved
    }

    /// Get or compute the effective options
    ///
    /// The probe runs at most once per instance; calls racing the first
    /// computation await its result instead of probing again.
    async fn options(&self) -> &ResolvedOptions {
        self.options
            .get_or_init(|| async {
                let probed = probe::installed_version(&self.project_root, DEFAULT_VERSION).await;
                ResolvedOptions::from_config(&self.config, &probed)
            })
            .await
    }

    fn resolve_with(&self, identifier: &str, options: &ResolvedOptions) -> Option<ResolvedImport> {
        if options.is_excluded(identifier) {
            return None;
        }
        resolve_component(identifier, options)
            .or_else(|| resolve_directive(identifier, &self.directives, options))
    }
}

#[async_trait]
impl ImportResolver for XishuiResolver {
    /// Returns the resolver name for debugging and logging
    fn name(&self) -> Cow<'static, str> {
        "xishui-ui".into()
    }

    async fn resolve(&self, identifier: &str) -> Option<ResolvedImport> {
        XishuiResolver::resolve(self, identifier).await
    }
}

fn resolve_component(identifier: &str, options: &ResolvedOptions) -> Option<ResolvedImport> {
    let style_name = matcher::match_component(identifier)?;
    let layout = gate_layout(&options.version, COMPONENT_GATES)?;

    Some(ResolvedImport {
        name: identifier.to_string(),
        import_source: import_source(options.ssr),
        side_effects: style::side_effects(layout, &style_name, options),
    })
}

fn resolve_directive(
    identifier: &str,
    directives: &DirectiveTable,
    options: &ResolvedOptions,
) -> Option<ResolvedImport> {
    if !options.directives {
        return None;
    }
    let entry = matcher::match_directive(identifier, directives)?;
    let layout = gate_layout(&options.version, DIRECTIVE_GATES)?;

    Some(ResolvedImport {
        name: entry.import_name.clone(),
        import_source: import_source(options.ssr),
        side_effects: style::side_effects(layout, &entry.style_name, options),
    })
}

/// Pick the layout for the first gate the version satisfies.
fn gate_layout(version: &Version, gates: &[(&str, StyleLayout)]) -> Option<StyleLayout> {
    gates.iter().find_map(|(threshold, layout)| {
        let threshold: Version = threshold.parse().ok()?;
        (*version >= threshold).then_some(*layout)
    })
}

/// SSR builds import from the commonjs `lib` tree, everything else from `es`.
fn import_source(ssr: bool) -> String {
    format!("{}/{}", probe::PACKAGE_NAME, if ssr { "lib" } else { "es" })
}
