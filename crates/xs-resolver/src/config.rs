//! Resolver configuration types
//!
//! [`ResolverConfig`] is the caller-facing surface: every field is optional
//! and can come from a manifest file (serde) or the builder methods.
//! [`ResolvedOptions`] is the effective configuration the engine works with,
//! computed once per resolver instance after the installed library version
//! has been probed.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;
use xs_core::version::PreReleaseId;
use xs_core::Version;

/// Version assumed when the installed package cannot be probed and the caller
/// supplied none.
pub(crate) const DEFAULT_VERSION: &str = "1.0.7-beta.10";

/// Components known to ship without a stylesheet; style resolution is always
/// suppressed for these.
const BUILTIN_NO_STYLE: &[&str] = &["XsFocusTrap"];

/// How component stylesheets are imported alongside components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleImport {
    /// Do not import styles.
    None,
    /// Import compiled CSS.
    #[default]
    Css,
    /// Import SASS sources.
    Sass,
}

/// Configuration for the Xishui UI resolver
///
/// # Example
///
/// ```rust
/// use xs_resolver::{ResolverConfig, StyleImport};
///
/// let config = ResolverConfig::new()
///     .with_import_style(StyleImport::Sass)
///     .with_ssr(true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Import style css or sass with components
    ///
    /// Defaults to css.
    #[serde(default)]
    pub import_style: StyleImport,

    /// Use the commonjs lib and source stylesheets for server-side rendering
    #[serde(default)]
    pub ssr: bool,

    /// Xishui UI version to load styles for
    ///
    /// Defaults to the installed version, probed from `node_modules`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Auto import for directives
    ///
    /// Defaults to true.
    #[serde(default = "default_directives")]
    pub directives: bool,

    /// Identifiers matching this pattern are never resolved
    ///
    /// The pattern is caller-compiled; the resolver does not validate rule
    /// syntax. Builder-only, not part of the serde surface.
    #[serde(skip)]
    pub exclude: Option<Regex>,

    /// Component names that have no styles, so resolving their style files
    /// should be prevented
    ///
    /// Merged with the built-in no-style set.
    #[serde(default)]
    pub no_style_components: Vec<String>,
}

fn default_directives() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            import_style: StyleImport::Css,
            ssr: false,
            version: None,
            directives: true,
            exclude: None,
            no_style_components: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how stylesheets are imported alongside components
    pub fn with_import_style(mut self, style: StyleImport) -> Self {
        self.import_style = style;
        self
    }

    /// Target server-side rendering output
    pub fn with_ssr(mut self, ssr: bool) -> Self {
        self.ssr = ssr;
        self
    }

    /// Pin the library version instead of probing the installed package
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Enable or disable directive resolution
    pub fn with_directives(mut self, directives: bool) -> Self {
        self.directives = directives;
        self
    }

    /// Exclude identifiers matching the pattern from resolution
    pub fn with_exclude(mut self, rule: Regex) -> Self {
        self.exclude = Some(rule);
        self
    }

    /// Add a component name whose style resolution is suppressed
    pub fn with_no_style_component(mut self, name: impl Into<String>) -> Self {
        self.no_style_components.push(name.into());
        self
    }
}

/// Effective configuration the engine resolves against.
///
/// Immutable once computed; computed at most once per resolver instance.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub import_style: StyleImport,
    pub ssr: bool,
    pub version: Version,
    pub directives: bool,
    pub exclude: Option<Regex>,
    pub no_style: FxHashSet<String>,
}

impl ResolvedOptions {
    /// Merge caller configuration with the probed version and the built-in
    /// no-style set.
    pub(crate) fn from_config(config: &ResolverConfig, probed_version: &str) -> Self {
        let raw = config.version.as_deref().unwrap_or(probed_version);
        let version = raw.parse::<Version>().unwrap_or_else(|err| {
            let fallback = fallback_version();
            warn!(
                "[xs-resolver] cannot parse xishui-ui version {raw:?} ({err}), assuming {fallback}"
            );
            fallback
        });

        let no_style = BUILTIN_NO_STYLE
            .iter()
            .map(|name| (*name).to_string())
            .chain(config.no_style_components.iter().cloned())
            .collect();

        Self {
            import_style: config.import_style,
            ssr: config.ssr,
            version,
            directives: config.directives,
            exclude: config.exclude.clone(),
            no_style,
        }
    }

    /// A copy of these options with style imports forced off, used for
    /// identifiers in the no-style set.
    pub(crate) fn without_styles(&self) -> Self {
        Self {
            import_style: StyleImport::None,
            ..self.clone()
        }
    }

    pub(crate) fn is_excluded(&self, identifier: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|rule| rule.is_match(identifier))
    }
}

/// The built-in fallback, constructed directly so an unparseable caller
/// version can never leave the engine without a usable one.
fn fallback_version() -> Version {
    Version {
        major: 1,
        minor: 0,
        patch: 7,
        pre: vec![PreReleaseId::Alpha("beta".to_string()), PreReleaseId::Num(10)],
    }
}
