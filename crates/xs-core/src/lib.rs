//! # xs-core
//!
//! Shared types for the Xishui UI auto-import toolchain.
//!
//! This crate holds the types that cross the boundary between the host build
//! tool and a resolver implementation: the [`ImportResolver`] trait the
//! scanner drives, the [`ResolvedImport`] descriptor a resolver produces, and
//! semantic version handling. It has no dependency on any resolver crate,
//! so hosts and resolvers can depend on it independently.

pub mod version;

pub use version::{Version, VersionError};

use std::borrow::Cow;

use async_trait::async_trait;

/// Stylesheet modules to import purely for their side effects.
///
/// A side-effect import registers or loads stylesheet content; nothing is
/// imported by name. When more than one path is produced, the order is load
/// order and must be preserved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffects {
    /// A single stylesheet module.
    Single(String),
    /// Stylesheet modules that must be imported in the given order.
    Ordered(Vec<String>),
}

impl SideEffects {
    /// The side-effect module paths, in import order.
    pub fn paths(&self) -> &[String] {
        match self {
            Self::Single(path) => std::slice::from_ref(path),
            Self::Ordered(paths) => paths,
        }
    }
}

/// The import a resolver produced for one identifier.
///
/// Produced fresh per call; a descriptor has no identity beyond the call that
/// created it and is never cached by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    /// Name to import (the identifier itself for components, the library's
    /// export name for directives).
    pub name: String,
    /// Module path the name is imported from.
    pub import_source: String,
    /// Stylesheet modules to import alongside, if any.
    pub side_effects: Option<SideEffects>,
}

/// Per-identifier resolution seam between the host scanner and a resolver.
///
/// The scanner calls [`resolve`](ImportResolver::resolve) once per candidate
/// identifier discovered in source. `None` is the expected outcome for the
/// majority of identifiers and is not an error; resolvers never raise to the
/// host.
#[async_trait]
pub trait ImportResolver: Send + Sync {
    /// Returns the resolver name for debugging and logging
    fn name(&self) -> Cow<'static, str>;

    /// Resolve one identifier to an import, or `None` if the identifier does
    /// not belong to this resolver's library.
    async fn resolve(&self, identifier: &str) -> Option<ResolvedImport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_side_effect_paths() {
        let effects = SideEffects::Single("xishui-ui/theme-chalk/el-button.css".to_string());
        assert_eq!(effects.paths(), ["xishui-ui/theme-chalk/el-button.css"]);
    }

    #[test]
    fn ordered_side_effect_paths_keep_order() {
        let effects = SideEffects::Ordered(vec![
            "xishui-ui/lib/theme-chalk/base.css".to_string(),
            "xishui-ui/lib/theme-chalk/xs-button.css".to_string(),
        ]);
        assert_eq!(effects.paths()[0], "xishui-ui/lib/theme-chalk/base.css");
        assert_eq!(effects.paths()[1], "xishui-ui/lib/theme-chalk/xs-button.css");
    }
}
