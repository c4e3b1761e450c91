//! Style side-effect policy.
//!
//! Given a resolved entity's hyphenated name and the effective options, this
//! module computes the stylesheet modules the host must import as side
//! effects. The shape of the result depends only on `(import_style, ssr)` and
//! the layout the installed release publishes its assets under.

use xs_core::SideEffects;

use crate::config::{ResolvedOptions, StyleImport};

const THEME_FOLDER: &str = "xishui-ui/theme-chalk";
const ES_COMPONENTS_FOLDER: &str = "xishui-ui/es/packages/components";

/// Module layout a library release publishes its stylesheet assets under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StyleLayout {
    /// The `es`/`theme-chalk` layout of current releases.
    Modern,
    /// The older `lib`/`packages` layout.
    ///
    /// Deprecated; kept for releases that still ship it. No version gate
    /// selects it today.
    Legacy,
}

/// Compute the side-effect imports for one entity, or `None` when styles are
/// off.
pub(crate) fn side_effects(
    layout: StyleLayout,
    style_name: &str,
    options: &ResolvedOptions,
) -> Option<SideEffects> {
    match layout {
        StyleLayout::Modern => modern_side_effects(style_name, options),
        StyleLayout::Legacy => legacy_side_effects(style_name, options),
    }
}

fn modern_side_effects(name: &str, options: &ResolvedOptions) -> Option<SideEffects> {
    let path = match (options.import_style, options.ssr) {
        (StyleImport::None, _) => return None,
        (StyleImport::Sass, true) => format!("{THEME_FOLDER}/src/{name}.scss"),
        (StyleImport::Sass, false) => format!("{ES_COMPONENTS_FOLDER}/{name}/style/index"),
        (StyleImport::Css, true) => format!("{THEME_FOLDER}/el-{name}.css"),
        (StyleImport::Css, false) => format!("{ES_COMPONENTS_FOLDER}/{name}/style/css"),
    };
    Some(SideEffects::Single(path))
}

/// The legacy layout has no per-component entry stylesheet: the shared base
/// sheet defines the custom properties the component sheet consumes, so it
/// must be imported first.
fn legacy_side_effects(name: &str, options: &ResolvedOptions) -> Option<SideEffects> {
    let paths = match options.import_style {
        StyleImport::None => return None,
        StyleImport::Sass => vec![
            "xishui-ui/packages/theme-chalk/src/base.scss".to_string(),
            format!("xishui-ui/packages/theme-chalk/src/{name}.scss"),
        ],
        StyleImport::Css => vec![
            "xishui-ui/lib/theme-chalk/base.css".to_string(),
            format!("xishui-ui/lib/theme-chalk/xs-{name}.css"),
        ],
    };
    Some(SideEffects::Ordered(paths))
}
