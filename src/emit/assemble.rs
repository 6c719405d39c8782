//! Catalog walking and output assembly.
//!
//! A single pass over the catalog in order: excluded base definitions are
//! skipped, everything else is dispatched to its emitter, and the
//! per-definition blocks are joined once and wrapped in one outer
//! namespace declaration.

use super::decl::emit_definition;
use super::{EXCLUDED_TYPES, EmitConfig};
use crate::catalog::Catalog;

/// Render the whole catalog into the final declaration-file text.
///
/// Output is deterministic for a given catalog and configuration; two
/// runs over unchanged input produce byte-identical text.
pub fn render_catalog(catalog: &Catalog, config: &EmitConfig) -> String {
    let declarations: Vec<String> = catalog
        .types
        .iter()
        .filter(|def| !EXCLUDED_TYPES.contains(&def.name()))
        .map(|def| emit_definition(def, config))
        .collect();

    let body = indent(&declarations.join("\n\n"), "  ");
    format!(
        "declare namespace {ns} {{\n{body}\n}}\nexport default {ns}\n",
        ns = config.namespace
    )
}

/// Prefix every non-empty line; separator blank lines stay empty.
fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
