//! Per-definition declaration emitters.
//!
//! Each definition kind has exactly one rendering rule, producing one
//! declaration block without a trailing newline. Blocks are separated and
//! namespace-wrapped by the assembler.

use tracing::debug;

use super::utils::{escape_ts_string, quote_if_needed};
use super::{EXCLUDED_TYPES, Emit, EmitConfig, EnumStyle};
use crate::catalog::{EnumMember, Property, RequestBody, TypeDef, TypeExpr};

/// Request/response surfaces covered by the stability contract. Everything
/// else named `*Request`/`*Response` is annotated as unstable.
const STABLE_TYPES: &[&str] = &[
    "SearchRequest",
    "SearchResponse",
    "GetRequest",
    "GetResponse",
    "IndexRequest",
    "IndexResponse",
    "DeleteRequest",
    "DeleteResponse",
    "BulkRequest",
    "BulkResponse",
];

/// Render a single type definition into one declaration block.
pub fn emit_definition(def: &TypeDef, config: &EmitConfig) -> String {
    let decl = match def {
        TypeDef::StringAlias { name } => format!("export type {name} = string;"),
        TypeDef::NumberAlias { name } => format!("export type {name} = number;"),
        TypeDef::UnionAlias { name, wraps } => {
            format!("export type {name} = {};", wraps.emit())
        }
        TypeDef::Enum { name, members } => emit_enum(name, members, config.enum_style),
        TypeDef::Interface {
            name,
            open_generics,
            inherits,
            properties,
        } => emit_interface(name, open_generics, inherits, properties),
        TypeDef::RequestInterface {
            name,
            open_generics,
            inherits,
            path,
            query,
            body,
        } => emit_request_interface(name, open_generics, inherits, path, query, body.as_ref()),
    };

    match stability_annotation(def.name()) {
        Some(annotation) => format!("{annotation}\n{decl}"),
        None => decl,
    }
}

/// Documentation marker derived purely from the definition's name.
fn stability_annotation(name: &str) -> Option<&'static str> {
    if STABLE_TYPES.contains(&name) {
        Some("/** @stability STABLE */")
    } else if name.ends_with("Request") || name.ends_with("Response") {
        Some("/** @stability UNSTABLE */")
    } else {
        None
    }
}

fn emit_enum(name: &str, members: &[EnumMember], style: EnumStyle) -> String {
    match style {
        EnumStyle::Declaration => {
            let mut output = format!("export enum {name} {{\n");
            for member in members {
                output.push_str(&format!(
                    "  {} = \"{}\",\n",
                    quote_if_needed(&member.name),
                    escape_ts_string(&member.string_representation)
                ));
            }
            output.push('}');
            output
        }
        EnumStyle::LiteralUnion => {
            let variants = members
                .iter()
                .map(|m| literal_union_variant(&m.string_representation))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("export type {name} = {variants};")
        }
    }
}

/// Quote an enum value as a string literal, except for the boolean
/// literals `true` and `false`, which pass through unquoted.
fn literal_union_variant(value: &str) -> String {
    if value == "true" || value == "false" {
        value.to_string()
    } else {
        format!("\"{}\"", escape_ts_string(value))
    }
}

fn emit_interface(
    name: &str,
    open_generics: &[String],
    inherits: &[TypeExpr],
    properties: &[Property],
) -> String {
    let mut output = interface_header(name, open_generics, inherits);
    for prop in properties {
        if let Some(line) = property_line(prop, "  ") {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output.push('}');
    output
}

fn emit_request_interface(
    name: &str,
    open_generics: &[String],
    inherits: &[TypeExpr],
    path: &[Property],
    query: &[Property],
    body: Option<&RequestBody>,
) -> String {
    let mut output = interface_header(name, open_generics, inherits);
    for prop in path.iter().chain(query) {
        if let Some(line) = property_line(prop, "  ") {
            output.push_str(&line);
            output.push('\n');
        }
    }
    if let Some(body) = body {
        output.push_str(&body_member(body));
        output.push('\n');
    }
    output.push('}');
    output
}

/// The request body merges into the flat declaration as one optional
/// member: a nested object when the loader inlined its properties, or a
/// plain reference when the body is a single type.
fn body_member(body: &RequestBody) -> String {
    match body {
        RequestBody::Properties(props) => {
            let lines: Vec<String> = props
                .iter()
                .filter_map(|p| property_line(p, "    "))
                .collect();
            if lines.is_empty() {
                "  body?: {};".to_string()
            } else {
                format!("  body?: {{\n{}\n  }};", lines.join("\n"))
            }
        }
        RequestBody::Value(expr) => format!("  body?: {};", expr.emit()),
    }
}

/// Header line of an interface block: `export interface Name<G> extends A, B {`.
///
/// The generic parameter list renders only when non-empty. An interface
/// whose only ancestor is an excluded base drops the extends clause
/// entirely, since no declaration exists to reference.
fn interface_header(name: &str, open_generics: &[String], inherits: &[TypeExpr]) -> String {
    let generics = if open_generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", open_generics.join(", "))
    };
    format!(
        "export interface {name}{generics}{} {{\n",
        inheritance_clause(inherits)
    )
}

fn inheritance_clause(inherits: &[TypeExpr]) -> String {
    if inherits.is_empty() {
        return String::new();
    }
    if inherits.len() == 1
        && inherits[0]
            .referenced_name()
            .is_some_and(|n| EXCLUDED_TYPES.contains(&n))
    {
        return String::new();
    }
    let ancestors = inherits
        .iter()
        .map(Emit::emit)
        .collect::<Vec<_>>()
        .join(", ");
    format!(" extends {ancestors}")
}

/// One member line, or None when the property's type was never resolved.
fn property_line(prop: &Property, indent: &str) -> Option<String> {
    let Some(ty) = prop.ty.as_ref() else {
        debug!(property = %prop.name, "Skipping property with unresolved type.");
        return None;
    };
    let optional = if prop.nullable { "?" } else { "" };
    Some(format!(
        "{indent}{}{}: {};",
        quote_if_needed(&prop.name),
        optional,
        ty.emit()
    ))
}
