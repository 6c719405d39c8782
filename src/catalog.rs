//! Type catalog structs for serde deserialization.
//!
//! This module defines the domain model produced by the specification
//! loader: an ordered collection of type definitions describing a REST
//! API's request/response shapes, ready for declaration emission.

use serde::Deserialize;

/// The full ordered collection of type definitions processed in one
/// generation run. Catalog order determines output order.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// A named, top-level entity in the domain model.
///
/// The `kind` tag is closed: a catalog entry with an unrecognized kind
/// fails deserialization instead of being silently skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeDef {
    /// A named alias of the primitive string type.
    StringAlias { name: String },
    /// A named alias of the primitive number type.
    NumberAlias { name: String },
    /// A named alias of a composite type expression.
    UnionAlias { name: String, wraps: TypeExpr },
    /// A closed set of named string-valued constants.
    Enum {
        name: String,
        #[serde(default)]
        members: Vec<EnumMember>,
    },
    /// An object shape, optionally generic, optionally extending other shapes.
    Interface {
        name: String,
        #[serde(default)]
        open_generics: Vec<String>,
        #[serde(default)]
        inherits: Vec<TypeExpr>,
        #[serde(default)]
        properties: Vec<Property>,
    },
    /// An interface specialized to represent an API operation's combined
    /// path/query/body parameters, merged into one flat declaration.
    RequestInterface {
        name: String,
        #[serde(default)]
        open_generics: Vec<String>,
        #[serde(default)]
        inherits: Vec<TypeExpr>,
        #[serde(default)]
        path: Vec<Property>,
        #[serde(default)]
        query: Vec<Property>,
        #[serde(default)]
        body: Option<RequestBody>,
    },
}

impl TypeDef {
    /// The definition's declared name.
    pub fn name(&self) -> &str {
        match self {
            TypeDef::StringAlias { name, .. }
            | TypeDef::NumberAlias { name, .. }
            | TypeDef::UnionAlias { name, .. }
            | TypeDef::Enum { name, .. }
            | TypeDef::Interface { name, .. }
            | TypeDef::RequestInterface { name, .. } => name,
        }
    }
}

/// A single enum constant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub name: String,
    pub string_representation: String,
}

/// A named member of an interface or request body.
///
/// A property with an absent type is omitted from output entirely; the
/// loader leaves types unset when it cannot resolve them, by contract.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeExpr>,
    #[serde(default)]
    pub nullable: bool,
}

/// A request body is either a list of inline properties or a single
/// type expression referenced as a whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    Properties(Vec<Property>),
    Value(TypeExpr),
}

/// A (possibly composite) reference to a type, used as a property's type,
/// an alias's target, or an inheritance ancestor.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeExpr {
    /// Ordered sequence: `T[]`.
    ArrayOf { of: Box<TypeExpr> },
    /// Mapping with an explicit key type: `Record<K, V>`.
    Dictionary {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// Mapping with an implicit string key: `Record<string, V>`.
    SingleKeyDictionary { value: Box<TypeExpr> },
    /// Alternation among the listed items, rendered in listed order.
    UnionOf { items: Vec<TypeExpr> },
    /// A reference to another definition with generic parameters bound
    /// to concrete arguments.
    Implements {
        name: String,
        #[serde(default)]
        closed_generics: Vec<TypeExpr>,
    },
    /// A direct reference to a named type, optionally with bound generics.
    Reference {
        name: String,
        #[serde(default)]
        closed_generics: Vec<TypeExpr>,
    },
}

impl TypeExpr {
    /// The referenced definition name, when the expression is a direct
    /// reference rather than a structural composite.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Implements { name, .. } | TypeExpr::Reference { name, .. } => Some(name),
            TypeExpr::ArrayOf { .. }
            | TypeExpr::Dictionary { .. }
            | TypeExpr::SingleKeyDictionary { .. }
            | TypeExpr::UnionOf { .. } => None,
        }
    }
}

impl Catalog {
    /// Parse a type catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse type catalog: {e}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"{
            "types": [
                { "kind": "stringAlias", "name": "Id" },
                {
                    "kind": "interface",
                    "name": "Box",
                    "openGenerics": ["T"],
                    "properties": [
                        {
                            "name": "items",
                            "type": { "kind": "arrayOf", "of": { "kind": "reference", "name": "T" } },
                            "nullable": false
                        }
                    ]
                }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.types.len(), 2);
        assert_eq!(catalog.types[0].name(), "Id");
        let TypeDef::Interface {
            open_generics,
            properties,
            ..
        } = &catalog.types[1]
        else {
            panic!("expected interface");
        };
        assert_eq!(open_generics, &["T".to_string()]);
        assert!(properties[0].ty.is_some());
        assert!(!properties[0].nullable);
    }

    #[test]
    fn test_parse_body_forms() {
        let as_properties = r#"{
            "kind": "requestInterface",
            "name": "SearchRequest",
            "body": [ { "name": "query", "nullable": true } ]
        }"#;
        let def: TypeDef = serde_json::from_str(as_properties).unwrap();
        let TypeDef::RequestInterface {
            body: Some(RequestBody::Properties(props)),
            ..
        } = def
        else {
            panic!("expected property-list body");
        };
        assert_eq!(props[0].name, "query");
        assert!(props[0].ty.is_none());

        let as_value = r#"{
            "kind": "requestInterface",
            "name": "BulkRequest",
            "body": { "kind": "reference", "name": "BulkBody" }
        }"#;
        let def: TypeDef = serde_json::from_str(as_value).unwrap();
        assert!(matches!(
            def,
            TypeDef::RequestInterface {
                body: Some(RequestBody::Value(TypeExpr::Reference { .. })),
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "types": [ { "kind": "moduleAlias", "name": "X" } ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.contains("Failed to parse type catalog"));
    }
}
