//! Type expression rendering via the Emit trait.
//!
//! Rendering is total: every expression produces some string, including
//! references to names that exist nowhere in the catalog. Resolution is
//! the downstream type checker's problem, not the emitter's.

use crate::catalog::TypeExpr;

/// The dictionary-like response base. A bound reference to this name is
/// rendered as a plain mapping over its closed generics instead of a
/// named reference, since no standalone declaration is ever emitted for it.
pub const DICTIONARY_RESPONSE_BASE: &str = "DictionaryResponseBase";

/// Trait for rendering catalog nodes to their TypeScript representation.
pub trait Emit {
    /// Convert the node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for TypeExpr {
    fn emit(&self) -> String {
        match self {
            TypeExpr::ArrayOf { of } => {
                let inner = of.emit();
                // Union element types need parentheses
                if matches!(**of, TypeExpr::UnionOf { .. }) {
                    format!("({inner})[]")
                } else {
                    format!("{inner}[]")
                }
            }
            TypeExpr::Dictionary { key, value } => {
                format!("Record<{}, {}>", key.emit(), value.emit())
            }
            TypeExpr::SingleKeyDictionary { value } => {
                format!("Record<string, {}>", value.emit())
            }
            TypeExpr::UnionOf { items } => items
                .iter()
                .map(Emit::emit)
                .collect::<Vec<_>>()
                .join(" | "),
            TypeExpr::Implements {
                name,
                closed_generics,
            } => {
                if name == DICTIONARY_RESPONSE_BASE {
                    format!("Record<{}>", render_generics(closed_generics))
                } else if closed_generics.len() > 1 {
                    format!("{}<{}>", name, render_generics(closed_generics))
                } else {
                    // A single bound generic falls back to the bare name;
                    // the target declarations are not specialized per-use.
                    name.clone()
                }
            }
            TypeExpr::Reference {
                name,
                closed_generics,
            } => {
                if closed_generics.is_empty() {
                    name.clone()
                } else {
                    format!("{}<{}>", name, render_generics(closed_generics))
                }
            }
        }
    }
}

fn render_generics(generics: &[TypeExpr]) -> String {
    generics
        .iter()
        .map(Emit::emit)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn reference(name: &str) -> TypeExpr {
        TypeExpr::Reference {
            name: name.to_string(),
            closed_generics: Vec::new(),
        }
    }

    #[test]
    fn test_emit_array() {
        let ty = TypeExpr::ArrayOf {
            of: Box::new(reference("Id")),
        };
        assert_eq!(ty.emit(), "Id[]");
    }

    #[test]
    fn test_emit_union_array() {
        // (A | B)[] - union inside array needs parens
        let ty = TypeExpr::ArrayOf {
            of: Box::new(TypeExpr::UnionOf {
                items: vec![reference("A"), reference("B")],
            }),
        };
        assert_eq!(ty.emit(), "(A | B)[]");
    }

    #[test]
    fn test_emit_dictionary() {
        let ty = TypeExpr::Dictionary {
            key: Box::new(reference("IndexName")),
            value: Box::new(reference("IndexState")),
        };
        assert_eq!(ty.emit(), "Record<IndexName, IndexState>");
    }

    #[test]
    fn test_emit_single_key_dictionary() {
        let ty = TypeExpr::SingleKeyDictionary {
            value: Box::new(reference("FieldMapping")),
        };
        assert_eq!(ty.emit(), "Record<string, FieldMapping>");
    }

    #[test]
    fn test_emit_union_preserves_order() {
        let ty = TypeExpr::UnionOf {
            items: vec![reference("B"), reference("A")],
        };
        assert_eq!(ty.emit(), "B | A");
    }

    #[test]
    fn test_emit_array_of_dictionary() {
        let ty = TypeExpr::ArrayOf {
            of: Box::new(TypeExpr::Dictionary {
                key: Box::new(reference("K")),
                value: Box::new(reference("V")),
            }),
        };
        assert_eq!(ty.emit(), "Record<K, V>[]");
    }

    #[test]
    fn test_emit_implements_dictionary_response_base() {
        let ty = TypeExpr::Implements {
            name: DICTIONARY_RESPONSE_BASE.to_string(),
            closed_generics: vec![reference("IndexName"), reference("IndexStats")],
        };
        assert_eq!(ty.emit(), "Record<IndexName, IndexStats>");
    }

    #[test]
    fn test_emit_implements_arity() {
        // Two or more bound generics render parameterized
        let ty = TypeExpr::Implements {
            name: "ResponseBase".to_string(),
            closed_generics: vec![reference("TDocument"), reference("TShape")],
        };
        assert_eq!(ty.emit(), "ResponseBase<TDocument, TShape>");

        // Exactly one bound generic falls back to the bare name
        let ty = TypeExpr::Implements {
            name: "ResponseBase".to_string(),
            closed_generics: vec![reference("TDocument")],
        };
        assert_eq!(ty.emit(), "ResponseBase");
    }

    #[test]
    fn test_emit_reference() {
        assert_eq!(reference("QueryContainer").emit(), "QueryContainer");

        let ty = TypeExpr::Reference {
            name: "SearchResponse".to_string(),
            closed_generics: vec![reference("TDocument")],
        };
        assert_eq!(ty.emit(), "SearchResponse<TDocument>");
    }

    #[test]
    fn test_emit_dangling_reference_renders_as_is() {
        assert_eq!(reference("NoSuchType").emit(), "NoSuchType");
    }
}
