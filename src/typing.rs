//! Connection type compatibility rules and the display palette.

use crate::parse::types::TypeDescriptor;

/// Whether a producer output may legally feed a consumer input.
///
/// Rules, in order:
/// - `any` on either side is always connectable.
/// - Strict mode rejects an optional producer feeding a required consumer.
/// - Equal type names are connectable; under strict mode the type
///   arguments must also match pairwise.
/// - Otherwise, non-strict mode allows a fixed set of widenings
///   (`integer` → `number`, and scalar → `string`); strict mode allows
///   nothing further.
///
/// Pure function, no side effects; called once per edge per pass.
pub fn is_connectable(producer: &TypeDescriptor, consumer: &TypeDescriptor, strict: bool) -> bool {
    if producer.is_any() || consumer.is_any() {
        return true;
    }
    if strict && producer.optional && !consumer.optional {
        return false;
    }
    if producer.name == consumer.name {
        if strict {
            return type_args_match(producer, consumer);
        }
        return true;
    }
    if !strict {
        return widens_to(&producer.name, &consumer.name);
    }
    false
}

fn type_args_match(producer: &TypeDescriptor, consumer: &TypeDescriptor) -> bool {
    if producer.type_args.len() != consumer.type_args.len() {
        return false;
    }
    producer
        .type_args
        .iter()
        .zip(&consumer.type_args)
        .all(|(p, c)| is_connectable(p, c, true))
}

/// Lossless coercions the editor applies implicitly in non-strict mode.
fn widens_to(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        ("integer", "number")
            | ("integer", "string")
            | ("number", "string")
            | ("boolean", "string")
    )
}

// =============================================================================
// DISPLAY PALETTE
// =============================================================================

/// Wire color for a type slug, used by the editor's connection rendering.
pub fn display_color(slug: &str) -> &'static str {
    match slug {
        "string" => "#22c55e",
        "number" => "#3b82f6",
        "integer" => "#6366f1",
        "boolean" => "#f59e0b",
        "object" => "#a855f7",
        "array" => "#ec4899",
        "stream" => "#06b6d4",
        _ => "#9ca3af",
    }
}

/// Human-readable label for a type slug.
pub fn display_label(slug: &str) -> String {
    match slug {
        "any" => "Any".to_string(),
        "string" => "Text".to_string(),
        "number" => "Number".to_string(),
        "integer" => "Integer".to_string(),
        "boolean" => "Boolean".to_string(),
        "object" => "Object".to_string(),
        "array" => "List".to_string(),
        "stream" => "Stream".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str) -> TypeDescriptor {
        TypeDescriptor::named(name)
    }

    #[test]
    fn any_is_connectable_on_either_side() {
        assert!(is_connectable(&ty("any"), &ty("string"), true));
        assert!(is_connectable(&ty("string"), &ty("any"), true));
        assert!(is_connectable(&ty("any"), &ty("any"), true));
    }

    #[test]
    fn equal_names_are_connectable() {
        assert!(is_connectable(&ty("string"), &ty("string"), true));
        assert!(is_connectable(&ty("object"), &ty("object"), false));
    }

    #[test]
    fn mismatched_names_are_rejected_under_strict() {
        assert!(!is_connectable(&ty("string"), &ty("number"), true));
    }

    #[test]
    fn widening_applies_only_in_non_strict_mode() {
        assert!(is_connectable(&ty("integer"), &ty("number"), false));
        assert!(is_connectable(&ty("number"), &ty("string"), false));
        assert!(!is_connectable(&ty("integer"), &ty("number"), true));
        assert!(!is_connectable(&ty("string"), &ty("integer"), false));
    }

    #[test]
    fn strict_mode_checks_type_args_pairwise() {
        let stream_of_string = TypeDescriptor {
            name: "stream".into(),
            optional: false,
            type_args: vec![ty("string")],
        };
        let stream_of_number = TypeDescriptor {
            name: "stream".into(),
            optional: false,
            type_args: vec![ty("number")],
        };
        let stream_of_any = TypeDescriptor {
            name: "stream".into(),
            optional: false,
            type_args: vec![ty("any")],
        };
        assert!(is_connectable(&stream_of_string, &stream_of_string, true));
        assert!(!is_connectable(&stream_of_string, &stream_of_number, true));
        assert!(is_connectable(&stream_of_string, &stream_of_any, true));
        // Non-strict mode only compares the outer name.
        assert!(is_connectable(&stream_of_string, &stream_of_number, false));
    }

    #[test]
    fn strict_mode_rejects_optional_into_required() {
        let optional_string = TypeDescriptor {
            name: "string".into(),
            optional: true,
            type_args: vec![],
        };
        assert!(!is_connectable(&optional_string, &ty("string"), true));
        assert!(is_connectable(&optional_string, &ty("string"), false));
    }

    #[test]
    fn unknown_slug_gets_the_fallback_palette_entry() {
        assert_eq!(display_color("embedding"), "#9ca3af");
        assert_eq!(display_label("embedding"), "embedding");
        assert_eq!(display_label("string"), "Text");
    }
}
