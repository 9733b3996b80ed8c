//! Wire-name resolution for fields and enum values.
//!
//! Precedence: explicit `Rename` → owning type's `RenameAll` convention →
//! source identifier unchanged.

use convert_case::{Case, Casing};
use genjson_ir::NamingConvention;

/// Separator between a scope and a name in qualified identifiers.
pub const SCOPE_SEPARATOR: &str = "::";

/// Resolve the wire name of a struct field.
pub fn resolve_field_name(
    raw: &str,
    rename: Option<&str>,
    convention: Option<NamingConvention>,
) -> String {
    if let Some(rename) = rename {
        return rename.to_string();
    }

    match convention {
        Some(convention) => convert(raw, convention),
        None => raw.to_string(),
    }
}

/// Resolve the wire name of an enum value. The scope qualifier of `raw`
/// (`EColor::Red` → `Red`) is dropped before any convention applies.
pub fn resolve_enum_value_name(
    raw: &str,
    rename: Option<&str>,
    convention: Option<NamingConvention>,
) -> String {
    resolve_field_name(strip_scope(raw), rename, convention)
}

/// Everything after the last `::`, or `raw` itself when unqualified.
pub fn strip_scope(raw: &str) -> &str {
    match raw.rfind(SCOPE_SEPARATOR) {
        Some(pos) => &raw[pos + SCOPE_SEPARATOR.len()..],
        None => raw,
    }
}

/// Apply a naming convention to an identifier. Word boundaries are the
/// `convert_case` defaults: `_`, `-`, space, lower→upper, letter↔digit and
/// the end of an acronym (`HTTPServer` → `HTTP`, `Server`).
pub fn convert(name: &str, convention: NamingConvention) -> String {
    let case = match convention {
        NamingConvention::CamelCase => Case::Camel,
        NamingConvention::KebabCase => Case::Kebab,
        NamingConvention::PascalCase => Case::Pascal,
        NamingConvention::SnakeCase => Case::Snake,
    };
    name.to_case(case)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [NamingConvention; 4] = [
        NamingConvention::CamelCase,
        NamingConvention::KebabCase,
        NamingConvention::PascalCase,
        NamingConvention::SnakeCase,
    ];

    #[test]
    fn conventions_on_pascal_identifier() {
        assert_eq!(convert("MyFieldName", NamingConvention::CamelCase), "myFieldName");
        assert_eq!(convert("MyFieldName", NamingConvention::KebabCase), "my-field-name");
        assert_eq!(convert("MyFieldName", NamingConvention::PascalCase), "MyFieldName");
        assert_eq!(convert("MyFieldName", NamingConvention::SnakeCase), "my_field_name");
    }

    #[test]
    fn conventions_on_other_inputs() {
        assert_eq!(convert("HTTPServer", NamingConvention::SnakeCase), "http_server");
        assert_eq!(convert("HTTPServer", NamingConvention::CamelCase), "httpServer");
        assert_eq!(convert("player_id", NamingConvention::PascalCase), "PlayerId");
        assert_eq!(convert("player_id", NamingConvention::CamelCase), "playerId");
        assert_eq!(convert("bIsActive", NamingConvention::KebabCase), "b-is-active");
        assert_eq!(convert("my-field-name", NamingConvention::PascalCase), "MyFieldName");
        assert_eq!(convert("X", NamingConvention::SnakeCase), "x");
        assert_eq!(convert("", NamingConvention::KebabCase), "");
    }

    #[test]
    fn conversion_is_stable() {
        for raw in ["MyFieldName", "HTTPServer", "bIsActive", "max_hp"] {
            for convention in ALL {
                let once = convert(raw, convention);
                assert_eq!(convert(&once, convention), once, "{raw} under {convention}");
            }
        }
    }

    #[test]
    fn conventions_agree_on_words() {
        // Converting between conventions never changes the word split.
        let snake = convert("MyFieldName", NamingConvention::SnakeCase);
        for convention in ALL {
            let via = convert(&convert("MyFieldName", convention), NamingConvention::SnakeCase);
            assert_eq!(via, snake);
        }
    }

    #[test]
    fn rename_wins_over_convention() {
        assert_eq!(
            resolve_field_name("MyField", Some("foo"), Some(NamingConvention::SnakeCase)),
            "foo"
        );
        assert_eq!(
            resolve_enum_value_name("EColor::Red", Some("rouge"), Some(NamingConvention::SnakeCase)),
            "rouge"
        );
    }

    #[test]
    fn field_without_rename() {
        assert_eq!(
            resolve_field_name("MyField", None, Some(NamingConvention::SnakeCase)),
            "my_field"
        );
        assert_eq!(resolve_field_name("MyField", None, None), "MyField");
    }

    #[test]
    fn enum_value_scope_is_stripped() {
        assert_eq!(resolve_enum_value_name("EColor::Red", None, None), "Red");
        assert_eq!(resolve_enum_value_name("Outer::EColor::DarkRed", None, None), "DarkRed");
        assert_eq!(
            resolve_enum_value_name("EColor::DarkRed", None, Some(NamingConvention::KebabCase)),
            "dark-red"
        );
        assert_eq!(resolve_enum_value_name("Unscoped", None, None), "Unscoped");
    }
}
