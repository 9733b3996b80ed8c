//! Struct serializer emitter.
//!
//! Emits a `GenJson::TSerializer<T>` specialization that writes the struct as
//! a JSON object, one key per field in declaration order.

use genjson_ir::keys;

use crate::naming::resolve_field_name;
use crate::serializer::{close_specialization, line, open_specialization, string_literal};
use crate::units::StructRecord;

/// Append the serializer specialization for `record` to `out`.
pub fn emit_struct(out: &mut String, record: &StructRecord<'_>) {
    let name = &record.decl.name;

    open_specialization(out, name);
    line(out, &format!("\tstatic bool Write(const {}& Instance, FJsonWriter& Writer) \\", name));
    line(out, "{ \\");
    line(out, "    Writer.StartObject(); \\");
    for field in &record.decl.fields {
        let key = resolve_field_name(&field.name, field.meta.get(keys::RENAME), record.rename_all);
        line(out, &format!("    Writer.Key({}); \\", string_literal(&key)));
        line(out, &format!("    GenJson::Write(Instance.{}, Writer); \\", field.name));
    }
    line(out, "    Writer.EndObject(); \\");
    line(out, "    return true; \\");
    line(out, "} \\");
    close_specialization(out);
}

/// The serializer specialization for `record` as a standalone string.
pub fn struct_serializer(record: &StructRecord<'_>) -> String {
    let mut out = String::new();
    emit_struct(&mut out, record);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use genjson_ir::{FieldDecl, MetaData, NamingConvention, StructDecl};

    fn keys_of(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|l| l.trim().strip_prefix("Writer.Key(TEXT(\""))
            .filter_map(|l| l.split('"').next())
            .collect()
    }

    #[test]
    fn point_with_rename_and_convention() {
        let decl = StructDecl::new("FPoint", "point")
            .field(FieldDecl::new("X").meta(MetaData::new().with(keys::RENAME, "x_coord")))
            .field(FieldDecl::new("Y"));
        let record = StructRecord {
            decl: &decl,
            rename_all: Some(NamingConvention::SnakeCase),
        };

        let expected = concat!(
            "template <> \\\n",
            "struct GenJson::TSerializer<::FPoint> \\\n",
            "{ \\\n",
            "\tstatic bool Write(const FPoint& Instance, FJsonWriter& Writer) \\\n",
            "{ \\\n",
            "    Writer.StartObject(); \\\n",
            "    Writer.Key(TEXT(\"x_coord\")); \\\n",
            "    GenJson::Write(Instance.X, Writer); \\\n",
            "    Writer.Key(TEXT(\"y\")); \\\n",
            "    GenJson::Write(Instance.Y, Writer); \\\n",
            "    Writer.EndObject(); \\\n",
            "    return true; \\\n",
            "} \\\n",
            "}; \\\n",
        );
        assert_eq!(struct_serializer(&record), expected);
    }

    #[test]
    fn field_order_is_declaration_order() {
        let decl = StructDecl::new("FOrder", "order")
            .field(FieldDecl::new("B"))
            .field(FieldDecl::new("A"))
            .field(FieldDecl::new("C"));
        let record = StructRecord {
            decl: &decl,
            rename_all: None,
        };

        assert_eq!(keys_of(&struct_serializer(&record)), vec!["B", "A", "C"]);
    }

    #[test]
    fn duplicate_wire_names_are_kept() {
        let decl = StructDecl::new("FDup", "dup")
            .field(FieldDecl::new("Value"))
            .field(FieldDecl::new("Other").meta(MetaData::new().with(keys::RENAME, "Value")));
        let record = StructRecord {
            decl: &decl,
            rename_all: None,
        };

        assert_eq!(keys_of(&struct_serializer(&record)), vec!["Value", "Value"]);
    }

    #[test]
    fn empty_struct_still_writes_an_object() {
        let decl = StructDecl::new("FEmpty", "empty");
        let record = StructRecord {
            decl: &decl,
            rename_all: Some(NamingConvention::CamelCase),
        };

        let text = struct_serializer(&record);
        assert!(text.contains("Writer.StartObject();"));
        assert!(text.contains("Writer.EndObject();"));
        assert!(text.contains("return true;"));
        assert!(keys_of(&text).is_empty());
    }

    #[test]
    fn rename_is_escaped() {
        let decl = StructDecl::new("FQuote", "quote")
            .field(FieldDecl::new("Q").meta(MetaData::new().with(keys::RENAME, "say \"hi\"")));
        let record = StructRecord {
            decl: &decl,
            rename_all: None,
        };

        assert!(struct_serializer(&record).contains(r#"Writer.Key(TEXT("say \"hi\""));"#));
    }
}
