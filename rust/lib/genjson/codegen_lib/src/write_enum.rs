//! Enum serializer emitter.

use genjson_ir::keys;

use crate::naming::resolve_enum_value_name;
use crate::serializer::{close_specialization, line, open_specialization, string_literal};
use crate::units::EnumRecord;

/// Append the serializer specialization for `record` to `out`.
///
/// Enums tagged `AsNumber` are written as their underlying integer; all
/// others as the resolved name of the current value.
pub fn emit_enum(out: &mut String, record: &EnumRecord<'_>) {
    let name = &record.decl.name;

    open_specialization(out, name);
    line(out, &format!("\tstatic bool Write(const {}& Instance, FJsonWriter& Writer) \\", name));
    line(out, "{ \\");
    if record.decl.meta.has(keys::AS_NUMBER) {
        emit_as_number(out, record);
    } else {
        emit_as_string(out, record);
    }
    line(out, "} \\");
    close_specialization(out);
}

/// The serializer specialization for `record` as a standalone string.
pub fn enum_serializer(record: &EnumRecord<'_>) -> String {
    let mut out = String::new();
    emit_enum(&mut out, record);
    out
}

fn emit_as_number(out: &mut String, record: &EnumRecord<'_>) {
    line(
        out,
        &format!(
            "return GenJson::Write(static_cast<std::underlying_type_t<{}>>(Instance), Writer); \\",
            record.decl.name
        ),
    );
}

fn emit_as_string(out: &mut String, record: &EnumRecord<'_>) {
    line(out, "switch (Instance) \\");
    line(out, "{ \\");
    for value in &record.decl.values {
        let rename = record.decl.meta.get_indexed(keys::RENAME, value.value);
        let wire = resolve_enum_value_name(&value.name, rename, record.rename_all);
        line(out, &format!("case {}: \\", value.name));
        line(out, "{ \\");
        line(out, &format!("    return GenJson::Write({}, Writer); \\", string_literal(&wire)));
        line(out, "} \\");
    }
    line(out, "} \\");
    // Reached only for values outside the declared set.
    line(out, "return false; \\");
}
