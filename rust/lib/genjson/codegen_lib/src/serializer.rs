//! Serializer header generator.
//!
//! One output file per source unit: the runtime include, then a single
//! macro definition holding a `TSerializer` specialization for every
//! serializable struct followed by every serializable enum.

use std::collections::BTreeMap;
use std::path::PathBuf;

use genjson_ir::SourceUnit;
use tracing::debug;

use crate::error::GenError;
use crate::units::{DiscoveryKind, EnumRecord, GenerationUnit, GenerationUnits, StructRecord};
use crate::write_enum::emit_enum;
use crate::write_struct::emit_struct;

/// Output settings. Defaults match the runtime library's conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Appended to the source unit's base name (`Player` → `Player.genjson.h`).
    pub suffix: String,

    /// Name of the macro wrapping all definitions of a unit.
    pub macro_name: String,

    /// Runtime header providing `GenJson::TSerializer` and `GenJson::Write`.
    pub runtime_header: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            suffix: ".genjson.h".to_string(),
            macro_name: "GENJSON_SERIALIZERS".to_string(),
            runtime_header: "GenJsonSerializer.h".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Output path for `source`, relative to the output root.
    pub fn output_path(&self, source: &SourceUnit) -> Result<PathBuf, GenError> {
        let base = source
            .base_name()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| GenError::InvalidSourcePath {
                path: source.path().to_path_buf(),
            })?;
        Ok(PathBuf::from(format!("{}{}", base, self.suffix)))
    }
}

/// Emits definitions for the records of one discovery kind.
pub trait RecordEmitter {
    fn kind(&self) -> DiscoveryKind;
    fn emit_struct(&self, out: &mut String, record: &StructRecord<'_>);
    fn emit_enum(&self, out: &mut String, record: &EnumRecord<'_>);
}

/// `TSerializer` specializations calling into `GenJson::Write`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteEmitter;

impl RecordEmitter for WriteEmitter {
    fn kind(&self) -> DiscoveryKind {
        DiscoveryKind::Serialize
    }

    fn emit_struct(&self, out: &mut String, record: &StructRecord<'_>) {
        emit_struct(out, record);
    }

    fn emit_enum(&self, out: &mut String, record: &EnumRecord<'_>) {
        emit_enum(out, record);
    }
}

/// The output driver: turns generation units into one file each.
pub struct SerializerGenerator<E = WriteEmitter> {
    options: GeneratorOptions,
    emitter: E,
}

impl SerializerGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_emitter(options, WriteEmitter)
    }
}

impl Default for SerializerGenerator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default())
    }
}

impl<E: RecordEmitter> SerializerGenerator<E> {
    pub fn with_emitter(options: GeneratorOptions, emitter: E) -> Self {
        Self { options, emitter }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Full text of the output file for one unit.
    pub fn generate_unit(&self, unit: &GenerationUnit<'_>) -> String {
        let mut out = String::new();

        line(&mut out, &format!("#include \"{}\"", self.options.runtime_header));
        line(&mut out, "#include <type_traits>");
        line(&mut out, "");
        line(&mut out, &format!("#undef {}", self.options.macro_name));
        line(&mut out, &format!("#define {}(...) \\", self.options.macro_name));

        let kind = self.emitter.kind();
        for record in unit.structs(kind) {
            self.emitter.emit_struct(&mut out, record);
            line(&mut out, "\\");
        }
        for record in unit.enums(kind) {
            self.emitter.emit_enum(&mut out, record);
            line(&mut out, "\\");
        }

        out
    }
}

impl<E: RecordEmitter> crate::Codegen for SerializerGenerator<E> {
    fn generate(&self, units: &GenerationUnits<'_>) -> Result<crate::GeneratedCode, GenError> {
        let mut files = Vec::with_capacity(units.len());
        let mut claimed: BTreeMap<PathBuf, &SourceUnit> = BTreeMap::new();

        for (source, unit) in units.iter() {
            let path = self.options.output_path(source)?;
            if let Some(first) = claimed.insert(path.clone(), source) {
                return Err(GenError::OutputCollision {
                    path,
                    first: first.path().to_path_buf(),
                    second: source.path().to_path_buf(),
                });
            }
            let content = self.generate_unit(unit);
            debug!(
                source = %source,
                path = %path.display(),
                kind = self.emitter.kind().tag(),
                structs = unit.structs(self.emitter.kind()).len(),
                enums = unit.enums(self.emitter.kind()).len(),
                "generated unit"
            );
            files.push(crate::GeneratedFile {
                source: source.clone(),
                path,
                content,
            });
        }

        Ok(crate::GeneratedCode { files })
    }

    fn target(&self) -> &str {
        "genjson-serializers"
    }
}

pub(crate) fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

pub(crate) fn open_specialization(out: &mut String, type_name: &str) {
    line(out, "template <> \\");
    line(out, &format!("struct GenJson::TSerializer<::{}> \\", type_name));
    line(out, "{ \\");
}

pub(crate) fn close_specialization(out: &mut String) {
    line(out, "}; \\");
}

/// A `TEXT("...")` literal for `value`.
pub(crate) fn string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\{:03o}", c as u32)),
            other => escaped.push(other),
        }
    }
    format!("TEXT(\"{}\")", escaped)
}
