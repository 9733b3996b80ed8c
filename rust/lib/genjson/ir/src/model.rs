//! Declaration IR — the nodes of a parsed declaration tree.

use serde::{Deserialize, Serialize};

use crate::metadata::MetaData;

/// A node in the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// A grouping node (package, namespace, class scope) with children.
    Container(ContainerDecl),
    /// A structure type.
    Struct(StructDecl),
    /// An enumeration type.
    Enum(EnumDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Container(c) => &c.name,
            Declaration::Struct(s) => &s.name,
            Declaration::Enum(e) => &e.name,
        }
    }

    /// Nested declarations. Enums never have any.
    pub fn children(&self) -> &[Declaration] {
        match self {
            Declaration::Container(c) => &c.children,
            Declaration::Struct(s) => &s.children,
            Declaration::Enum(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDecl {
    pub name: String,

    #[serde(default)]
    pub children: Vec<Declaration>,
}

impl ContainerDecl {
    pub fn new(name: impl Into<String>, children: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// A structure declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDecl {
    /// Fully qualified source name (e.g. `FPlayerState`).
    pub name: String,

    /// Source-unit id, resolved through the tree's source table.
    pub source: String,

    #[serde(default, skip_serializing_if = "MetaData::is_empty")]
    pub meta: MetaData,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,

    /// Declarations nested inside this struct.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Declaration>,
}

impl StructDecl {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            meta: MetaData::default(),
            fields: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn meta(mut self, meta: MetaData) -> Self {
        self.meta = meta;
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }
}

/// A field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Source identifier, also used as the member accessor.
    pub name: String,

    #[serde(default, skip_serializing_if = "MetaData::is_empty")]
    pub meta: MetaData,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: MetaData::default(),
        }
    }

    pub fn meta(mut self, meta: MetaData) -> Self {
        self.meta = meta;
        self
    }
}

/// An enumeration declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Fully qualified source name (e.g. `EColor`).
    pub name: String,

    /// Source-unit id, resolved through the tree's source table.
    pub source: String,

    /// Type-level metadata. Per-value entries are indexed by ordinal.
    #[serde(default, skip_serializing_if = "MetaData::is_empty")]
    pub meta: MetaData,

    /// Values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValueDecl>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            meta: MetaData::default(),
            values: Vec::new(),
        }
    }

    pub fn meta(mut self, meta: MetaData) -> Self {
        self.meta = meta;
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumValueDecl {
            name: name.into(),
            value,
        });
        self
    }
}

/// One enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueDecl {
    /// Source identifier, possibly scope-qualified (`EColor::Red`).
    pub name: String,

    /// Ordinal, also the index for per-value metadata.
    pub value: i64,
}

impl From<ContainerDecl> for Declaration {
    fn from(decl: ContainerDecl) -> Self {
        Declaration::Container(decl)
    }
}

impl From<StructDecl> for Declaration {
    fn from(decl: StructDecl) -> Self {
        Declaration::Struct(decl)
    }
}

impl From<EnumDecl> for Declaration {
    fn from(decl: EnumDecl) -> Self {
        Declaration::Enum(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::keys;

    fn sample_tree() -> Declaration {
        ContainerDecl::new(
            "/Script/Game",
            vec![
                StructDecl::new("FPoint", "point")
                    .meta(MetaData::new().with_flag(keys::SERIALIZE))
                    .field(FieldDecl::new("X"))
                    .field(FieldDecl::new("Y"))
                    .into(),
                EnumDecl::new("EColor", "color")
                    .meta(MetaData::new().with_indexed(keys::RENAME, 1, "verde"))
                    .value("EColor::Red", 0)
                    .value("EColor::Green", 1)
                    .into(),
            ],
        )
        .into()
    }

    #[test]
    fn children_by_kind() {
        let tree = sample_tree();
        assert_eq!(tree.name(), "/Script/Game");
        assert_eq!(tree.children().len(), 2);
        assert!(tree.children()[0].children().is_empty());
        assert!(tree.children()[1].children().is_empty());
    }

    #[test]
    fn tagged_json() {
        let decl: Declaration = serde_json::from_str(
            r#"{
                "kind": "struct",
                "name": "FPoint",
                "source": "point",
                "meta": { "entries": { "Serialize": "" } },
                "fields": [
                    { "name": "X", "meta": { "entries": { "Rename": "x_coord" } } },
                    { "name": "Y" }
                ]
            }"#,
        )
        .unwrap();

        let Declaration::Struct(s) = decl else {
            panic!("expected struct");
        };
        assert_eq!(s.fields.len(), 2);
        assert_eq!(s.fields[0].meta.get(keys::RENAME), Some("x_coord"));
        assert!(s.fields[1].meta.is_empty());
        assert!(s.children.is_empty());
    }

    #[test]
    fn tagged_enum_with_indexed_meta() {
        let decl: Declaration = serde_json::from_str(
            r#"{
                "kind": "enum",
                "name": "EPlayerState",
                "source": "player",
                "meta": {
                    "entries": { "Serialize": "" },
                    "indexed": { "2": { "Rename": "KO" }, "-1": { "Rename": "none" } }
                },
                "values": [
                    { "name": "EPlayerState::Invalid", "value": -1 },
                    { "name": "EPlayerState::Dead", "value": 2 }
                ]
            }"#,
        )
        .unwrap();

        let Declaration::Enum(e) = decl else {
            panic!("expected enum");
        };
        assert_eq!(e.meta.get_indexed(keys::RENAME, 2), Some("KO"));
        assert_eq!(e.meta.get_indexed(keys::RENAME, -1), Some("none"));
        assert_eq!(e.meta.get_indexed(keys::RENAME, 0), None);
        assert_eq!(e.values[0].value, -1);
    }

    #[test]
    fn serde_roundtrip() {
        let tree = sample_tree();
        let json = serde_json::to_string_pretty(&tree).unwrap();
        let back: Declaration = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
