//! Generation units — discovered records bucketed by declaring source unit.

use std::collections::BTreeMap;
use std::rc::Rc;

use genjson_ir::{keys, EnumDecl, NamingConvention, SourceUnit, StructDecl};

/// Which direction a record was discovered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryKind {
    Serialize,
    Deserialize,
}

impl DiscoveryKind {
    /// The metadata tag that selects this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            DiscoveryKind::Serialize => keys::SERIALIZE,
            DiscoveryKind::Deserialize => keys::DESERIALIZE,
        }
    }
}

/// One qualifying declaration plus its resolved `RenameAll` convention.
#[derive(Debug, PartialEq, Eq)]
pub struct DiscoveryRecord<'a, T> {
    pub decl: &'a T,
    pub rename_all: Option<NamingConvention>,
}

pub type StructRecord<'a> = DiscoveryRecord<'a, StructDecl>;
pub type EnumRecord<'a> = DiscoveryRecord<'a, EnumDecl>;

/// Records discovered in one source unit.
///
/// A declaration tagged for both directions shares a single record between
/// the serializable and deserializable lists.
#[derive(Debug, Default)]
pub struct GenerationUnit<'a> {
    serializable_structs: Vec<Rc<StructRecord<'a>>>,
    deserializable_structs: Vec<Rc<StructRecord<'a>>>,
    serializable_enums: Vec<Rc<EnumRecord<'a>>>,
    deserializable_enums: Vec<Rc<EnumRecord<'a>>>,
}

impl<'a> GenerationUnit<'a> {
    pub fn serializable_structs(&self) -> &[Rc<StructRecord<'a>>] {
        &self.serializable_structs
    }

    pub fn deserializable_structs(&self) -> &[Rc<StructRecord<'a>>] {
        &self.deserializable_structs
    }

    pub fn serializable_enums(&self) -> &[Rc<EnumRecord<'a>>] {
        &self.serializable_enums
    }

    pub fn deserializable_enums(&self) -> &[Rc<EnumRecord<'a>>] {
        &self.deserializable_enums
    }

    pub fn structs(&self, kind: DiscoveryKind) -> &[Rc<StructRecord<'a>>] {
        match kind {
            DiscoveryKind::Serialize => &self.serializable_structs,
            DiscoveryKind::Deserialize => &self.deserializable_structs,
        }
    }

    pub fn enums(&self, kind: DiscoveryKind) -> &[Rc<EnumRecord<'a>>] {
        match kind {
            DiscoveryKind::Serialize => &self.serializable_enums,
            DiscoveryKind::Deserialize => &self.deserializable_enums,
        }
    }

    pub fn add_serializable_struct(&mut self, record: Rc<StructRecord<'a>>) {
        self.serializable_structs.push(record);
    }

    pub fn add_deserializable_struct(&mut self, record: Rc<StructRecord<'a>>) {
        self.deserializable_structs.push(record);
    }

    pub fn add_serializable_enum(&mut self, record: Rc<EnumRecord<'a>>) {
        self.serializable_enums.push(record);
    }

    pub fn add_deserializable_enum(&mut self, record: Rc<EnumRecord<'a>>) {
        self.deserializable_enums.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.serializable_structs.is_empty()
            && self.deserializable_structs.is_empty()
            && self.serializable_enums.is_empty()
            && self.deserializable_enums.is_empty()
    }
}

/// Source unit → generation unit, for one generation pass.
///
/// Iteration is ordered by source path so output order never depends on
/// traversal order.
#[derive(Debug, Default)]
pub struct GenerationUnits<'a> {
    units: BTreeMap<&'a SourceUnit, GenerationUnit<'a>>,
}

impl<'a> GenerationUnits<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the unit for `source`, creating it on first use.
    pub fn entry(&mut self, source: &'a SourceUnit) -> &mut GenerationUnit<'a> {
        self.units.entry(source).or_default()
    }

    pub fn get(&self, source: &SourceUnit) -> Option<&GenerationUnit<'a>> {
        self.units.get(source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a SourceUnit, &GenerationUnit<'a>)> {
        self.units.iter().map(|(source, unit)| (*source, unit))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_created_lazily() {
        let player = SourceUnit::new("Source/Game/Player.h");
        let mut units = GenerationUnits::new();
        assert!(units.is_empty());
        assert!(units.get(&player).is_none());

        units.entry(&player);
        units.entry(&player);
        assert_eq!(units.len(), 1);
        assert!(units.get(&player).is_some_and(GenerationUnit::is_empty));
    }

    #[test]
    fn lists_by_kind() {
        let decl = StructDecl::new("FPoint", "point");
        let record = Rc::new(StructRecord {
            decl: &decl,
            rename_all: None,
        });

        let mut unit = GenerationUnit::default();
        unit.add_serializable_struct(Rc::clone(&record));
        unit.add_deserializable_struct(Rc::clone(&record));

        assert_eq!(unit.structs(DiscoveryKind::Serialize).len(), 1);
        assert_eq!(unit.structs(DiscoveryKind::Deserialize).len(), 1);
        assert!(unit.enums(DiscoveryKind::Serialize).is_empty());
        assert!(Rc::ptr_eq(
            &unit.serializable_structs()[0],
            &unit.deserializable_structs()[0]
        ));
    }

    #[test]
    fn iteration_is_ordered_by_path() {
        let b = SourceUnit::new("Source/B.h");
        let a = SourceUnit::new("Source/A.h");
        let mut units = GenerationUnits::new();
        units.entry(&b);
        units.entry(&a);

        let order: Vec<_> = units.iter().map(|(s, _)| s.base_name()).collect();
        assert_eq!(order, vec![Some("A"), Some("B")]);
    }

    #[test]
    fn kind_tags() {
        assert_eq!(DiscoveryKind::Serialize.tag(), "Serialize");
        assert_eq!(DiscoveryKind::Deserialize.tag(), "Deserialize");
    }
}
