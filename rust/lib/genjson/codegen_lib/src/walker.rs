//! Declaration tree walker.
//!
//! One traversal looks for exactly one declaration kind. Nodes of another
//! kind are descended into; a node of the target kind is a leaf for that
//! traversal whether or not it is tagged.

use std::rc::Rc;

use genjson_ir::{
    keys, Declaration, DeclarationTree, EnumDecl, MetaData, NamingConvention, Scope, SourceTable,
    StructDecl,
};
use tracing::{debug, info, warn};

use crate::error::GenError;
use crate::units::{DiscoveryRecord, GenerationUnit, GenerationUnits};

/// A declaration kind the walker can search for.
pub trait Discoverable {
    /// Human-readable kind, for logs.
    const KIND: &'static str;

    /// `Some` when `decl` is of this kind.
    fn classify(decl: &Declaration) -> Option<&Self>;

    fn name(&self) -> &str;

    fn source(&self) -> &str;

    fn meta(&self) -> &MetaData;
}

impl Discoverable for StructDecl {
    const KIND: &'static str = "struct";

    fn classify(decl: &Declaration) -> Option<&Self> {
        match decl {
            Declaration::Struct(s) => Some(s),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn meta(&self) -> &MetaData {
        &self.meta
    }
}

impl Discoverable for EnumDecl {
    const KIND: &'static str = "enum";

    fn classify(decl: &Declaration) -> Option<&Self> {
        match decl {
            Declaration::Enum(e) => Some(e),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn meta(&self) -> &MetaData {
        &self.meta
    }
}

/// Appends a record to one of a generation unit's lists.
pub type AddRecord<'a, T> = fn(&mut GenerationUnit<'a>, Rc<DiscoveryRecord<'a, T>>);

/// Depth-first search for declarations of kind `T` tagged `Serialize` and/or
/// `Deserialize`, appending one shared record per match.
pub fn collect_exports<'a, T: Discoverable + 'a>(
    decl: &'a Declaration,
    sources: &'a SourceTable,
    units: &mut GenerationUnits<'a>,
    add_serializable: AddRecord<'a, T>,
    add_deserializable: AddRecord<'a, T>,
) -> Result<(), GenError> {
    let Some(target) = T::classify(decl) else {
        for child in decl.children() {
            collect_exports(child, sources, units, add_serializable, add_deserializable)?;
        }
        return Ok(());
    };

    let is_serializable = target.meta().has(keys::SERIALIZE);
    let is_deserializable = target.meta().has(keys::DESERIALIZE);
    if !is_serializable && !is_deserializable {
        return Ok(());
    }

    let source = sources
        .resolve(target.source())
        .ok_or_else(|| GenError::UnresolvedSource {
            source_id: target.source().to_string(),
            declaration: target.name().to_string(),
        })?;

    let record = Rc::new(DiscoveryRecord {
        decl: target,
        rename_all: rename_all(target.name(), target.meta()),
    });
    debug!(
        kind = T::KIND,
        name = target.name(),
        source = %source,
        serialize = is_serializable,
        deserialize = is_deserializable,
        "discovered"
    );

    let unit = units.entry(source);
    if is_serializable {
        add_serializable(unit, Rc::clone(&record));
    }
    if is_deserializable {
        add_deserializable(unit, record);
    }
    Ok(())
}

pub fn collect_struct_exports<'a>(
    root: &'a Declaration,
    sources: &'a SourceTable,
    units: &mut GenerationUnits<'a>,
) -> Result<(), GenError> {
    collect_exports::<StructDecl>(
        root,
        sources,
        units,
        GenerationUnit::add_serializable_struct,
        GenerationUnit::add_deserializable_struct,
    )
}

pub fn collect_enum_exports<'a>(
    root: &'a Declaration,
    sources: &'a SourceTable,
    units: &mut GenerationUnits<'a>,
) -> Result<(), GenError> {
    collect_exports::<EnumDecl>(
        root,
        sources,
        units,
        GenerationUnit::add_serializable_enum,
        GenerationUnit::add_deserializable_enum,
    )
}

/// Run both traversals (structs, then enums) over one scope root.
pub fn discover_root<'a>(
    root: &'a Declaration,
    sources: &'a SourceTable,
    units: &mut GenerationUnits<'a>,
) -> Result<(), GenError> {
    collect_struct_exports(root, sources, units)?;
    collect_enum_exports(root, sources, units)
}

/// Discover every given scope into a fresh set of generation units.
/// The caller decides which scopes to pass.
pub fn discover_scopes<'a>(
    scopes: impl IntoIterator<Item = &'a Scope>,
    sources: &'a SourceTable,
) -> Result<GenerationUnits<'a>, GenError> {
    let mut units = GenerationUnits::new();
    for scope in scopes {
        info!("Processing scope {} ({})", scope.name, scope.root.name());
        discover_root(&scope.root, sources, &mut units)?;
    }
    Ok(units)
}

/// Discover all user-owned scopes of `tree`, skipping external ones.
pub fn discover(tree: &DeclarationTree) -> Result<GenerationUnits<'_>, GenError> {
    for scope in tree.scopes.iter().filter(|s| s.external) {
        debug!("Skipping external scope {}", scope.name);
    }
    discover_scopes(tree.owned_scopes(), &tree.sources)
}

/// Resolve a type's `RenameAll` convention. Unknown values fall back to no
/// convention.
pub fn rename_all(name: &str, meta: &MetaData) -> Option<NamingConvention> {
    let value = meta.get(keys::RENAME_ALL)?;
    let convention = NamingConvention::parse(value);
    if convention.is_none() {
        warn!(
            declaration = name,
            value, "unrecognized RenameAll value, using source names"
        );
    }
    convention
}
