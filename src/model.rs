// View-model wrappers of compounds
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of doxymd.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Wrap each compound of a [`Document`] in an [`Object`].
//!
//! An [`Object`] is the view of a compound that a renderer works with:
//!   it carries the compound's identity,
//!   the [`Collection`](CollectionKind) it belongs to,
//!   names suitable for display,
//!   and the ids of the compounds it is related to.
//! The compound itself remains in the [`Document`] and is reachable
//!   through [`RawGraph::node`].
//!
//! Wrapping is the first of two passes.
//! Related compounds are recorded here only by id,
//!   since Doxygen freely references compounds that appear later in its
//!   output;
//!     [`crate::resolve`] turns those ids into [`ObjectRef`]s once every
//!     object exists.
//!
//! Objects are stored in an arena in document order and referenced by
//!   index.
//! That order is the order of every later iteration,
//!   which keeps output reproducible between runs.
//!
//! Compounds of a kind that has no collection
//!   (e.g. `concept` or `module`)
//!   and compounds whose id has already been wrapped are reported as
//!   warnings and skipped.

use crate::{
    config::PermalinkPolicy,
    diagnose::{Annotation, Diagnostic, Level, Reporter},
    document::Document,
    dom::{CompoundDef, CompoundRef, InnerKind, Node},
    global::{self, ObjectIdSize},
};
use fxhash::FxHashMap;
use std::{error::Error, fmt::Display};

/// Reference to an [`Object`] within the arena of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef(ObjectIdSize);

impl ObjectRef {
    pub fn new(index: usize) -> Self {
        Self(index as ObjectIdSize)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<ObjectRef> for usize {
    fn from(oref: ObjectRef) -> Self {
        oref.index()
    }
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Group of objects that share an output directory and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Classes,
    Namespaces,
    /// Both files and folders.
    Files,
    Groups,
    Pages,
}

impl CollectionKind {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Classes,
        Self::Namespaces,
        Self::Files,
        Self::Groups,
        Self::Pages,
    ];

    /// First component of the permalink of each member of the
    ///   collection.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Namespaces => "namespaces",
            Self::Files => "files",
            Self::Groups => "groups",
            Self::Pages => "pages",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Kind of an [`Object`] along with the data specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    /// A class,
    ///   struct,
    ///   or union;
    ///     `keyword` is the compound kind Doxygen reported.
    Class { keyword: String },
    Namespace { anonymous: bool },
    File,
    Folder,
    Group,
    Page,
}

impl ObjectKind {
    /// Kind of object wrapping a compound of the given Doxygen kind,
    ///   or [`None`] if such compounds are not supported.
    pub fn from_compound(def: &CompoundDef) -> Option<Self> {
        Some(match def.kind.as_str() {
            "class" | "struct" | "union" | "interface" | "protocol" => {
                Self::Class {
                    keyword: def.kind.clone(),
                }
            }
            "namespace" => Self::Namespace {
                anonymous: def
                    .compound_name
                    .rsplit(global::SCOPE_SEPARATOR)
                    .next()
                    .is_some_and(|last| {
                        last.starts_with(global::ANONYMOUS_MARKER)
                    }),
            },
            "file" => Self::File,
            "dir" => Self::Folder,
            "group" => Self::Group,
            "page" => Self::Page,
            _ => return None,
        })
    }

    pub fn collection(&self) -> CollectionKind {
        match self {
            Self::Class { .. } => CollectionKind::Classes,
            Self::Namespace { .. } => CollectionKind::Namespaces,
            Self::File | Self::Folder => CollectionKind::Files,
            Self::Group => CollectionKind::Groups,
            Self::Page => CollectionKind::Pages,
        }
    }

    /// Whether the permalink of an object of this kind is derived from
    ///   the permalink of its parent.
    ///
    /// Classes and namespaces carry their hierarchy in their qualified
    ///   names and folders in their paths.
    pub fn nests_permalink(&self) -> bool {
        matches!(self, Self::File | Self::Group | Self::Page)
    }
}

/// View of a compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    id: String,
    kind: ObjectKind,
    /// Position of the compound within the [`Document`].
    compound: usize,
    name: String,
    label: String,
    /// Sanitized permalink component of this object alone.
    segment: String,

    child_ids: Vec<String>,
    base_ids: Vec<String>,
    derived_ids: Vec<String>,

    pub(crate) parent: Option<ObjectRef>,
    pub(crate) children: Vec<ObjectRef>,
    pub(crate) permalink: String,
}

impl Object {
    /// Wrap the compound found at position `compound` of its document.
    ///
    /// The permalink is initialized to its skeleton,
    ///   which is final for all but objects that
    ///   [nest their permalink](ObjectKind::nests_permalink) beneath a
    ///   parent.
    pub fn new(
        def: &CompoundDef,
        kind: ObjectKind,
        compound: usize,
        policy: &PermalinkPolicy,
    ) -> Self {
        let collection = kind.collection();

        let (name, label) = display_names(def, &kind);
        let segment = match kind {
            ObjectKind::Class { .. } | ObjectKind::Namespace { .. } => {
                scoped_path(def, policy)
            }
            ObjectKind::Folder => def
                .compound_name
                .split('/')
                .map(|component| policy.sanitize(component))
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("/"),
            _ => policy.sanitize(&def.compound_name),
        };

        let child_ids = match kind {
            ObjectKind::Namespace { .. } => {
                inner_ids(def, &[InnerKind::Namespace])
            }
            ObjectKind::Folder => {
                inner_ids(def, &[InnerKind::Dir, InnerKind::File])
            }
            ObjectKind::Group => inner_ids(def, &[InnerKind::Group]),
            ObjectKind::Page => inner_ids(def, &[InnerKind::Page]),
            ObjectKind::Class { .. } | ObjectKind::File => Vec::new(),
        };

        let related = |refs: &[CompoundRef]| {
            refs.iter().filter_map(|r| r.refid.clone()).collect()
        };

        Self {
            id: def.id.clone(),
            compound,
            name,
            label,
            permalink: format!("{}/{segment}", collection.prefix()),
            segment,
            child_ids,
            base_ids: related(&def.base_refs),
            derived_ids: related(&def.derived_refs),
            parent: None,
            children: Vec::new(),
            kind,
        }
    }

    /// Compound id assigned by Doxygen.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn collection(&self) -> CollectionKind {
        self.kind.collection()
    }

    /// Position of the wrapped compound within its [`Document`].
    pub fn compound_index(&self) -> usize {
        self.compound
    }

    /// Name suitable for page titles
    ///   (e.g. the fully qualified class name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short name suitable for sidebars and indices.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Ids of compounds nested beneath this one.
    pub fn child_ids(&self) -> &[String] {
        &self.child_ids
    }

    /// Ids of documented base classes.
    pub fn base_ids(&self) -> &[String] {
        &self.base_ids
    }

    /// Ids of documented derived classes.
    pub fn derived_ids(&self) -> &[String] {
        &self.derived_ids
    }

    pub fn parent(&self) -> Option<ObjectRef> {
        self.parent
    }

    /// Children in the order they were linked.
    ///
    /// For classes these are the derived classes.
    pub fn children(&self) -> &[ObjectRef] {
        &self.children
    }

    /// Output path relative to the documentation root,
    ///   without extension.
    ///
    /// This is a skeleton until the graph is resolved.
    pub fn permalink(&self) -> &str {
        &self.permalink
    }
}

fn inner_ids(def: &CompoundDef, kinds: &[InnerKind]) -> Vec<String> {
    def.inner
        .iter()
        .filter(|inner| kinds.contains(&inner.kind))
        .map(|inner| inner.refid.clone())
        .collect()
}

/// Display name and sidebar label of a compound.
fn display_names(def: &CompoundDef, kind: &ObjectKind) -> (String, String) {
    let qualified = &def.compound_name;

    match kind {
        ObjectKind::Class { .. } | ObjectKind::Namespace { .. } => {
            let last = scope_components(qualified)
                .last()
                .copied()
                .unwrap_or(qualified.as_str());

            let label = if last.starts_with(global::ANONYMOUS_MARKER) {
                "anonymous namespace".to_string()
            } else {
                last.to_string()
            };

            (qualified.clone(), label)
        }
        ObjectKind::Folder | ObjectKind::File => {
            let last = qualified
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(qualified.as_str());

            (qualified.clone(), last.to_string())
        }
        ObjectKind::Group | ObjectKind::Page => {
            let title = def
                .title
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(qualified.as_str());

            (title.to_string(), title.to_string())
        }
    }
}

/// Split a qualified name on its scope separators.
///
/// Separators nested within template argument lists do not split
///   (`a::B<c::D>` has two components).
pub fn scope_components(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let sep = global::SCOPE_SEPARATOR.as_bytes();

    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[i..].starts_with(sep) => {
                components.push(&name[start..i]);
                i += sep.len();
                start = i;
                continue;
            }
            _ => (),
        }

        i += 1;
    }

    components.push(&name[start..]);
    components
}

/// Sanitized permalink path of a class or namespace,
///   one component per scope.
fn scoped_path(def: &CompoundDef, policy: &PermalinkPolicy) -> String {
    scope_components(&def.compound_name)
        .into_iter()
        .map(|component| scope_segment(component, def, policy))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn scope_segment(
    component: &str,
    def: &CompoundDef,
    policy: &PermalinkPolicy,
) -> String {
    if let Some(ordinal) = component.strip_prefix(global::ANONYMOUS_MARKER) {
        let qualifier = def
            .location
            .as_ref()
            .and_then(|loc| loc.file.rsplit('/').next())
            .filter(|file| !file.is_empty())
            .unwrap_or(ordinal);

        return policy
            .sanitize(&format!("{}-{qualifier}", policy.anonymous_prefix));
    }

    // Specializations differ only in their template arguments,
    //   which sanitize poorly;
    //     hash them instead.
    match component.find('<') {
        Some(pos) => {
            let hash = fxhash::hash32(component[pos..].as_bytes());
            let base = policy.sanitize(&component[..pos]);

            format!("{base}-{hash:08x}")
        }
        None => policy.sanitize(component),
    }
}

/// Arena of objects awaiting resolution.
#[derive(Debug)]
pub struct RawGraph {
    document: Document,
    objects: Vec<Object>,
    index: FxHashMap<String, ObjectRef>,
}

impl RawGraph {
    /// Wrap every supported compound of `document`,
    ///   in document order.
    pub fn wrap<R: Reporter + ?Sized>(
        document: Document,
        policy: &PermalinkPolicy,
        reporter: &mut R,
    ) -> Self {
        let mut objects = Vec::with_capacity(document.len());
        let mut index = FxHashMap::default();

        for (i, node) in document.compounds().enumerate() {
            let Some(def) = node.as_compound() else {
                continue;
            };

            let Some(kind) = ObjectKind::from_compound(def) else {
                reporter.report(&WrapWarning::UnsupportedKind {
                    id: def.id.clone(),
                    kind: def.kind.clone(),
                });
                continue;
            };

            if index.contains_key(&def.id) {
                reporter.report(&WrapWarning::DuplicateId(def.id.clone()));
                continue;
            }

            index.insert(def.id.clone(), ObjectRef::new(objects.len()));
            objects.push(Object::new(def, kind, i, policy));
        }

        Self {
            document,
            objects,
            index,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Objects in document order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn get(&self, oref: ObjectRef) -> Option<&Object> {
        self.objects.get(oref.index())
    }

    /// Reference to the object wrapping the compound `id`.
    pub fn lookup(&self, id: &str) -> Option<ObjectRef> {
        self.index.get(id).copied()
    }

    /// Compound node wrapped by the referenced object.
    pub fn node(&self, oref: ObjectRef) -> Option<&Node> {
        self.get(oref)
            .and_then(|obj| self.document.compound(obj.compound))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Document, Vec<Object>, FxHashMap<String, ObjectRef>) {
        (self.document, self.objects, self.index)
    }
}

/// Compounds that could not be wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapWarning {
    /// The compound is of a kind that belongs to no collection.
    UnsupportedKind { id: String, kind: String },
    /// A compound with this id has already been wrapped.
    DuplicateId(String),
}

impl Display for WrapWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnsupportedKind { id, kind } => {
                write!(f, "unsupported compound kind `{kind}` of `{id}`")
            }
            Self::DuplicateId(id) => write!(f, "duplicate compound `{id}`"),
        }
    }
}

impl Error for WrapWarning {}

impl Diagnostic for WrapWarning {
    fn level(&self) -> Level {
        Level::Warning
    }

    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::UnsupportedKind { .. } => Annotation::help(
                "the compound will be omitted from the documentation",
            )
            .into(),
            Self::DuplicateId(_) => vec![
                Annotation::note("only the first occurrence is kept"),
                Annotation::help(
                    "was the same compound file provided more than once?",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod test;
