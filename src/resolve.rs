// Hierarchy and cross-reference resolution
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

//! Link a [`RawGraph`] into a [`LinkedGraph`].
//!
//! Resolution happens only once every compound has been wrapped,
//!   in three passes over the object arena:
//!
//!   1. [`hierarchy`] links each object to its parent and children,
//!        and records the inheritance relationships of classes in an
//!        [`Inheritance`] graph;
//!   2. objects left without a parent become the roots of their
//!        [`Collection`];
//!        and
//!   3. [`permalink`] gives each object a unique permalink,
//!        nesting files,
//!        groups,
//!        and pages beneath their parents.
//!
//! Each compound is then searched for the ids of sections and anchors
//!   within its descriptions
//!     (see [`anchor`]),
//!   so that references into the middle of a page can be resolved.
//!
//! The resulting [`LinkedGraph`] is immutable and is what renderers are
//!   handed.
//! Its permalink service turns the target of any `ref` element into a
//!   link:
//!
//!   - [`LinkedGraph::page_permalink`] resolves a compound id;
//!       and
//!   - [`LinkedGraph::resolve_ref`] and [`LinkedGraph::permalink`]
//!       resolve a reference given its `kindref`,
//!         producing a permalink with a fragment for members and
//!         sections.
//!
//! Nothing here is fatal.
//! Every problem is a [`LinkWarning`] handed to a
//!   [`Reporter`](crate::diagnose::Reporter),
//!     and a reference that cannot be resolved is expected to be rendered
//!     as plain text.

mod anchor;
mod error;
mod hierarchy;
mod inherit;
mod permalink;
pub mod xref;

pub use error::LinkWarning;
pub use inherit::Inheritance;

use crate::{
    diagnose::Reporter,
    document::Document,
    dom::{walk, Node, NodeData, Ref, RefKind, Visitor, Walk},
    model::{CollectionKind, Object, ObjectRef, RawGraph},
};
use anchor::AnchorIndex;
use fxhash::FxHashMap;

/// Objects of a single collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    kind: CollectionKind,
    roots: Vec<ObjectRef>,
    members: Vec<ObjectRef>,
}

impl Collection {
    fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            roots: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Members without a parent,
    ///   in document order.
    ///
    /// These are the entry points of hierarchical indices.
    pub fn roots(&self) -> &[ObjectRef] {
        &self.roots
    }

    /// All members in document order.
    pub fn members(&self) -> &[ObjectRef] {
        &self.members
    }
}

/// Fully linked object graph.
#[derive(Debug)]
pub struct LinkedGraph {
    document: Document,
    objects: Vec<Object>,
    index: FxHashMap<String, ObjectRef>,
    collections: [Collection; CollectionKind::COUNT],
    inheritance: Inheritance,
    permalinks: FxHashMap<String, ObjectRef>,
    anchors: AnchorIndex,
}

impl LinkedGraph {
    /// Link every object of `raw`.
    pub fn resolve<R: Reporter + ?Sized>(
        raw: RawGraph,
        reporter: &mut R,
    ) -> Self {
        let (document, mut objects, index) = raw.into_parts();

        let inheritance = hierarchy::link(&mut objects, &index, reporter);
        let permalinks = permalink::assign(&mut objects, reporter);

        let mut collections = CollectionKind::ALL.map(Collection::new);
        let mut anchors = AnchorIndex::default();

        for (i, obj) in objects.iter().enumerate() {
            let oref = ObjectRef::new(i);
            let collection = &mut collections[obj.collection().index()];

            collection.members.push(oref);

            if obj.parent().is_none() {
                collection.roots.push(oref);
            }

            if let Some(node) = document.compound(obj.compound_index()) {
                anchors.add(oref, node);
            }
        }

        Self {
            document,
            objects,
            index,
            collections,
            inheritance,
            permalinks,
            anchors,
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

    /// Object wrapping the compound `id`.
    pub fn object(&self, id: &str) -> Option<&Object> {
        self.lookup(id).and_then(|oref| self.get(oref))
    }

    /// Compound node wrapped by the referenced object.
    pub fn node(&self, oref: ObjectRef) -> Option<&Node> {
        self.get(oref)
            .and_then(|obj| self.document.compound(obj.compound_index()))
    }

    pub fn collection(&self, kind: CollectionKind) -> &Collection {
        &self.collections[kind.index()]
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    pub fn inheritance(&self) -> &Inheritance {
        &self.inheritance
    }

    /// Object whose page has the given permalink.
    pub fn permalink_owner(&self, permalink: &str) -> Option<ObjectRef> {
        self.permalinks.get(permalink).copied()
    }

    /// Permalink of the page of compound `id`.
    pub fn page_permalink(&self, id: &str) -> Option<&str> {
        self.object(id).map(Object::permalink)
    }

    /// Resolve a reference to a permalink.
    ///
    /// A reference to a compound resolves to the compound's page.
    /// A reference to a member or section resolves to the page that
    ///   contains it,
    ///     with a fragment identifying the target within that page.
    /// The containing page is found by trying,
    ///   in order:
    ///
    ///   1. the compound whose id prefixes `refid`
    ///        (see [`xref::compound_id`]);
    ///   2. the owner of a table of contents item with id `refid`;
    ///        and
    ///   3. the owner of an inline anchor with id `refid`.
    pub fn resolve_ref(
        &self,
        refid: &str,
        kindref: RefKind,
    ) -> Result<String, LinkWarning> {
        let unresolved = || LinkWarning::UnresolvedReference {
            source: None,
            target: refid.into(),
            kind: kindref,
        };

        match kindref {
            RefKind::Compound => self
                .page_permalink(refid)
                .map(Into::into)
                .ok_or_else(unresolved),

            RefKind::Member | RefKind::XrefSect => {
                let owner = self
                    .lookup(xref::compound_id(refid))
                    .or_else(|| self.anchors.toc(refid))
                    .or_else(|| self.anchors.anchor(refid))
                    .and_then(|oref| self.get(oref))
                    .ok_or_else(unresolved)?;

                Ok(format!("{}#{}", owner.permalink(), xref::anchor(refid)))
            }
        }
    }

    /// Resolve a reference to a permalink,
    ///   reporting a warning if it cannot be resolved.
    pub fn permalink<R: Reporter + ?Sized>(
        &self,
        refid: &str,
        kindref: RefKind,
        reporter: &mut R,
    ) -> Option<String> {
        self.resolve_ref(refid, kindref)
            .map_err(|e| reporter.report(&e))
            .ok()
    }

    /// Attempt to resolve every internal `ref` within every compound,
    ///   reporting each that cannot be resolved.
    ///
    /// This is the resolution a renderer would perform,
    ///   without the rendering;
    ///     it allows broken references to be found up front.
    /// Returns the number of references that resolved.
    pub fn check_references<R: Reporter + ?Sized>(
        &self,
        reporter: &mut R,
    ) -> usize {
        let mut refs = RefCollector::default();
        let mut resolved = 0;

        for (i, obj) in self.objects.iter().enumerate() {
            let Some(node) = self.node(ObjectRef::new(i)) else {
                continue;
            };

            walk(node, &mut refs);

            for found in refs.found.drain(..) {
                match self.resolve_ref(&found.refid, found.kindref) {
                    Ok(_) => resolved += 1,
                    Err(e) => reporter.report(&e.with_source(obj.id())),
                }
            }
        }

        resolved
    }
}

/// Internal references in document order.
#[derive(Debug, Default)]
struct RefCollector<'a> {
    found: Vec<&'a Ref>,
}

impl<'a> Visitor<'a> for RefCollector<'a> {
    fn enter(&mut self, node: &'a Node) -> Walk {
        if let NodeData::Ref(r) = node.data() {
            // External references are resolved by another project's
            //   tag file.
            if r.external.is_none() {
                self.found.push(r);
            }
        }

        Walk::Continue
    }
}

#[cfg(test)]
mod test;
