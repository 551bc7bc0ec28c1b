// Anchor and table of contents index
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

//! Index of ids that occur within the descriptions of compounds.
//!
//! A reference may target a section or anchor in the middle of a page
//!   rather than a compound or member.
//! Such ids are not compound ids and so cannot be looked up directly;
//!   this index maps each to the object whose page contains it.
//!
//! Two kinds of ids are distinguished:
//!
//!   - Table of contents items
//!       (`tocitem/@id` and `tableofcontents/tocsect/reference`);
//!       and
//!   - Inline anchors
//!       (`sectN/@id`, `anchor/@id`, and `xrefsect/@id`).
//!
//! Table of contents items take precedence when resolving references.
//! The first object to contain an id owns it.

use crate::{
    dom::{walk, Node, NodeData, NodeKind, Sect, Visitor, Walk},
    model::ObjectRef,
};
use fxhash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub(super) struct AnchorIndex {
    toc: FxHashMap<String, ObjectRef>,
    anchors: FxHashMap<String, ObjectRef>,
}

impl AnchorIndex {
    /// Index the ids found within `node`,
    ///   which is the compound wrapped by `owner`.
    pub fn add(&mut self, owner: ObjectRef, node: &Node) {
        walk(node, &mut Collector { owner, index: self });
    }

    pub fn toc(&self, id: &str) -> Option<ObjectRef> {
        self.toc.get(id).copied()
    }

    pub fn anchor(&self, id: &str) -> Option<ObjectRef> {
        self.anchors.get(id).copied()
    }
}

struct Collector<'i> {
    owner: ObjectRef,
    index: &'i mut AnchorIndex,
}

impl<'a, 'i> Visitor<'a> for Collector<'i> {
    fn enter(&mut self, node: &'a Node) -> Walk {
        let owner = self.owner;
        let AnchorIndex { toc, anchors } = &mut *self.index;

        match node.data() {
            NodeData::TocItem { id } => {
                toc.entry(id.clone()).or_insert(owner);
            }
            NodeData::TocSect { reference, .. } => {
                toc.entry(reference.clone()).or_insert(owner);
            }
            NodeData::Sect(Sect { id: Some(id), .. })
            | NodeData::Anchor { id }
            | NodeData::XrefSect { id, .. } => {
                anchors.entry(id.clone()).or_insert(owner);
            }
            _ => (),
        }

        match node.kind() {
            // Code and member lists hold references,
            //   never anchors.
            NodeKind::Programlisting | NodeKind::Listofallmembers => {
                Walk::SkipChildren
            }
            _ => Walk::Continue,
        }
    }
}
