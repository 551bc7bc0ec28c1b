// Class inheritance graph
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

//! Inheritance relationships between classes.
//!
//! Unlike the other collections,
//!   classes do not form a tree:
//!     a class may have any number of bases,
//!     and the same ancestor may be reachable through more than one of
//!     them
//!       (the "diamond").
//! The full relation is therefore kept as a directed graph with an edge
//!   from each base to each class derived from it.
//!
//! The graph has one node per object of the arena,
//!   at the same index,
//!   so that an [`ObjectRef`] may be used directly as a node index.
//! Only classes ever have edges.

use crate::{global::ObjectIdSize, model::ObjectRef};
use fixedbitset::FixedBitSet;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    Direction,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct Inheritance {
    graph: DiGraph<(), (), ObjectIdSize>,
}

impl Inheritance {
    /// Graph with a node for each of `len` objects and no edges.
    pub(super) fn new(len: usize) -> Self {
        let mut graph = DiGraph::with_capacity(len, len);

        for _ in 0..len {
            graph.add_node(());
        }

        Self { graph }
    }

    /// Record that `derived` derives from `base`.
    ///
    /// Recording the same relationship again has no effect,
    ///   since Doxygen lists each relationship from both ends.
    /// A class cannot derive from itself.
    pub(super) fn add(&mut self, base: ObjectRef, derived: ObjectRef) {
        if base != derived {
            self.graph.update_edge(node(base), node(derived), ());
        }
    }

    /// Direct bases of `oref`,
    ///   in the order the relationships were recorded.
    pub fn bases(&self, oref: ObjectRef) -> Vec<ObjectRef> {
        self.neighbors(oref, Direction::Incoming)
    }

    /// Classes deriving directly from `oref`,
    ///   in the order the relationships were recorded.
    pub fn derived(&self, oref: ObjectRef) -> Vec<ObjectRef> {
        self.neighbors(oref, Direction::Outgoing)
    }

    /// Every class from which `oref` derives,
    ///   directly or indirectly,
    ///   nearest first.
    ///
    /// Each ancestor is listed once regardless of how many paths lead to
    ///   it.
    pub fn ancestors(&self, oref: ObjectRef) -> Vec<ObjectRef> {
        let mut seen = FixedBitSet::with_capacity(self.graph.node_count());
        let mut queue = VecDeque::from([oref]);
        let mut found = Vec::new();

        seen.insert(oref.index());

        while let Some(next) = queue.pop_front() {
            for base in self.bases(next) {
                if !seen.put(base.index()) {
                    found.push(base);
                    queue.push_back(base);
                }
            }
        }

        found
    }

    /// Whether `candidate` is among the ancestors of `oref`.
    pub fn is_ancestor(&self, candidate: ObjectRef, oref: ObjectRef) -> bool {
        self.ancestors(oref).contains(&candidate)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn neighbors(&self, oref: ObjectRef, dir: Direction) -> Vec<ObjectRef> {
        if oref.index() >= self.graph.node_count() {
            return Vec::new();
        }

        // petgraph yields the most recently added edge first.
        let mut found: Vec<_> = self
            .graph
            .neighbors_directed(node(oref), dir)
            .map(|n| ObjectRef::new(n.index()))
            .collect();

        found.reverse();
        found
    }
}

fn node(oref: ObjectRef) -> NodeIndex<ObjectIdSize> {
    NodeIndex::new(oref.index())
}
