// Permalink assignment
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

//! Assign each object a unique permalink.
//!
//! Objects are processed by nesting depth,
//!   shallowest first,
//!   and in document order within a depth.
//! Only an object whose permalink nests beneath its parent's
//!   (see [`crate::model::ObjectKind::nests_permalink`])
//!   is deeper than its parent;
//!     classes,
//!     namespaces,
//!     and folders are all at depth zero.
//! This guarantees that a parent's permalink is final before any child
//!   nests its own beneath it,
//!     and makes the assignment of suffixes reproducible:
//!       the first object to derive a permalink keeps it,
//!       and each later object deriving the same permalink receives the
//!       first free suffix of `-1`, `-2`, and so on.

use super::LinkWarning;
use crate::{
    diagnose::Reporter,
    model::{Object, ObjectRef},
};
use fxhash::FxHashMap;

/// Finalize the permalink of every object,
///   producing a map from each permalink to its object.
pub(super) fn assign<R: Reporter + ?Sized>(
    objects: &mut [Object],
    reporter: &mut R,
) -> FxHashMap<String, ObjectRef> {
    let depths = depths(objects);

    let mut order: Vec<usize> = (0..objects.len()).collect();
    order.sort_by_key(|&i| depths[i]);

    let mut taken = FxHashMap::<String, ObjectRef>::default();

    for i in order {
        let obj = &objects[i];

        let candidate = match obj.parent() {
            Some(parent) if obj.kind().nests_permalink() => format!(
                "{}/{}",
                objects[parent.index()].permalink(),
                obj.segment()
            ),
            _ => obj.permalink().to_string(),
        };

        let permalink = match taken.get(&candidate) {
            None => candidate,
            Some(holder) => {
                let assigned = first_free(&candidate, &taken);

                reporter.report(&LinkWarning::DuplicatePermalink {
                    id: obj.id().into(),
                    holder: objects[holder.index()].id().into(),
                    permalink: candidate,
                    assigned: assigned.clone(),
                });

                assigned
            }
        };

        taken.insert(permalink.clone(), ObjectRef::new(i));
        objects[i].permalink = permalink;
    }

    taken
}

fn first_free(candidate: &str, taken: &FxHashMap<String, ObjectRef>) -> String {
    let mut n = 1usize;

    loop {
        let suffixed = format!("{candidate}-{n}");

        if !taken.contains_key(&suffixed) {
            return suffixed;
        }

        n += 1;
    }
}

/// Nesting depth of each object,
///   counting only parents that its permalink nests beneath.
fn depths(objects: &[Object]) -> Vec<usize> {
    let mut depths: Vec<Option<usize>> = vec![None; objects.len()];
    let mut chain = Vec::new();

    for i in 0..objects.len() {
        // Walk up until reaching a root or an object of known depth.
        let mut next = Some(i);
        let mut base = 0;

        while let Some(j) = next {
            if let Some(depth) = depths[j] {
                base = depth + 1;
                break;
            }

            chain.push(j);
            next = objects[j]
                .parent()
                .filter(|_| objects[j].kind().nests_permalink())
                .map(ObjectRef::index);
        }

        for (offset, j) in chain.drain(..).rev().enumerate() {
            depths[j] = Some(base + offset);
        }
    }

    depths.into_iter().map(Option::unwrap_or_default).collect()
}
