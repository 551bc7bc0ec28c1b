// Parent/child linking
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

//! Link objects to their parents and children.
//!
//! Every object but a class has at most one parent,
//!   which is the first object to claim it as a child;
//!     later claims are reported and ignored.
//! A class is instead a child of each of its bases,
//!   with its first base serving as its parent.
//!
//! Linking never produces a cycle:
//!   a claim that would make an object its own ancestor is reported and
//!   ignored,
//!     and so every chain of parents ends at a root.

use super::{Inheritance, LinkWarning};
use crate::{
    diagnose::Reporter,
    dom::RefKind,
    model::{CollectionKind, Object, ObjectKind, ObjectRef},
};
use fxhash::FxHashMap;

type Index = FxHashMap<String, ObjectRef>;

/// Link every object of the arena,
///   producing the inheritance graph of its classes.
pub(super) fn link<R: Reporter + ?Sized>(
    objects: &mut [Object],
    index: &Index,
    reporter: &mut R,
) -> Inheritance {
    link_children(objects, index, reporter);
    link_classes(objects, index, reporter)
}

fn link_children<R: Reporter + ?Sized>(
    objects: &mut [Object],
    index: &Index,
    reporter: &mut R,
) {
    for i in 0..objects.len() {
        let parent = ObjectRef::new(i);
        let child_ids = objects[i].child_ids().to_vec();

        for child_id in child_ids {
            let found = resolve(
                objects,
                index,
                parent,
                &child_id,
                objects[i].collection(),
                reporter,
            );

            if let Some(child) = found {
                adopt(objects, parent, child, reporter);
            }
        }
    }
}

/// Record the inheritance relationships of every class,
///   then make each class a child of each of its bases.
fn link_classes<R: Reporter + ?Sized>(
    objects: &mut [Object],
    index: &Index,
    reporter: &mut R,
) -> Inheritance {
    let mut inheritance = Inheritance::new(objects.len());
    let classes: Vec<_> = (0..objects.len())
        .filter(|&i| matches!(objects[i].kind(), ObjectKind::Class { .. }))
        .map(ObjectRef::new)
        .collect();

    // A class's own base list is recorded first;
    //   its first listed base is its first recorded base.
    for &class in &classes {
        for base_id in objects[class.index()].base_ids().to_vec() {
            let found = resolve(
                objects,
                index,
                class,
                &base_id,
                CollectionKind::Classes,
                reporter,
            );

            if let Some(base) = found {
                inheritance.add(base, class);
            }
        }
    }

    for &class in &classes {
        for derived_id in objects[class.index()].derived_ids().to_vec() {
            let found = resolve(
                objects,
                index,
                class,
                &derived_id,
                CollectionKind::Classes,
                reporter,
            );

            if let Some(derived) = found {
                inheritance.add(class, derived);
            }
        }
    }

    for &class in &classes {
        for base in inheritance.bases(class) {
            if inheritance.is_ancestor(class, base) {
                reporter.report(&LinkWarning::ParentCycle {
                    parent: objects[base.index()].id().into(),
                    child: objects[class.index()].id().into(),
                });
                continue;
            }

            objects[base.index()].children.push(class);
            objects[class.index()].parent.get_or_insert(base);
        }
    }

    inheritance
}

/// Find the object `id` referenced by `source`,
///   which is expected to be a member of `expected`.
fn resolve<R: Reporter + ?Sized>(
    objects: &[Object],
    index: &Index,
    source: ObjectRef,
    id: &str,
    expected: CollectionKind,
    reporter: &mut R,
) -> Option<ObjectRef> {
    let source_id = objects[source.index()].id();

    let Some(&target) = index.get(id) else {
        reporter.report(&LinkWarning::UnresolvedReference {
            source: Some(source_id.into()),
            target: id.into(),
            kind: RefKind::Compound,
        });
        return None;
    };

    let found = objects[target.index()].collection();

    if found != expected {
        reporter.report(&LinkWarning::CrossCollectionChild {
            parent: source_id.into(),
            child: id.into(),
            expected,
            found,
        });
        return None;
    }

    Some(target)
}

/// Make `child` a child of `parent` unless it already has a parent or the
///   relationship would introduce a cycle.
fn adopt<R: Reporter + ?Sized>(
    objects: &mut [Object],
    parent: ObjectRef,
    child: ObjectRef,
    reporter: &mut R,
) {
    let id = |oref: ObjectRef| objects[oref.index()].id().to_string();

    match objects[child.index()].parent {
        // Listed twice by the same parent.
        Some(existing) if existing == parent => return,

        Some(existing) => {
            reporter.report(&LinkWarning::MultipleParents {
                child: id(child),
                parent: id(existing),
                claimant: id(parent),
            });
            return;
        }

        None => (),
    }

    if child == parent || is_ancestor(objects, child, parent) {
        reporter.report(&LinkWarning::ParentCycle {
            parent: id(parent),
            child: id(child),
        });
        return;
    }

    objects[child.index()].parent = Some(parent);
    objects[parent.index()].children.push(child);
}

/// Whether `candidate` is found by following parents from `oref`.
///
/// Parent chains are acyclic,
///   so this terminates.
fn is_ancestor(
    objects: &[Object],
    candidate: ObjectRef,
    oref: ObjectRef,
) -> bool {
    let mut next = objects[oref.index()].parent;

    while let Some(oref) = next {
        if oref == candidate {
            return true;
        }

        next = objects[oref.index()].parent;
    }

    false
}
