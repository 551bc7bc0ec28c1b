// Tests for view-model wrappers
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

use super::*;
use crate::{
    diagnose::BufferReporter,
    test::{compound, document, raw, Fixture},
};

fn wrap_one(fixture: Fixture) -> Object {
    let mut reporter = BufferReporter::new();
    let sut = raw(&[fixture], &mut reporter);

    assert_eq!(0, reporter.warning_count());
    sut.objects()[0].clone()
}

#[test]
fn wraps_in_document_order() {
    let mut reporter = BufferReporter::new();
    let sut = raw(
        &[
            compound("namespacens", "namespace", "ns"),
            compound("classns_1_1_a", "class", "ns::A"),
            compound("structs", "struct", "S"),
            compound("main_8c", "file", "main.c"),
            compound("dir_1", "dir", "src"),
            compound("group__io", "group", "io"),
            compound("index", "page", "index"),
        ],
        &mut reporter,
    );

    let given: Vec<_> = sut
        .objects()
        .iter()
        .map(|obj| (obj.id(), obj.collection()))
        .collect();

    assert_eq!(
        vec![
            ("namespacens", CollectionKind::Namespaces),
            ("classns_1_1_a", CollectionKind::Classes),
            ("structs", CollectionKind::Classes),
            ("main_8c", CollectionKind::Files),
            ("dir_1", CollectionKind::Files),
            ("group__io", CollectionKind::Groups),
            ("index", CollectionKind::Pages),
        ],
        given
    );

    assert_eq!(Some(ObjectRef::new(3)), sut.lookup("main_8c"));
    assert_eq!(None, sut.lookup("missing"));
    assert_eq!(0, reporter.warning_count());
}

#[test]
fn object_references_its_compound() {
    let mut reporter = BufferReporter::new();
    let sut = raw(
        &[
            compound("conceptc", "concept", "C"),
            compound("classa", "class", "A"),
        ],
        &mut reporter,
    );

    let oref = sut.lookup("classa").unwrap();
    let def = sut.node(oref).and_then(Node::as_compound).unwrap();

    assert_eq!("classa", def.id);
    assert_eq!(1, sut.get(oref).unwrap().compound_index());
}

#[test]
fn unsupported_kind_is_skipped_with_warning() {
    let mut reporter = BufferReporter::new();
    let sut = raw(
        &[
            compound("conceptc", "concept", "C"),
            compound("classa", "class", "A"),
        ],
        &mut reporter,
    );

    assert_eq!(1, sut.len());
    assert_eq!(None, sut.lookup("conceptc"));

    let report = &reporter.reports()[0];
    assert_eq!(Level::Warning, report.level());
    assert_eq!(
        "unsupported compound kind `concept` of `conceptc`",
        report.message()
    );
}

#[test]
fn duplicate_id_keeps_first() {
    let mut reporter = BufferReporter::new();
    let sut = raw(
        &[
            compound("classa", "class", "First"),
            compound("classa", "class", "Second"),
        ],
        &mut reporter,
    );

    assert_eq!(1, sut.len());
    assert_eq!("First", sut.objects()[0].name());
    assert_eq!(1, reporter.warning_count());
    assert_eq!(
        "duplicate compound `classa`",
        reporter.reports()[0].message()
    );
}

#[test]
fn class_permalink_follows_scope() {
    let sut =
        wrap_one(compound("classns_1_1_foo", "class", "Ns::inner::Foo"));

    assert_eq!("classes/ns/inner/foo", sut.permalink());
    assert_eq!("Ns::inner::Foo", sut.name());
    assert_eq!("Foo", sut.label());
    assert_eq!(
        &ObjectKind::Class {
            keyword: "class".into()
        },
        sut.kind()
    );
}

#[test]
fn template_arguments_are_hashed() {
    let sut = wrap_one(compound("classfoo", "class", "ns::Foo<int>"));
    let hash = fxhash::hash32("<int>".as_bytes());

    assert_eq!(format!("classes/ns/foo-{hash:08x}"), sut.permalink());
    assert_eq!("Foo<int>", sut.label());
}

#[test]
fn specializations_do_not_share_permalinks() {
    let mut reporter = BufferReporter::new();
    let sut = raw(
        &[
            compound("a", "class", "Foo<int>"),
            compound("b", "class", "Foo<long>"),
            compound("c", "class", "Foo"),
        ],
        &mut reporter,
    );

    let links: Vec<_> = sut.objects().iter().map(Object::permalink).collect();

    assert_ne!(links[0], links[1]);
    assert_ne!(links[0], links[2]);
    assert_eq!("classes/foo", links[2]);
}

#[test]
fn anonymous_namespace_uses_file_name() {
    let sut = wrap_one(
        compound("namespace_0d0", "namespace", "outer::@0")
            .located("src/detail.cpp"),
    );

    assert_eq!("namespaces/outer/anonymous-detail-cpp", sut.permalink());
    assert_eq!("anonymous namespace", sut.label());
    assert_eq!(&ObjectKind::Namespace { anonymous: true }, sut.kind());
}

#[test]
fn anonymous_namespace_without_location_uses_ordinal() {
    let sut = wrap_one(compound("namespace_0d3", "namespace", "@3"));

    assert_eq!("namespaces/anonymous-3", sut.permalink());
}

#[test]
fn permalink_policy_is_applied() {
    let policy = PermalinkPolicy {
        lowercase: false,
        anonymous_prefix: "Anon".into(),
    };
    let mut reporter = BufferReporter::new();

    let sut = RawGraph::wrap(
        document(&[
            compound("classa", "class", "Ns::Foo"),
            compound("namespace_0d1", "namespace", "@1"),
        ]),
        &policy,
        &mut reporter,
    );

    assert_eq!("classes/Ns/Foo", sut.objects()[0].permalink());
    assert_eq!("namespaces/Anon-1", sut.objects()[1].permalink());
}

#[test]
fn folder_permalink_follows_path() {
    let sut = wrap_one(compound("dir_2", "dir", "src/Util"));

    assert_eq!("files/src/util", sut.permalink());
    assert_eq!("Util", sut.label());
    assert_eq!(&ObjectKind::Folder, sut.kind());
}

#[test]
fn nested_kinds_start_from_own_segment() {
    let file = wrap_one(compound("main_8c", "file", "main.c"));
    let group = wrap_one(compound("group__io", "group", "io").title("I/O"));

    assert_eq!("files/main-c", file.permalink());
    assert_eq!("main-c", file.segment());

    assert_eq!("groups/io", group.permalink());
    assert_eq!("I/O", group.name());
    assert_eq!("I/O", group.label());
}

#[test]
fn related_ids_by_kind() {
    let ns = wrap_one(
        compound("namespacens", "namespace", "ns")
            .inner("innerclass", "classns_1_1_a")
            .inner("innernamespace", "namespacens_1_1_b"),
    );
    let dir = wrap_one(
        compound("dir_1", "dir", "src")
            .inner("innerdir", "dir_2")
            .inner("innerfile", "main_8c"),
    );
    let class = wrap_one(
        compound("classb", "class", "B")
            .base("classa")
            .derived("classc"),
    );

    assert_eq!(["namespacens_1_1_b"], ns.child_ids());
    assert_eq!(["dir_2", "main_8c"], dir.child_ids());

    assert!(class.child_ids().is_empty());
    assert_eq!(["classa"], class.base_ids());
    assert_eq!(["classc"], class.derived_ids());

    assert_eq!(None, class.parent());
    assert!(class.children().is_empty());
}

#[test]
fn scope_components_respect_templates() {
    assert_eq!(vec!["a", "B<c::D>"], scope_components("a::B<c::D>"));
    assert_eq!(vec!["a", "b", "c"], scope_components("a::b::c"));
    assert_eq!(vec!["solo"], scope_components("solo"));
}
