// Tests for hierarchy and cross-reference resolution
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
    diagnose::{BufferReporter, Level, Report},
    test::{compound, linked},
};

const HEX: &str = "0123456789abcdef0123456789abcdef";

fn oref(graph: &LinkedGraph, id: &str) -> ObjectRef {
    graph.lookup(id).unwrap()
}

fn ids(graph: &LinkedGraph, refs: &[ObjectRef]) -> Vec<String> {
    refs.iter()
        .map(|&r| graph.get(r).unwrap().id().to_string())
        .collect()
}

fn messages(reporter: &BufferReporter) -> Vec<&str> {
    reporter.reports().iter().map(Report::message).collect()
}

mod hierarchy {
    use super::*;

    #[test]
    fn derived_class_is_child_of_base() {
        let (sut, reporter) = linked(&[
            compound("classa", "class", "A").derived("classb"),
            compound("classb", "class", "B").base("classa"),
        ]);

        let a = sut.object("classa").unwrap();
        let b = sut.object("classb").unwrap();

        assert_eq!(vec!["classb"], ids(&sut, a.children()));
        assert_eq!(Some(oref(&sut, "classa")), b.parent());

        let classes = sut.collection(CollectionKind::Classes);
        assert_eq!(vec!["classa"], ids(&sut, classes.roots()));
        assert_eq!(vec!["classa", "classb"], ids(&sut, classes.members()));

        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn missing_namespace_child_is_warning() {
        let (sut, reporter) = linked(&[compound(
            "namespacens",
            "namespace",
            "ns",
        )
        .inner("innernamespace", "namespacens_1_1_gone")]);

        let ns = sut.object("namespacens").unwrap();
        assert!(ns.children().is_empty());

        let namespaces = sut.collection(CollectionKind::Namespaces);
        assert_eq!(vec!["namespacens"], ids(&sut, namespaces.roots()));
        assert_eq!(1, namespaces.members().len());

        assert_eq!(
            vec!["unresolved compound reference `namespacens_1_1_gone`"],
            messages(&reporter)
        );
        assert_eq!(
            vec![
                (Level::Note, "referenced from `namespacens`"),
                (Level::Help, "the reference will be rendered as plain text"),
            ],
            reporter.reports()[0].lines().collect::<Vec<_>>()
        );
    }

    #[test]
    fn nested_namespaces() {
        let (sut, reporter) = linked(&[
            compound("namespacea", "namespace", "a")
                .inner("innernamespace", "namespacea_1_1b"),
            compound("namespacea_1_1b", "namespace", "a::b"),
        ]);

        let a = oref(&sut, "namespacea");
        let b = sut.object("namespacea_1_1b").unwrap();

        assert_eq!(Some(a), b.parent());
        assert_eq!("namespaces/a/b", b.permalink());

        let namespaces = sut.collection(CollectionKind::Namespaces);
        assert_eq!(vec!["namespacea"], ids(&sut, namespaces.roots()));
        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn diamond_inheritance() {
        let (sut, reporter) = linked(&[
            compound("classa", "class", "A")
                .derived("classb")
                .derived("classc"),
            compound("classb", "class", "B").base("classa").derived("classd"),
            compound("classc", "class", "C").base("classa").derived("classd"),
            compound("classd", "class", "D").base("classb").base("classc"),
        ]);

        let d = oref(&sut, "classd");
        let mut ancestors = ids(&sut, &sut.inheritance().ancestors(d));
        ancestors.sort();

        assert_eq!(vec!["classa", "classb", "classc"], ancestors);

        for base in ["classb", "classc"] {
            let children = sut.object(base).unwrap().children();
            assert_eq!(vec!["classd"], ids(&sut, children), "{base}");
        }

        assert_eq!(Some(oref(&sut, "classb")), sut.get(d).unwrap().parent());
        assert_eq!(
            vec!["classb", "classc"],
            ids(&sut, &sut.inheritance().bases(d))
        );

        let classes = sut.collection(CollectionKind::Classes);
        assert_eq!(vec!["classa"], ids(&sut, classes.roots()));

        // Each relationship is listed from both ends but recorded once.
        assert_eq!(4, sut.inheritance().edge_count());
        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn parent_is_first_listed_base() {
        // The second listed base precedes the first in the document,
        //   and both list the derived class.
        let (sut, reporter) = linked(&[
            compound("classc", "class", "C").derived("classd"),
            compound("classb", "class", "B").derived("classd"),
            compound("classd", "class", "D").base("classb").base("classc"),
        ]);

        let d = oref(&sut, "classd");

        assert_eq!(Some(oref(&sut, "classb")), sut.get(d).unwrap().parent());
        assert_eq!(
            vec!["classb", "classc"],
            ids(&sut, &sut.inheritance().bases(d))
        );
        assert_eq!(2, sut.inheritance().edge_count());
        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn relationship_listed_by_base_only() {
        let (sut, reporter) = linked(&[
            compound("classa", "class", "A").derived("classb"),
            compound("classb", "class", "B"),
        ]);

        let b = sut.object("classb").unwrap();

        assert_eq!(Some(oref(&sut, "classa")), b.parent());
        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn folder_children_are_folders_and_files() {
        let (sut, reporter) = linked(&[
            compound("dir_1", "dir", "src")
                .inner("innerdir", "dir_2")
                .inner("innerfile", "main_8c"),
            compound("dir_2", "dir", "src/util"),
            compound("main_8c", "file", "main.c"),
            compound("util_8c", "file", "util.c"),
        ]);

        let src = sut.object("dir_1").unwrap();
        assert_eq!(vec!["dir_2", "main_8c"], ids(&sut, src.children()));

        let files = sut.collection(CollectionKind::Files);
        assert_eq!(vec!["dir_1", "util_8c"], ids(&sut, files.roots()));
        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn second_parent_is_ignored() {
        let (sut, reporter) = linked(&[
            compound("group__a", "group", "a").inner("innergroup", "group__c"),
            compound("group__b", "group", "b").inner("innergroup", "group__c"),
            compound("group__c", "group", "c"),
        ]);

        let c = sut.object("group__c").unwrap();

        assert_eq!(Some(oref(&sut, "group__a")), c.parent());
        assert!(sut.object("group__b").unwrap().children().is_empty());
        assert_eq!(
            vec!["`group__c` has more than one parent"],
            messages(&reporter)
        );
    }

    #[test]
    fn cross_collection_child_is_warning() {
        let (sut, reporter) = linked(&[
            compound("namespacens", "namespace", "ns")
                .inner("innernamespace", "classns_1_1_a"),
            compound("classns_1_1_a", "class", "ns::A"),
        ]);

        assert!(sut.object("namespacens").unwrap().children().is_empty());
        assert_eq!(None, sut.object("classns_1_1_a").unwrap().parent());
        assert_eq!(
            vec![
                "child `classns_1_1_a` of `namespacens` is one of the classes"
            ],
            messages(&reporter)
        );
    }

    #[test]
    fn parent_cycle_is_refused() {
        let (sut, reporter) = linked(&[
            compound("page_a", "page", "a").inner("innerpage", "page_b"),
            compound("page_b", "page", "b").inner("innerpage", "page_a"),
        ]);

        let pages = sut.collection(CollectionKind::Pages);

        assert_eq!(vec!["page_a"], ids(&sut, pages.roots()));
        assert_eq!(
            Some(oref(&sut, "page_a")),
            sut.object("page_b").unwrap().parent()
        );
        assert_eq!(
            vec!["`page_a` cannot be a child of `page_b`"],
            messages(&reporter)
        );
    }

    #[test]
    fn self_derivation_is_ignored() {
        let (sut, reporter) =
            linked(&[compound("classa", "class", "A").base("classa")]);

        assert_eq!(None, sut.object("classa").unwrap().parent());
        assert_eq!(0, sut.inheritance().edge_count());
        assert_eq!(0, reporter.warning_count());
    }
}

mod permalink {
    use super::*;

    #[test]
    fn nested_kinds_nest_beneath_parent() {
        let (sut, reporter) = linked(&[
            compound("dir_1", "dir", "src").inner("innerfile", "main_8c"),
            compound("main_8c", "file", "main.c"),
            compound("group__io", "group", "io")
                .inner("innergroup", "group__f"),
            compound("group__f", "group", "Files"),
            compound("index", "page", "index").inner("innerpage", "intro"),
            compound("intro", "page", "intro"),
        ]);

        let given: Vec<_> = sut
            .objects()
            .iter()
            .map(|obj| (obj.id(), obj.permalink()))
            .collect();

        assert_eq!(
            vec![
                ("dir_1", "files/src"),
                ("main_8c", "files/src/main-c"),
                ("group__io", "groups/io"),
                ("group__f", "groups/io/files"),
                ("index", "pages/index"),
                ("intro", "pages/index/intro"),
            ],
            given
        );

        assert_eq!(0, reporter.warning_count());
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let (sut, reporter) = linked(&[
            compound("class_foo", "class", "Foo"),
            compound("classfoo", "class", "foo"),
            compound("class_f_o_o", "class", "FOO"),
        ]);

        let given: Vec<_> =
            sut.objects().iter().map(Object::permalink).collect();

        assert_eq!(
            vec!["classes/foo", "classes/foo-1", "classes/foo-2"],
            given
        );

        assert_eq!(2, reporter.warning_count());
        assert_eq!(
            vec![
                (Level::Note, "already assigned to `class_foo`"),
                (Level::Help, "`classes/foo-1` will be used instead"),
            ],
            reporter.reports()[0].lines().collect::<Vec<_>>()
        );
    }

    #[test]
    fn suffix_is_first_free() {
        let (sut, reporter) = linked(&[
            compound("a", "class", "Foo"),
            compound("b", "class", "Foo_1"),
            compound("c", "class", "FOO"),
        ]);

        let given: Vec<_> =
            sut.objects().iter().map(Object::permalink).collect();

        assert_eq!(
            vec!["classes/foo", "classes/foo-1", "classes/foo-2"],
            given
        );
        assert_eq!(1, reporter.warning_count());
    }

    #[test]
    fn inheritance_does_not_affect_suffixes() {
        // `X` derives from `Base` yet precedes the colliding `x`.
        let (sut, reporter) = linked(&[
            compound("classbase", "class", "Base").derived("class_x"),
            compound("class_x", "class", "X").base("classbase"),
            compound("classx", "class", "x"),
        ]);

        assert_eq!("classes/x", sut.page_permalink("class_x").unwrap());
        assert_eq!("classes/x-1", sut.page_permalink("classx").unwrap());
        assert_eq!(1, reporter.warning_count());
    }

    #[test]
    fn parents_are_assigned_before_children() {
        // The child precedes both candidates for its parent's permalink.
        let (sut, _) = linked(&[
            compound("intro", "page", "intro"),
            compound("first", "page", "guide"),
            compound("second", "page", "guide").inner("innerpage", "intro"),
        ]);

        assert_eq!("pages/guide", sut.page_permalink("first").unwrap());
        assert_eq!("pages/guide-1", sut.page_permalink("second").unwrap());
        assert_eq!("pages/guide-1/intro", sut.page_permalink("intro").unwrap());
    }

    #[test]
    fn permalinks_are_unique() {
        let (sut, _) = linked(&[
            compound("a", "page", "x"),
            compound("b", "page", "x"),
            compound("c", "page", "x-1"),
            compound("d", "page", "x"),
        ]);

        let mut all: Vec<_> =
            sut.objects().iter().map(Object::permalink).collect();
        let len = all.len();

        all.sort();
        all.dedup();

        assert_eq!(len, all.len());

        for obj in sut.objects() {
            assert_eq!(
                sut.lookup(obj.id()),
                sut.permalink_owner(obj.permalink())
            );
        }
    }
}

mod reference {
    use super::*;

    #[test]
    fn compound_reference() {
        let (sut, _) = linked(&[compound("classns_1_1_a", "class", "ns::A")]);

        assert_eq!(Some("classes/ns/a"), sut.page_permalink("classns_1_1_a"));
        assert_eq!(
            Ok("classes/ns/a".to_string()),
            sut.resolve_ref("classns_1_1_a", RefKind::Compound)
        );
    }

    #[test]
    fn member_reference() {
        let (sut, _) = linked(&[compound("classns_1_1_a", "class", "ns::A")]);
        let refid = format!("classns_1_1_a_1a{HEX}");

        assert_eq!(
            Ok(format!("classes/ns/a#a{HEX}")),
            sut.resolve_ref(&refid, RefKind::Member)
        );
    }

    #[test]
    fn direct_compound_beats_toc_item() {
        let (sut, _) = linked(&[
            compound("page_a", "page", "a").detailed(
                r#"<para><toclist>
                     <tocitem id="page_b_1intro">Intro</tocitem>
                   </toclist></para>"#,
            ),
            compound("page_b", "page", "b"),
        ]);

        assert_eq!(
            Ok("pages/b#intro".to_string()),
            sut.resolve_ref("page_b_1intro", RefKind::Member)
        );
    }

    #[test]
    fn toc_item_beats_anchor() {
        let (sut, _) = linked(&[
            compound("page_a", "page", "a").detailed(
                r#"<para><anchor id="notes_1usage"/></para>"#,
            ),
            compound("page_b", "page", "b").detailed(
                r#"<para><toclist>
                     <tocitem id="notes_1usage">Usage</tocitem>
                   </toclist></para>"#,
            ),
        ]);

        assert_eq!(
            Ok("pages/b#usage".to_string()),
            sut.resolve_ref("notes_1usage", RefKind::Member)
        );
    }

    #[test]
    fn inline_anchors() {
        let (sut, _) = linked(&[compound("page_a", "page", "a").detailed(
            r#"<sect1 id="guide_1setup"><title>Setup</title>
                 <para><anchor id="guide_1here"/></para>
                 <para><xrefsect id="todo_1_todo000001">
                   <xreftitle>Todo</xreftitle>
                   <xrefdescription><para>Later.</para></xrefdescription>
                 </xrefsect></para>
               </sect1>"#,
        )]);

        assert_eq!(
            Ok("pages/a#setup".to_string()),
            sut.resolve_ref("guide_1setup", RefKind::Member)
        );
        assert_eq!(
            Ok("pages/a#here".to_string()),
            sut.resolve_ref("guide_1here", RefKind::Member)
        );
        assert_eq!(
            Ok("pages/a#_todo000001".to_string()),
            sut.resolve_ref("todo_1_todo000001", RefKind::XrefSect)
        );
    }

    #[test]
    fn unresolved_reference_is_warning() {
        let (sut, _) = linked(&[compound("classa", "class", "A")]);
        let mut reporter = BufferReporter::new();

        assert_eq!(
            None,
            sut.permalink("classmissing", RefKind::Compound, &mut reporter)
        );
        assert_eq!(
            None,
            sut.permalink("nothing_1here", RefKind::Member, &mut reporter)
        );

        assert_eq!(
            vec![
                "unresolved compound reference `classmissing`",
                "unresolved member reference `nothing_1here`",
            ],
            messages(&reporter)
        );
    }

    #[test]
    fn check_references_reports_with_source() {
        let (sut, _) = linked(&[
            compound("classa", "class", "A"),
            compound("page_x", "page", "x").detailed(
                r#"<para><ref refid="classa" kindref="compound">A</ref>
                   <ref refid="classa_1gone" kindref="member">gone</ref>
                   <ref refid="lost" kindref="compound">lost</ref>
                   <ref refid="ext" kindref="compound" external="tags">e</ref>
                   </para>"#,
            ),
        ]);
        let mut reporter = BufferReporter::new();

        // The member reference resolves to the page of its compound;
        //   anchors are not verified.
        assert_eq!(2, sut.check_references(&mut reporter));

        assert_eq!(
            vec!["unresolved compound reference `lost`"],
            messages(&reporter)
        );
        assert_eq!(
            Some((Level::Note, "referenced from `page_x`")),
            reporter.reports()[0].lines().next()
        );
    }
}
