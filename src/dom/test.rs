// Tests for typed Doxygen node tree
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

fn para(children: Vec<Child>) -> Node {
    Node::new(NodeKind::Para, children, NodeData::None)
}

fn text(s: &str) -> Child {
    Child::Text(s.into())
}

#[test]
fn kind_tag_round_trip() {
    for kind in [
        NodeKind::Compounddef,
        NodeKind::GraphNode,
        NodeKind::Sect4,
        NodeKind::Plantumlfile,
        NodeKind::Sp,
    ] {
        assert_eq!(Some(kind), NodeKind::from_tag(kind.tag()));
    }
}

#[test]
fn synthetic_kinds_have_no_tag() {
    assert_eq!(None, NodeKind::from_tag(NodeKind::VarListPair.tag()));
    assert_eq!(None, NodeKind::from_tag(NodeKind::Entity.tag()));
    assert_eq!(None, NodeKind::from_tag("copy"));
}

#[test]
fn sect_levels() {
    assert_eq!(Some(NodeKind::Sect3), NodeKind::sect(3));
    assert_eq!(Some(3), NodeKind::Sect3.sect_level());
    assert_eq!(None, NodeKind::sect(7));
    assert_eq!(None, NodeKind::Para.sect_level());
}

#[test]
fn entity_reports_own_element_name() {
    let (name, text) = entity("copy").unwrap();
    let sut = Node::new(
        NodeKind::Entity,
        vec![],
        NodeData::Entity { name, text },
    );

    assert_eq!("copy", sut.element_name());
    assert_eq!("©", text);
    assert_eq!("para", para(vec![]).element_name());
}

#[test]
fn text_concatenates_descendants() {
    let sut = para(vec![
        text("a "),
        Child::Node(Node::new(
            NodeKind::Bold,
            vec![text("b")],
            NodeData::None,
        )),
        text(" c"),
    ]);

    assert_eq!("a b c", sut.text());
}

#[test]
fn hoisted_resolves_child_index() {
    let sut = para(vec![
        text("x"),
        Child::Node(Node::empty(NodeKind::Linebreak)),
    ]);

    assert_eq!(None, sut.hoisted(Some(0)));
    assert_eq!(
        Some(NodeKind::Linebreak),
        sut.hoisted(Some(1)).map(Node::kind)
    );
    assert_eq!(None, sut.hoisted(None));
    assert_eq!(None, sut.hoisted(Some(5)));
}

#[test]
fn skip_paragraph_settable_through_shared_ref() {
    let sut = para(vec![]);
    let shared = &sut;

    assert!(!shared.skip_paragraph());
    shared.set_skip_paragraph(true);
    assert!(sut.skip_paragraph());
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip: Option<NodeKind>,
}

impl<'a> Visitor<'a> for Recorder {
    fn enter(&mut self, node: &'a Node) -> Walk {
        self.events.push(format!("+{}", node.element_name()));

        if Some(node.kind()) == self.skip {
            Walk::SkipChildren
        } else {
            Walk::Continue
        }
    }

    fn leave(&mut self, node: &'a Node) {
        self.events.push(format!("-{}", node.element_name()));
    }

    fn text(&mut self, text: &'a str) {
        self.events.push(text.into());
    }
}

fn sample_tree() -> Node {
    para(vec![
        text("a"),
        Child::Node(Node::new(
            NodeKind::Bold,
            vec![text("b")],
            NodeData::None,
        )),
        Child::Node(Node::empty(NodeKind::Linebreak)),
    ])
}

#[test]
fn walk_is_preorder_document_order() {
    let tree = sample_tree();
    let mut sut = Recorder::default();

    walk(&tree, &mut sut);

    assert_eq!(
        vec![
            "+para",
            "a",
            "+bold",
            "b",
            "-bold",
            "+linebreak",
            "-linebreak",
            "-para"
        ],
        sut.events
    );
}

#[test]
fn walk_skips_children_on_request() {
    let tree = sample_tree();
    let mut sut = Recorder {
        skip: Some(NodeKind::Bold),
        ..Default::default()
    };

    walk(&tree, &mut sut);

    assert!(!sut.events.contains(&"b".to_string()));
    assert!(sut.events.contains(&"-bold".to_string()));
}
