// Tests for renderer dispatch
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
use crate::{build::compounddef, dom::entity, xml::parse_str};

fn text(s: &str) -> Child {
    Child::Text(s.into())
}

fn node(kind: NodeKind, children: Vec<Child>) -> Child {
    Node::new(kind, children, NodeData::None).into()
}

fn para(children: Vec<Child>) -> Node {
    Node::new(NodeKind::Para, children, NodeData::None)
}

fn copy() -> Child {
    let (name, text) = entity("copy").unwrap();
    Node::new(NodeKind::Entity, vec![], NodeData::Entity { name, text })
        .into()
}

fn bold(d: &Dispatch<String>, node: &Node, dest: &mut String) -> fmt::Result {
    dest.push_str("**");
    d.render_children(node, dest)?;
    dest.push_str("**");
    Ok(())
}

#[test]
fn unregistered_kinds_render_children() {
    let sut = Dispatch::<String>::new();
    let given = para(vec![
        text("a "),
        node(NodeKind::Bold, vec![text("b")]),
        text(" c"),
    ]);

    let mut dest = String::new();
    sut.render(&given, &mut dest).unwrap();

    assert_eq!("a b c", dest);
    assert!(!sut.is_registered(NodeKind::Bold));
}

#[test]
fn registered_function_is_used_for_nested_nodes() {
    let sut = Dispatch::new().with(NodeKind::Bold, bold);
    let given = para(vec![
        text("x "),
        node(
            NodeKind::Emphasis,
            vec![node(NodeKind::Bold, vec![text("y")])],
        ),
    ]);

    let mut dest = String::new();
    sut.render(&given, &mut dest).unwrap();

    assert_eq!("x **y**", dest);
}

#[test]
fn register_returns_previous() {
    let mut sut = Dispatch::<String>::new();

    assert!(sut.register(NodeKind::Bold, bold).is_none());
    assert!(sut.register(NodeKind::Bold, omit).is_some());

    let given = para(vec![text("a"), node(NodeKind::Bold, vec![text("b")])]);
    let mut dest = String::new();
    sut.render(&given, &mut dest).unwrap();

    assert_eq!("a", dest);
}

#[test]
fn fallback_can_be_replaced() {
    let sut = Dispatch::<String>::new()
        .with(NodeKind::Para, children)
        .with_fallback(omit);
    let given = para(vec![
        text("kept"),
        node(NodeKind::Emphasis, vec![text("dropped")]),
    ]);

    let mut dest = String::new();
    sut.render(&given, &mut dest).unwrap();

    assert_eq!("kept", dest);
}

#[test]
fn plain_text_expands_entities_and_spacing() {
    let given = para(vec![
        text("a"),
        Node::new(NodeKind::Sp, vec![], NodeData::Sp { count: 3 }).into(),
        text("b"),
        node(NodeKind::Linebreak, vec![]),
        copy(),
        text(" 2021"),
    ]);

    assert_eq!("a   b\n© 2021", plain_text(&given));
    assert_eq!("ab 2021", given.text());
}

#[test]
fn plain_text_of_built_description() {
    let src = r#"<compounddef id="classa" kind="class">
      <compoundname>A</compoundname>
      <briefdescription>
        <para>Hello <bold>bold</bold><copy/>!</para>
      </briefdescription>
    </compounddef>"#;

    let def = compounddef(&parse_str(src).unwrap()).unwrap();
    let brief = def.first_of(NodeKind::Briefdescription).unwrap();

    assert_eq!("Hello bold©!", plain_text(brief).trim());
}

#[test]
fn debug_lists_registered_kinds() {
    let sut = Dispatch::<String>::new()
        .with(NodeKind::Para, children)
        .with(NodeKind::Bold, bold);

    let mut kinds = [NodeKind::Para, NodeKind::Bold];
    kinds.sort();

    assert_eq!(format!("Dispatch {{ kinds: {kinds:?} }}"), format!("{sut:?}"));
}
