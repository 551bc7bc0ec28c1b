// Description builders
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

//! Builders for descriptions and the markup within them.
//!
//! A description is a sequence of paragraphs and sections;
//!   paragraphs contain mixed text and markup
//!     (emphasis, references, lists, tables, images, and so on).
//! The schema distinguishes several overlapping groups of markup that
//!   are permitted in different contexts;
//!     these builders accept the union of those groups wherever mixed
//!     content is permitted,
//!       and rely on Doxygen not to emit a list inside a title.
//! Sections and paragraphs are the exception,
//!   since their nesting is what gives a description its structure.

use super::{
    listing::programlisting, table::table, text_node, BuildResult, Scope,
    ViolationKind,
};
use crate::{
    dom::{
        entity, Diagram, Image, List, ListItem, Node, NodeData, NodeKind,
        Ref, RefKind, Sect,
    },
    global,
    xml::Element,
};

/// Build a description
///   (`briefdescription`, `detaileddescription`, and the other elements
///     of the schema's `descriptionType`).
pub(super) fn description(ele: &Element) -> BuildResult<Node> {
    const BUILDER: &str = "description builder";

    let kind = NodeKind::from_tag(ele.name())
        .filter(NodeKind::is_description)
        .ok_or_else(|| {
            ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
                .rejected_by(BUILDER)
        })?;

    let mut scope = Scope::new(ele, kind, BUILDER);
    let mut title = None;

    scope.attrs(&[])?;
    scope.each_inner(|scope, child| match child.name() {
        "title" => scope.push_once(&mut title, child, doc_title(child)?),
        "para" => push(scope, para(child)?),
        "internal" => push(scope, internal(child, 1)?),
        "sect1" => push(scope, sect(child, 1)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Description { title }))
}

/// Build a paragraph.
pub(super) fn para(ele: &Element) -> BuildResult<Node> {
    mixed(ele, NodeKind::Para, "paragraph builder", NodeData::None)
}

/// Build a `sectN` of the given `level`.
///
/// A section may contain only sections of the next level.
fn sect(ele: &Element, level: u8) -> BuildResult<Node> {
    const BUILDER: &str = "section builder";

    let kind = NodeKind::sect(level).ok_or_else(|| {
        ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
            .rejected_by(BUILDER)
    })?;

    let mut scope = Scope::new(ele, kind, BUILDER);
    let attrs = scope.attrs(&["id"])?;
    let id = attrs.opt_nonempty("id");
    let mut title = None;

    scope.each_inner(|scope, child| match child.name() {
        "title" => scope.push_once(&mut title, child, doc_title(child)?),
        "para" => push(scope, para(child)?),
        "internal" => push(scope, internal(child, level + 1)?),
        tag if is_sect_of(tag, level + 1) => {
            push(scope, sect(child, level + 1)?)
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Sect(Sect { level, id, title })))
}

fn is_sect_of(tag: &str, level: u8) -> bool {
    level <= global::MAX_SECT_LEVEL
        && NodeKind::sect(level).map(|kind| kind.tag()) == Some(tag)
}

/// Build internal documentation,
///   which may contain sections of `level`.
fn internal(ele: &Element, level: u8) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Internal, "internal builder");

    scope.attrs(&[])?;
    scope.each_inner(|scope, child| match child.name() {
        "para" => push(scope, para(child)?),
        tag if is_sect_of(tag, level) => push(scope, sect(child, level)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

/// Build a formatted title.
pub(super) fn doc_title(ele: &Element) -> BuildResult<Node> {
    mixed(ele, NodeKind::Title, "title builder", NodeData::None)
}

/// Build any element permitted within mixed description content.
pub(super) fn content(ele: &Element) -> BuildResult<Node> {
    use NodeKind as K;

    let tag = ele.name();

    let kind = match NodeKind::from_tag(tag) {
        Some(kind) => kind,
        None => return entity_node(ele),
    };

    match kind {
        K::Bold
        | K::S
        | K::Strike
        | K::Underline
        | K::Emphasis
        | K::Computeroutput
        | K::Subscript
        | K::Superscript
        | K::Center
        | K::Small
        | K::Cite
        | K::Del
        | K::Ins
        | K::Summary
        | K::Preformatted => {
            mixed(ele, kind, "markup builder", NodeData::None)
        }

        K::Htmlonly => raw(ele, kind, &["block"]),
        K::Manonly
        | K::Xmlonly
        | K::Rtfonly
        | K::Latexonly
        | K::Docbookonly
        | K::Verbatim
        | K::Javadocliteral
        | K::Javadoccode => raw(ele, kind, &[]),

        K::Ulink => ulink(ele),
        K::Ref => reference(ele),
        K::Anchor => anchor(ele),
        K::Formula => formula(ele),
        K::Image => image(ele),
        K::Dot
        | K::Msc
        | K::Plantuml
        | K::Dotfile
        | K::Mscfile
        | K::Diafile
        | K::Plantumlfile => diagram(ele, kind),
        K::Emoji => emoji(ele),
        K::Linebreak | K::Hruler => empty(ele, kind),

        K::Itemizedlist | K::Orderedlist => list(ele, kind),
        K::Simplesect => simplesect(ele),
        K::Variablelist => variablelist(ele),
        K::Table => table(ele),
        K::Heading => heading(ele),
        K::Toclist => toclist(ele),
        K::Language => language(ele),
        K::Parameterlist => parameterlist(ele),
        K::Xrefsect => xrefsect(ele),
        K::Copydoc => copydoc(ele),
        K::Blockquote | K::Parblock => para_container(ele, kind),
        K::Details => details(ele),
        K::Indexentry => indexentry(ele),
        K::Programlisting => programlisting(ele),
        K::Para => para(ele),

        _ => Err(ele
            .violation(ViolationKind::UnexpectedElement(tag.into()))
            .rejected_by("description content builder")),
    }
}

/// Append a node built by a child builder.
fn push(scope: &mut Scope, node: Node) -> BuildResult<()> {
    scope.push(node);
    Ok(())
}

/// Build an element with mixed content and no attributes.
fn mixed(
    ele: &Element,
    kind: NodeKind,
    builder: &'static str,
    data: NodeData,
) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, builder);

    scope.attrs(&[])?;
    mixed_content(&mut scope)?;

    Ok(scope.finish(data))
}

/// Walk the mixed content of the element of `scope`.
fn mixed_content(scope: &mut Scope) -> BuildResult<()> {
    scope.each_mixed(|scope, child| push(scope, content(child)?))
}

/// Build an element whose content is taken literally.
fn raw(
    ele: &Element,
    kind: NodeKind,
    known: &'static [&'static str],
) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "verbatim builder");
    let attrs = scope.attrs(known)?;

    scope.text_only()?;

    Ok(match attrs.opt_bool("block")? {
        Some(block) => scope.finish(NodeData::RawBlock { block }),
        None => scope.finish(NodeData::None),
    })
}

fn empty(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "empty element builder");

    scope.attrs(&[])?;
    scope.empty()?;

    Ok(scope.finish(NodeData::None))
}

/// Build a character entity element such as `<copy/>`.
fn entity_node(ele: &Element) -> BuildResult<Node> {
    const BUILDER: &str = "entity builder";

    let (name, text) = entity(ele.name()).ok_or_else(|| {
        ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
            .rejected_by(BUILDER)
    })?;

    let mut scope = Scope::new(ele, NodeKind::Entity, BUILDER);

    scope.attrs(&[])?;
    scope.empty()?;

    Ok(scope.finish(NodeData::Entity { name, text }))
}

fn ulink(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Ulink, "ulink builder");
    let url = scope.attrs(&["url"])?.req("url")?;

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::Ulink { url }))
}

/// Build a cross-reference (`ref`).
///
/// This is shared by descriptions and linked text.
pub(super) fn reference(ele: &Element) -> BuildResult<Node> {
    const BUILDER: &str = "reference builder";

    let mut scope = Scope::new(ele, NodeKind::Ref, BUILDER);
    let attrs = scope.attrs(&["refid", "kindref", "external", "tooltip"])?;

    let refid = attrs.req("refid")?;
    let kindref_value = attrs.req("kindref")?;
    let kindref = RefKind::parse(&kindref_value).ok_or_else(|| {
        scope.violation(ViolationKind::InvalidAttrValue {
            attr: "kindref".into(),
            value: kindref_value.clone(),
            expected: "`compound` or `member`",
        })
    })?;

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::Ref(Ref {
        refid,
        kindref,
        external: attrs.opt_nonempty("external"),
        tooltip: attrs.opt("tooltip"),
    })))
}

fn anchor(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Anchor, "anchor builder");
    let id = scope.attrs(&["id"])?.req("id")?;

    scope.empty()?;

    Ok(scope.finish(NodeData::Anchor { id }))
}

fn formula(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Formula, "formula builder");
    let id = scope.attrs(&["id"])?.req("id")?;

    scope.text_only()?;

    Ok(scope.finish(NodeData::Formula { id }))
}

fn image(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Image, "image builder");
    let attrs = scope.attrs(&[
        "type", "name", "width", "height", "alt", "inline", "caption",
    ])?;

    let data = Image {
        format: attrs.opt("type"),
        name: attrs.opt("name"),
        width: attrs.opt("width"),
        height: attrs.opt("height"),
        alt: attrs.opt("alt"),
        inline: attrs.flag("inline")?,
        caption: attrs.opt("caption"),
    };

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::Image(data)))
}

/// Build an inline diagram or a reference to a diagram file.
fn diagram(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "diagram builder");
    let attrs =
        scope.attrs(&["name", "width", "height", "caption", "engine"])?;

    let data = Diagram {
        name: attrs.opt("name"),
        width: attrs.opt("width"),
        height: attrs.opt("height"),
        caption: attrs.opt("caption"),
        engine: attrs.opt("engine"),
    };

    match kind {
        // Diagram source is literal.
        NodeKind::Dot | NodeKind::Msc | NodeKind::Plantuml => {
            scope.text_only()?;
        }
        _ => mixed_content(&mut scope)?,
    }

    Ok(scope.finish(NodeData::Diagram(data)))
}

fn emoji(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Emoji, "emoji builder");
    let attrs = scope.attrs(&["name", "unicode"])?;

    let name = attrs.req("name")?;
    let unicode = attrs.req("unicode")?;

    scope.empty()?;

    Ok(scope.finish(NodeData::Emoji { name, unicode }))
}

fn list(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "list builder");
    let known: &'static [&'static str] = match kind {
        NodeKind::Orderedlist => &["type", "start"],
        _ => &[],
    };
    let attrs = scope.attrs(known)?;

    let data = List {
        style: attrs.opt("type"),
        start: attrs.opt_num("start")?,
    };

    scope.each_element(|scope, child| match child.name() {
        "listitem" => push(scope, listitem(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::List(data)))
}

fn listitem(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Listitem, "list item builder");
    let attrs = scope.attrs(&["override", "value"])?;

    let data = ListItem {
        override_: attrs.opt("override"),
        value: attrs.opt_num("value")?,
    };

    scope.each_inner(|scope, child| match child.name() {
        "para" => push(scope, para(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::ListItem(data)))
}

fn simplesect(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Simplesect, "simple section builder");
    let kind = scope.attrs(&["kind"])?.req("kind")?;
    let mut title = None;

    scope.each_inner(|scope, child| match child.name() {
        "title" => scope.push_once(&mut title, child, doc_title(child)?),
        "para" => push(scope, para(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::SimpleSect { kind, title }))
}

/// Build a variable list,
///   pairing each term with its definition.
///
/// The schema represents a variable list as a flat alternating sequence
///   of `varlistentry` (the term) and `listitem` (the definition).
/// Each pair becomes a synthetic [`NodeKind::VarListPair`] node holding
///   the two in that order,
///     so that a list of _N_ well-formed children produces _N/2_ pairs.
fn variablelist(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Variablelist, "variable list builder");
    // The pending term,
    //   when awaiting its definition.
    let mut term: Option<Node> = None;

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match (child.name(), term.take()) {
        ("varlistentry", None) => {
            term.replace(varlistentry(child)?);
            Ok(())
        }
        ("varlistentry", Some(_)) => {
            Err(scope.violation(ViolationKind::ConsecutiveTerms))
        }
        ("listitem", Some(entry)) => {
            let def = listitem(child)?;

            push(
                scope,
                Node::new(
                    NodeKind::VarListPair,
                    vec![entry.into(), def.into()],
                    NodeData::None,
                ),
            )
        }
        ("listitem", None) => {
            Err(scope.violation(ViolationKind::ListItemWithoutTerm))
        }
        _ => Err(scope.unexpected(child)),
    })?;

    if term.is_some() {
        return Err(scope.violation(ViolationKind::UnpairedTerm));
    }

    Ok(scope.finish(NodeData::None))
}

fn varlistentry(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Varlistentry, "variable list entry builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "term" => push(
            scope,
            mixed(child, NodeKind::Term, "term builder", NodeData::None)?,
        ),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn heading(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Heading, "heading builder");
    let level = scope.attrs(&["level"])?.req_num("level")?;

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::Heading { level }))
}

fn toclist(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Toclist, "toc list builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "tocitem" => push(scope, tocitem(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn tocitem(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Tocitem, "toc item builder");
    let id = scope.attrs(&["id"])?.req("id")?;

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::TocItem { id }))
}

fn language(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Language, "language builder");
    let langid = scope.attrs(&["langid"])?.req("langid")?;

    scope.each_inner(|scope, child| match child.name() {
        "para" => push(scope, para(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Language { langid }))
}

fn parameterlist(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Parameterlist, "parameter list builder");
    let kind = scope.attrs(&["kind"])?.req("kind")?;

    scope.each_element(|scope, child| match child.name() {
        "parameteritem" => push(scope, parameteritem(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::ParameterList { kind }))
}

fn parameteritem(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Parameteritem, "parameter item builder");
    let mut descr = None;

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "parameternamelist" => push(scope, parameternamelist(child)?),
        "parameterdescription" => {
            scope.push_once(&mut descr, child, description(child)?)
        }
        _ => Err(scope.unexpected(child)),
    })?;

    if descr.is_none() {
        return Err(scope.violation(ViolationKind::MissingElement(
            "parameterdescription".into(),
        )));
    }

    Ok(scope.finish(NodeData::None))
}

fn parameternamelist(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(
        ele,
        NodeKind::Parameternamelist,
        "parameter name list builder",
    );

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "parametertype" => push(
            scope,
            mixed(
                child,
                NodeKind::Parametertype,
                "parameter type builder",
                NodeData::None,
            )?,
        ),
        "parametername" => push(scope, parametername(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn parametername(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Parametername, "parameter name builder");
    let direction = scope.attrs(&["direction"])?.opt("direction");

    mixed_content(&mut scope)?;

    Ok(scope.finish(NodeData::ParameterName { direction }))
}

/// Build a cross-reference section
///   (e.g. a `\todo` or `\deprecated` item).
fn xrefsect(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Xrefsect, "xrefsect builder");
    let id = scope.attrs(&["id"])?.req("id")?;
    let mut title = None;
    let mut descr = None;

    scope.each_element(|scope, child| match child.name() {
        "xreftitle" => {
            let node = text_node(child, NodeKind::Xreftitle)?;
            title.get_or_insert_with(|| node.text());
            push(scope, node)
        }
        "xrefdescription" => {
            scope.push_once(&mut descr, child, description(child)?)
        }
        _ => Err(scope.unexpected(child)),
    })?;

    if descr.is_none() {
        return Err(scope.violation(ViolationKind::MissingElement(
            "xrefdescription".into(),
        )));
    }

    Ok(scope.finish(NodeData::XrefSect { id, title }))
}

fn copydoc(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Copydoc, "copydoc builder");
    let link = scope.attrs(&["link"])?.req("link")?;

    scope.each_inner(|scope, child| match child.name() {
        "para" => push(scope, para(child)?),
        "sect1" => push(scope, sect(child, 1)?),
        "internal" => push(scope, internal(child, 1)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::CopyDoc { link }))
}

/// Build a container of paragraphs with no attributes
///   (`blockquote` and `parblock`).
fn para_container(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "paragraph container builder");

    scope.attrs(&[])?;
    scope.each_inner(|scope, child| match child.name() {
        "para" => push(scope, para(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn details(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Details, "details builder");
    let mut summary = None;

    scope.attrs(&[])?;
    scope.each_inner(|scope, child| match child.name() {
        "summary" => scope.push_once(&mut summary, child, content(child)?),
        "para" => push(scope, para(child)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn indexentry(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Indexentry, "index entry builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "primaryie" => push(scope, text_node(child, NodeKind::Primaryie)?),
        "secondaryie" => push(scope, text_node(child, NodeKind::Secondaryie)?),
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}
