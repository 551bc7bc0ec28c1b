// Compound builders
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

//! Builders for `compounddef` and its structural children.
//!
//! A compound is the unit of Doxygen output:
//!   each compound file holds exactly one.
//! Beyond its descriptions and member sections,
//!   a compound holds references to related compounds
//!     (bases, derived classes, and nested compounds),
//!   which [`crate::resolve`] later links into a graph.

use super::{
    descr,
    listing::programlisting,
    member::{
        linked_text, listed_member, location, sectiondef, templateparamlist,
    },
    text_node, BuildResult, Scope, ViolationKind,
};
use crate::{
    dom::{
        CompoundDef, CompoundRef, Include, InnerKind, InnerRef, Node,
        NodeData, NodeKind,
    },
    xml::Element,
};

/// Build a `compounddef`.
///
/// `compounddef/@id`, `compounddef/@kind`, and `compoundname` are
///   mandatory.
pub fn compounddef(ele: &Element) -> BuildResult<Node> {
    const BUILDER: &str = "compound builder";

    if ele.name() != NodeKind::Compounddef.tag() {
        return Err(ele
            .violation(ViolationKind::UnexpectedRoot {
                expected: "compounddef",
            })
            .rejected_by(BUILDER));
    }

    let mut scope = Scope::new(ele, NodeKind::Compounddef, BUILDER);
    let attrs = scope.attrs(&[
        "id", "kind", "language", "prot", "final", "inline", "sealed",
        "abstract",
    ])?;

    let mut def = CompoundDef {
        id: attrs.req("id")?,
        kind: attrs.req("kind")?,
        language: attrs.opt_nonempty("language"),
        prot: attrs.opt_nonempty("prot"),
        is_final: attrs.flag("final")?,
        is_inline: attrs.flag("inline")?,
        is_sealed: attrs.flag("sealed")?,
        is_abstract: attrs.flag("abstract")?,
        ..Default::default()
    };
    let mut name = None;
    let mut title = None;

    scope.each_element(|scope, child| {
        let tag = child.name();

        match tag {
            "compoundname" => {
                let node = text_node(child, NodeKind::Compoundname)?;
                def.compound_name = node.text();
                scope.push_once(&mut name, child, node)
            }
            "title" => {
                let node = text_node(child, NodeKind::Title)?;
                def.title = Some(node.text());
                scope.push_once(&mut title, child, node)
            }

            "basecompoundref" | "derivedcompoundref" => {
                let (node, data) = compoundref(child)?;

                if tag == "basecompoundref" {
                    def.base_refs.push(data);
                } else {
                    def.derived_refs.push(data);
                }

                scope.push(node);
                Ok(())
            }

            "includes" | "includedby" => {
                scope.push(include(child)?);
                Ok(())
            }

            "incdepgraph" | "invincdepgraph" | "inheritancegraph"
            | "collaborationgraph" => {
                scope.push(graph(child)?);
                Ok(())
            }

            _ if InnerKind::from_tag(tag).is_some() => {
                let (node, data) = inner(child)?;
                def.inner.push(data);
                scope.push(node);
                Ok(())
            }

            "qualifier" => {
                scope.push(text_node(child, NodeKind::Qualifier)?);
                Ok(())
            }
            "templateparamlist" => scope.push_once(
                &mut def.template_params,
                child,
                templateparamlist(child)?,
            ),
            "sectiondef" => {
                let index = scope.push(sectiondef(child)?);
                def.sections.push(index);
                Ok(())
            }
            "tableofcontents" => {
                scope.push_once(&mut def.toc, child, tableofcontents(child)?)
            }
            "requiresclause" | "initializer" => {
                let kind = NodeKind::from_tag(tag)
                    .ok_or_else(|| scope.unexpected(child))?;
                scope.push(linked_text(child, kind)?);
                Ok(())
            }

            "briefdescription" => scope.push_once(
                &mut def.brief,
                child,
                descr::description(child)?,
            ),
            "detaileddescription" => scope.push_once(
                &mut def.detailed,
                child,
                descr::description(child)?,
            ),

            "exports" => {
                scope.push(exports(child)?);
                Ok(())
            }
            "programlisting" => scope.push_once(
                &mut def.listing,
                child,
                programlisting(child)?,
            ),
            "location" => {
                let (node, loc) = location(child)?;
                def.location = Some(loc);
                scope.push(node);
                Ok(())
            }
            "listofallmembers" => {
                scope.push(listofallmembers(child)?);
                Ok(())
            }

            _ => Err(scope.unexpected(child)),
        }
    })?;

    if def.compound_name.trim().is_empty() {
        return Err(scope.violation(match name {
            None => ViolationKind::MissingElement("compoundname".into()),
            Some(_) => ViolationKind::EmptyValue("compoundname".into()),
        }));
    }

    Ok(scope.finish(NodeData::Compound(Box::new(def))))
}

/// Build a `basecompoundref` or `derivedcompoundref`.
fn compoundref(ele: &Element) -> BuildResult<(Node, CompoundRef)> {
    let kind =
        NodeKind::from_tag(ele.name()).unwrap_or(NodeKind::Basecompoundref);

    let mut scope = Scope::new(ele, kind, "compound reference builder");
    let attrs = scope.attrs(&["refid", "prot", "virt"])?;

    let data = CompoundRef {
        refid: attrs.opt_nonempty("refid"),
        prot: attrs.req("prot")?,
        virt: attrs.req("virt")?,
        name: scope.text_only()?,
    };

    Ok((scope.finish(NodeData::CompoundRef(data.clone())), data))
}

fn include(ele: &Element) -> BuildResult<Node> {
    let kind =
        NodeKind::from_tag(ele.name()).unwrap_or(NodeKind::Includes);

    let mut scope = Scope::new(ele, kind, "include builder");
    let attrs = scope.attrs(&["refid", "local"])?;

    let refid = attrs.opt_nonempty("refid");
    let local = attrs.flag("local")?;
    let name = scope.text_only()?;

    Ok(scope.finish(NodeData::Include(Include { refid, local, name })))
}

/// Build a reference to a nested compound
///   (`innerclass`, `innernamespace`, and so on).
fn inner(ele: &Element) -> BuildResult<(Node, InnerRef)> {
    const BUILDER: &str = "inner compound builder";

    let (kind, inner_kind) = NodeKind::from_tag(ele.name())
        .zip(InnerKind::from_tag(ele.name()))
        .ok_or_else(|| {
            ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
                .rejected_by(BUILDER)
        })?;

    let mut scope = Scope::new(ele, kind, BUILDER);
    let attrs = scope.attrs(&["refid", "prot", "inline"])?;

    let data = InnerRef {
        kind: inner_kind,
        refid: attrs.req("refid")?,
        prot: attrs.opt_nonempty("prot"),
        inline: attrs.flag("inline")?,
        name: scope.text_only()?,
    };

    Ok((scope.finish(NodeData::Inner(data.clone())), data))
}

/// Build an include dependency,
///   inheritance,
///   or collaboration graph.
fn graph(ele: &Element) -> BuildResult<Node> {
    let kind =
        NodeKind::from_tag(ele.name()).unwrap_or(NodeKind::Incdepgraph);

    let mut scope = Scope::new(ele, kind, "graph builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "node" => {
            scope.push(graph_node(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn graph_node(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::GraphNode, "graph node builder");
    let id = scope.attrs(&["id"])?.req("id")?;
    let mut label = None;
    let mut link = None;

    scope.each_element(|scope, child| match child.name() {
        "label" => scope.push_once(
            &mut label,
            child,
            text_node(child, NodeKind::Label)?,
        ),
        "link" => scope.push_once(&mut link, child, graph_link(child)?),
        "childnode" => {
            scope.push(childnode(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    if label.is_none() {
        return Err(
            scope.violation(ViolationKind::MissingElement("label".into()))
        );
    }

    Ok(scope.finish(NodeData::GraphNode { id }))
}

fn graph_link(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Link, "graph link builder");
    let attrs = scope.attrs(&["refid", "external"])?;

    let refid = attrs.req("refid")?;
    let external = attrs.opt_nonempty("external");

    scope.empty()?;

    Ok(scope.finish(NodeData::GraphLink { refid, external }))
}

fn childnode(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Childnode, "child node builder");
    let attrs = scope.attrs(&["refid", "relation"])?;

    let refid = attrs.req("refid")?;
    let relation = attrs.req("relation")?;

    scope.each_element(|scope, child| match child.name() {
        "edgelabel" => {
            scope.push(text_node(child, NodeKind::Edgelabel)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::ChildNode { refid, relation }))
}

/// Build a table of contents,
///   which may nest.
fn tableofcontents(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Tableofcontents, "table of contents builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "tocsect" => {
            scope.push(tocsect(child)?);
            Ok(())
        }
        "tableofcontents" => {
            scope.push(tableofcontents(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

/// Build an entry of a table of contents.
///
/// `tocsect/reference` is the id of the anchor that the entry refers to,
///   and so is mandatory.
fn tocsect(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Tocsect, "toc section builder");
    let mut name = None;
    let mut reference = None;
    let mut name_text = String::new();
    let mut reference_text = String::new();

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "name" => {
            let node = text_node(child, NodeKind::Name)?;
            name_text = node.text();
            scope.push_once(&mut name, child, node)
        }
        "reference" => {
            let node = text_node(child, NodeKind::Reference)?;
            reference_text = node.text();
            scope.push_once(&mut reference, child, node)
        }
        "tableofcontents" => {
            scope.push(tableofcontents(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    if reference_text.trim().is_empty() {
        return Err(scope.violation(match reference {
            None => ViolationKind::MissingElement("reference".into()),
            Some(_) => ViolationKind::EmptyValue("reference".into()),
        }));
    }

    Ok(scope.finish(NodeData::TocSect {
        name: name_text,
        reference: reference_text,
    }))
}

fn exports(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Exports, "exports builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "export" => {
            scope.push(export(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn export(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Export, "export builder");
    let refid = scope.attrs(&["refid"])?.opt_nonempty("refid");

    scope.required_text()?;

    Ok(scope.finish(NodeData::Export { refid }))
}

fn listofallmembers(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Listofallmembers, "member list builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "member" => {
            scope.push(listed_member(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}
