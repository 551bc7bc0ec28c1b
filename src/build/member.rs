// Member builders
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

//! Builders for sections,
//!   members,
//!   and the linked text that describes their types.
//!
//! _Linked text_ is the schema's term for character data interspersed
//!   with `ref` elements,
//!     used wherever a type or expression may mention documented
//!     symbols
//!       (e.g. `std::vector<`**`Foo`**`>`).

use super::{descr, text_node, BuildResult, Scope, ViolationKind};
use crate::{
    dom::{
        EnumValue, Location, MemberDef, MemberRef, Node, NodeData, NodeKind,
        Param, RefTarget, Reference, SectionDef,
    },
    xml::Element,
};

/// Build a `sectiondef`.
pub(super) fn sectiondef(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Sectiondef, "section builder");
    let mut data = SectionDef {
        kind: scope.attrs(&["kind"])?.req("kind")?,
        ..Default::default()
    };
    let mut header = None;

    scope.each_element(|scope, child| match child.name() {
        "header" => {
            let node = text_node(child, NodeKind::Header)?;
            data.header.get_or_insert_with(|| node.text());
            scope.push_once(&mut header, child, node)
        }
        "description" => scope.push_once(
            &mut data.description,
            child,
            descr::description(child)?,
        ),
        "memberdef" => {
            let index = scope.push(memberdef(child)?);
            data.members.push(index);
            Ok(())
        }
        "member" => {
            let index = scope.push(section_member(child)?);
            data.members.push(index);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Section(data)))
}

/// A reference from a `sectiondef` to a member defined in another
///   compound.
fn section_member(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Member, "section member builder");
    let attrs = scope.attrs(&["refid", "kind"])?;

    let mut data = MemberRef {
        refid: attrs.req("refid")?,
        kind: Some(attrs.req("kind")?),
        ..Default::default()
    };

    scope.each_element(|scope, child| match child.name() {
        "name" => {
            let node = text_node(child, NodeKind::Name)?;
            data.name = node.text();
            scope.push(node);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    require_name(&scope, &data.name)?;

    Ok(scope.finish(NodeData::MemberRef(data)))
}

/// An entry of `listofallmembers`.
pub(super) fn listed_member(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Member, "member listing builder");
    let attrs = scope.attrs(&["refid", "prot", "virt", "ambiguityscope"])?;

    let mut data = MemberRef {
        refid: attrs.req("refid")?,
        prot: attrs.opt("prot"),
        virt: attrs.opt("virt"),
        ambiguity_scope: attrs.opt_nonempty("ambiguityscope"),
        ..Default::default()
    };

    scope.each_element(|scope, child| match child.name() {
        "scope" => {
            let node = text_node(child, NodeKind::Scope)?;
            data.scope = Some(node.text());
            scope.push(node);
            Ok(())
        }
        "name" => {
            let node = text_node(child, NodeKind::Name)?;
            data.name = node.text();
            scope.push(node);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    require_name(&scope, &data.name)?;

    Ok(scope.finish(NodeData::MemberRef(data)))
}

fn require_name(scope: &Scope, name: &str) -> BuildResult<()> {
    if name.trim().is_empty() {
        Err(scope.violation(ViolationKind::MissingElement("name".into())))
    } else {
        Ok(())
    }
}

/// Attributes of `memberdef`.
///
/// The first [`MEMBER_TYPED_ATTRS`] have typed fields in [`MemberDef`];
///   the remainder are qualifiers specific to a handful of languages and
///   are kept verbatim in [`MemberDef::other_attrs`].
const MEMBER_ATTRS: &[&str] = &[
    "kind",
    "id",
    "prot",
    "static",
    "strong",
    "const",
    "explicit",
    "inline",
    "refqual",
    "virt",
    "constexpr",
    "final",
    // Verbatim.
    "extern",
    "volatile",
    "mutable",
    "noexcept",
    "noexceptexpression",
    "nodiscard",
    "consteval",
    "constinit",
    "readable",
    "writable",
    "initonly",
    "settable",
    "privatesettable",
    "protectedsettable",
    "gettable",
    "privategettable",
    "protectedgettable",
    "sealed",
    "new",
    "add",
    "remove",
    "raise",
    "optional",
    "required",
    "accessor",
    "attribute",
    "property",
    "readonly",
    "bound",
    "removable",
    "constrained",
    "transient",
    "maybevoid",
    "maybedefault",
    "maybeambiguous",
];

const MEMBER_TYPED_ATTRS: usize = 12;

/// Build a `memberdef`.
///
/// `memberdef/name` is mandatory.
pub(super) fn memberdef(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Memberdef, "member builder");
    let attrs = scope.attrs(MEMBER_ATTRS)?;

    let mut def = MemberDef {
        id: attrs.req("id")?,
        kind: attrs.req("kind")?,
        prot: attrs.req("prot")?,
        is_static: attrs.flag("static")?,
        is_const: attrs.flag("const")?,
        is_inline: attrs.flag("inline")?,
        is_explicit: attrs.flag("explicit")?,
        is_constexpr: attrs.flag("constexpr")?,
        is_final: attrs.flag("final")?,
        virt: attrs.opt("virt"),
        refqual: attrs.opt("refqual"),
        strong: attrs.opt_bool("strong")?,
        other_attrs: attrs.collect(&MEMBER_ATTRS[MEMBER_TYPED_ATTRS..]),
        ..Default::default()
    };

    scope.each_element(|scope, child| {
        let tag = child.name();

        match tag {
            "name" | "qualifiedname" | "definition" | "argsstring"
            | "bitfield" | "read" | "write" => {
                let kind = NodeKind::from_tag(tag)
                    .ok_or_else(|| scope.unexpected(child))?;
                let node = text_node(child, kind)?;
                let text = node.text();

                match tag {
                    "name" => def.name = text,
                    "qualifiedname" => def.qualified_name = Some(text),
                    "definition" => def.definition = Some(text),
                    "argsstring" => def.args_string = Some(text),
                    "bitfield" => def.bitfield = Some(text),
                    "read" => def.read = Some(text),
                    _ => def.write = Some(text),
                }

                scope.push(node);
                Ok(())
            }

            "type" => scope.push_once(
                &mut def.type_,
                child,
                linked_text(child, NodeKind::Type)?,
            ),
            "initializer" => scope.push_once(
                &mut def.initializer,
                child,
                linked_text(child, NodeKind::Initializer)?,
            ),
            "exceptions" => scope.push_once(
                &mut def.exceptions,
                child,
                linked_text(child, NodeKind::Exceptions)?,
            ),
            "requiresclause" | "qualifier" => {
                let kind = NodeKind::from_tag(tag)
                    .ok_or_else(|| scope.unexpected(child))?;
                scope.push(linked_text(child, kind)?);
                Ok(())
            }
            "templateparamlist" => scope.push_once(
                &mut def.template_params,
                child,
                templateparamlist(child)?,
            ),

            "param" => {
                let index = scope.push(param(child)?);
                def.params.push(index);
                Ok(())
            }
            "enumvalue" => {
                let index = scope.push(enumvalue(child)?);
                def.enum_values.push(index);
                Ok(())
            }

            "reimplements" | "reimplementedby" => {
                let (node, target) = reimplement(child)?;

                if tag == "reimplements" {
                    def.reimplements.push(target);
                } else {
                    def.reimplemented_by.push(target);
                }

                scope.push(node);
                Ok(())
            }
            "references" | "referencedby" => {
                scope.push(reference(child)?);
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
            "inbodydescription" => scope.push_once(
                &mut def.inbody,
                child,
                descr::description(child)?,
            ),

            "location" => {
                let (node, loc) = location(child)?;
                def.location = Some(loc);
                scope.push(node);
                Ok(())
            }

            _ => Err(scope.unexpected(child)),
        }
    })?;

    require_name(&scope, &def.name)?;

    Ok(scope.finish(NodeData::Member(Box::new(def))))
}

/// Build linked text of the given kind:
///   character data interspersed with `ref` elements.
pub(super) fn linked_text(ele: &Element, kind: NodeKind) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, kind, "linked text builder");

    scope.attrs(&[])?;
    scope.each_mixed(|scope, child| match child.name() {
        "ref" => {
            scope.push(descr::reference(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

pub(super) fn templateparamlist(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(
        ele,
        NodeKind::Templateparamlist,
        "template parameter list builder",
    );

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "param" => {
            scope.push(param(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn param(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Param, "parameter builder");
    let mut data = Param::default();

    scope.attrs(&[])?;
    scope.each_element(|scope, child| {
        let tag = child.name();

        match tag {
            "attributes" | "declname" | "defname" | "array" => {
                let kind = NodeKind::from_tag(tag)
                    .ok_or_else(|| scope.unexpected(child))?;
                let node = text_node(child, kind)?;
                let text = Some(node.text());

                match tag {
                    "attributes" => data.attributes = text,
                    "declname" => data.declname = text,
                    "defname" => data.defname = text,
                    _ => data.array = text,
                }

                scope.push(node);
                Ok(())
            }
            "type" => scope.push_once(
                &mut data.type_,
                child,
                linked_text(child, NodeKind::Type)?,
            ),
            "defval" => scope.push_once(
                &mut data.defval,
                child,
                linked_text(child, NodeKind::Defval)?,
            ),
            "typeconstraint" => scope.push_once(
                &mut data.typeconstraint,
                child,
                linked_text(child, NodeKind::Typeconstraint)?,
            ),
            "briefdescription" => scope.push_once(
                &mut data.brief,
                child,
                descr::description(child)?,
            ),
            _ => Err(scope.unexpected(child)),
        }
    })?;

    Ok(scope.finish(NodeData::Param(data)))
}

fn enumvalue(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Enumvalue, "enum value builder");
    let attrs = scope.attrs(&["id", "prot"])?;

    let mut data = EnumValue {
        id: attrs.req("id")?,
        prot: attrs.req("prot")?,
        ..Default::default()
    };

    scope.each_element(|scope, child| match child.name() {
        "name" => {
            let node = text_node(child, NodeKind::Name)?;
            data.name = node.text();
            scope.push(node);
            Ok(())
        }
        "initializer" => scope.push_once(
            &mut data.initializer,
            child,
            linked_text(child, NodeKind::Initializer)?,
        ),
        "briefdescription" => scope.push_once(
            &mut data.brief,
            child,
            descr::description(child)?,
        ),
        "detaileddescription" => scope.push_once(
            &mut data.detailed,
            child,
            descr::description(child)?,
        ),
        _ => Err(scope.unexpected(child)),
    })?;

    require_name(&scope, &data.name)?;

    Ok(scope.finish(NodeData::EnumValue(data)))
}

fn reimplement(ele: &Element) -> BuildResult<(Node, RefTarget)> {
    let kind = NodeKind::from_tag(ele.name()).ok_or_else(|| {
        ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
    })?;

    let mut scope = Scope::new(ele, kind, "reimplementation builder");
    let refid = scope.attrs(&["refid"])?.req("refid")?;
    let name = scope.text_only()?;

    let target = RefTarget {
        refid: refid.clone(),
        name: name.clone(),
    };

    Ok((
        scope.finish(NodeData::Reimplement { refid, name }),
        target,
    ))
}

fn reference(ele: &Element) -> BuildResult<Node> {
    let kind = NodeKind::from_tag(ele.name()).ok_or_else(|| {
        ele.violation(ViolationKind::UnexpectedElement(ele.name().into()))
    })?;

    let mut scope = Scope::new(ele, kind, "member reference builder");
    let attrs =
        scope.attrs(&["refid", "compoundref", "startline", "endline"])?;

    let refid = attrs.req("refid")?;
    let compound_ref = attrs.opt_nonempty("compoundref");
    let start_line = attrs.opt_num("startline")?;
    let end_line = attrs.opt_num("endline")?;
    let name = scope.text_only()?;

    Ok(scope.finish(NodeData::Reference(Reference {
        refid,
        compound_ref,
        start_line,
        end_line,
        name,
    })))
}

/// Build a `location`,
///   returning its data separately for hoisting.
///
/// `location/@file` is mandatory.
pub(super) fn location(ele: &Element) -> BuildResult<(Node, Location)> {
    let mut scope = Scope::new(ele, NodeKind::Location, "location builder");
    let attrs = scope.attrs(&[
        "file",
        "line",
        "column",
        "declfile",
        "declline",
        "declcolumn",
        "bodyfile",
        "bodystart",
        "bodyend",
    ])?;

    let loc = Location {
        file: attrs.req("file")?,
        line: attrs.opt_num("line")?,
        column: attrs.opt_num("column")?,
        decl_file: attrs.opt_nonempty("declfile"),
        decl_line: attrs.opt_num("declline")?,
        decl_column: attrs.opt_num("declcolumn")?,
        body_file: attrs.opt_nonempty("bodyfile"),
        body_start: attrs.opt_num("bodystart")?,
        body_end: attrs.opt_num("bodyend")?,
    };

    scope.empty()?;

    Ok((scope.finish(NodeData::Location(loc.clone())), loc))
}
