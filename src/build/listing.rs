// Program listing builders
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

//! Builders for program listings.
//!
//! A listing is a sequence of numbered code lines,
//!   each a sequence of syntax-highlighted spans.
//! Doxygen writes the full source of each file into the file's compound;
//!   renderers that wish to show only the body of a member can cut it out
//!   of that listing with [`filter_listing`]
//!     using the member's location.

use super::{descr, BuildResult, Scope};
use crate::{
    dom::{Child, CodeLine, Node, NodeData, NodeKind},
    xml::Element,
};

pub(super) fn programlisting(ele: &Element) -> BuildResult<Node> {
    let mut scope =
        Scope::new(ele, NodeKind::Programlisting, "program listing builder");
    let filename = scope.attrs(&["filename"])?.opt_nonempty("filename");

    scope.each_element(|scope, child| match child.name() {
        "codeline" => {
            scope.push(codeline(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Listing { filename }))
}

fn codeline(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Codeline, "code line builder");
    let attrs = scope.attrs(&["lineno", "refid", "refkind", "external"])?;

    let data = CodeLine {
        lineno: attrs.opt_num("lineno")?,
        refid: attrs.opt_nonempty("refid"),
        refkind: attrs.opt_nonempty("refkind"),
        external: attrs.flag("external")?,
    };

    scope.each_element(|scope, child| match child.name() {
        "highlight" => {
            scope.push(highlight(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::CodeLine(data)))
}

fn highlight(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Highlight, "highlight builder");
    let class = scope.attrs(&["class"])?.req("class")?;

    scope.each_mixed(|scope, child| {
        let node = match child.name() {
            "sp" => sp(child)?,
            "ref" => descr::reference(child)?,
            _ => return Err(scope.unexpected(child)),
        };

        scope.push(node);
        Ok(())
    })?;

    Ok(scope.finish(NodeData::Highlight { class }))
}

/// A run of spaces,
///   which Doxygen uses to preserve indentation within a highlight.
fn sp(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Sp, "space builder");
    let count = scope.attrs(&["value"])?.opt_num("value")?.unwrap_or(1);

    scope.empty()?;

    Ok(scope.finish(NodeData::Sp { count }))
}

/// Produce a copy of `listing` retaining only the code lines numbered
///   within `start..=end`.
///
/// Lines without a number are dropped.
/// If no line falls within the range
///   (including when `start > end`),
///   the result is [`None`].
/// If `listing` is not a program listing at all,
///   the result is also [`None`].
///
/// Filtering is idempotent:
///   filtering a filtered listing by the same range produces an equal
///   listing.
pub fn filter_listing(listing: &Node, start: u32, end: u32) -> Option<Node> {
    if listing.kind() != NodeKind::Programlisting {
        return None;
    }

    let lines: Vec<Child> = listing
        .children()
        .iter()
        .filter(|child| match child.as_node().map(Node::data) {
            Some(NodeData::CodeLine(CodeLine {
                lineno: Some(lineno),
                ..
            })) => (start..=end).contains(lineno),
            _ => false,
        })
        .cloned()
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(Node::new(
        NodeKind::Programlisting,
        lines,
        listing.data().clone(),
    ))
}
