// Table builders
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

//! Builders for tables within descriptions.

use super::{descr, BuildResult, Scope};
use crate::{
    dom::{Entry, Node, NodeData, NodeKind, Table},
    xml::Element,
};

pub(super) fn table(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Table, "table builder");
    let attrs = scope.attrs(&["rows", "cols", "width"])?;
    let mut caption = None;

    let rows = attrs.req_num("rows")?;
    let cols = attrs.req_num("cols")?;
    let width = attrs.opt("width");

    scope.each_element(|scope, child| match child.name() {
        "caption" => {
            scope.push_once(&mut caption, child, self::caption(child)?)
        }
        "row" => {
            scope.push(row(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Table(Table {
        rows,
        cols,
        width,
        caption,
    })))
}

fn caption(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Caption, "table caption builder");
    let id = scope.attrs(&["id"])?.opt_nonempty("id");

    scope.each_mixed(|scope, child| {
        scope.push(descr::content(child)?);
        Ok(())
    })?;

    Ok(scope.finish(NodeData::Caption { id }))
}

fn row(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Row, "table row builder");

    scope.attrs(&[])?;
    scope.each_element(|scope, child| match child.name() {
        "entry" => {
            scope.push(entry(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::None))
}

fn entry(ele: &Element) -> BuildResult<Node> {
    let mut scope = Scope::new(ele, NodeKind::Entry, "table entry builder");
    let attrs = scope.attrs(&[
        "thead", "colspan", "rowspan", "align", "valign", "width", "class",
    ])?;

    let data = Entry {
        thead: attrs.flag("thead")?,
        colspan: attrs.opt_num("colspan")?,
        rowspan: attrs.opt_num("rowspan")?,
        align: attrs.opt("align"),
        valign: attrs.opt("valign"),
        width: attrs.opt("width"),
        class: attrs.opt("class"),
    };

    scope.each_inner(|scope, child| match child.name() {
        "para" => {
            scope.push(descr::para(child)?);
            Ok(())
        }
        _ => Err(scope.unexpected(child)),
    })?;

    Ok(scope.finish(NodeData::Entry(data)))
}
