// Attribute checking for node builders
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

//! Typed access to attributes that have already been checked against the
//!   set known to the schema.

use super::{BuildResult, SchemaViolation, ViolationKind};
use crate::xml::Element;
use std::str::FromStr;

/// Attributes of an element,
///   all of which are known to its builder.
pub(crate) struct Attrs<'e> {
    ele: &'e Element,
    builder: &'static str,
}

impl<'e> Attrs<'e> {
    /// Verify that every attribute of `ele` is named in `known`.
    ///
    /// Violations are attributed to `builder`.
    pub fn check(
        ele: &'e Element,
        known: &'static [&'static str],
        builder: &'static str,
    ) -> BuildResult<Self> {
        match ele.attribute_names().find(|name| !known.contains(name)) {
            Some(unknown) => Err(ele
                .violation(ViolationKind::UnexpectedAttr(unknown.into()))
                .rejected_by(builder)),
            None => Ok(Self { ele, builder }),
        }
    }

    /// Required attribute with a non-empty value.
    pub fn req(&self, name: &str) -> BuildResult<String> {
        let value = self.ele.string_attr(name).map_err(|e| self.own(e))?;

        if value.is_empty() {
            return Err(self.violation(ViolationKind::EmptyValue(
                format!("@{name}"),
            )));
        }

        Ok(value.into())
    }

    /// Required attribute that may be empty.
    pub fn req_any(&self, name: &str) -> BuildResult<String> {
        self.ele
            .string_attr(name)
            .map(Into::into)
            .map_err(|e| self.own(e))
    }

    pub fn opt(&self, name: &str) -> Option<String> {
        self.ele.attr(name).map(Into::into)
    }

    /// Optional attribute treated as absent when empty.
    pub fn opt_nonempty(&self, name: &str) -> Option<String> {
        self.ele.attr(name).filter(|v| !v.is_empty()).map(Into::into)
    }

    pub fn req_num<T: FromStr>(&self, name: &str) -> BuildResult<T> {
        self.ele.number_attr(name).map_err(|e| self.own(e))
    }

    pub fn opt_num<T: FromStr>(&self, name: &str) -> BuildResult<Option<T>> {
        match self.ele.attr(name) {
            None => Ok(None),
            Some(_) => {
                self.ele.number_attr(name).map(Some).map_err(|e| self.own(e))
            }
        }
    }

    /// Optional boolean attribute,
    ///   false when absent.
    pub fn flag(&self, name: &str) -> BuildResult<bool> {
        self.opt_bool(name).map(|v| v.unwrap_or(false))
    }

    pub fn opt_bool(&self, name: &str) -> BuildResult<Option<bool>> {
        match self.ele.attr(name) {
            None => Ok(None),
            Some(_) => {
                self.ele.bool_attr(name).map(Some).map_err(|e| self.own(e))
            }
        }
    }

    /// All attributes named in `names` that are present,
    ///   in document order.
    pub fn collect(&self, names: &[&str]) -> Vec<(String, String)> {
        self.ele
            .attrs()
            .iter()
            .filter(|attr| names.contains(&attr.name()))
            .map(|attr| (attr.name().into(), attr.value().into()))
            .collect()
    }

    fn violation(&self, kind: ViolationKind) -> SchemaViolation {
        self.own(self.ele.violation(kind))
    }

    fn own(&self, e: SchemaViolation) -> SchemaViolation {
        e.rejected_by(self.builder)
    }
}
