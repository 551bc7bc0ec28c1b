// Resolution warnings
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

//! Problems encountered while linking objects.
//!
//! None of these are fatal.
//! Each degrades the output in some small way
//!   (a link rendered as text,
//!     a page listed in fewer places than Doxygen intended)
//!   and is reported so that the user may fix their sources.

use crate::{
    diagnose::{Annotation, Diagnostic, Level},
    dom::RefKind,
    model::CollectionKind,
};
use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkWarning {
    /// No object or anchor is known by the target id.
    UnresolvedReference {
        /// Id of the compound containing the reference,
        ///   if known.
        source: Option<String>,
        target: String,
        kind: RefKind,
    },

    /// The permalink derived for `id` was already taken by `holder`,
    ///   and so `id` was given `assigned` instead.
    DuplicatePermalink {
        id: String,
        holder: String,
        permalink: String,
        assigned: String,
    },

    /// `claimant` lists `child` as a child,
    ///   but `child` was already claimed by `parent`.
    MultipleParents {
        child: String,
        parent: String,
        claimant: String,
    },

    /// Linking `child` beneath `parent` would make an object its own
    ///   ancestor.
    ParentCycle { parent: String, child: String },

    /// `parent` lists `child` as a child,
    ///   but the two belong to different collections.
    CrossCollectionChild {
        parent: String,
        child: String,
        expected: CollectionKind,
        found: CollectionKind,
    },
}

impl LinkWarning {
    /// Attribute an unresolved reference to the compound containing it.
    ///
    /// Other warnings are returned unchanged.
    pub fn with_source<S: Into<String>>(self, id: S) -> Self {
        match self {
            Self::UnresolvedReference { target, kind, .. } => {
                Self::UnresolvedReference {
                    source: Some(id.into()),
                    target,
                    kind,
                }
            }
            other => other,
        }
    }
}

impl Display for LinkWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnresolvedReference { target, kind, .. } => {
                write!(f, "unresolved {kind} reference `{target}`")
            }
            Self::DuplicatePermalink { id, permalink, .. } => {
                write!(f, "permalink `{permalink}` of `{id}` is already taken")
            }
            Self::MultipleParents { child, .. } => {
                write!(f, "`{child}` has more than one parent")
            }
            Self::ParentCycle { parent, child } => {
                write!(f, "`{child}` cannot be a child of `{parent}`")
            }
            Self::CrossCollectionChild {
                parent,
                child,
                found,
                ..
            } => {
                write!(f, "child `{child}` of `{parent}` is one of the {found}")
            }
        }
    }
}

impl Error for LinkWarning {}

impl Diagnostic for LinkWarning {
    fn level(&self) -> Level {
        Level::Warning
    }

    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::UnresolvedReference { source, .. } => {
                let mut desc = Vec::with_capacity(2);

                if let Some(source) = source {
                    desc.push(Annotation::note(format!(
                        "referenced from `{source}`"
                    )));
                }

                desc.push(Annotation::help(
                    "the reference will be rendered as plain text",
                ));
                desc
            }

            Self::DuplicatePermalink {
                holder, assigned, ..
            } => vec![
                Annotation::note(format!("already assigned to `{holder}`")),
                Annotation::help(format!("`{assigned}` will be used instead")),
            ],

            Self::MultipleParents {
                parent, claimant, ..
            } => vec![
                Annotation::note(format!("first claimed by `{parent}`")),
                Annotation::note(format!("ignoring claim by `{claimant}`")),
            ],

            Self::ParentCycle { child, .. } => vec![
                Annotation::note(format!(
                    "`{child}` would become its own ancestor"
                )),
                Annotation::help(
                    "the relationship will be omitted from the hierarchy",
                ),
            ],

            Self::CrossCollectionChild { expected, .. } => vec![
                Annotation::note(format!("expected one of the {expected}")),
                Annotation::help(
                    "the relationship will be omitted from the hierarchy",
                ),
            ],
        }
    }
}
