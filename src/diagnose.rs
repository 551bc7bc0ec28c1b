// Diagnostic system
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

//! Diagnostic system for error and warning reporting.
//!
//! This system is heavily motivated by Rust's.
//! While the data structures and organization may differ,
//!   the diagnostic output is visually similar:
//!
//! ```text
//! warning: unresolved member reference `classfoo_1a3f…`
//!   note: referenced from `classbar`
//!   help: the reference will be rendered as plain text
//! ```
//!
//! Doxygen output carries no source spans that would be useful to a user,
//!   so annotations here are labels only;
//!     the context they describe is the id of the compound or element
//!     involved.
//!
//! Nothing in the pipeline writes to standard error directly.
//! Every recoverable problem is a [`Diagnostic`] handed to a [`Reporter`],
//!   which decides how and where it is rendered.

mod report;

pub use report::{BufferReporter, Report, Reporter, VisualReporter};

use std::{borrow::Cow, error::Error, fmt, fmt::Display};

/// Diagnostic report.
///
/// This describes an error condition or other special event using a series
///   of [`Annotation`]s to describe the cause and circumstances around an
///   event.
pub trait Diagnostic: Error {
    /// Severity of the diagnostic as a whole.
    fn level(&self) -> Level {
        Level::Error
    }

    /// Produce a series of [`Annotation`]s describing the circumstances of
    ///   the diagnostic event.
    fn describe(&self) -> Vec<Annotation>;
}

/// Diagnostic severity level.
///
/// Levels are used both for entire reports and for styling of individual
///   [`Annotation`]s.
///
/// Lower levels are more severe
///   (e.g. level 1 is the worst).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
#[repr(u8)]
pub enum Level {
    /// An error internal to doxymd that the user cannot resolve,
    ///   but may be able to work around.
    InternalError = 1,

    /// A user-resolvable error.
    ///
    /// These represent errors resulting from the input;
    ///   for us that almost always means Doxygen output that does not
    ///   match the schema we understand.
    #[default]
    Error,

    /// A problem that does not prevent output from being produced,
    ///   but does degrade it
    ///     (e.g. a link rendered as plain text).
    Warning,

    /// Useful information that supplements other messages.
    Note,

    /// Additional advice to the user that may help in debugging or fixing a
    ///   problem.
    Help,
}

impl Level {
    /// Number of levels,
    ///   used to size per-level counters.
    pub const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize - 1
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::InternalError => write!(f, "internal error"),
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A label associated with an [`Annotation`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label<'a>(Cow<'a, str>);

impl<'a> Display for Label<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'a> From<String> for Label<'a> {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl<'a> From<&'a str> for Label<'a> {
    fn from(s: &'a str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

/// A label with an associated severity level.
///
/// Annotations are intended to guide users through debugging a diagnostic
///   message by describing what contributed to it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Annotation<'l>(Level, Label<'l>);

impl<'l> Annotation<'l> {
    pub fn new<L: Into<Label<'l>>>(level: Level, label: L) -> Self {
        Self(level, label.into())
    }

    /// Supplemental context for the diagnostic,
    ///   such as the compound in which a problem was found.
    pub fn note<L: Into<Label<'l>>>(label: L) -> Self {
        Self::new(Level::Note, label)
    }

    /// Loose guidance that may help the user fix the problem.
    pub fn help<L: Into<Label<'l>>>(label: L) -> Self {
        Self::new(Level::Help, label)
    }

    pub fn level(&self) -> Level {
        self.0
    }

    pub fn label(&self) -> &Label<'l> {
        &self.1
    }
}

impl<'l> From<Annotation<'l>> for Vec<Annotation<'l>> {
    fn from(x: Annotation<'l>) -> Self {
        vec![x]
    }
}

#[cfg(test)]
mod test;
