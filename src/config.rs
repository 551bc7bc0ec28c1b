// Pipeline configuration
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

//! Run-time configuration of the pipeline.
//!
//! Unlike the constants of [`crate::global`],
//!   which describe Doxygen's output format,
//!   these values describe choices a user may reasonably make about
//!   _our_ output.
//! The command line populates a [`Config`] from its options;
//!   library users construct one directly,
//!     typically starting from [`Config::default`].

use crate::global;

/// How permalinks are derived from compound names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermalinkPolicy {
    /// Fold permalinks to lower case.
    ///
    /// Case-insensitive filesystems
    ///   (and many static site hosts)
    ///   would otherwise conflate `Foo` and `foo`.
    pub lowercase: bool,

    /// Prefix of the permalink component of an anonymous namespace.
    ///
    /// The component is completed by the name of the file in which the
    ///   namespace is declared,
    ///     or by Doxygen's ordinal for the namespace if its location is
    ///     unknown.
    pub anonymous_prefix: String,
}

impl Default for PermalinkPolicy {
    fn default() -> Self {
        Self {
            lowercase: true,
            anonymous_prefix: "anonymous".into(),
        }
    }
}

impl PermalinkPolicy {
    /// Reduce `name` to a single permalink path component.
    ///
    /// ASCII alphanumerics are kept;
    ///   every other run of characters becomes a single `-`,
    ///     with no leading or trailing `-`.
    /// Non-ASCII alphanumerics are kept as well,
    ///   since Doxygen permits them in identifiers.
    pub fn sanitize(&self, name: &str) -> String {
        let mut dest = String::with_capacity(name.len());
        let mut pending_sep = false;

        for c in name.chars() {
            if c.is_alphanumeric() {
                if pending_sep && !dest.is_empty() {
                    dest.push('-');
                }
                pending_sep = false;

                if self.lowercase {
                    dest.extend(c.to_lowercase());
                } else {
                    dest.push(c);
                }
            } else {
                pending_sep = true;
            }
        }

        dest
    }
}

/// Configuration of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub permalink: PermalinkPolicy,

    /// Name of the index file within an input directory.
    pub index_file: String,

    /// Treat any warning as a failure of the run.
    ///
    /// Output is still produced;
    ///   it is up to the caller to act on the failure.
    pub deny_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            permalink: Default::default(),
            index_file: global::INDEX_FILE_NAME.into(),
            deny_warnings: false,
        }
    }
}
