// System-wide static configuration
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

//! System-wide static configuration.
//!
//! This module provides constants that describe how Doxygen encodes its
//!   output.
//! Subsystems should reference these values rather than defining their own
//!   and risk incompatibilities or maintenance issues as Doxygen evolves.
//!
//! By convention,
//!   import this entire module rather than individual members and reference
//!   them as `global::foo` to emphasize their nature and risk.
//!
//! Values that a user may reasonably wish to change belong in
//!   [`crate::config`] instead.

/// A size capable of representing every compound of a project.
///
/// This is used as the index type of the object arena and of the
///   inheritance graph.
/// Even the largest projects documented by Doxygen produce compounds on
///   the order of tens of thousands.
pub type ObjectIdSize = u32;

/// Delimiter separating a compound id from an anchor within that compound.
///
/// Doxygen encodes `:` as `_1` in ids,
///   and uses a single `:` to join a compound id to a member or section
///   anchor
///     (e.g. `classfoo_1a0123…`).
pub const ANCHOR_DELIMITER: &[u8] = b"_1";

/// Number of hexadecimal digits in a hashed member anchor.
///
/// Member anchors are an MD5 digest,
///   optionally preceded by a short alphabetic prefix
///   (`a` for members, `ga` for group members).
pub const HEX_ANCHOR_DIGITS: usize = 32;

/// Maximum length of the alphabetic prefix of a hashed member anchor.
pub const HEX_ANCHOR_MAX_PREFIX: usize = 2;

/// Deepest `sectN` element defined by the schema.
pub const MAX_SECT_LEVEL: u8 = 6;

/// Doxygen's name for the index of all compounds in an output directory.
pub const INDEX_FILE_NAME: &str = "index.xml";

/// Separator between components of a qualified compound name.
pub const SCOPE_SEPARATOR: &str = "::";

/// Character that begins the name of an anonymous namespace
///   (e.g. `@0` or `outer::@3`).
pub const ANONYMOUS_MARKER: char = '@';
