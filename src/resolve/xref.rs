// Reference id decomposition
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

//! Split member and section reference ids into compound and anchor.
//!
//! Doxygen forms the id of a member or section by joining the id of its
//!   compound and an anchor with [`global::ANCHOR_DELIMITER`]:
//!
//! ```text
//! classns_1_1_foo_1a0123456789abcdef0123456789abcdef
//! \_____________/  \_______________________________/
//!    compound              hashed member anchor
//! ```
//!
//! The delimiter also encodes `:` within compound ids
//!   (`ns::Foo` becomes `classns_1_1_foo`),
//!   so the split cannot be made at the first delimiter.
//! Hashed member anchors are recognized by their shape:
//!   the delimiter,
//!   at most [`global::HEX_ANCHOR_MAX_PREFIX`] lowercase letters,
//!   and exactly [`global::HEX_ANCHOR_DIGITS`] hexadecimal digits.
//! Any other id is split at its last delimiter.

use crate::global;
use memchr::memmem;

/// Candidate compound id of a member or section reference.
///
/// An id containing no delimiter is returned unchanged.
pub fn compound_id(refid: &str) -> &str {
    strip_hex_anchor(refid)
        .or_else(|| {
            memmem::rfind(refid.as_bytes(), global::ANCHOR_DELIMITER)
                .map(|pos| &refid[..pos])
        })
        .unwrap_or(refid)
}

/// Fragment identifying the target within its page:
///   the text following the last delimiter,
///   or the whole id if there is none.
pub fn anchor(refid: &str) -> &str {
    match memmem::rfind(refid.as_bytes(), global::ANCHOR_DELIMITER) {
        Some(pos) => &refid[pos + global::ANCHOR_DELIMITER.len()..],
        None => refid,
    }
}

/// Compound id preceding a hashed member anchor,
///   if `refid` ends with one.
fn strip_hex_anchor(refid: &str) -> Option<&str> {
    let bytes = refid.as_bytes();
    let hex_start = bytes.len().checked_sub(global::HEX_ANCHOR_DIGITS)?;

    if !bytes[hex_start..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    let delim = global::ANCHOR_DELIMITER;

    (0..=global::HEX_ANCHOR_MAX_PREFIX).find_map(|prefix_len| {
        let prefix_start = hex_start.checked_sub(prefix_len)?;
        let delim_start = prefix_start.checked_sub(delim.len())?;

        let is_anchor = bytes[prefix_start..hex_start]
            .iter()
            .all(u8::is_ascii_lowercase)
            && &bytes[delim_start..prefix_start] == delim;

        is_anchor.then(|| &refid[..delim_start])
    })
}
