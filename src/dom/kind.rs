// Node kinds
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

//! The closed set of node kinds.
//!
//! Every kind but the synthetic ones corresponds to exactly one element
//!   tag of the Doxygen schema.
//! Some tags are used by more than one schema type
//!   (`member` is both a section member and an entry of the list of all
//!     members;
//!    `title` is both plain text and a formatted title);
//!   the distinction is carried by [`NodeData`](super::NodeData),
//!     not by the kind.

use std::fmt::{self, Display};

macro_rules! node_kinds {
    (
        tags {
            $($variant:ident => $tag:literal,)*
        }
        synthetic {
            $($(#[$sattr:meta])* $svariant:ident => $sname:literal,)*
        }
    ) => {
        /// Variant tag of a [`Node`](super::Node).
        ///
        /// Renderers dispatch on this tag
        ///   (see [`crate::render::Dispatch`]).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant,)*
            $($(#[$sattr])* $svariant,)*
        }

        impl NodeKind {
            /// Kind of the element with the given tag,
            ///   if the tag is part of the supported schema.
            ///
            /// Synthetic kinds have no tag and are never returned.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Element tag for this kind.
            ///
            /// Synthetic kinds produce a name that does not occur in the
            ///   schema.
            pub fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                    $(Self::$svariant => $sname,)*
                }
            }
        }
    };
}

node_kinds! {
    tags {
        Doxygen => "doxygen",

        // Compound.
        Compounddef => "compounddef",
        Compoundname => "compoundname",
        Title => "title",
        Basecompoundref => "basecompoundref",
        Derivedcompoundref => "derivedcompoundref",
        Includes => "includes",
        Includedby => "includedby",
        Incdepgraph => "incdepgraph",
        Invincdepgraph => "invincdepgraph",
        Inheritancegraph => "inheritancegraph",
        Collaborationgraph => "collaborationgraph",
        GraphNode => "node",
        Label => "label",
        Link => "link",
        Childnode => "childnode",
        Edgelabel => "edgelabel",
        Innermodule => "innermodule",
        Innerdir => "innerdir",
        Innerfile => "innerfile",
        Innerclass => "innerclass",
        Innerconcept => "innerconcept",
        Innernamespace => "innernamespace",
        Innerpage => "innerpage",
        Innergroup => "innergroup",
        Qualifier => "qualifier",
        Templateparamlist => "templateparamlist",
        Sectiondef => "sectiondef",
        Header => "header",
        Description => "description",
        Member => "member",
        Tableofcontents => "tableofcontents",
        Tocsect => "tocsect",
        Name => "name",
        Reference => "reference",
        Requiresclause => "requiresclause",
        Initializer => "initializer",
        Briefdescription => "briefdescription",
        Detaileddescription => "detaileddescription",
        Inbodydescription => "inbodydescription",
        Exports => "exports",
        Export => "export",
        Location => "location",
        Listofallmembers => "listofallmembers",
        Scope => "scope",

        // Member.
        Memberdef => "memberdef",
        Type => "type",
        Definition => "definition",
        Argsstring => "argsstring",
        Qualifiedname => "qualifiedname",
        Read => "read",
        Write => "write",
        Bitfield => "bitfield",
        Reimplements => "reimplements",
        Reimplementedby => "reimplementedby",
        Param => "param",
        Attributes => "attributes",
        Declname => "declname",
        Defname => "defname",
        Array => "array",
        Defval => "defval",
        Typeconstraint => "typeconstraint",
        Enumvalue => "enumvalue",
        Exceptions => "exceptions",
        References => "references",
        Referencedby => "referencedby",

        // Listings.
        Programlisting => "programlisting",
        Codeline => "codeline",
        Highlight => "highlight",
        Sp => "sp",

        // Descriptions.
        Para => "para",
        Internal => "internal",
        Sect1 => "sect1",
        Sect2 => "sect2",
        Sect3 => "sect3",
        Sect4 => "sect4",
        Sect5 => "sect5",
        Sect6 => "sect6",
        Ulink => "ulink",
        Bold => "bold",
        S => "s",
        Strike => "strike",
        Underline => "underline",
        Emphasis => "emphasis",
        Computeroutput => "computeroutput",
        Subscript => "subscript",
        Superscript => "superscript",
        Center => "center",
        Small => "small",
        Cite => "cite",
        Del => "del",
        Ins => "ins",
        Summary => "summary",
        Preformatted => "preformatted",
        Htmlonly => "htmlonly",
        Manonly => "manonly",
        Xmlonly => "xmlonly",
        Rtfonly => "rtfonly",
        Latexonly => "latexonly",
        Docbookonly => "docbookonly",
        Verbatim => "verbatim",
        Javadocliteral => "javadocliteral",
        Javadoccode => "javadoccode",
        Image => "image",
        Dot => "dot",
        Msc => "msc",
        Plantuml => "plantuml",
        Dotfile => "dotfile",
        Mscfile => "mscfile",
        Diafile => "diafile",
        Plantumlfile => "plantumlfile",
        Anchor => "anchor",
        Formula => "formula",
        Ref => "ref",
        Emoji => "emoji",
        Linebreak => "linebreak",
        Hruler => "hruler",
        Itemizedlist => "itemizedlist",
        Orderedlist => "orderedlist",
        Listitem => "listitem",
        Simplesect => "simplesect",
        Variablelist => "variablelist",
        Varlistentry => "varlistentry",
        Term => "term",
        Table => "table",
        Caption => "caption",
        Row => "row",
        Entry => "entry",
        Heading => "heading",
        Toclist => "toclist",
        Tocitem => "tocitem",
        Language => "language",
        Parameterlist => "parameterlist",
        Parameteritem => "parameteritem",
        Parameternamelist => "parameternamelist",
        Parametertype => "parametertype",
        Parametername => "parametername",
        Parameterdescription => "parameterdescription",
        Xrefsect => "xrefsect",
        Xreftitle => "xreftitle",
        Xrefdescription => "xrefdescription",
        Copydoc => "copydoc",
        Blockquote => "blockquote",
        Parblock => "parblock",
        Details => "details",
        Indexentry => "indexentry",
        Primaryie => "primaryie",
        Secondaryie => "secondaryie",
    }

    synthetic {
        /// A `varlistentry` paired with the `listitem` that follows it.
        ///
        /// The schema has no element wrapping the pair.
        VarListPair => "varlistpair",

        /// A character entity element such as `<copy/>`;
        ///   the actual tag is held by the node's data.
        Entity => "entity",
    }
}

impl NodeKind {
    /// Kind of the section element of the given level,
    ///   if the level is within `1..=6`.
    pub fn sect(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Sect1),
            2 => Some(Self::Sect2),
            3 => Some(Self::Sect3),
            4 => Some(Self::Sect4),
            5 => Some(Self::Sect5),
            6 => Some(Self::Sect6),
            _ => None,
        }
    }

    /// Level of a section kind,
    ///   or [`None`] for any other kind.
    pub fn sect_level(&self) -> Option<u8> {
        match self {
            Self::Sect1 => Some(1),
            Self::Sect2 => Some(2),
            Self::Sect3 => Some(3),
            Self::Sect4 => Some(4),
            Self::Sect5 => Some(5),
            Self::Sect6 => Some(6),
            _ => None,
        }
    }

    /// Whether this kind holds a description
    ///   (`briefdescription`, `detaileddescription`, and friends).
    pub fn is_description(&self) -> bool {
        matches!(
            self,
            Self::Briefdescription
                | Self::Detaileddescription
                | Self::Inbodydescription
                | Self::Description
                | Self::Parameterdescription
                | Self::Xrefdescription
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.tag())
    }
}

/// Character entity elements and the text they stand for.
///
/// Doxygen emits an empty element in place of certain characters
///   (e.g. `<copy/>` for `©`).
/// The list is the subset of the schema's entities that Doxygen is known
///   to produce from typical sources;
///     an entity not listed here is a schema violation like any other
///     unknown element.
pub const ENTITIES: &[(&str, &str)] = &[
    ("nonbreakablespace", "\u{a0}"),
    ("iexcl", "¡"),
    ("cent", "¢"),
    ("pound", "£"),
    ("curren", "¤"),
    ("yen", "¥"),
    ("brvbar", "¦"),
    ("sect", "§"),
    ("umlaut", "¨"),
    ("copy", "©"),
    ("ordf", "ª"),
    ("laquo", "«"),
    ("not", "¬"),
    ("shy", "\u{ad}"),
    ("registered", "®"),
    ("macr", "¯"),
    ("deg", "°"),
    ("plusmn", "±"),
    ("sup2", "²"),
    ("sup3", "³"),
    ("acute", "´"),
    ("micro", "µ"),
    ("middot", "·"),
    ("cedil", "¸"),
    ("sup1", "¹"),
    ("ordm", "º"),
    ("raquo", "»"),
    ("frac14", "¼"),
    ("frac12", "½"),
    ("frac34", "¾"),
    ("iquest", "¿"),
    ("times", "×"),
    ("divide", "÷"),
    ("szlig", "ß"),
    ("bull", "•"),
    ("hellip", "…"),
    ("prime", "′"),
    ("Prime", "″"),
    ("oline", "‾"),
    ("frasl", "⁄"),
    ("trademark", "™"),
    ("larr", "←"),
    ("uarr", "↑"),
    ("rarr", "→"),
    ("darr", "↓"),
    ("harr", "↔"),
    ("lArr", "⇐"),
    ("rArr", "⇒"),
    ("hArr", "⇔"),
    ("minus", "−"),
    ("infin", "∞"),
    ("ne", "≠"),
    ("le", "≤"),
    ("ge", "≥"),
    ("ensp", "\u{2002}"),
    ("emsp", "\u{2003}"),
    ("thinsp", "\u{2009}"),
    ("zwnj", "\u{200c}"),
    ("zwj", "\u{200d}"),
    ("lrm", "\u{200e}"),
    ("rlm", "\u{200f}"),
    ("ndash", "–"),
    ("mdash", "—"),
    ("lsquo", "‘"),
    ("rsquo", "’"),
    ("sbquo", "‚"),
    ("ldquo", "“"),
    ("rdquo", "”"),
    ("bdquo", "„"),
    ("dagger", "†"),
    ("Dagger", "‡"),
    ("permil", "‰"),
    ("lsaquo", "‹"),
    ("rsaquo", "›"),
    ("euro", "€"),
    ("tm", "™"),
];

/// Look up a character entity element by tag.
pub fn entity(tag: &str) -> Option<(&'static str, &'static str)> {
    ENTITIES.iter().find(|(name, _)| *name == tag).copied()
}
