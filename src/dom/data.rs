// Kind-specific node data
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

//! Typed attribute and child values for each kind of node.
//!
//! Fields of type `Option<usize>` or `Vec<usize>` are indices into the
//!   children of the node holding the data;
//!     resolve them with [`Node::hoisted`](super::Node::hoisted) and
//!     [`Node::child_at`](super::Node::child_at).
//!
//! Enumerated attribute values
//!   (e.g. `@kind` and `@prot`)
//!   are kept as strings.
//! Doxygen adds values to these enumerations from release to release and
//!   an unfamiliar value is not a reason to reject a whole project;
//!     the consumers that care about particular values
//!       (e.g. [`crate::model`] for compound kinds)
//!     decide what to do with the rest.
//! [`RefKind`] is the exception,
//!   since reference resolution cannot proceed without understanding it.

use std::fmt::Display;

/// Kind-specific data of a [`Node`](super::Node).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeData {
    /// The element has no attributes or hoisted children.
    #[default]
    None,

    Doxygen(DoxygenMeta),
    Compound(Box<CompoundDef>),
    CompoundRef(CompoundRef),
    Include(Include),
    Inner(InnerRef),
    GraphNode {
        id: String,
    },
    GraphLink {
        refid: String,
        external: Option<String>,
    },
    ChildNode {
        refid: String,
        relation: String,
    },
    Section(SectionDef),
    MemberRef(MemberRef),
    Member(Box<MemberDef>),
    EnumValue(EnumValue),
    Param(Param),
    Reimplement {
        refid: String,
        name: String,
    },
    Reference(Reference),
    Location(Location),
    TocSect {
        name: String,
        reference: String,
    },
    Export {
        refid: Option<String>,
    },

    Ref(Ref),
    Sect(Sect),
    Anchor {
        id: String,
    },
    Formula {
        id: String,
    },
    Ulink {
        url: String,
    },
    Image(Image),
    Diagram(Diagram),
    Emoji {
        name: String,
        unicode: String,
    },
    RawBlock {
        block: bool,
    },
    List(List),
    ListItem(ListItem),
    SimpleSect {
        kind: String,
        title: Option<usize>,
    },
    Table(Table),
    Entry(Entry),
    Caption {
        id: Option<String>,
    },
    Heading {
        level: u8,
    },
    TocItem {
        id: String,
    },
    Language {
        langid: String,
    },
    ParameterList {
        kind: String,
    },
    ParameterName {
        direction: Option<String>,
    },
    XrefSect {
        id: String,
        title: Option<String>,
    },
    CopyDoc {
        link: String,
    },
    Description {
        title: Option<usize>,
    },

    Listing {
        filename: Option<String>,
    },
    CodeLine(CodeLine),
    Highlight {
        class: String,
    },
    Sp {
        count: u32,
    },

    /// A character entity;
    ///   `name` is the element tag and `text` the character(s) it stands
    ///   for.
    Entity {
        name: &'static str,
        text: &'static str,
    },
}

/// Attributes of the `doxygen` root of a compound file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DoxygenMeta {
    /// Version of Doxygen that generated the file.
    pub version: String,
    /// Output language (`@xml:lang`).
    pub language: Option<String>,
}

/// A documentable unit:
///   class, namespace, file, folder, group, page, and so on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundDef {
    pub id: String,
    /// Compound kind as written by Doxygen
    ///   (e.g. `class`, `namespace`, `dir`).
    pub kind: String,
    pub language: Option<String>,
    pub prot: Option<String>,
    pub is_final: bool,
    pub is_inline: bool,
    pub is_sealed: bool,
    pub is_abstract: bool,

    /// Fully qualified name
    ///   (e.g. `ns::Foo<T>`, `src/main.c`, or a page's label).
    pub compound_name: String,
    /// Human-readable title,
    ///   for compounds that have one.
    pub title: Option<String>,

    pub base_refs: Vec<CompoundRef>,
    pub derived_refs: Vec<CompoundRef>,
    /// References to compounds nested within this one,
    ///   in document order.
    pub inner: Vec<InnerRef>,

    pub brief: Option<usize>,
    pub detailed: Option<usize>,
    pub template_params: Option<usize>,
    pub sections: Vec<usize>,
    pub toc: Option<usize>,
    pub listing: Option<usize>,
    pub location: Option<Location>,
}

impl CompoundDef {
    /// Inner compound references of the given kind.
    pub fn inner_of(&self, kind: InnerKind) -> impl Iterator<Item = &InnerRef> {
        self.inner.iter().filter(move |inner| inner.kind == kind)
    }
}

/// A base or derived class reference.
///
/// `refid` is absent when the related class is not itself documented
///   (e.g. a class of the standard library).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRef {
    pub refid: Option<String>,
    pub prot: String,
    pub virt: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub refid: Option<String>,
    /// Whether this is a local (`"…"`) rather than system (`<…>`)
    ///   include.
    pub local: bool,
    pub name: String,
}

/// Kind of an `innerX` compound reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InnerKind {
    Module,
    Dir,
    File,
    Class,
    Concept,
    Namespace,
    Page,
    Group,
}

impl InnerKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "innermodule" => Some(Self::Module),
            "innerdir" => Some(Self::Dir),
            "innerfile" => Some(Self::File),
            "innerclass" => Some(Self::Class),
            "innerconcept" => Some(Self::Concept),
            "innernamespace" => Some(Self::Namespace),
            "innerpage" => Some(Self::Page),
            "innergroup" => Some(Self::Group),
            _ => None,
        }
    }
}

/// Reference to a compound nested within another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerRef {
    pub kind: InnerKind,
    pub refid: String,
    pub prot: Option<String>,
    pub inline: bool,
    pub name: String,
}

/// A `sectiondef`,
///   grouping members by kind
///     (e.g. `public-func`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionDef {
    pub kind: String,
    pub header: Option<String>,
    pub description: Option<usize>,
    /// Indices of `memberdef` and `member` children.
    pub members: Vec<usize>,
}

/// A reference to a member defined elsewhere.
///
/// This is used both for members listed within a `sectiondef` and for
///   the entries of `listofallmembers`;
///     the former have a `kind` and the latter a `scope`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberRef {
    pub refid: String,
    pub kind: Option<String>,
    pub prot: Option<String>,
    pub virt: Option<String>,
    pub ambiguity_scope: Option<String>,
    pub scope: Option<String>,
    pub name: String,
}

/// A documented symbol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberDef {
    pub id: String,
    /// Member kind
    ///   (e.g. `function`, `variable`, `enum`).
    pub kind: String,
    pub prot: String,
    pub is_static: bool,
    pub is_const: bool,
    pub is_inline: bool,
    pub is_explicit: bool,
    pub is_constexpr: bool,
    pub is_final: bool,
    pub virt: Option<String>,
    pub refqual: Option<String>,
    pub strong: Option<bool>,
    /// Remaining recognized attributes,
    ///   in document order.
    ///
    /// These are qualifiers specific to a handful of languages
    ///   (e.g. `gettable` for C# properties)
    ///   that renderers may choose to display verbatim.
    pub other_attrs: Vec<(String, String)>,

    pub name: String,
    pub qualified_name: Option<String>,
    pub definition: Option<String>,
    pub args_string: Option<String>,
    pub bitfield: Option<String>,
    pub read: Option<String>,
    pub write: Option<String>,

    pub type_: Option<usize>,
    pub template_params: Option<usize>,
    pub initializer: Option<usize>,
    pub exceptions: Option<usize>,
    pub params: Vec<usize>,
    pub enum_values: Vec<usize>,
    pub brief: Option<usize>,
    pub detailed: Option<usize>,
    pub inbody: Option<usize>,

    pub reimplements: Vec<RefTarget>,
    pub reimplemented_by: Vec<RefTarget>,
    pub location: Option<Location>,
}

/// Id and text of a simple reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTarget {
    pub refid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumValue {
    pub id: String,
    pub prot: String,
    pub name: String,
    pub initializer: Option<usize>,
    pub brief: Option<usize>,
    pub detailed: Option<usize>,
}

/// A function or template parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    pub attributes: Option<String>,
    pub declname: Option<String>,
    pub defname: Option<String>,
    pub array: Option<String>,
    pub type_: Option<usize>,
    pub defval: Option<usize>,
    pub typeconstraint: Option<usize>,
    pub brief: Option<usize>,
}

/// Entry of `references` or `referencedby`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub refid: String,
    pub compound_ref: Option<String>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
    pub name: String,
}

/// Source location of a compound or member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub decl_file: Option<String>,
    pub decl_line: Option<u32>,
    pub decl_column: Option<u32>,
    pub body_file: Option<String>,
    pub body_start: Option<i32>,
    /// End of the body,
    ///   which Doxygen writes as `-1` when unknown.
    pub body_end: Option<i32>,
}

/// What a [`Ref`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Compound,
    Member,
    XrefSect,
}

impl RefKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compound" => Some(Self::Compound),
            "member" => Some(Self::Member),
            "xrefsect" => Some(Self::XrefSect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Member => "member",
            Self::XrefSect => "xrefsect",
        }
    }
}

impl Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-reference from text to a compound or member.
///
/// The text of the reference is held by the node's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref {
    pub refid: String,
    pub kindref: RefKind,
    pub external: Option<String>,
    pub tooltip: Option<String>,
}

/// A `sectN` of a description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sect {
    pub level: u8,
    pub id: Option<String>,
    pub title: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    /// Output format the image is intended for
    ///   (`@type`; e.g. `html`).
    pub format: Option<String>,
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub alt: Option<String>,
    pub inline: bool,
    pub caption: Option<String>,
}

/// An inline diagram (`dot`, `msc`, `plantuml`) or diagram file
///   (`dotfile` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagram {
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub caption: Option<String>,
    pub engine: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    /// Numbering style of an ordered list
    ///   (`@type`; e.g. `a` or `i`).
    pub style: Option<String>,
    pub start: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub override_: Option<String>,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: u32,
    pub cols: u32,
    pub width: Option<String>,
    pub caption: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub thead: bool,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
    pub align: Option<String>,
    pub valign: Option<String>,
    pub width: Option<String>,
    pub class: Option<String>,
}

/// A line of a program listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeLine {
    pub lineno: Option<u32>,
    pub refid: Option<String>,
    pub refkind: Option<String>,
    pub external: bool,
}
