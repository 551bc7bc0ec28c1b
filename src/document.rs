// Document assembly
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

//! Assemble compound files into a single [`Document`].
//!
//! Doxygen writes each compound to its own file,
//!   each with a `doxygen` root element holding a single `compounddef`.
//! The [`Document`] gathers every `compounddef` of a project beneath a
//!   single `doxygen` [`Node`],
//!     in the order in which the files were provided.
//!
//! Doxygen also writes `index.xml`,
//!   listing every compound and its members;
//!     [`Index`] is used to locate the compound files.

use crate::{
    build::{compounddef, Attrs, BuildResult, SchemaViolation, ViolationKind},
    dom::{Child, DoxygenMeta, Node, NodeData, NodeKind},
    xml::{Element, XmlNode},
};

/// Attributes of the `doxygen` and `doxygenindex` roots.
///
/// The schema location attributes are accepted and ignored.
const ROOT_ATTRS: &[&str] = &[
    "version",
    "xml:lang",
    "xmlns:xsi",
    "xsi:noNamespaceSchemaLocation",
];

/// Every compound of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Assemble a document from the root elements of compound files.
    ///
    /// Generator metadata is taken from the first root;
    ///   a document assembled from no roots has empty metadata.
    pub fn assemble<'a, I>(roots: I) -> BuildResult<Self>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut meta: Option<DoxygenMeta> = None;
        let mut compounds = Vec::new();

        for root in roots {
            let root_meta = compound_root(root, &mut compounds)?;
            meta.get_or_insert(root_meta);
        }

        Ok(Self::from_compounds(meta.unwrap_or_default(), compounds))
    }

    /// Produce a document from already-built `compounddef` nodes.
    pub fn from_compounds(meta: DoxygenMeta, compounds: Vec<Node>) -> Self {
        Self {
            root: Node::new(
                NodeKind::Doxygen,
                compounds.into_iter().map(Child::Node).collect(),
                NodeData::Doxygen(meta),
            ),
        }
    }

    /// The `doxygen` root,
    ///   whose children are the compounds.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn meta(&self) -> Option<&DoxygenMeta> {
        match self.root.data() {
            NodeData::Doxygen(meta) => Some(meta),
            _ => None,
        }
    }

    /// Compounds in input order.
    pub fn compounds(&self) -> impl Iterator<Item = &Node> {
        self.root.child_nodes()
    }

    /// Compound at the given position in input order.
    pub fn compound(&self, index: usize) -> Option<&Node> {
        self.root.child_at(index)
    }

    pub fn len(&self) -> usize {
        self.root.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the compounds of a single `doxygen` root,
///   appending them to `dest`.
fn compound_root(
    root: &Element,
    dest: &mut Vec<Node>,
) -> BuildResult<DoxygenMeta> {
    const BUILDER: &str = "document assembler";

    if root.name() != NodeKind::Doxygen.tag() {
        return Err(root
            .violation(ViolationKind::UnexpectedRoot {
                expected: "doxygen",
            })
            .rejected_by(BUILDER));
    }

    let attrs = Attrs::check(root, ROOT_ATTRS, BUILDER)?;
    let meta = DoxygenMeta {
        version: attrs.req("version")?,
        language: attrs.opt_nonempty("xml:lang"),
    };

    for child in root.inner_elements() {
        match child {
            XmlNode::Element(ele) if ele.name() == "compounddef" => {
                dest.push(compounddef(ele)?)
            }
            XmlNode::Element(ele) => {
                return Err(violation(
                    root,
                    ViolationKind::UnexpectedElement(ele.name().into()),
                    BUILDER,
                ))
            }
            XmlNode::Text(text) => {
                return Err(violation(
                    root,
                    ViolationKind::UnexpectedText(text.trim().into()),
                    BUILDER,
                ))
            }
        }
    }

    Ok(meta)
}

fn violation(
    ele: &Element,
    kind: ViolationKind,
    builder: &'static str,
) -> SchemaViolation {
    ele.violation(kind).rejected_by(builder)
}

/// Contents of `index.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index {
    pub version: String,
    pub compounds: Vec<IndexCompound>,
}

/// A compound listed in `index.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCompound {
    /// Id of the compound,
    ///   which is also the stem of its file name.
    pub refid: String,
    pub kind: String,
    pub name: String,
    pub members: Vec<IndexMember>,
}

impl IndexCompound {
    /// Name of the file holding this compound.
    pub fn file_name(&self) -> String {
        format!("{}.xml", self.refid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMember {
    pub refid: String,
    pub kind: String,
    pub name: String,
}

impl Index {
    /// Interpret the root element of `index.xml`.
    pub fn parse(root: &Element) -> BuildResult<Self> {
        const BUILDER: &str = "index builder";

        if root.name() != "doxygenindex" {
            return Err(violation(
                root,
                ViolationKind::UnexpectedRoot {
                    expected: "doxygenindex",
                },
                BUILDER,
            ));
        }

        let attrs = Attrs::check(root, ROOT_ATTRS, BUILDER)?;
        let mut index = Index {
            version: attrs.req("version")?,
            compounds: Vec::new(),
        };

        for child in root.child_elements() {
            match child.name() {
                "compound" => index.compounds.push(index_compound(child)?),
                name => {
                    return Err(violation(
                        root,
                        ViolationKind::UnexpectedElement(name.into()),
                        BUILDER,
                    ))
                }
            }
        }

        Ok(index)
    }
}

fn index_compound(ele: &Element) -> BuildResult<IndexCompound> {
    const BUILDER: &str = "index compound builder";

    let attrs = Attrs::check(ele, &["refid", "kind"], BUILDER)?;
    let mut compound = IndexCompound {
        refid: attrs.req("refid")?,
        kind: attrs.req("kind")?,
        name: String::new(),
        members: Vec::new(),
    };

    for child in ele.child_elements() {
        match child.name() {
            "name" => compound.name = child.text(),
            "member" => compound.members.push(index_member(child)?),
            name => {
                return Err(violation(
                    ele,
                    ViolationKind::UnexpectedElement(name.into()),
                    BUILDER,
                ))
            }
        }
    }

    if compound.name.is_empty() {
        return Err(violation(
            ele,
            ViolationKind::MissingElement("name".into()),
            BUILDER,
        ));
    }

    Ok(compound)
}

fn index_member(ele: &Element) -> BuildResult<IndexMember> {
    const BUILDER: &str = "index member builder";

    let attrs = Attrs::check(ele, &["refid", "kind"], BUILDER)?;

    Ok(IndexMember {
        refid: attrs.req("refid")?,
        kind: attrs.req("kind")?,
        name: ele
            .inner_element_text("name")
            .map_err(|e| e.rejected_by(BUILDER))?,
    })
}
