// Test support
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

//! Fixtures shared by unit tests.
//!
//! [`Fixture`] produces the XML of a compound file of the shape Doxygen
//!   writes,
//!     so that tests of later phases can describe their input tersely
//!     while still exercising the builders.

use crate::{
    config::PermalinkPolicy,
    diagnose::BufferReporter,
    document::Document,
    model::RawGraph,
    resolve::LinkedGraph,
    xml::parse_str,
};

/// Compound file under construction.
#[derive(Debug, Clone)]
pub struct Fixture {
    id: String,
    kind: String,
    name: String,
    title: Option<String>,
    children: Vec<String>,
    detailed: Option<String>,
    file: Option<String>,
}

/// New compound fixture.
pub fn compound(id: &str, kind: &str, name: &str) -> Fixture {
    Fixture {
        id: id.into(),
        kind: kind.into(),
        name: name.into(),
        title: None,
        children: Vec::new(),
        detailed: None,
        file: None,
    }
}

impl Fixture {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn base(self, refid: &str) -> Self {
        self.related("basecompoundref", refid)
    }

    pub fn derived(self, refid: &str) -> Self {
        self.related("derivedcompoundref", refid)
    }

    /// Reference to an inner compound using the element `tag`
    ///   (e.g. `innernamespace`).
    pub fn inner(mut self, tag: &str, refid: &str) -> Self {
        self.children
            .push(format!(r#"<{tag} refid="{refid}">{refid}</{tag}>"#));
        self
    }

    /// Content of `detaileddescription`.
    pub fn detailed(mut self, xml: &str) -> Self {
        self.detailed = Some(xml.into());
        self
    }

    pub fn located(mut self, file: &str) -> Self {
        self.file = Some(file.into());
        self
    }

    fn related(mut self, tag: &str, refid: &str) -> Self {
        const ATTRS: &str = r#"prot="public" virt="non-virtual""#;

        self.children
            .push(format!(r#"<{tag} refid="{refid}" {ATTRS}>{refid}</{tag}>"#));
        self
    }

    /// XML of the compound file.
    pub fn xml(&self) -> String {
        let title = self
            .title
            .as_ref()
            .map(|t| format!("<title>{}</title>", escape(t)))
            .unwrap_or_default();
        let location = self
            .file
            .as_ref()
            .map(|f| format!(r#"<location file="{f}"/>"#))
            .unwrap_or_default();

        format!(
            r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="{id}" kind="{kind}">
    <compoundname>{name}</compoundname>
    {title}
    {children}
    <briefdescription></briefdescription>
    <detaileddescription>{detailed}</detaileddescription>
    {location}
  </compounddef>
</doxygen>"#,
            id = self.id,
            kind = self.kind,
            name = escape(&self.name),
            children = self.children.join("\n    "),
            detailed = self.detailed.as_deref().unwrap_or_default(),
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn document(fixtures: &[Fixture]) -> Document {
    let roots: Vec<_> = fixtures
        .iter()
        .map(|fixture| parse_str(&fixture.xml()).unwrap())
        .collect();

    Document::assemble(&roots).unwrap()
}

/// Wrap `fixtures` with the default permalink policy.
pub fn raw(fixtures: &[Fixture], reporter: &mut BufferReporter) -> RawGraph {
    RawGraph::wrap(document(fixtures), &PermalinkPolicy::default(), reporter)
}

/// Wrap and resolve `fixtures`,
///   returning the graph along with all reported diagnostics.
pub fn linked(fixtures: &[Fixture]) -> (LinkedGraph, BufferReporter) {
    let mut reporter = BufferReporter::new();
    let wrapped = raw(fixtures, &mut reporter);
    let graph = LinkedGraph::resolve(wrapped, &mut reporter);

    (graph, reporter)
}
