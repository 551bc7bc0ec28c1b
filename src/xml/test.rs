// Tests for generic XML element tree
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

use super::*;
use crate::build::ViolationKind;

mod reader {
    use super::*;

    #[test]
    fn nested_elements_with_attrs_and_text() {
        let given = parse_str(
            r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<!-- generated -->
<para id="p1">Hello <bold>world</bold>!</para>"#,
        )
        .unwrap();

        let expected = Element::new("para")
            .with_attr("id", "p1")
            .with_text("Hello ")
            .with_child(Element::new("bold").with_text("world"))
            .with_text("!");

        assert_eq!(expected, given);
    }

    #[test]
    fn entities_are_unescaped() {
        let given =
            parse_str(r#"<type a="x &amp; y">std::vector&lt; T &gt;</type>"#)
                .unwrap();

        assert_eq!(Some("x & y"), given.attr("a"));
        assert_eq!("std::vector< T >", given.text());
    }

    #[test]
    fn cdata_merges_with_adjacent_text() {
        let given = parse_str("<verbatim>a <![CDATA[<b>]]> c</verbatim>")
            .unwrap();

        assert_eq!(
            &[XmlNode::Text("a <b> c".into())],
            given.children()
        );
    }

    #[test]
    fn self_closing_element_has_no_children() {
        let given = parse_str(r#"<para><linebreak/></para>"#).unwrap();

        assert_eq!(
            Element::new("para").with_child(Element::new("linebreak")),
            given
        );
    }

    #[test]
    fn empty_document_has_no_root() {
        assert!(matches!(parse_str("  \n"), Err(XmlError::NoRoot)));
    }

    #[test]
    fn unclosed_element_fails() {
        assert!(parse_str("<doxygen><compounddef>").is_err());
    }

    #[test]
    fn mismatched_close_fails() {
        assert!(parse_str("<a><b></a></b>").is_err());
    }

    #[test]
    fn second_root_fails() {
        assert!(matches!(
            parse_str("<a/><b/>"),
            Err(XmlError::MultipleRoots(name)) if name == "b"
        ));
    }
}

mod access {
    use super::*;

    fn sample() -> Element {
        Element::new("memberdef")
            .with_attr("kind", "function")
            .with_attr("static", "no")
            .with_attr("line", "42")
            .with_text("\n  ")
            .with_child(Element::new("name").with_text("run"))
            .with_text("\n  ")
            .with_child(
                Element::new("type")
                    .with_text("int ")
                    .with_child(Element::new("ref").with_text("Foo")),
            )
            .with_text("\n")
    }

    #[test]
    fn whitespace_text_is_not_inner() {
        let sut = sample();

        assert_eq!(2, sut.inner_elements().count());
        assert!(!sut.has_inner_text());
    }

    #[test]
    fn non_whitespace_text_is_inner() {
        let sut = Element::new("para").with_text(" x ");

        assert!(sut.has_inner_text());
        assert_eq!(1, sut.inner_elements().count());
    }

    #[test]
    fn attribute_accessors() {
        let sut = sample();

        assert!(sut.has_attributes());
        assert_eq!(
            vec!["kind", "static", "line"],
            sut.attribute_names().collect::<Vec<_>>()
        );
        assert_eq!(Ok("function"), sut.string_attr("kind"));
        assert_eq!(Ok(false), sut.bool_attr("static"));
        assert_eq!(Ok(42u32), sut.number_attr("line"));
    }

    #[test]
    fn missing_attribute_is_violation() {
        let given = sample().string_attr("id").unwrap_err();

        assert_eq!("memberdef", given.element());
        assert_eq!(&ViolationKind::MissingAttr("id".into()), given.kind());
    }

    #[test]
    fn bad_bool_is_violation() {
        let sut = Element::new("x").with_attr("flag", "maybe");

        assert!(matches!(
            sut.bool_attr("flag").unwrap_err().kind(),
            ViolationKind::InvalidAttrValue { attr, .. } if attr == "flag"
        ));
    }

    #[test]
    fn bad_number_is_violation() {
        let sut = Element::new("x").with_attr("n", "forty");

        assert!(sut.number_attr::<u32>("n").is_err());
    }

    #[test]
    fn inner_element_text_of_text_only_child() {
        let sut = sample();

        assert!(sut.has_inner_element("name"));
        assert!(sut.is_inner_element_text("name"));
        assert_eq!(Ok("run".into()), sut.inner_element_text("name"));
    }

    #[test]
    fn inner_element_text_rejects_mixed_child() {
        let sut = sample();

        assert!(!sut.is_inner_element_text("type"));
        assert_eq!(
            &ViolationKind::UnexpectedElement("ref".into()),
            sut.inner_element_text("type").unwrap_err().kind()
        );
    }

    #[test]
    fn inner_element_text_missing_child() {
        let sut = sample();

        assert!(!sut.has_inner_element("scope"));
        assert_eq!(
            &ViolationKind::MissingElement("scope".into()),
            sut.inner_element_text("scope").unwrap_err().kind()
        );
    }
}
