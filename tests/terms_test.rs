/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate stern;
use stern::terms::{BlankNode, Literal, NamedNode, Term};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node_forms() {
        let node = NamedNode::new("http://example.org/subject");
        assert_eq!(node.to_nt(), "<http://example.org/subject>");
        assert_eq!(node.to_string(), "http://example.org/subject");
        assert_eq!(node.iri(), "http://example.org/subject");
    }

    #[test]
    fn test_named_node_equality() {
        let a = NamedNode::new("http://example.org/a");
        let b = NamedNode::new("http://example.org/a");
        let c = NamedNode::new("http://example.org/c");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_blank_node_with_label() {
        let node = BlankNode::with_label("b42");
        assert_eq!(node.to_nt(), "_:b42");
        assert_eq!(node.to_string(), "_:b42");
        assert_eq!(node.label(), "b42");
    }

    #[test]
    fn test_auto_blank_nodes_never_equal() {
        let a = BlankNode::new();
        let b = BlankNode::new();
        assert_ne!(a, b);

        // Same label still compares equal
        let c = BlankNode::with_label("fixed");
        let d = BlankNode::with_label("fixed");
        assert_eq!(c, d);
    }

    #[test]
    fn test_plain_literal_forms() {
        let literal = Literal::new("test");
        assert_eq!(literal.to_nt(), "\"test\"");
        assert_eq!(literal.to_string(), "test");
        assert_eq!(literal.value(), "test");
        assert!(literal.language().is_none());
        assert!(literal.datatype().is_none());
    }

    #[test]
    fn test_language_literal_forms() {
        let literal = Literal::with_language("test", "en");
        assert_eq!(literal.to_nt(), "\"test\"@en");
        assert_eq!(literal.to_string(), "test");
        assert_eq!(literal.language(), Some("en"));
    }

    #[test]
    fn test_datatype_literal_forms() {
        let datatype = NamedNode::new("http://www.w3.org/2001/XMLSchema#integer");
        let literal = Literal::with_datatype("30", datatype.clone());
        assert_eq!(
            literal.to_nt(),
            "\"30\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(literal.datatype(), Some(&datatype));
    }

    #[test]
    fn test_literal_variants_are_distinct() {
        let plain = Literal::new("test");
        let tagged = Literal::with_language("test", "en");
        let typed = Literal::with_datatype(
            "test",
            NamedNode::new("http://www.w3.org/2001/XMLSchema#string"),
        );
        assert_ne!(plain, tagged);
        assert_ne!(plain, typed);
        assert_ne!(tagged, typed);

        // Different language tags are different literals
        let dutch = Literal::with_language("test", "nl");
        assert_ne!(tagged, dutch);
    }

    #[test]
    fn test_literal_equality_is_reflexive_and_symmetric() {
        let a = Literal::with_language("test", "en");
        let b = Literal::with_language("test", "en");
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn test_native_value_ignored_by_equality() {
        let plain = Literal::new("12");
        let native = Literal::new("12").with_native(serde_json::json!(12));
        assert_eq!(plain, native);
        assert_eq!(native.native(), Some(&serde_json::json!(12)));
    }

    #[test]
    fn test_value_of_prefers_native() {
        let native = Literal::new("12").with_native(serde_json::json!(12));
        assert_eq!(native.value_of(), serde_json::json!(12));

        let plain = Literal::new("12");
        assert_eq!(plain.value_of(), serde_json::json!("12"));
    }

    #[test]
    fn test_value_of_for_nodes() {
        let named: Term = NamedNode::new("http://example.org/s").into();
        assert_eq!(named.value_of(), serde_json::json!("http://example.org/s"));

        let blank: Term = BlankNode::with_label("b3").into();
        assert_eq!(blank.value_of(), serde_json::json!("b3"));

        let literal: Term = Literal::new("12").with_native(serde_json::json!(12)).into();
        assert_eq!(literal.value_of(), serde_json::json!(12));
    }

    #[test]
    fn test_try_new_rejects_language_with_datatype() {
        let result = Literal::try_new(
            "test",
            Some("en".to_string()),
            Some(NamedNode::new("http://www.w3.org/2001/XMLSchema#string")),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_try_new_accepts_single_annotation() {
        let tagged = Literal::try_new("test", Some("en".to_string()), None).unwrap();
        assert_eq!(tagged, Literal::with_language("test", "en"));

        let typed = Literal::try_new(
            "test",
            None,
            Some(NamedNode::new("http://www.w3.org/2001/XMLSchema#string")),
        )
        .unwrap();
        assert_eq!(typed.to_nt(), "\"test\"^^<http://www.w3.org/2001/XMLSchema#string>");

        let plain = Literal::try_new("test", None, None).unwrap();
        assert_eq!(plain, Literal::new("test"));
    }

    #[test]
    fn test_deserialize_rejects_language_with_datatype() {
        // Hand-written input is held to the same rule as try_new
        let both = r#"{"value":"test","language":"en","datatype":{"iri":"http://www.w3.org/2001/XMLSchema#string"},"native":null}"#;
        assert!(serde_json::from_str::<Literal>(both).is_err());
    }

    #[test]
    fn test_deserialize_keeps_single_annotation_and_native() {
        let tagged: Literal = serde_json::from_str(
            r#"{"value":"test","language":"en","datatype":null,"native":null}"#,
        )
        .unwrap();
        assert_eq!(tagged, Literal::with_language("test", "en"));

        let native: Literal =
            serde_json::from_str(r#"{"value":"1","language":null,"datatype":null,"native":1}"#)
                .unwrap();
        assert_eq!(native, Literal::new("1"));
        assert_eq!(native.value_of(), serde_json::json!(1));
    }

    #[test]
    fn test_term_interface_names() {
        let named: Term = NamedNode::new("http://example.org/s").into();
        let blank: Term = BlankNode::with_label("b0").into();
        let literal: Term = Literal::new("test").into();
        assert_eq!(named.interface_name(), "NamedNode");
        assert_eq!(blank.interface_name(), "BlankNode");
        assert_eq!(literal.interface_name(), "Literal");
    }

    #[test]
    fn test_term_predicates_and_value() {
        let named: Term = NamedNode::new("http://example.org/s").into();
        assert!(named.is_named_node());
        assert!(!named.is_blank_node());
        assert!(!named.is_literal());
        assert_eq!(named.value(), "http://example.org/s");

        let blank: Term = BlankNode::with_label("b7").into();
        assert!(blank.is_blank_node());
        assert_eq!(blank.value(), "b7");

        let literal: Term = Literal::with_language("hallo", "nl").into();
        assert!(literal.is_literal());
        assert_eq!(literal.value(), "hallo");
    }

    #[test]
    fn test_terms_of_different_variants_never_equal() {
        let named: Term = NamedNode::new("x").into();
        let blank: Term = BlankNode::with_label("x").into();
        let literal: Term = Literal::new("x").into();
        assert_ne!(named, blank);
        assert_ne!(named, literal);
        assert_ne!(blank, literal);
    }

    #[test]
    fn test_term_display_forms() {
        let named: Term = NamedNode::new("http://example.org/s").into();
        let blank: Term = BlankNode::with_label("b1").into();
        let literal: Term = Literal::with_language("o", "en").into();
        assert_eq!(named.to_string(), "http://example.org/s");
        assert_eq!(blank.to_string(), "_:b1");
        assert_eq!(literal.to_string(), "o");

        assert_eq!(named.to_nt(), "<http://example.org/s>");
        assert_eq!(blank.to_nt(), "_:b1");
        assert_eq!(literal.to_nt(), "\"o\"@en");
    }
}
