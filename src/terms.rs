/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::{Result, SternError};
use crate::BLANK_NODE_COUNTER;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    /// The term's primary content: IRI, blank node label or lexical form.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.iri(),
            Term::BlankNode(b) => b.label(),
            Term::Literal(l) => l.value(),
        }
    }

    pub fn interface_name(&self) -> &'static str {
        match self {
            Term::NamedNode(_) => "NamedNode",
            Term::BlankNode(_) => "BlankNode",
            Term::Literal(_) => "Literal",
        }
    }

    pub fn to_nt(&self) -> String {
        match self {
            Term::NamedNode(n) => n.to_nt(),
            Term::BlankNode(b) => b.to_nt(),
            Term::Literal(l) => l.to_nt(),
        }
    }

    /// Scalar value for generic consumption. A literal carrying a native
    /// value yields that value, every other term yields its string content.
    pub fn value_of(&self) -> Value {
        match self {
            Term::Literal(l) => l.value_of(),
            other => Value::String(other.value().to_string()),
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => write!(f, "{}", n),
            Term::BlankNode(b) => write!(f, "{}", b),
            Term::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    pub fn new(iri: impl Into<String>) -> Self {
        NamedNode { iri: iri.into() }
    }

    pub fn iri(&self) -> &str {
        &self.iri
    }

    pub fn to_nt(&self) -> String {
        format!("<{}>", self.iri)
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iri)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlankNode {
    label: String,
}

impl BlankNode {
    /// Mints a node with a fresh label taken from the process-wide counter,
    /// so independently created anonymous nodes never collide.
    pub fn new() -> Self {
        let n = BLANK_NODE_COUNTER.fetch_add(1, Ordering::Relaxed);
        BlankNode {
            label: format!("b{}", n),
        }
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        BlankNode {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn to_nt(&self) -> String {
        format!("_:{}", self.label)
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.label)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Literal {
    value: String,
    language: Option<String>,
    datatype: Option<NamedNode>,
    native: Option<Value>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype: None,
            native: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
            native: None,
        }
    }

    pub fn with_datatype(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype),
            native: None,
        }
    }

    /// General constructor. A literal cannot carry a language tag and a
    /// datatype at the same time.
    pub fn try_new(
        value: impl Into<String>,
        language: Option<String>,
        datatype: Option<NamedNode>,
    ) -> Result<Self> {
        if language.is_some() && datatype.is_some() {
            return Err(SternError::InvalidArgument(
                "literal cannot have both a language tag and a datatype".to_string(),
            ));
        }
        Ok(Literal {
            value: value.into(),
            language,
            datatype,
            native: None,
        })
    }

    /// Attaches a native representation, e.g. a parsed number. The native
    /// value never takes part in equality or serialization.
    pub fn with_native(mut self, native: Value) -> Self {
        self.native = Some(native);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn datatype(&self) -> Option<&NamedNode> {
        self.datatype.as_ref()
    }

    pub fn native(&self) -> Option<&Value> {
        self.native.as_ref()
    }

    pub fn value_of(&self) -> Value {
        match &self.native {
            Some(native) => native.clone(),
            None => Value::String(self.value.clone()),
        }
    }

    pub fn to_nt(&self) -> String {
        if let Some(language) = &self.language {
            format!("\"{}\"@{}", self.value, language)
        } else if let Some(datatype) = &self.datatype {
            format!("\"{}\"^^{}", self.value, datatype.to_nt())
        } else {
            format!("\"{}\"", self.value)
        }
    }
}

// Equality and hashing ignore the native value, it is a consumption
// convenience only.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.language == other.language
            && self.datatype == other.datatype
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.language.hash(state);
        self.datatype.hash(state);
    }
}

// Deserialization routes through try_new so decoded input cannot bypass
// the language/datatype exclusivity.
#[derive(Deserialize)]
struct RawLiteral {
    value: String,
    language: Option<String>,
    datatype: Option<NamedNode>,
    native: Option<Value>,
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = RawLiteral::deserialize(deserializer)?;
        let literal = Literal::try_new(raw.value, raw.language, raw.datatype)
            .map_err(serde::de::Error::custom)?;
        Ok(match raw.native {
            Some(native) => literal.with_native(native),
            None => literal,
        })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
