/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::terms::{BlankNode, Literal, NamedNode, Term};

/// Defines different ways to constrain one position of a triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermPattern {
    /// Matches when the stored term is structurally equal to this term
    Term(Term),
    /// Matches when the stored term's display form equals this string
    Text(String),
}

impl TermPattern {
    pub fn matches(&self, term: &Term) -> bool {
        match self {
            TermPattern::Term(t) => t == term,
            TermPattern::Text(s) => term.to_string() == *s,
        }
    }
}

impl From<Term> for TermPattern {
    fn from(term: Term) -> Self {
        TermPattern::Term(term)
    }
}

impl From<NamedNode> for TermPattern {
    fn from(node: NamedNode) -> Self {
        TermPattern::Term(Term::NamedNode(node))
    }
}

impl From<BlankNode> for TermPattern {
    fn from(node: BlankNode) -> Self {
        TermPattern::Term(Term::BlankNode(node))
    }
}

impl From<Literal> for TermPattern {
    fn from(literal: Literal) -> Self {
        TermPattern::Term(Term::Literal(literal))
    }
}

impl From<&str> for TermPattern {
    fn from(text: &str) -> Self {
        TermPattern::Text(text.to_string())
    }
}

impl From<String> for TermPattern {
    fn from(text: String) -> Self {
        TermPattern::Text(text)
    }
}
