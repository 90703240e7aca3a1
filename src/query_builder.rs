/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::graph::Graph;
use crate::pattern::TermPattern;
use crate::terms::Term;
use crate::triple::Triple;
use rustc_hash::FxHashSet;

pub struct GraphQuery<'a> {
    graph: &'a Graph,
    subject_filter: Option<TermPattern>,
    predicate_filter: Option<TermPattern>,
    object_filter: Option<TermPattern>,
    custom_filter: Option<Box<dyn Fn(&Triple) -> bool + 'a>>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl<'a> GraphQuery<'a> {
    /// Creates a new GraphQuery for the given Graph
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            subject_filter: None,
            predicate_filter: None,
            object_filter: None,
            custom_filter: None,
            limit: None,
            offset: None,
        }
    }

    /// Filter triples by subject, structurally or by display form
    pub fn with_subject(mut self, subject: impl Into<TermPattern>) -> Self {
        self.subject_filter = Some(subject.into());
        self
    }

    /// Filter triples by predicate, structurally or by display form
    pub fn with_predicate(mut self, predicate: impl Into<TermPattern>) -> Self {
        self.predicate_filter = Some(predicate.into());
        self
    }

    /// Filter triples by object, structurally or by display form
    pub fn with_object(mut self, object: impl Into<TermPattern>) -> Self {
        self.object_filter = Some(object.into());
        self
    }

    /// Apply a custom filter function to all triples
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Triple) -> bool + 'a,
    {
        self.custom_filter = Some(Box::new(predicate));
        self
    }

    /// Limit the number of results
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip the first n results
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Get the raw triple results
    pub fn get_triples(self) -> Vec<Triple> {
        self.apply_filters()
    }

    /// Collect the results into a new graph
    pub fn into_graph(self) -> Graph {
        self.apply_filters().into_iter().collect()
    }

    /// Count the number of results without retrieving them
    pub fn count(self) -> usize {
        self.apply_filters().len()
    }

    /// Get only the subjects from the results, first occurrence order
    pub fn get_subjects(self) -> Vec<Term> {
        let triples = self.apply_filters();
        let mut seen = FxHashSet::default();
        let mut results = Vec::with_capacity(triples.len());
        for triple in triples {
            if seen.insert(triple.subject.clone()) {
                results.push(triple.subject);
            }
        }
        results
    }

    /// Get only the predicates from the results, first occurrence order
    pub fn get_predicates(self) -> Vec<Term> {
        let triples = self.apply_filters();
        let mut seen = FxHashSet::default();
        let mut results = Vec::with_capacity(triples.len());
        for triple in triples {
            if seen.insert(triple.predicate.clone()) {
                results.push(triple.predicate);
            }
        }
        results
    }

    /// Get only the objects from the results, first occurrence order
    pub fn get_objects(self) -> Vec<Term> {
        let triples = self.apply_filters();
        let mut seen = FxHashSet::default();
        let mut results = Vec::with_capacity(triples.len());
        for triple in triples {
            if seen.insert(triple.object.clone()) {
                results.push(triple.object);
            }
        }
        results
    }

    // Applies all the configured filters and returns the matching triples
    fn apply_filters(self) -> Vec<Triple> {
        let mut results = Vec::new();

        for triple in self.graph.iter() {
            let mut matches = true;

            if let Some(filter) = &self.subject_filter {
                matches &= filter.matches(&triple.subject);
            }

            if matches {
                if let Some(filter) = &self.predicate_filter {
                    matches &= filter.matches(&triple.predicate);
                }
            }

            if matches {
                if let Some(filter) = &self.object_filter {
                    matches &= filter.matches(&triple.object);
                }
            }

            if matches {
                if let Some(custom) = &self.custom_filter {
                    matches &= custom(triple);
                }
            }

            if matches {
                results.push(triple.clone());
            }
        }

        // Apply limit and offset
        if self.offset.is_some() || self.limit.is_some() {
            let offset = self.offset.unwrap_or(0).min(results.len());
            let end = match self.limit {
                Some(limit) => offset.saturating_add(limit).min(results.len()),
                None => results.len(),
            };
            results = results[offset..end].to_vec();
        }

        results
    }
}
