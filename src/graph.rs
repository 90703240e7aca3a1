use crate::action::TripleAction;
use crate::pattern::TermPattern;
use crate::query_builder::GraphQuery;
use crate::triple::Triple;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;

#[cfg(not(test))]
use log::{debug, trace}; // Use log crate when building application
#[cfg(test)]
use std::{println as debug, println as trace};

const MIN_CHUNK_SIZE: usize = 1024;

/// A deduplicated, insertion-ordered collection of triples with a list of
/// registered actions dispatched on every insertion attempt.
#[derive(Debug, Clone)]
pub struct Graph {
    items: Vec<Triple>,
    index: FxHashSet<Triple>,
    actions: Vec<TripleAction>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: FxHashSet::default(),
            actions: Vec::new(),
        }
    }

    // Items are assumed to be free of duplicates already.
    fn from_items(items: Vec<Triple>) -> Self {
        let index = items.iter().cloned().collect();
        Self {
            items,
            index,
            actions: Vec::new(),
        }
    }

    /// Runs every registered action, then stores the triple unless an equal
    /// one is already present. Returns whether the triple was inserted.
    /// Actions run once per call, also when the insertion is suppressed as
    /// a duplicate.
    pub fn add(&mut self, triple: Triple) -> bool {
        for action in &self.actions {
            action.run(&triple);
        }
        if self.index.contains(&triple) {
            trace!("duplicate triple ignored: {}", triple);
            return false;
        }
        self.index.insert(triple.clone());
        self.items.push(triple);
        true
    }

    /// Deletes the structurally equal stored triple, if present. Removing
    /// an absent triple is a no-op, not an error.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        if !self.index.remove(triple) {
            return false;
        }
        if let Some(pos) = self.items.iter().position(|t| t == triple) {
            self.items.remove(pos);
        }
        true
    }

    /// Removes every stored triple whose positions all match. A `None`
    /// position is unconstrained, so passing all `None` clears the graph.
    /// Returns the number of triples removed.
    pub fn remove_matches(
        &mut self,
        subject: Option<TermPattern>,
        predicate: Option<TermPattern>,
        object: Option<TermPattern>,
    ) -> usize {
        let before = self.items.len();
        self.items
            .retain(|t| !triple_matches(t, &subject, &predicate, &object));
        self.index
            .retain(|t| !triple_matches(t, &subject, &predicate, &object));
        let removed = before - self.items.len();
        if removed > 0 {
            debug!("removed {} matching triples", removed);
        }
        removed
    }

    /// Non-destructive counterpart of `remove_matches`: returns a new graph
    /// holding the matching triples in their stored order. The result
    /// carries no actions.
    pub fn match_terms(
        &self,
        subject: Option<TermPattern>,
        predicate: Option<TermPattern>,
        object: Option<TermPattern>,
    ) -> Graph {
        let matched: Vec<Triple> = if self.items.len() >= MIN_CHUNK_SIZE {
            self.items
                .par_iter()
                .filter(|t| triple_matches(t, &subject, &predicate, &object))
                .cloned()
                .collect()
        } else {
            self.items
                .iter()
                .filter(|t| triple_matches(t, &subject, &predicate, &object))
                .cloned()
                .collect()
        };
        Graph::from_items(matched)
    }

    /// Returns a new graph holding the triples accepted by the predicate.
    /// The source graph is left untouched and the result carries no actions.
    pub fn filter<F>(&self, predicate: F) -> Graph
    where
        F: Fn(&Triple) -> bool + Sync,
    {
        let matched: Vec<Triple> = if self.items.len() >= MIN_CHUNK_SIZE {
            self.items
                .par_iter()
                .filter(|t| predicate(t))
                .cloned()
                .collect()
        } else {
            self.items.iter().filter(|t| predicate(t)).cloned().collect()
        };
        Graph::from_items(matched)
    }

    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Triple) -> bool,
    {
        self.items.iter().any(|t| predicate(t))
    }

    pub fn every<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Triple) -> bool,
    {
        self.items.iter().all(|t| predicate(t))
    }

    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&Triple),
    {
        for triple in &self.items {
            callback(triple);
        }
    }

    /// Snapshot of the stored triples in insertion order.
    pub fn to_vec(&self) -> Vec<Triple> {
        self.items.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.items.iter()
    }

    /// Set union of both graphs by structural equality. Neither operand is
    /// mutated and the result carries no actions.
    pub fn merge(&self, other: &Graph) -> Graph {
        let mut merged = Graph::from_items(self.items.clone());
        for triple in &other.items {
            merged.add(triple.clone());
        }
        merged
    }

    /// Inserts every triple of `other` into this graph, respecting dedup and
    /// running registered actions per insertion. Returns the graph itself
    /// for chaining.
    pub fn add_all(&mut self, other: &Graph) -> &mut Self {
        for triple in &other.items {
            self.add(triple.clone());
        }
        self
    }

    /// Registers an action invoked by every subsequent `add` call.
    pub fn add_action(&mut self, action: TripleAction) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[TripleAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    /// Starts a chained read query over this graph.
    pub fn query(&self) -> GraphQuery<'_> {
        GraphQuery::new(self)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for triple in iter {
            graph.add(triple);
        }
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add(triple);
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// N-Triples lines in insertion order, joined by a newline.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.items.iter().map(|t| t.to_nt()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

fn triple_matches(
    triple: &Triple,
    subject: &Option<TermPattern>,
    predicate: &Option<TermPattern>,
    object: &Option<TermPattern>,
) -> bool {
    subject.as_ref().map_or(true, |p| p.matches(&triple.subject))
        && predicate
            .as_ref()
            .map_or(true, |p| p.matches(&triple.predicate))
        && object.as_ref().map_or(true, |p| p.matches(&triple.object))
}
