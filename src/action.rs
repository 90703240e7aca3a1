/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::triple::Triple;
use std::fmt::{self, Debug};
use std::sync::Arc;

#[derive(Clone)]
pub struct TripleTest(Arc<dyn Fn(&Triple) -> bool + Send + Sync>);

impl TripleTest {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Triple) -> bool + Send + Sync + 'static,
    {
        TripleTest(Arc::new(f))
    }

    pub fn call(&self, triple: &Triple) -> bool {
        (self.0)(triple)
    }
}

// Implement Debug for TripleTest
impl Debug for TripleTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripleTest(<function>)")
    }
}

#[derive(Clone)]
pub struct TripleEffect(Arc<dyn Fn(&Triple) + Send + Sync>);

impl TripleEffect {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Triple) + Send + Sync + 'static,
    {
        TripleEffect(Arc::new(f))
    }

    pub fn call(&self, triple: &Triple) {
        (self.0)(triple)
    }
}

// Implement Debug for TripleEffect
impl Debug for TripleEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripleEffect(<function>)")
    }
}

/// A test/effect pair dispatched by a graph on every insertion attempt.
#[derive(Debug, Clone)]
pub struct TripleAction {
    pub test: TripleTest,
    pub action: TripleEffect,
}

impl TripleAction {
    pub fn new<T, E>(test: T, action: E) -> Self
    where
        T: Fn(&Triple) -> bool + Send + Sync + 'static,
        E: Fn(&Triple) + Send + Sync + 'static,
    {
        TripleAction {
            test: TripleTest::new(test),
            action: TripleEffect::new(action),
        }
    }

    /// Runs the effect when the test passes and reports whether it fired.
    pub fn run(&self, triple: &Triple) -> bool {
        if self.test.call(triple) {
            self.action.call(triple);
            true
        } else {
            false
        }
    }
}
