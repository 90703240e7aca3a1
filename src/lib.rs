/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::atomic::AtomicU64;

// Process-wide counter backing auto-generated blank node labels. Labels
// stay unique for the lifetime of the process, across all graphs.
pub(crate) static BLANK_NODE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub mod error;
pub mod terms;
pub mod triple;
pub mod pattern;
pub mod action;
pub mod graph;
pub mod query_builder;
