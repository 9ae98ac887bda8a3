/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Access to the four positions of a single quad, always visited in the
//! order subject, predicate, object, graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::factory::{DataFactory, DefaultDataFactory};
use shared::quad::Quad;
use shared::terms::Term;

use crate::error::{QuadMatchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadPosition {
    Subject,
    Predicate,
    Object,
    Graph,
}

pub const QUAD_POSITIONS: [QuadPosition; 4] = [
    QuadPosition::Subject,
    QuadPosition::Predicate,
    QuadPosition::Object,
    QuadPosition::Graph,
];

pub const TRIPLE_POSITIONS: [QuadPosition; 3] = [
    QuadPosition::Subject,
    QuadPosition::Predicate,
    QuadPosition::Object,
];

pub const QUAD_POSITION_NAMES: [&str; 4] = ["subject", "predicate", "object", "graph"];
pub const TRIPLE_POSITION_NAMES: [&str; 3] = ["subject", "predicate", "object"];

impl QuadPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuadPosition::Subject => "subject",
            QuadPosition::Predicate => "predicate",
            QuadPosition::Object => "object",
            QuadPosition::Graph => "graph",
        }
    }

    fn index(&self) -> usize {
        match self {
            QuadPosition::Subject => 0,
            QuadPosition::Predicate => 1,
            QuadPosition::Object => 2,
            QuadPosition::Graph => 3,
        }
    }
}

impl fmt::Display for QuadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuadPosition {
    type Err = QuadMatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "subject" => Ok(QuadPosition::Subject),
            "predicate" => Ok(QuadPosition::Predicate),
            "object" => Ok(QuadPosition::Object),
            "graph" => Ok(QuadPosition::Graph),
            other => Err(QuadMatchError::UnknownPosition(other.to_string())),
        }
    }
}

/// A term tagged with the position it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedTerm {
    pub position: QuadPosition,
    pub value: Term,
}

pub fn get_position(quad: &Quad, position: QuadPosition) -> &Term {
    match position {
        QuadPosition::Subject => &quad.subject,
        QuadPosition::Predicate => &quad.predicate,
        QuadPosition::Object => &quad.object,
        QuadPosition::Graph => &quad.graph,
    }
}

/// Position values in order. The graph is left out only when
/// `omit_default_graph` is set and the graph is the default graph.
pub fn get_positions(quad: &Quad, omit_default_graph: bool) -> Vec<&Term> {
    if omit_default_graph && quad.graph.is_default_graph() {
        TRIPLE_POSITIONS.iter().map(|p| get_position(quad, *p)).collect()
    } else {
        QUAD_POSITIONS.iter().map(|p| get_position(quad, *p)).collect()
    }
}

pub fn for_each_position<'q, F>(quad: &'q Quad, mut f: F)
where
    F: FnMut(&'q Term, QuadPosition),
{
    for position in QUAD_POSITIONS {
        f(get_position(quad, position), position);
    }
}

/// Rebuilds the quad with the default factory.
pub fn map_positions<F>(quad: &Quad, f: F) -> Quad
where
    F: FnMut(&Term, QuadPosition) -> Term,
{
    map_positions_with(quad, f, &DefaultDataFactory)
}

pub fn map_positions_with<F, D>(quad: &Quad, mut f: F, factory: &D) -> Quad
where
    F: FnMut(&Term, QuadPosition) -> Term,
    D: DataFactory + ?Sized,
{
    let subject = f(&quad.subject, QuadPosition::Subject);
    let predicate = f(&quad.predicate, QuadPosition::Predicate);
    let object = f(&quad.object, QuadPosition::Object);
    let graph = f(&quad.graph, QuadPosition::Graph);
    factory.quad(subject, predicate, object, graph)
}

pub fn reduce_positions<'q, U, F>(quad: &'q Quad, mut f: F, initial: U) -> U
where
    F: FnMut(U, &'q Term, QuadPosition) -> U,
{
    let mut acc = initial;
    for position in QUAD_POSITIONS {
        acc = f(acc, get_position(quad, position), position);
    }
    acc
}

/// True when the predicate holds for all four positions. Every position is
/// checked even after a failure so side effects observe the whole quad.
pub fn every_position<'q, F>(quad: &'q Quad, mut f: F) -> bool
where
    F: FnMut(&'q Term, QuadPosition) -> bool,
{
    reduce_positions(quad, |acc, term, position| f(term, position) & acc, true)
}

/// True when the predicate holds for at least one position. Does not stop
/// at the first hit.
pub fn some_position<'q, F>(quad: &'q Quad, mut f: F) -> bool
where
    F: FnMut(&'q Term, QuadPosition) -> bool,
{
    reduce_positions(quad, |acc, term, position| f(term, position) | acc, false)
}

pub fn filter_positions<'q, F>(quad: &'q Quad, mut f: F) -> Vec<&'q Term>
where
    F: FnMut(&'q Term, QuadPosition) -> bool,
{
    QUAD_POSITIONS
        .iter()
        .map(|p| (get_position(quad, *p), *p))
        .filter(|(term, position)| f(*term, *position))
        .map(|(term, _)| term)
        .collect()
}

pub fn filter_position_names<'q, F>(quad: &'q Quad, mut f: F) -> Vec<QuadPosition>
where
    F: FnMut(&'q Term, QuadPosition) -> bool,
{
    QUAD_POSITIONS
        .iter()
        .copied()
        .filter(|p| f(get_position(quad, *p), *p))
        .collect()
}

pub fn named_positions(quad: &Quad) -> Vec<NamedTerm> {
    QUAD_POSITIONS
        .iter()
        .map(|p| NamedTerm {
            position: *p,
            value: get_position(quad, *p).clone(),
        })
        .collect()
}

/// Inverse of [`named_positions`] with the default factory and no defaults.
pub fn from_named_positions<I>(entries: I) -> Result<Quad>
where
    I: IntoIterator<Item = NamedTerm>,
{
    collect_named_positions(entries, None, &DefaultDataFactory)
}

/// Assembles a quad from named terms. A later entry for the same position
/// replaces an earlier one. Positions still missing are asked from
/// `default_fn`; if any remain empty the call fails.
pub fn collect_named_positions<I, D>(
    entries: I,
    mut default_fn: Option<&mut dyn FnMut(QuadPosition) -> Term>,
    factory: &D,
) -> Result<Quad>
where
    I: IntoIterator<Item = NamedTerm>,
    D: DataFactory + ?Sized,
{
    let mut slots: [Option<Term>; 4] = [None, None, None, None];
    for entry in entries {
        slots[entry.position.index()] = Some(entry.value);
    }

    if let Some(default_fn) = default_fn.as_mut() {
        for position in QUAD_POSITIONS {
            let slot = &mut slots[position.index()];
            if slot.is_none() {
                *slot = Some(default_fn(position));
            }
        }
    }

    match slots {
        [Some(subject), Some(predicate), Some(object), Some(graph)] => {
            Ok(factory.quad(subject, predicate, object, graph))
        }
        slots => Err(QuadMatchError::IncompleteQuad {
            missing: QUAD_POSITIONS
                .iter()
                .copied()
                .filter(|p| slots[p.index()].is_none())
                .collect(),
        }),
    }
}
