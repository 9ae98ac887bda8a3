/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! One-level matchers. Variables in the pattern are plain wildcards: there is
//! no consistency between repeated variables and candidate variables are not
//! understood. Use [`crate::unification`] when that matters.

use serde::{Deserialize, Serialize};
use shared::quad::Quad;
use shared::terms::Term;

/// Optional constraint per position. `None` matches anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadPattern {
    pub subject: Option<Term>,
    pub predicate: Option<Term>,
    pub object: Option<Term>,
    pub graph: Option<Term>,
}

impl QuadPattern {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new(
        subject: Option<Term>,
        predicate: Option<Term>,
        object: Option<Term>,
        graph: Option<Term>,
    ) -> Self {
        QuadPattern {
            subject,
            predicate,
            object,
            graph,
        }
    }
}

impl From<&Quad> for QuadPattern {
    fn from(quad: &Quad) -> Self {
        QuadPattern::new(
            Some(quad.subject.clone()),
            Some(quad.predicate.clone()),
            Some(quad.object.clone()),
            Some(quad.graph.clone()),
        )
    }
}

pub fn term_matches(candidate: &Term, pattern: Option<&Term>) -> bool {
    match pattern {
        None => true,
        Some(Term::Variable(_)) => true,
        Some(Term::Quad(pattern_quad)) => match candidate {
            Term::Quad(candidate_quad) => quad_matches_pattern(candidate_quad, pattern_quad),
            _ => false,
        },
        Some(term) => term == candidate,
    }
}

pub fn quad_matches_positions(quad: &Quad, pattern: &QuadPattern) -> bool {
    term_matches(&quad.subject, pattern.subject.as_ref())
        && term_matches(&quad.predicate, pattern.predicate.as_ref())
        && term_matches(&quad.object, pattern.object.as_ref())
        && term_matches(&quad.graph, pattern.graph.as_ref())
}

/// `quad` has to be concrete, variables of `pattern` match anything.
pub fn quad_matches_pattern(quad: &Quad, pattern: &Quad) -> bool {
    term_matches(&quad.subject, Some(&pattern.subject))
        && term_matches(&quad.predicate, Some(&pattern.predicate))
        && term_matches(&quad.object, Some(&pattern.object))
        && term_matches(&quad.graph, Some(&pattern.graph))
}
