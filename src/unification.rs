/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(not(test))]
use log::{debug, trace}; // Use log crate when building application
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use shared::factory::{DataFactory, DefaultDataFactory};
use shared::quad::Quad;
use shared::terms::Term;
use std::collections::BTreeMap;
#[cfg(test)]
use std::{println as debug, println as trace};

use crate::nested::map_leaves_with;
use crate::positions::{every_position, get_position};

/// Variable name to the term it was unified with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    map: FxHashMap<String, Term>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            map: FxHashMap::default(),
        }
    }

    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.map.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.map.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Term)> {
        self.map.iter()
    }

    pub fn insert(&mut self, variable: impl Into<String>, term: Term) -> Option<Term> {
        self.map.insert(variable.into(), term)
    }

    /// Sorted, printable view of the bindings, handy for logs and asserts.
    pub fn readable(&self) -> BTreeMap<String, String> {
        self.map
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Substitutes bound variables anywhere in `template`, including inside
    /// quoted quads. Unbound variables stay as they are.
    pub fn apply(&self, template: &Quad) -> Quad {
        self.apply_with(template, &DefaultDataFactory)
    }

    pub fn apply_with<D>(&self, template: &Quad, factory: &D) -> Quad
    where
        D: DataFactory + ?Sized,
    {
        map_leaves_with(
            template,
            |term, _| match term.as_variable().and_then(|name| self.get(name)) {
                Some(bound) => bound.clone(),
                None => term.clone(),
            },
            factory,
        )
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Term);
    type IntoIter = std::collections::hash_map::IntoIter<String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl FromIterator<(String, Term)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Self {
        Bindings {
            map: iter.into_iter().collect(),
        }
    }
}

/// Knobs for a single unification call. Both default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifyOptions {
    /// A pattern variable facing a candidate variable matches without being
    /// bound. Used when comparing two patterns.
    pub skip_variable_binding: bool,
    /// Report the bindings of a successful match instead of a bare flag.
    pub return_bindings: bool,
}

impl UnifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_skip_variable_binding(mut self, skip: bool) -> Self {
        self.skip_variable_binding = skip;
        self
    }

    pub fn set_return_bindings(mut self, return_bindings: bool) -> Self {
        self.return_bindings = return_bindings;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyOutcome {
    NoMatch,
    Matched,
    Bindings(Bindings),
}

impl UnifyOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, UnifyOutcome::NoMatch)
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        match self {
            UnifyOutcome::Bindings(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_bindings(self) -> Option<Bindings> {
        match self {
            UnifyOutcome::Bindings(b) => Some(b),
            _ => None,
        }
    }
}

impl From<UnifyOutcome> for bool {
    fn from(outcome: UnifyOutcome) -> bool {
        outcome.is_match()
    }
}

/// One unification attempt. The binding map lives exactly as long as the
/// top-level call and is shared by every nested descent.
struct Unifier<'o> {
    options: &'o UnifyOptions,
    bindings: Bindings,
}

impl<'o> Unifier<'o> {
    fn new(options: &'o UnifyOptions) -> Self {
        Unifier {
            options,
            bindings: Bindings::new(),
        }
    }

    // Bindings made for earlier positions are kept when a later one fails,
    // the whole attempt is discarded by the caller anyway.
    fn unify_quads(&mut self, pattern: &Quad, candidate: &Quad) -> bool {
        every_position(pattern, |term, position| {
            self.unify_terms(term, get_position(candidate, position))
        })
    }

    fn unify_terms(&mut self, pattern: &Term, candidate: &Term) -> bool {
        match pattern {
            Term::Variable(variable) => {
                if self.options.skip_variable_binding && candidate.is_variable() {
                    return true;
                }
                match self.bindings.get(&variable.value) {
                    Some(bound) if bound == candidate => true,
                    Some(bound) => {
                        debug!(
                            "?{} is bound to {} and cannot also match {}",
                            variable.value, bound, candidate
                        );
                        false
                    }
                    None => {
                        trace!("binding ?{} to {}", variable.value, candidate);
                        self.bindings.insert(variable.value.clone(), candidate.clone());
                        true
                    }
                }
            }
            Term::Quad(inner) => match candidate {
                Term::Quad(other) => self.unify_quads(inner, other),
                _ => false,
            },
            Term::NamedNode(_) | Term::BlankNode(_) | Term::Literal(_) | Term::DefaultGraph => {
                pattern == candidate
            }
        }
    }
}

/// Unifies `pattern` against `candidate` under one consistent assignment of
/// the pattern's variables. A variable repeated anywhere in the pattern, at
/// any nesting depth, has to meet structurally equal terms. The candidate may
/// contain variables itself; they are treated like any other term unless
/// `skip_variable_binding` is set.
pub fn unify_with(pattern: &Quad, candidate: &Quad, options: &UnifyOptions) -> UnifyOutcome {
    let mut unifier = Unifier::new(options);
    if !unifier.unify_quads(pattern, candidate) {
        return UnifyOutcome::NoMatch;
    }
    if options.return_bindings {
        UnifyOutcome::Bindings(unifier.bindings)
    } else {
        UnifyOutcome::Matched
    }
}

pub fn unify(pattern: &Quad, candidate: &Quad) -> bool {
    unify_with(pattern, candidate, &UnifyOptions::default()).is_match()
}

pub fn unify_bindings(pattern: &Quad, candidate: &Quad) -> Option<Bindings> {
    let options = UnifyOptions::new().set_return_bindings(true);
    unify_with(pattern, candidate, &options).into_bindings()
}
