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
use log::debug; // Use log crate when building application
use shared::quad::Quad;
use shared::terms::Term;
#[cfg(test)]
use std::println as debug;

use crate::error::{QuadMatchError, Result};
use crate::positions::{get_position, QuadPosition};

/// Follows `path` from `term` down through quoted quads. An empty path
/// yields `term` itself. Stepping into anything that is not a quad fails
/// with [`QuadMatchError::PathTraversal`].
pub fn resolve_path<'t>(term: &'t Term, path: &[QuadPosition]) -> Result<&'t Term> {
    let mut current = term;
    for (depth, position) in path.iter().enumerate() {
        current = match current {
            Term::Quad(quad) => get_position(quad, *position),
            other => {
                debug!(
                    "path step {} ({}) hit a {} term",
                    depth,
                    position,
                    other.term_type()
                );
                return Err(QuadMatchError::PathTraversal {
                    position: *position,
                    term_type: other.term_type(),
                });
            }
        };
    }
    Ok(current)
}

/// Follows `path` from a root quad without wrapping it in a term first. The
/// first step picks a position of `quad`, so the path must not be empty.
pub fn resolve_quad_path<'q>(quad: &'q Quad, path: &[QuadPosition]) -> Result<&'q Term> {
    match path.split_first() {
        Some((first, rest)) => resolve_path(get_position(quad, *first), rest),
        None => Err(QuadMatchError::EmptyPath),
    }
}

/// Same as [`resolve_path`] with position names, e.g. `["subject", "predicate"]`.
pub fn resolve_named_path<'t, S: AsRef<str>>(term: &'t Term, path: &[S]) -> Result<&'t Term> {
    let positions = path
        .iter()
        .map(|name| name.as_ref().parse::<QuadPosition>())
        .collect::<Result<Vec<_>>>()?;
    resolve_path(term, &positions)
}
