/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Structural matching over RDF quads whose positions may hold other quads.
//!
//! - [`positions`]: the four positions of one quad.
//! - [`nested`]: leaf traversal through quoted quads, with positional paths.
//! - [`unification`]: variable-binding match of a pattern against a quad.
//! - [`path`]: lookup of a term by positional path.
//! - [`matcher`]: one-level wildcard matchers.

pub mod error;
pub mod matcher;
pub mod nested;
pub mod path;
pub mod positions;
pub mod unification;

pub use error::{QuadMatchError, Result};
pub use matcher::{quad_matches_pattern, quad_matches_positions, term_matches, QuadPattern};
pub use nested::{
    every_leaf, filter_leaf_paths, filter_leaves, for_each_leaf, get_all_leaves, map_leaves,
    reduce_leaves, some_leaf, PositionPath,
};
pub use path::{resolve_named_path, resolve_path, resolve_quad_path};
pub use positions::{QuadPosition, QUAD_POSITIONS, QUAD_POSITION_NAMES, TRIPLE_POSITIONS, TRIPLE_POSITION_NAMES};
pub use unification::{unify, unify_bindings, unify_with, Bindings, UnifyOptions, UnifyOutcome};

pub use shared::factory::{DataFactory, DefaultDataFactory};
pub use shared::quad::Quad;
pub use shared::terms::{Term, TermType};
