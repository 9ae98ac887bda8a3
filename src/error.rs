/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::terms::TermType;
use thiserror::Error;

use crate::positions::QuadPosition;

/// Contract violations on the input shape. A failed match is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadMatchError {
    #[error("cannot follow position '{position}' into a term of type {term_type}")]
    PathTraversal {
        position: QuadPosition,
        term_type: TermType,
    },
    #[error("missing quad positions: {}", format_positions(.missing))]
    IncompleteQuad { missing: Vec<QuadPosition> },
    #[error("unknown quad position '{0}'")]
    UnknownPosition(String),
    #[error("an empty path does not select a term of a quad")]
    EmptyPath,
}

pub type Result<T> = std::result::Result<T, QuadMatchError>;

fn format_positions(positions: &[QuadPosition]) -> String {
    positions
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
