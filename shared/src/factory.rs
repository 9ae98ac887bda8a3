/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::quad::Quad;
use crate::terms::{BlankNode, Literal, NamedNode, Term, Variable};

/// Constructs terms and quads. Operations that rebuild quads take a factory
/// explicitly so callers can plug in their own term model.
pub trait DataFactory {
    fn named_node(&self, value: &str) -> Term;

    fn blank_node(&self, value: &str) -> Term;

    fn literal(&self, value: &str) -> Term;

    fn literal_with_language(&self, value: &str, language: &str) -> Term;

    fn literal_with_datatype(&self, value: &str, datatype: &str) -> Term;

    fn variable(&self, value: &str) -> Term;

    fn default_graph(&self) -> Term;

    fn quad(&self, subject: Term, predicate: Term, object: Term, graph: Term) -> Quad;

    fn triple(&self, subject: Term, predicate: Term, object: Term) -> Quad {
        self.quad(subject, predicate, object, self.default_graph())
    }

    /// Wraps a quad so it can sit in a position of another quad.
    fn quoted(&self, quad: Quad) -> Term {
        Term::from(quad)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDataFactory;

impl DataFactory for DefaultDataFactory {
    fn named_node(&self, value: &str) -> Term {
        Term::NamedNode(NamedNode { value: value.to_string() })
    }

    fn blank_node(&self, value: &str) -> Term {
        Term::BlankNode(BlankNode { value: value.to_string() })
    }

    fn literal(&self, value: &str) -> Term {
        Term::Literal(Literal::new(value))
    }

    fn literal_with_language(&self, value: &str, language: &str) -> Term {
        Term::Literal(Literal::with_language(value, language))
    }

    fn literal_with_datatype(&self, value: &str, datatype: &str) -> Term {
        Term::Literal(Literal::with_datatype(
            value,
            NamedNode { value: datatype.to_string() },
        ))
    }

    fn variable(&self, value: &str) -> Term {
        Term::Variable(Variable { value: value.to_string() })
    }

    fn default_graph(&self) -> Term {
        Term::DefaultGraph
    }

    fn quad(&self, subject: Term, predicate: Term, object: Term, graph: Term) -> Quad {
        Quad::new(subject, predicate, object, graph)
    }
}
