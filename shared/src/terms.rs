/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::quad::Quad;

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// Discriminator of the six term kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TermType {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
    Quad,
}

impl TermType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::BlankNode => "BlankNode",
            TermType::Literal => "Literal",
            TermType::Variable => "Variable",
            TermType::DefaultGraph => "DefaultGraph",
            TermType::Quad => "Quad",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamedNode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlankNode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub value: String,
}

/// A data value. Plain literals carry `xsd:string`, language-tagged ones
/// `rdf:langString`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub datatype: NamedNode,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype: NamedNode { value: XSD_STRING.to_string() },
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: NamedNode { value: RDF_LANG_STRING.to_string() },
        }
    }

    pub fn with_datatype(value: impl Into<String>, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: None,
            datatype,
        }
    }
}

/// An RDF term. Nested quads are shared behind an `Arc`, equality is
/// always structural.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "termType")]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    Variable(Variable),
    DefaultGraph,
    Quad(Arc<Quad>),
}

impl Term {
    pub fn term_type(&self) -> TermType {
        match self {
            Term::NamedNode(_) => TermType::NamedNode,
            Term::BlankNode(_) => TermType::BlankNode,
            Term::Literal(_) => TermType::Literal,
            Term::Variable(_) => TermType::Variable,
            Term::DefaultGraph => TermType::DefaultGraph,
            Term::Quad(_) => TermType::Quad,
        }
    }

    /// Lexical value of the term; empty for the default graph and quads.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => &n.value,
            Term::BlankNode(b) => &b.value,
            Term::Literal(l) => &l.value,
            Term::Variable(v) => &v.value,
            Term::DefaultGraph | Term::Quad(_) => "",
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(v) => Some(&v.value),
            _ => None,
        }
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Arc::new(quad))
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => write!(f, "<{}>", n.value),
            Term::BlankNode(b) => write!(f, "_:{}", b.value),
            Term::Literal(l) => match &l.language {
                Some(lang) => write!(f, "\"{}\"@{}", l.value, lang),
                None if l.datatype.value == XSD_STRING => write!(f, "\"{}\"", l.value),
                None => write!(f, "\"{}\"^^<{}>", l.value, l.datatype.value),
            },
            Term::Variable(v) => write!(f, "?{}", v.value),
            Term::DefaultGraph => Ok(()),
            Term::Quad(q) => write!(f, "<< {} >>", q),
        }
    }
}
