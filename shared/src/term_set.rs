/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;

use crate::terms::{Term, TermType};

// Removes structural duplicates, keeps the first occurrence
pub fn uniq_terms<'a, I>(terms: I) -> Vec<Term>
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for term in terms {
        if seen.insert(term) {
            result.push(term.clone());
        }
    }
    result
}

pub fn terms_of_type<'a, I>(terms: I, term_type: TermType) -> Vec<Term>
where
    I: IntoIterator<Item = &'a Term>,
{
    terms
        .into_iter()
        .filter(|t| t.term_type() == term_type)
        .cloned()
        .collect()
}

pub fn named_nodes<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::NamedNode)
}

pub fn blank_nodes<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::BlankNode)
}

pub fn literals<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::Literal)
}

pub fn variables<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::Variable)
}

pub fn default_graphs<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::DefaultGraph)
}

pub fn quads<'a, I: IntoIterator<Item = &'a Term>>(terms: I) -> Vec<Term> {
    terms_of_type(terms, TermType::Quad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DataFactory, DefaultDataFactory};

    #[test]
    fn test_uniq_terms_keeps_first_occurrence() {
        let df = DefaultDataFactory;
        let terms = vec![
            df.named_node("a"),
            df.literal("a"),
            df.named_node("a"),
            df.variable("a"),
            df.literal("a"),
        ];
        assert_eq!(
            uniq_terms(&terms),
            vec![df.named_node("a"), df.literal("a"), df.variable("a")]
        );
    }

    #[test]
    fn test_terms_of_type() {
        let df = DefaultDataFactory;
        let terms = vec![
            df.named_node("a"),
            df.blank_node("b"),
            df.variable("v"),
            df.default_graph(),
            df.named_node("c"),
        ];
        assert_eq!(named_nodes(&terms), vec![df.named_node("a"), df.named_node("c")]);
        assert_eq!(blank_nodes(&terms), vec![df.blank_node("b")]);
        assert_eq!(variables(&terms), vec![df.variable("v")]);
        assert_eq!(default_graphs(&terms), vec![Term::DefaultGraph]);
        assert!(literals(&terms).is_empty());
        assert!(quads(&terms).is_empty());
    }
}
