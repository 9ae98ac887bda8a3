/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Recursive traversal into quoted quads.
//!
//! A leaf is any term that is not itself a quad. Leaves are reported
//! depth-first: positions of a quad in their fixed order, and a nested quad
//! is exhausted before its next sibling position is visited. Every leaf comes
//! with the path of positions leading to it from the root, so the path length
//! is the nesting depth of the leaf plus one.

use std::collections::HashSet;

use shared::factory::{DataFactory, DefaultDataFactory};
use shared::quad::Quad;
use shared::terms::Term;

use crate::positions::{for_each_position, map_positions_with, reduce_positions, QuadPosition};

pub type PositionPath = Vec<QuadPosition>;

fn fold_leaves<'q, U, F>(quad: &'q Quad, path: &mut PositionPath, acc: U, f: &mut F) -> U
where
    F: FnMut(U, &'q Term, &[QuadPosition]) -> U,
{
    reduce_positions(
        quad,
        |acc, term, position| {
            path.push(position);
            let acc = match term {
                Term::Quad(inner) => fold_leaves(inner, path, acc, f),
                leaf => f(acc, leaf, path.as_slice()),
            };
            path.pop();
            acc
        },
        acc,
    )
}

pub fn reduce_leaves<'q, U, F>(quad: &'q Quad, mut f: F, initial: U) -> U
where
    F: FnMut(U, &'q Term, &[QuadPosition]) -> U,
{
    let mut path = Vec::with_capacity(4);
    fold_leaves(quad, &mut path, initial, &mut f)
}

pub fn for_each_leaf<'q, F>(quad: &'q Quad, mut f: F)
where
    F: FnMut(&'q Term, &[QuadPosition]),
{
    reduce_leaves(quad, |(), term, path| f(term, path), ())
}

pub fn filter_leaves<'q, F>(quad: &'q Quad, mut predicate: F) -> Vec<&'q Term>
where
    F: FnMut(&'q Term, &[QuadPosition]) -> bool,
{
    let mut leaves = Vec::new();
    for_each_leaf(quad, |term, path| {
        if predicate(term, path) {
            leaves.push(term);
        }
    });
    leaves
}

pub fn filter_leaf_paths<'q, F>(quad: &'q Quad, mut predicate: F) -> Vec<PositionPath>
where
    F: FnMut(&'q Term, &[QuadPosition]) -> bool,
{
    let mut paths = Vec::new();
    for_each_leaf(quad, |term, path| {
        if predicate(term, path) {
            paths.push(path.to_vec());
        }
    });
    paths
}

/// Every leaf is checked, even after the first failure.
pub fn every_leaf<'q, F>(quad: &'q Quad, mut predicate: F) -> bool
where
    F: FnMut(&'q Term, &[QuadPosition]) -> bool,
{
    reduce_leaves(quad, |acc, term, path| predicate(term, path) & acc, true)
}

/// Every leaf is checked, even after the first hit.
pub fn some_leaf<'q, F>(quad: &'q Quad, mut predicate: F) -> bool
where
    F: FnMut(&'q Term, &[QuadPosition]) -> bool,
{
    reduce_leaves(quad, |acc, term, path| predicate(term, path) | acc, false)
}

fn rebuild_leaves<F, D>(quad: &Quad, path: &mut PositionPath, f: &mut F, factory: &D) -> Quad
where
    F: FnMut(&Term, &[QuadPosition]) -> Term,
    D: DataFactory + ?Sized,
{
    map_positions_with(
        quad,
        |term, position| {
            path.push(position);
            let mapped = match term {
                Term::Quad(inner) => factory.quoted(rebuild_leaves(inner, path, f, factory)),
                leaf => f(leaf, path.as_slice()),
            };
            path.pop();
            mapped
        },
        factory,
    )
}

/// Rebuilds the nested structure with `f` applied to every leaf. Quoted
/// quads are reconstructed, never handed to `f`.
pub fn map_leaves<F>(quad: &Quad, f: F) -> Quad
where
    F: FnMut(&Term, &[QuadPosition]) -> Term,
{
    map_leaves_with(quad, f, &DefaultDataFactory)
}

pub fn map_leaves_with<F, D>(quad: &Quad, mut f: F, factory: &D) -> Quad
where
    F: FnMut(&Term, &[QuadPosition]) -> Term,
    D: DataFactory + ?Sized,
{
    let mut path = Vec::with_capacity(4);
    rebuild_leaves(quad, &mut path, &mut f, factory)
}

fn collect_leaves<'q>(quad: &'q Quad, omit_default_graph: bool, out: &mut Vec<&'q Term>) {
    for_each_position(quad, |term, position| match term {
        Term::Quad(inner) => collect_leaves(inner, omit_default_graph, out),
        Term::DefaultGraph if omit_default_graph && position == QuadPosition::Graph => {}
        leaf => out.push(leaf),
    });
}

/// All leaves in traversal order. With `omit_default_graph`, default graphs
/// in graph position are skipped at every nesting level.
pub fn get_all_leaves(quad: &Quad, omit_default_graph: bool) -> Vec<&Term> {
    let mut leaves = Vec::new();
    collect_leaves(quad, omit_default_graph, &mut leaves);
    leaves
}

/// Distinct variable names, in order of first appearance.
pub fn variables_of(quad: &Quad) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for_each_leaf(quad, |term, _| {
        if let Some(name) = term.as_variable() {
            if seen.insert(name) {
                names.push(name);
            }
        }
    });
    names
}

pub fn is_ground(quad: &Quad) -> bool {
    !some_leaf(quad, |term, _| term.is_variable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::tests::CountingFactory;
    use QuadPosition::*;

    fn nested_quad() -> Quad {
        let df = DefaultDataFactory;
        let inner = df.quad(
            df.named_node("s2"),
            df.named_node("p2"),
            df.named_node("o2"),
            df.named_node("g2"),
        );
        df.quad(
            df.named_node("s"),
            df.named_node("p"),
            df.quoted(inner),
            df.named_node("g"),
        )
    }

    #[test]
    fn test_for_each_leaf_order_and_paths() {
        let quad = nested_quad();
        let mut seen = Vec::new();
        for_each_leaf(&quad, |term, path| seen.push((term.value().to_string(), path.to_vec())));
        let values: Vec<_> = seen.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["s", "p", "s2", "p2", "o2", "g2", "g"]);
        assert_eq!(seen[2].1, vec![Object, Subject]);
        assert_eq!(seen[6].1, vec![Graph]);
    }

    #[test]
    fn test_filter_leaf_paths_depth() {
        let quad = nested_quad();
        let paths = filter_leaf_paths(&quad, |term, _| term.value().ends_with('2'));
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|p| p.len() == 2));
        assert_eq!(filter_leaf_paths(&quad, |_, _| true).len(), 7);
    }

    #[test]
    fn test_filter_leaves() {
        let quad = nested_quad();
        let leaves = filter_leaves(&quad, |_, path| path.len() == 1);
        let values: Vec<_> = leaves.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec!["s", "p", "g"]);
    }

    #[test]
    fn test_map_leaves_keeps_structure() {
        let df = DefaultDataFactory;
        let quad = nested_quad();
        let mapped = map_leaves(&quad, |term, path| {
            df.named_node(&format!("{}@{}", term.value(), path.len()))
        });
        assert_eq!(mapped.subject, df.named_node("s@1"));
        let inner = mapped.object.as_quad().unwrap();
        assert_eq!(inner.graph, df.named_node("g2@2"));
    }

    #[test]
    fn test_map_leaves_with_rebuilds_nested_quads_with_given_factory() {
        let df = DefaultDataFactory;
        let inner = df.triple(df.named_node("a"), df.named_node("b"), df.named_node("c"));
        let quad = df.triple(df.quoted(inner), df.named_node("p"), df.named_node("o"));

        let factory = CountingFactory::default();
        let mapped = map_leaves_with(&quad, |term, _| term.clone(), &factory);
        assert_eq!(factory.quads.get(), 2);
        assert_eq!(mapped, quad);
    }

    #[test]
    fn test_reduce_and_predicates() {
        let quad = nested_quad();
        let count = reduce_leaves(&quad, |acc, _, _| acc + 1, 0usize);
        assert_eq!(count, 7);

        let mut calls = 0;
        assert!(!every_leaf(&quad, |_, _| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 7);
        assert!(some_leaf(&quad, |t, _| t.value() == "o2"));
        assert!(!some_leaf(&quad, |t, _| t.is_variable()));
    }

    #[test]
    fn test_get_all_leaves_omits_nested_default_graphs() {
        let df = DefaultDataFactory;
        let inner = df.triple(df.named_node("a"), df.named_node("b"), df.named_node("c"));
        let quad = df.triple(df.quoted(inner), df.named_node("p"), df.literal("o"));
        assert_eq!(get_all_leaves(&quad, false).len(), 7);
        assert_eq!(get_all_leaves(&quad, true).len(), 5);
    }

    #[test]
    fn test_variables_of_and_ground() {
        let df = DefaultDataFactory;
        let inner = df.triple(df.variable("x"), df.named_node("b"), df.variable("y"));
        let quad = df.triple(df.variable("x"), df.named_node("p"), df.quoted(inner));
        assert_eq!(variables_of(&quad), vec!["x", "y"]);
        assert!(!is_ground(&quad));
        assert!(is_ground(&nested_quad()));
    }
}
