/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate quadmatch;
use quadmatch::nested::{is_ground, variables_of};
use quadmatch::positions::{get_positions, named_positions, from_named_positions};
use quadmatch::*;
use shared::term_set::{named_nodes, uniq_terms};

#[cfg(test)]
mod tests {
    use super::*;

    const DF: DefaultDataFactory = DefaultDataFactory;

    fn nn(value: &str) -> Term {
        DF.named_node(value)
    }

    #[test]
    fn test_leaf_order_is_depth_first() {
        let inner = DF.quad(nn("s2"), nn("p2"), nn("o2"), nn("g2"));
        let quad = DF.quad(nn("s"), nn("p"), DF.quoted(inner), nn("g"));

        let mut order = Vec::new();
        for_each_leaf(&quad, |term, _| order.push(term.value().to_string()));
        assert_eq!(order, vec!["s", "p", "s2", "p2", "o2", "g2", "g"]);
    }

    #[test]
    fn test_paths_track_nesting_depth() {
        let deepest = DF.triple(nn("a"), nn("b"), nn("c"));
        let middle = DF.triple(nn("x"), nn("y"), DF.quoted(deepest));
        let quad = DF.triple(DF.quoted(middle), nn("p"), nn("o"));

        let paths = filter_leaf_paths(&quad, |term, _| term == &nn("c"));
        assert_eq!(
            paths,
            vec![vec![QuadPosition::Subject, QuadPosition::Object, QuadPosition::Object]]
        );
        for_each_leaf(&quad, |term, path| {
            let resolved = resolve_quad_path(&quad, path).unwrap();
            assert_eq!(resolved, term);
        });
    }

    #[test]
    fn test_round_trip_named_positions() {
        let inner = DF.triple(nn("a"), nn("b"), DF.literal_with_language("c", "en"));
        let quad = DF.quad(DF.blank_node("b0"), nn("p"), DF.quoted(inner), nn("g"));
        assert_eq!(from_named_positions(named_positions(&quad)).unwrap(), quad);
    }

    #[test]
    fn test_path_lookup() {
        let inner = DF.quad(nn("s"), nn("TREASURE"), nn("o"), nn("g"));
        let root = DF.quoted(DF.quad(DF.quoted(inner), nn("p"), nn("o"), nn("g")));

        let found = resolve_path(&root, &[QuadPosition::Subject, QuadPosition::Predicate]).unwrap();
        assert_eq!(found, &nn("TREASURE"));

        match resolve_path(&root, &[QuadPosition::Predicate, QuadPosition::Object]) {
            Err(QuadMatchError::PathTraversal { position, term_type }) => {
                assert_eq!(position, QuadPosition::Object);
                assert_eq!(term_type, TermType::NamedNode);
            }
            other => panic!("expected a traversal error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_graph_omission() {
        let triple = DF.triple(nn("s"), nn("p"), nn("o"));
        assert_eq!(get_positions(&triple, true), vec![&nn("s"), &nn("p"), &nn("o")]);

        let quad = DF.quad(nn("s"), nn("p"), nn("o"), nn("g"));
        assert_eq!(get_positions(&quad, true).len(), 4);
        assert_eq!(get_positions(&quad, false).len(), 4);
    }

    #[test]
    fn test_grounding_a_pattern_by_mapping_variables() {
        let pattern = DF.triple(
            DF.variable("x"),
            nn("p"),
            DF.quoted(DF.triple(DF.variable("x"), nn("q"), DF.variable("y"))),
        );
        assert_eq!(variables_of(&pattern), vec!["x", "y"]);

        let grounded = map_leaves(&pattern, |term, _| match term.as_variable() {
            Some(name) => nn(&format!("urn:{}", name)),
            None => term.clone(),
        });
        assert!(is_ground(&grounded));
        assert!(unify(&pattern, &grounded));
    }

    #[test]
    fn test_collect_unique_resources() {
        let inner = DF.triple(nn("a"), nn("p"), nn("b"));
        let quad = DF.triple(nn("a"), nn("p"), DF.quoted(inner));
        let leaves: Vec<Term> = get_all_leaves(&quad, true).into_iter().cloned().collect();
        assert_eq!(uniq_terms(&named_nodes(&leaves)), vec![nn("a"), nn("p"), nn("b")]);
    }
}
