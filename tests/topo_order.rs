// tests/topo_order.rs

mod common;
use crate::common::{ids, index_of};

use nodeflow::dag::{CycleCheck, DependencyGraph, topo_sort};
use nodeflow::{Edge, GraphError};

fn order_for(nodes: &[&str], pairs: &[(&str, &str)]) -> Vec<String> {
    let edges: Vec<Edge> = pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect();
    let graph = DependencyGraph::build(nodes.iter().copied(), &edges).unwrap();
    topo_sort(&graph, CycleCheck::Assume).unwrap().into_vec()
}

#[test]
fn chain_runs_in_dependency_order() {
    assert_eq!(order_for(&["A", "B", "C"], &[("A", "B"), ("B", "C")]), ["A", "B", "C"]);
}

#[test]
fn chain_order_does_not_depend_on_registration_order() {
    assert_eq!(order_for(&["C", "B", "A"], &[("A", "B"), ("B", "C")]), ["A", "B", "C"]);
    assert_eq!(order_for(&["B", "C", "A"], &[("A", "B"), ("B", "C")]), ["A", "B", "C"]);
}

#[test]
fn fan_in_puts_both_dependencies_first() {
    let edges = [Edge::new("A", "C"), Edge::new("B", "C")];
    let graph = DependencyGraph::build(["A", "B", "C"], &edges).unwrap();
    let order = topo_sort(&graph, CycleCheck::Assume).unwrap();

    assert_eq!(order.len(), 3);
    assert!(index_of(&order, "A") < index_of(&order, "C"));
    assert!(index_of(&order, "B") < index_of(&order, "C"));
}

#[test]
fn zero_edges_gives_reverse_registration_order() {
    assert_eq!(order_for(&["A", "B", "C"], &[]), ["C", "B", "A"]);
}

#[test]
fn duplicate_edges_do_not_duplicate_nodes() {
    let order = order_for(&["A", "B"], &[("A", "B"), ("A", "B"), ("A", "B")]);
    assert_eq!(order, ["A", "B"]);
}

#[test]
fn diamond_respects_every_edge() {
    let pairs = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")];
    let edges: Vec<Edge> = pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect();
    let graph = DependencyGraph::build(["D", "C", "B", "A"], &edges).unwrap();
    let order = topo_sort(&graph, CycleCheck::Detect).unwrap();

    for (s, t) in pairs {
        assert!(
            index_of(&order, s) < index_of(&order, t),
            "{s} should precede {t} in {order}"
        );
    }
    assert_eq!(ids(&order).len(), 4);
}

#[test]
fn detect_reports_cycle() {
    let edges = [Edge::new("A", "B"), Edge::new("B", "C"), Edge::new("C", "A")];
    let graph = DependencyGraph::build(["A", "B", "C"], &edges).unwrap();

    let err = topo_sort(&graph, CycleCheck::Detect).unwrap_err();
    assert_eq!(err, GraphError::Cycle { node: "A".to_string() });
}

#[test]
fn detect_does_not_flag_shared_descendants() {
    // C is reached twice, but never while already on the walk path.
    let edges = [Edge::new("A", "C"), Edge::new("B", "C"), Edge::new("A", "B")];
    let graph = DependencyGraph::build(["A", "B", "C"], &edges).unwrap();

    let order = topo_sort(&graph, CycleCheck::Detect).unwrap();
    assert_eq!(order.into_vec(), ["A", "B", "C"]);
}

#[test]
fn assume_terminates_on_a_cycle() {
    let edges = [Edge::new("A", "B"), Edge::new("B", "A")];
    let graph = DependencyGraph::build(["A", "B"], &edges).unwrap();

    let order = topo_sort(&graph, CycleCheck::Assume).unwrap();
    assert_eq!(order.len(), 2);
}

#[test]
fn very_deep_chain_does_not_overflow() {
    let n = 200_000;
    let names: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
    let edges: Vec<Edge> = names
        .windows(2)
        .map(|w| Edge::new(w[0].clone(), w[1].clone()))
        .collect();

    let graph = DependencyGraph::build(names.iter().map(|s| s.as_str()), &edges).unwrap();
    let order = topo_sort(&graph, CycleCheck::Detect).unwrap();

    assert_eq!(order.as_slice(), names.as_slice());
}
