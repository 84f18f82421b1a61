// tests/property_order.rs

use std::collections::HashSet;

use proptest::prelude::*;

use nodeflow::Edge;
use nodeflow::dag::{CycleCheck, DependencyGraph, topo_sort};
use nodeflow_test_utils::builders::SchedulerBuilder;
use nodeflow_test_utils::fake_node::logged;

/// A random DAG: node names, a registration order, and edges.
///
/// Acyclicity comes from only allowing edges `task_i -> task_j` with `i < j`;
/// the registration order is shuffled independently so it carries no hint.
#[derive(Debug, Clone)]
struct RandomDag {
    registered: Vec<String>,
    edges: Vec<Edge>,
}

fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = RandomDag> {
    (1..=max_nodes).prop_flat_map(|n| {
        let raw_edges = proptest::collection::vec((0..n, 0..n), 0..(n * 2));
        let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();

        (raw_edges, order).prop_map(move |(raw_edges, order)| {
            let name = |i: usize| format!("node_{i}");
            let edges = raw_edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| {
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    Edge::new(name(lo), name(hi))
                })
                .collect();
            RandomDag {
                registered: order.into_iter().map(name).collect(),
                edges,
            }
        })
    })
}

proptest! {
    #[test]
    fn order_is_a_permutation_respecting_every_edge(dag in dag_strategy(12)) {
        let graph = DependencyGraph::build(dag.registered.iter().map(|s| s.as_str()), &dag.edges)
            .unwrap();
        let order = topo_sort(&graph, CycleCheck::Detect).unwrap();

        prop_assert_eq!(order.len(), dag.registered.len());
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), dag.registered.len());
        for id in &dag.registered {
            prop_assert!(order.position(id).is_some());
        }

        for edge in &dag.edges {
            let s = order.position(&edge.source).unwrap();
            let t = order.position(&edge.target).unwrap();
            prop_assert!(s < t, "{} must precede {} in {}", edge.source, edge.target, order);
        }
    }

    #[test]
    fn cycle_check_never_flags_an_acyclic_graph(dag in dag_strategy(12)) {
        let graph = DependencyGraph::build(dag.registered.iter().map(|s| s.as_str()), &dag.edges)
            .unwrap();

        let assumed = topo_sort(&graph, CycleCheck::Assume).unwrap();
        let detected = topo_sort(&graph, CycleCheck::Detect).unwrap();
        prop_assert_eq!(assumed, detected);
    }

    #[test]
    fn graph_build_is_idempotent(dag in dag_strategy(12)) {
        let ids = || dag.registered.iter().map(|s| s.as_str());
        let first = DependencyGraph::build(ids(), &dag.edges).unwrap();
        let second = DependencyGraph::build(ids(), &dag.edges).unwrap();

        prop_assert_eq!(first.nodes().collect::<Vec<_>>(), ids().collect::<Vec<_>>());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn nothing_after_a_failing_node_runs(
        dag in dag_strategy(8),
        failing in 0..8usize,
    ) {
        let failing = dag.registered[failing % dag.registered.len()].clone();

        let mut builder = SchedulerBuilder::new();
        for id in &dag.registered {
            builder = if *id == failing {
                builder.failing_node(id, "injected failure")
            } else {
                builder.node(id)
            };
        }
        for edge in &dag.edges {
            builder = builder.edge(&edge.source, &edge.target);
        }
        let (scheduler, log) = builder.build();

        let order = scheduler.plan().unwrap();
        let cut = order.position(&failing).unwrap();

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let err = rt.block_on(scheduler.run_all()).unwrap_err();

        prop_assert_eq!(err.node(), Some(failing.as_str()));
        let expected: Vec<String> = order.as_slice()[..=cut].to_vec();
        prop_assert_eq!(logged(&log), expected);
    }
}
