#![allow(dead_code)]

#[allow(unused_imports)]
pub use nodeflow_test_utils::init_tracing;

use nodeflow::dag::ExecutionOrder;

/// Position of `id` in `order`, panicking with a readable message if absent.
pub fn index_of(order: &ExecutionOrder, id: &str) -> usize {
    order
        .position(id)
        .unwrap_or_else(|| panic!("node {id} missing from order {order}"))
}

pub fn ids(order: &ExecutionOrder) -> Vec<&str> {
    order.iter().map(|s| s.as_str()).collect()
}
