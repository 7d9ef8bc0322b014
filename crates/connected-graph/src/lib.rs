//! Directed graph with depth-first reachability.
//!
//! Nodes live in a `Vec` arena and refer to each other by [`NodeId`], so
//! cycles need no shared ownership.
//!
//! # Example
//!
//! ```
//! use connected_graph::{reachable, Graph};
//!
//! // a -+-> b -> c -> e
//! //    |
//! //    +-> d
//! let mut g = Graph::new();
//! let [a, b, c, d, e] = [1, 2, 3, 4, 5].map(|v| g.add_node(v));
//! g.add_edge(a, b).unwrap();
//! g.add_edge(b, c).unwrap();
//! g.add_edge(c, e).unwrap();
//! g.add_edge(a, d).unwrap();
//!
//! assert!(reachable(&g, a, a).unwrap());
//! assert!(reachable(&g, a, e).unwrap());
//! assert!(!reachable(&g, b, d).unwrap());
//! ```

mod graph;
mod reach;

pub use graph::{Graph, GraphError, Node, NodeId};
pub use reach::reachable;
