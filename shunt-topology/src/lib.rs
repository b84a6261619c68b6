// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

#![doc(test(attr(warn(unused))))]

//! `SHUNT` - Simulated Hardware Unified Node Topology
//!
//! This library assembles simulation topologies for an external
//! cycle-accurate architecture runtime. A topology is a graph of named,
//! parameterised [component instances](crate::graph::ComponentInstance)
//! (CPU nodes, caches, memory controllers), subcomponents attached into
//! named [slots](crate::graph::SubcomponentSlot) of those instances, and
//! latency-annotated [links](crate::graph::Link) between named ports.
//!
//! Assembly goes through a [TopologyBuilder](crate::builder::TopologyBuilder),
//! either called directly or driven from a
//! [YAML topology document](crate::config::TopologyConfig). The builder
//! checks structure only: name uniqueness, slot occupancy and endpoint
//! resolution. Everything about what the components mean, including
//! parameter schemas and port semantics, belongs to the runtime that loads
//! the finished [Graph](crate::graph::Graph).
//!
//! # Simple Application
//!
//! A very simple topology would look like:
//!
//! ```rust
//! use shunt_topology::builder::TopologyBuilder;
//! use shunt_topology::graph::Endpoint;
//! use shunt_topology::params;
//!
//! let mut builder = TopologyBuilder::new();
//! builder
//!     .create_component("node", "gem5.gem5Component", params! { "frequency" => "3GHz" })
//!     .expect("should be able to create 'node'");
//! builder
//!     .attach_subcomponent("node", "cache_port", "gem5.gem5Bridge", 0)
//!     .expect("should be able to attach the bridge");
//! builder
//!     .create_component("l1_cache", "memHierarchy.Cache", params! { "cache_size" => "4 KB" })
//!     .expect("should be able to create 'l1_cache'");
//! builder
//!     .create_link(
//!         "cpu_l1_cache_link",
//!         Endpoint::slot("node", "cache_port", "port"),
//!         Endpoint::component("l1_cache", "high_network_0"),
//!         "1ns",
//!     )
//!     .expect("should be able to link the node to the cache");
//!
//! let graph = builder.finalize();
//! assert_eq!(graph.num_components(), 2);
//! assert_eq!(graph.num_links(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod connect;
pub mod graph;
pub mod types;
