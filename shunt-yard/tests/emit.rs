// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use std::path::Path;

use shunt_topology::builder::TopologyBuilder;
use shunt_topology::graph::Graph;
use shunt_topology::types::TopologyError;
use shunt_yard::hierarchy::build_single_core;
use shunt_yard::submit::{invoke_runtime, write_graph};

fn single_core() -> Graph {
    let mut builder = TopologyBuilder::new();
    build_single_core(&mut builder).unwrap();
    builder.finalize()
}

#[test]
fn emitted_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.yaml");
    write_graph(&single_core(), &graph_path).unwrap();

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&graph_path).unwrap()).unwrap();

    let components = doc["components"].as_sequence().unwrap();
    assert_eq!(components.len(), 3);
    // Emission preserves creation order
    assert_eq!(components[0]["name"].as_str(), Some("node"));
    assert_eq!(components[1]["name"].as_str(), Some("l1_cache"));
    assert_eq!(components[2]["name"].as_str(), Some("memory"));

    assert_eq!(
        components[0]["subcomponents"][0]["slot"].as_str(),
        Some("system_port")
    );
    // Empty parameter tables are left out of the document
    assert!(components[0]["subcomponents"][0].get("params").is_none());

    assert_eq!(
        components[2]["params"]["addr_range_end"].as_u64(),
        Some(1073741823)
    );
    assert_eq!(
        components[2]["subcomponents"][0]["params"]["mem_size"].as_str(),
        Some("4GiB")
    );

    let links = doc["links"].as_sequence().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["name"].as_str(), Some("cpu_l1_cache_link"));
    assert_eq!(links[0]["a"]["slot"].as_str(), Some("cache_port"));
    // Component-level endpoints have no slot entry
    assert!(links[0]["b"].get("slot").is_none());
    assert_eq!(links[0]["latency"].as_str(), Some("1ns"));
}

#[test]
fn emission_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.yaml");
    let second_path = dir.path().join("second.yaml");

    write_graph(&single_core(), &first_path).unwrap();
    write_graph(&single_core(), &second_path).unwrap();

    let first = std::fs::read_to_string(first_path).unwrap();
    let second = std::fs::read_to_string(second_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("no_such_dir").join("graph.yaml");
    let err = write_graph(&single_core(), &graph_path).unwrap_err();
    assert!(matches!(err, TopologyError::Config(_)));
}

#[test]
fn runtime_exit_status_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.yaml");
    write_graph(&single_core(), &graph_path).unwrap();

    let ok = invoke_runtime(Path::new("true"), &graph_path, &[]).unwrap();
    assert!(ok.success());

    let bad = invoke_runtime(Path::new("false"), &graph_path, &[]).unwrap();
    assert!(!bad.success());
}

#[test]
fn missing_runtime_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.yaml");
    write_graph(&single_core(), &graph_path).unwrap();

    let err = invoke_runtime(Path::new("/no/such/runtime"), &graph_path, &[]).unwrap_err();
    assert!(matches!(err, TopologyError::Config(_)));
}
