// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use shunt_topology::builder::TopologyBuilder;
use shunt_topology::graph::{Endpoint, Graph};
use shunt_topology::types::ParamValue;
use shunt_yard::hierarchy::{
    CACHE_LINK_LATENCY, build_single_core, build_split_cache, l2_cache_params, mem_ctrl_params,
};

fn single_core() -> Graph {
    let mut builder = TopologyBuilder::new();
    build_single_core(&mut builder).unwrap();
    builder.finalize()
}

#[test]
fn single_core_shape() {
    let graph = single_core();
    assert_eq!(graph.num_components(), 3);
    assert_eq!(graph.num_links(), 2);

    let node = graph.component("node").unwrap();
    assert_eq!(node.model, "gem5.gem5Component");
    assert_eq!(node.params["frequency"], "3GHz".into());
    assert_eq!(node.params["cmd"], "gem5/riscv_fs.py".into());

    let system_port = node.subcomponent("system_port").unwrap();
    assert_eq!(system_port.model, "gem5.gem5Bridge");
    assert_eq!(system_port.index, 0);
    let cache_port = node.subcomponent("cache_port").unwrap();
    assert_eq!(cache_port.model, "gem5.gem5Bridge");
    assert_eq!(cache_port.index, 0);

    let cache = graph.component("l1_cache").unwrap();
    assert_eq!(cache.model, "memHierarchy.Cache");
    assert_eq!(cache.params["coherence_protocol"], "MESI".into());
    assert_eq!(cache.params["replacement_policy"], "lru".into());
    assert_eq!(cache.params["cache_size"], "4 KB".into());
    assert_eq!(cache.params["L1"], "1".into());

    let memory = graph.component("memory").unwrap();
    assert_eq!(memory.model, "memHierarchy.MemController");
    assert_eq!(memory.params["request_width"], "64".into());
    let backend = memory.subcomponent("backend").unwrap();
    assert_eq!(backend.model, "memHierarchy.simpleMem");
    assert_eq!(backend.params["access_time"], "30ns".into());
    assert_eq!(backend.params["mem_size"], "4GiB".into());
}

#[test]
fn single_core_wiring() {
    let graph = single_core();

    let cpu_link = graph.link("cpu_l1_cache_link").unwrap();
    assert_eq!(cpu_link.a, Endpoint::slot("node", "cache_port", "port"));
    assert_eq!(cpu_link.b, Endpoint::component("l1_cache", "high_network_0"));

    let mem_link = graph.link("l1_cache_mem_link").unwrap();
    assert_eq!(mem_link.a, Endpoint::component("l1_cache", "low_network_0"));
    assert_eq!(mem_link.b, Endpoint::component("memory", "direct_link"));

    for link in graph.links() {
        assert_eq!(link.latency, CACHE_LINK_LATENCY);
        assert_eq!(link.latency, "1ns");
    }
}

#[test]
fn controller_covers_first_gib() {
    let params = mem_ctrl_params();
    assert_eq!(
        params["addr_range_end"],
        ParamValue::Int(1024 * 1024 * 1024 - 1)
    );
}

#[test]
fn l2_is_declared_but_unused() {
    let params = l2_cache_params();
    assert_eq!(params["access_latency_cycles"], "8".into());
    assert_eq!(params["associativity"], "8".into());
    assert_eq!(params["cache_size"], "32 KB".into());
    // Only the first level carries the L1 marker
    assert!(!params.contains_key("L1"));

    // No built-in topology instantiates an L2 yet
    let graph = single_core();
    assert!(graph.component("l2_cache").is_err());
    assert!(
        graph
            .component_names()
            .iter()
            .all(|name| !name.contains("l2"))
    );
}

#[test]
fn split_cache_shape() {
    let mut builder = TopologyBuilder::new();
    build_split_cache(&mut builder).unwrap();
    let graph = builder.finalize();

    assert_eq!(graph.num_components(), 4);
    assert_eq!(graph.num_links(), 4);

    // The node keeps both bridges even though the split links bypass them
    let node = graph.component("node").unwrap();
    assert!(node.subcomponent("system_port").is_some());
    assert!(node.subcomponent("cache_port").is_some());

    for cache_name in ["l1i_cache", "l1d_cache"] {
        let cache = graph.component(cache_name).unwrap();
        assert_eq!(cache.model, "memHierarchy.Cache");
        assert_eq!(cache.params["L1"], "1".into());
    }

    let icache_link = graph.link("cpu_l1i_cache_link").unwrap();
    assert_eq!(icache_link.a, Endpoint::component("node", "icache_port"));
    assert_eq!(
        icache_link.b,
        Endpoint::component("l1i_cache", "high_network_0")
    );
    let dcache_link = graph.link("cpu_l1d_cache_link").unwrap();
    assert_eq!(dcache_link.a, Endpoint::component("node", "dcache_port"));

    // Both caches go straight to the memory controller
    for link_name in ["l1i_cache_mem_link", "l1d_cache_mem_link"] {
        let link = graph.link(link_name).unwrap();
        assert_eq!(link.b, Endpoint::component("memory", "direct_link"));
    }
}
