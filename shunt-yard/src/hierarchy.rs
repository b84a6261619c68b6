// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The built-in memory hierarchy topologies.
//!
//! One CPU node is bridged into the `memHierarchy` cache stack: a unified
//! L1 backed by a memory controller with a simple DRAM backend. A split
//! instruction/data L1 variant is kept alongside for experiments. All
//! parameter tables are runtime-contract values and are carried through
//! the graph untouched.

use byte_unit::Byte;
use shunt_topology::builder::TopologyBuilder;
use shunt_topology::graph::Endpoint;
use shunt_topology::params;
use shunt_topology::types::{Params, TopoResult};

/// Latency of every link in the built-in hierarchies
pub const CACHE_LINK_LATENCY: &str = "1ns";

/// CPU node parameters: the core clock and the command the node boots
#[must_use]
pub fn cpu_params() -> Params {
    params! {
        "frequency" => "3GHz",
        "cmd" => "gem5/riscv_fs.py",
    }
}

/// L1 cache geometry, latency and coherence settings
#[must_use]
pub fn l1_cache_params() -> Params {
    params! {
        "access_latency_cycles" => "1",
        "cache_frequency" => "2 Ghz",
        "replacement_policy" => "lru",
        "coherence_protocol" => "MESI",
        "associativity" => "4",
        "cache_line_size" => "64",
        "cache_size" => "4 KB",
        "L1" => "1",
        "debug" => "0",
    }
}

/// L2 cache geometry, larger and slower than the L1
///
/// Declared for the day the hierarchy grows a shared second level; no
/// built-in topology instantiates a cache with these yet.
// TODO: wire a shared L2 between the split L1 caches and the memory
// controller.
#[must_use]
pub fn l2_cache_params() -> Params {
    params! {
        "access_latency_cycles" => "8",
        "cache_frequency" => "2 Ghz",
        "replacement_policy" => "lru",
        "coherence_protocol" => "MESI",
        "associativity" => "8",
        "cache_line_size" => "64",
        "cache_size" => "32 KB",
        "debug" => "0",
    }
}

/// Memory controller parameters
///
/// The controller serves the first GiB of the physical address space.
#[must_use]
pub fn mem_ctrl_params() -> Params {
    let ignore_case = false;
    let gib = Byte::parse_str("1 GiB", ignore_case).expect("should be a valid Byte string");
    params! {
        "debug" => "0",
        "clock" => "1GHz",
        "request_width" => "64",
        "addr_range_end" => gib.as_u64() - 1,
    }
}

/// Memory backend parameters: access time and capacity of the DRAM model
#[must_use]
pub fn mem_backend_params() -> Params {
    params! {
        "access_time" => "30ns",
        "mem_size" => "4GiB",
    }
}

fn build_cpu_node(builder: &mut TopologyBuilder) -> TopoResult {
    builder.create_component("node", "gem5.gem5Component", cpu_params())?;
    builder.attach_subcomponent("node", "system_port", "gem5.gem5Bridge", 0)?;
    builder.attach_subcomponent("node", "cache_port", "gem5.gem5Bridge", 0)?;
    Ok(())
}

fn build_memory(builder: &mut TopologyBuilder) -> TopoResult {
    builder.create_component("memory", "memHierarchy.MemController", mem_ctrl_params())?;
    builder.attach_subcomponent_with_params(
        "memory",
        "backend",
        "memHierarchy.simpleMem",
        0,
        mem_backend_params(),
    )?;
    Ok(())
}

/// Assemble the default topology: CPU node, unified L1, memory
pub fn build_single_core(builder: &mut TopologyBuilder) -> TopoResult {
    build_cpu_node(builder)?;

    builder.create_component("l1_cache", "memHierarchy.Cache", l1_cache_params())?;

    build_memory(builder)?;

    builder.create_link(
        "cpu_l1_cache_link",
        Endpoint::slot("node", "cache_port", "port"),
        Endpoint::component("l1_cache", "high_network_0"),
        CACHE_LINK_LATENCY,
    )?;
    builder.create_link(
        "l1_cache_mem_link",
        Endpoint::component("l1_cache", "low_network_0"),
        Endpoint::component("memory", "direct_link"),
        CACHE_LINK_LATENCY,
    )?;
    Ok(())
}

/// Assemble the split instruction/data L1 variant
///
/// The node keeps both bridges; the instruction and data streams leave
/// through `icache_port` and `dcache_port` instead of the unified bridge.
/// Both caches talk straight to the memory controller.
pub fn build_split_cache(builder: &mut TopologyBuilder) -> TopoResult {
    build_cpu_node(builder)?;

    builder.create_component("l1i_cache", "memHierarchy.Cache", l1_cache_params())?;
    builder.create_component("l1d_cache", "memHierarchy.Cache", l1_cache_params())?;

    build_memory(builder)?;

    builder.create_link(
        "cpu_l1i_cache_link",
        Endpoint::component("node", "icache_port"),
        Endpoint::component("l1i_cache", "high_network_0"),
        CACHE_LINK_LATENCY,
    )?;
    builder.create_link(
        "cpu_l1d_cache_link",
        Endpoint::component("node", "dcache_port"),
        Endpoint::component("l1d_cache", "high_network_0"),
        CACHE_LINK_LATENCY,
    )?;
    builder.create_link(
        "l1i_cache_mem_link",
        Endpoint::component("l1i_cache", "low_network_0"),
        Endpoint::component("memory", "direct_link"),
        CACHE_LINK_LATENCY,
    )?;
    builder.create_link(
        "l1d_cache_mem_link",
        Endpoint::component("l1d_cache", "low_network_0"),
        Endpoint::component("memory", "direct_link"),
        CACHE_LINK_LATENCY,
    )?;
    Ok(())
}
