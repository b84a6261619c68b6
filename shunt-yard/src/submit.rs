// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Hand-off of finished graphs to the external runtime.
//!
//! The runtime consumes a YAML graph document: fully resolved components,
//! subcomponents and links, exactly as held by the
//! [Graph](shunt_topology::graph::Graph). Everything beyond structure,
//! from parameter schemas to port compatibility, is validated by the
//! runtime when it loads the document.

use std::path::Path;
use std::process::{Command, ExitStatus};

use log::info;
use shunt_topology::graph::Graph;
use shunt_topology::types::{TopoResult, TopologyError};

/// Write the graph document the runtime loads
///
/// The document is deterministic: the same graph always serialises to the
/// same bytes.
pub fn write_graph(graph: &Graph, graph_path: &Path) -> TopoResult {
    let doc = serde_yaml::to_string(graph)
        .map_err(|e| TopologyError::Config(format!("serde_yaml::to_string failed: {e}")))?;
    std::fs::write(graph_path, doc).map_err(|e| {
        TopologyError::Config(format!("Unable to write {}: {e}", graph_path.display()))
    })?;
    info!(
        "wrote {} components and {} links to {}",
        graph.num_components(),
        graph.num_links(),
        graph_path.display()
    );
    Ok(())
}

/// Run the runtime executable on an emitted graph document
///
/// The runtime inherits our stdio, so its diagnostics and simulation
/// output appear directly on the console. Returns the runtime's exit
/// status; failing to start it at all is the only error here.
pub fn invoke_runtime(
    runtime: &Path,
    graph_path: &Path,
    runtime_args: &[String],
) -> Result<ExitStatus, TopologyError> {
    info!("invoking {} on {}", runtime.display(), graph_path.display());
    Command::new(runtime)
        .arg(graph_path)
        .args(runtime_args)
        .status()
        .map_err(|e| TopologyError::Config(format!("Unable to run {}: {e}", runtime.display())))
}
