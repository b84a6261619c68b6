// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! A simple front-end for assembling a topology and handing it to the
//! external runtime
//!
//! For example, run using:
//!   cargo run --bin shunt-yard -- --emit graph.yaml --print

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use shunt_topology::builder::TopologyBuilder;
use shunt_topology::config::TopologyConfig;
use shunt_yard::hierarchy::build_single_core;
use shunt_yard::submit::{invoke_runtime, write_graph};

/// Command-line arguments.
#[derive(Parser)]
#[command(about = "Application to assemble a simulation topology and dispatch it to the runtime")]
struct Cli {
    /// Topology document to load instead of the built-in single-core
    /// memory hierarchy.
    #[arg(long)]
    topology: Option<String>,

    /// Write the finished graph document to this file.
    #[arg(long)]
    emit: Option<String>,

    /// Runtime executable to invoke on the emitted graph.
    #[arg(long, requires = "emit")]
    runtime: Option<String>,

    /// Extra argument passed through to the runtime. May be repeated.
    #[arg(long)]
    runtime_arg: Vec<String>,

    /// Print the assembled graph to the console.
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut builder = TopologyBuilder::new();
    match &args.topology {
        Some(topology) => {
            TopologyConfig::from_file(Path::new(topology))?.build(&mut builder)?;
        }
        None => build_single_core(&mut builder)?,
    }
    let graph = builder.finalize();

    println!(
        "Assembled graph with {} components and {} links.",
        graph.num_components(),
        graph.num_links()
    );
    if args.print {
        println!("{graph}");
    }

    if let Some(emit) = &args.emit {
        let graph_path = Path::new(emit);
        write_graph(&graph, graph_path)?;
        if let Some(runtime) = &args.runtime {
            let status = invoke_runtime(Path::new(runtime), graph_path, &args.runtime_arg)?;
            if !status.success() {
                anyhow::bail!("runtime exited with {status}");
            }
        }
    }

    Ok(())
}
