// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Front-end for assembling simulation topologies and handing them to the
//! external runtime.
//!
//! The [hierarchy](crate::hierarchy) module holds the built-in memory
//! hierarchy topologies; [submit](crate::submit) writes finished graphs
//! and dispatches the runtime on them. The `shunt-yard` binary ties the
//! two together behind a small command line.

pub mod hierarchy;
pub mod submit;
