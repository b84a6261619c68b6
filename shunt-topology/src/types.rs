// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

// Topology errors

#[macro_export]
/// Build an `Err(TopologyError::Config)` from a format string
macro_rules! config_error {
    ($($arg:tt)*) => {
        Err($crate::types::TopologyError::Config(format!($($arg)*)))
    };
}

/// The `TopologyError` is what should be returned when assembly of a
/// topology fails
///
/// Assembly is all-or-nothing: the operation that returns one of these has
/// left the builder exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A component was registered under a name that is already taken
    DuplicateName(String),
    /// A subcomponent referenced a parent component that does not exist
    UnknownParent(String),
    /// A subcomponent slot on the parent is already occupied
    SlotConflict { parent: String, slot: String },
    /// A link was registered under a name that is already taken
    DuplicateLinkName(String),
    /// A link endpoint does not resolve to a registered component or slot
    DanglingEndpoint(String),
    /// Any other failure: a topology document could not be read or
    /// understood, a lookup missed, or the runtime hand-off failed
    Config(String),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TopologyError::DuplicateName(name) => {
                write!(f, "Duplicate component name '{name}'")
            }
            TopologyError::UnknownParent(name) => {
                write!(f, "Unknown parent component '{name}'")
            }
            TopologyError::SlotConflict { parent, slot } => {
                write!(f, "Slot '{slot}' on component '{parent}' is already occupied")
            }
            TopologyError::DuplicateLinkName(name) => {
                write!(f, "Duplicate link name '{name}'")
            }
            TopologyError::DanglingEndpoint(endpoint) => {
                write!(f, "Dangling link endpoint '{endpoint}'")
            }
            TopologyError::Config(msg) => {
                write!(f, "Error: {msg}")
            }
        }
    }
}

impl Error for TopologyError {}

/// The TopoResult is the return type for assembly operations with no
/// interesting success value
pub type TopoResult = Result<(), TopologyError>;

// Component parameters

/// A single component parameter value
///
/// The runtime's parameter contract is stringly typed. Integers are kept
/// distinct only so that numeric values round-trip through documents
/// without being quoted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(u64),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParamValue::Int(value) => {
                write!(f, "{value}")
            }
            ParamValue::Str(value) => {
                write!(f, "{value}")
            }
        }
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

/// The parameter table attached to a component or subcomponent
///
/// A sorted map so that emitted documents are stable from run to run. No
/// schema is applied on this side of the boundary; unknown or malformed
/// entries surface when the runtime loads the graph.
pub type Params = BTreeMap<String, ParamValue>;

#[macro_export]
/// Build a [Params](crate::types::Params) table from `key => value` pairs
macro_rules! params {
    () => {
        $crate::types::Params::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut table = $crate::types::Params::new();
        $(table.insert($key.to_string(), $crate::types::ParamValue::from($value));)+
        table
    }};
}
