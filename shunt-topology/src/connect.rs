// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Endpoint references and link wiring for topology documents.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::TopologyBuilder;
use crate::config::LinkSection;
use crate::config_error;
use crate::graph::Endpoint;
use crate::types::{TopoResult, TopologyError};

/// A parsed link endpoint, before resolution against a builder
#[derive(Debug, PartialEq, Eq)]
pub struct EndpointRef {
    pub endpoint: Endpoint,
    /// Slot index qualifier, when the text form carried one
    pub slot_index: Option<u64>,
}

/// Parse a link endpoint of the form:
///   component.port
///   component.slot.port
///   component.slot[index].port
pub fn parse_endpoint(s: &str) -> Result<EndpointRef, TopologyError> {
    static SLOT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)(?:\[(\d+)\])?$").unwrap());

    let parts: Vec<&str> = s.split('.').collect();
    match parts[..] {
        [component, port] => Ok(EndpointRef {
            endpoint: Endpoint::component(component, port),
            slot_index: None,
        }),
        [component, slot_part, port] => {
            let Some(caps) = SLOT_RE.captures(slot_part) else {
                return config_error!("Unable to parse slot '{slot_part}' in '{s}'");
            };
            let slot_index = match caps.get(2) {
                Some(m) => Some(
                    m.as_str()
                        .parse()
                        .map_err(|e| TopologyError::Config(format!("{e}")))?,
                ),
                None => None,
            };
            Ok(EndpointRef {
                endpoint: Endpoint::slot(component, &caps[1], port),
                slot_index,
            })
        }
        [_] => config_error!("Failed to parse endpoint '{s}' - component and port expected"),
        _ => config_error!("Failed to parse endpoint '{s}' - extra tokens"),
    }
}

fn resolve_endpoint_ref(builder: &TopologyBuilder, eref: &EndpointRef, s: &str) -> TopoResult {
    let Some(component) = builder.component_by_name(&eref.endpoint.component) else {
        return Err(TopologyError::DanglingEndpoint(s.to_string()));
    };
    if let Some(slot) = &eref.endpoint.slot {
        let Some(sub) = component.subcomponent(slot) else {
            return Err(TopologyError::DanglingEndpoint(s.to_string()));
        };
        if let Some(index) = eref.slot_index
            && index != sub.index
        {
            return Err(TopologyError::DanglingEndpoint(s.to_string()));
        }
    }
    Ok(())
}

/// Wire every link of a topology document into the builder
pub fn apply_links(builder: &mut TopologyBuilder, links: &[LinkSection]) -> TopoResult {
    for link in links {
        if link.connect.len() != 2 {
            return config_error!(
                "Invalid 'connect' with {} entries (only 2 expected)",
                link.connect.len()
            );
        }

        let a = parse_endpoint(&link.connect[0])?;
        let b = parse_endpoint(&link.connect[1])?;
        resolve_endpoint_ref(builder, &a, &link.connect[0])?;
        resolve_endpoint_ref(builder, &b, &link.connect[1])?;
        builder.create_link(&link.name, a.endpoint, b.endpoint, &link.latency)?;
    }
    Ok(())
}
