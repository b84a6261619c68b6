// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! The finished topology graph.
//!
//! A [Graph] is the immutable product of
//! [TopologyBuilder::finalize](crate::builder::TopologyBuilder::finalize).
//! It holds everything the external runtime needs to instantiate the
//! simulation: the component instances with their parameter tables and
//! subcomponent slots, and the latency-annotated links between ports.
//! Ports only exist as names inside [Endpoint] values; whether a port is
//! real, compatible and singly used is the runtime's validation, not ours.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

use serde::Serialize;

use crate::config_error;
use crate::types::{Params, TopologyError};

/// A subcomponent bound into a named slot of a component instance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubcomponentSlot {
    /// The slot name on the parent, e.g. `cache_port`
    pub slot: String,
    /// The runtime model tag to instantiate in the slot
    pub model: String,
    /// Position within the slot's array on the runtime side
    pub index: u64,
    /// Parameters for the subcomponent itself
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

/// A named, parameterised instance of a runtime component model
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentInstance {
    pub name: String,
    /// The runtime model tag, e.g. `memHierarchy.Cache`
    pub model: String,
    pub params: Params,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subcomponents: Vec<SubcomponentSlot>,
}

impl ComponentInstance {
    /// Find the subcomponent occupying `slot`, if any
    #[must_use]
    pub fn subcomponent(&self, slot: &str) -> Option<&SubcomponentSlot> {
        self.subcomponents.iter().find(|sub| sub.slot == slot)
    }
}

impl Display for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.model)?;
        for sub in &self.subcomponents {
            write!(f, " +{}", sub.slot)?;
        }
        Ok(())
    }
}

/// One end of a link: a component, optionally one of its slots, and a port
/// name on whatever the rest selects
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub port: String,
}

impl Endpoint {
    /// An endpoint on a port of the component itself
    #[must_use]
    pub fn component(component: &str, port: &str) -> Self {
        Endpoint {
            component: component.to_string(),
            slot: None,
            port: port.to_string(),
        }
    }

    /// An endpoint on a port of a subcomponent slot
    #[must_use]
    pub fn slot(component: &str, slot: &str, port: &str) -> Self {
        Endpoint {
            component: component.to_string(),
            slot: Some(slot.to_string()),
            port: port.to_string(),
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "{}.{slot}.{}", self.component, self.port),
            None => write!(f, "{}.{}", self.component, self.port),
        }
    }
}

/// A latency-annotated connection between two endpoints
///
/// The runtime treats the pair as unordered; the order the endpoints were
/// supplied in is preserved for emission only. The latency is carried
/// verbatim (e.g. `1ns`) since its units belong to the runtime's contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub a: Endpoint,
    pub b: Endpoint,
    pub latency: String,
}

impl Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} <-> {} ({})", self.name, self.a, self.b, self.latency)
    }
}

/// The finished topology handed to the external runtime
///
/// Construction goes through [TopologyBuilder](crate::builder::TopologyBuilder);
/// once built, a graph never changes. Structural guarantees at this point:
/// component and link names are unique, every slot name is unique on its
/// parent, and both ends of every link resolve to a component or slot that
/// exists. Connectivity of the whole graph is deliberately not checked
/// here; the runtime rejects graphs it cannot simulate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Graph {
    components: Vec<ComponentInstance>,
    links: Vec<Link>,
    #[serde(skip)]
    components_idx_by_id: HashMap<String, usize>,
    #[serde(skip)]
    links_idx_by_id: HashMap<String, usize>,
}

impl Graph {
    pub(crate) fn new(components: Vec<ComponentInstance>, links: Vec<Link>) -> Self {
        let mut components_idx_by_id = HashMap::new();
        for (idx, component) in components.iter().enumerate() {
            components_idx_by_id.insert(component.name.clone(), idx);
        }
        let mut links_idx_by_id = HashMap::new();
        for (idx, link) in links.iter().enumerate() {
            links_idx_by_id.insert(link.name.clone(), idx);
        }
        Graph {
            components,
            links,
            components_idx_by_id,
            links_idx_by_id,
        }
    }

    pub fn component_idx_from_name(&self, component_name: &str) -> Result<usize, TopologyError> {
        match self.components_idx_by_id.get(component_name) {
            Some(idx) => Ok(*idx),
            None => config_error!("No Component '{component_name}'"),
        }
    }

    pub fn link_idx_from_name(&self, link_name: &str) -> Result<usize, TopologyError> {
        match self.links_idx_by_id.get(link_name) {
            Some(idx) => Ok(*idx),
            None => config_error!("No Link '{link_name}'"),
        }
    }

    #[must_use]
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn component_names(&self) -> Vec<String> {
        self.components_idx_by_id
            .keys()
            .map(|component_name| component_name.to_string())
            .collect()
    }

    pub fn component(&self, component_name: &str) -> Result<&ComponentInstance, TopologyError> {
        let idx = self.component_idx_from_name(component_name)?;
        Ok(&self.components[idx])
    }

    pub fn link(&self, link_name: &str) -> Result<&Link, TopologyError> {
        let idx = self.link_idx_from_name(link_name)?;
        Ok(&self.links[idx])
    }

    #[must_use]
    pub fn components(&self) -> &[ComponentInstance] {
        &self.components
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Components:")?;
        for (i, component) in self.components.iter().enumerate() {
            writeln!(f, "  {i}: {component}")?;
        }

        writeln!(f, "\nLinks:")?;
        for (i, link) in self.links.iter().enumerate() {
            writeln!(f, "  {i}: {link}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_graph() -> Graph {
        let node = ComponentInstance {
            name: "node".to_string(),
            model: "gem5.gem5Component".to_string(),
            params: Params::new(),
            subcomponents: vec![SubcomponentSlot {
                slot: "cache_port".to_string(),
                model: "gem5.gem5Bridge".to_string(),
                index: 0,
                params: Params::new(),
            }],
        };
        let cache = ComponentInstance {
            name: "l1_cache".to_string(),
            model: "memHierarchy.Cache".to_string(),
            params: Params::new(),
            subcomponents: Vec::new(),
        };
        let link = Link {
            name: "cpu_l1_cache_link".to_string(),
            a: Endpoint::slot("node", "cache_port", "port"),
            b: Endpoint::component("l1_cache", "high_network_0"),
            latency: "1ns".to_string(),
        };
        Graph::new(vec![node, cache], vec![link])
    }

    #[test]
    fn lookups() {
        let graph = two_node_graph();
        assert_eq!(graph.num_components(), 2);
        assert_eq!(graph.num_links(), 1);
        assert_eq!(graph.component_idx_from_name("l1_cache").unwrap(), 1);
        assert_eq!(graph.component("node").unwrap().subcomponents.len(), 1);
        assert_eq!(graph.link("cpu_l1_cache_link").unwrap().latency, "1ns");

        let mut names = graph.component_names();
        names.sort();
        assert_eq!(names, vec!["l1_cache", "node"]);
    }

    #[test]
    #[should_panic(expected = "No Component 'l2_cache'")]
    fn unknown_component() {
        two_node_graph().component("l2_cache").unwrap();
    }

    #[test]
    fn endpoint_display() {
        assert_eq!(
            Endpoint::slot("node", "cache_port", "port").to_string(),
            "node.cache_port.port"
        );
        assert_eq!(
            Endpoint::component("l1_cache", "high_network_0").to_string(),
            "l1_cache.high_network_0"
        );
    }

    #[test]
    fn graph_display() {
        let printed = two_node_graph().to_string();
        assert!(printed.contains("Components:"));
        assert!(printed.contains("0: node (gem5.gem5Component) +cache_port"));
        assert!(printed.contains("node.cache_port.port <-> l1_cache.high_network_0 (1ns)"));
    }
}
