// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Assembly of topology graphs.
//!
//! A [TopologyBuilder] accumulates component instances, subcomponent slots
//! and links, checking structural rules as it goes: names are unique per
//! kind, a slot is attached at most once per parent, and links may only
//! reference components and slots that already exist. Each operation either
//! succeeds completely or returns a [TopologyError] and leaves the builder
//! exactly as it was. [finalize](TopologyBuilder::finalize) snapshots the
//! state into an immutable [Graph]; the builder stays usable afterwards and
//! later graphs do not affect earlier ones.
//!
//! Builders are plain values. Independent topologies can be assembled side
//! by side, each from its own builder; nothing is shared behind the scenes.

use std::collections::HashMap;

use log::debug;

use crate::graph::{ComponentInstance, Endpoint, Graph, Link, SubcomponentSlot};
use crate::types::{Params, TopoResult, TopologyError};

/// Copyable handle to a component registered with a builder
///
/// Handles are only meaningful on the builder that returned them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComponentId(usize);

/// Copyable handle to a subcomponent slot registered with a builder
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlotId {
    component: usize,
    slot: usize,
}

impl SlotId {
    /// The handle of the parent component
    #[must_use]
    pub fn component(&self) -> ComponentId {
        ComponentId(self.component)
    }
}

/// Accumulated state for one topology under assembly
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    components: Vec<ComponentInstance>,
    components_idx_by_id: HashMap<String, usize>,
    links: Vec<Link>,
    links_idx_by_id: HashMap<String, usize>,
}

impl TopologyBuilder {
    #[must_use]
    pub fn new() -> Self {
        TopologyBuilder::default()
    }

    /// Register a new component instance
    ///
    /// `model` is the runtime's tag for the component implementation, e.g.
    /// `memHierarchy.Cache`; it is carried through without validation.
    pub fn create_component(
        &mut self,
        name: &str,
        model: &str,
        params: Params,
    ) -> Result<ComponentId, TopologyError> {
        if self.components_idx_by_id.contains_key(name) {
            return Err(TopologyError::DuplicateName(name.to_string()));
        }

        let idx = self.components.len();
        self.components.push(ComponentInstance {
            name: name.to_string(),
            model: model.to_string(),
            params,
            subcomponents: Vec::new(),
        });
        self.components_idx_by_id.insert(name.to_string(), idx);
        debug!("created component '{name}' ({model})");
        Ok(ComponentId(idx))
    }

    /// Attach a subcomponent into the named slot of `parent`
    ///
    /// `index` is the position within the slot's array on the runtime side;
    /// it does not affect slot occupancy, which is per slot name.
    pub fn attach_subcomponent(
        &mut self,
        parent: &str,
        slot: &str,
        model: &str,
        index: u64,
    ) -> Result<SlotId, TopologyError> {
        self.attach_subcomponent_with_params(parent, slot, model, index, Params::new())
    }

    /// As [attach_subcomponent](TopologyBuilder::attach_subcomponent), with
    /// a parameter table for the subcomponent itself
    pub fn attach_subcomponent_with_params(
        &mut self,
        parent: &str,
        slot: &str,
        model: &str,
        index: u64,
        params: Params,
    ) -> Result<SlotId, TopologyError> {
        let Some(component_idx) = self.components_idx_by_id.get(parent).copied() else {
            return Err(TopologyError::UnknownParent(parent.to_string()));
        };

        let instance = &mut self.components[component_idx];
        if instance.subcomponent(slot).is_some() {
            return Err(TopologyError::SlotConflict {
                parent: parent.to_string(),
                slot: slot.to_string(),
            });
        }

        let slot_idx = instance.subcomponents.len();
        instance.subcomponents.push(SubcomponentSlot {
            slot: slot.to_string(),
            model: model.to_string(),
            index,
            params,
        });
        debug!("attached subcomponent '{parent}.{slot}' ({model})");
        Ok(SlotId {
            component: component_idx,
            slot: slot_idx,
        })
    }

    /// Register a link between two endpoints
    ///
    /// Both endpoints must resolve to an already registered component or
    /// slot. Anything about the ports themselves, including that a port is
    /// used by at most one link, is left to the runtime.
    pub fn create_link(
        &mut self,
        name: &str,
        a: Endpoint,
        b: Endpoint,
        latency: &str,
    ) -> TopoResult {
        if self.links_idx_by_id.contains_key(name) {
            return Err(TopologyError::DuplicateLinkName(name.to_string()));
        }
        self.resolve_endpoint(&a)?;
        self.resolve_endpoint(&b)?;

        let idx = self.links.len();
        debug!("created link '{name}': {a} <-> {b} ({latency})");
        self.links.push(Link {
            name: name.to_string(),
            a,
            b,
            latency: latency.to_string(),
        });
        self.links_idx_by_id.insert(name.to_string(), idx);
        Ok(())
    }

    fn resolve_endpoint(&self, endpoint: &Endpoint) -> TopoResult {
        let Some(idx) = self.components_idx_by_id.get(&endpoint.component) else {
            return Err(TopologyError::DanglingEndpoint(endpoint.to_string()));
        };
        if let Some(slot) = &endpoint.slot
            && self.components[*idx].subcomponent(slot).is_none()
        {
            return Err(TopologyError::DanglingEndpoint(endpoint.to_string()));
        }
        Ok(())
    }

    /// Snapshot the accumulated state into an immutable [Graph]
    ///
    /// Finalizing is repeatable: with no operations in between, successive
    /// calls return equal graphs, and a graph is never affected by what the
    /// builder does afterwards.
    #[must_use]
    pub fn finalize(&self) -> Graph {
        Graph::new(self.components.clone(), self.links.clone())
    }

    #[must_use]
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// The component a handle refers to
    #[must_use]
    pub fn component(&self, id: ComponentId) -> &ComponentInstance {
        &self.components[id.0]
    }

    /// The subcomponent slot a handle refers to
    #[must_use]
    pub fn slot(&self, id: SlotId) -> &SubcomponentSlot {
        &self.components[id.component].subcomponents[id.slot]
    }

    /// Find a registered component by name
    #[must_use]
    pub fn component_by_name(&self, name: &str) -> Option<&ComponentInstance> {
        self.components_idx_by_id
            .get(name)
            .map(|idx| &self.components[*idx])
    }
}
