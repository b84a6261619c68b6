// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Types that map directly to the YAML topology document schema.
//!
//! A document is declarative: a `components` section of named instances
//! (each with optional `params` and `subcomponents`) and a `links` section
//! wiring their ports together. Loading a document does not touch any
//! builder; [TopologyConfig::build] replays it through one, so a document
//! and the equivalent sequence of builder calls produce the same graph.

use std::path::Path;

use serde::{Deserialize, de};

use crate::builder::TopologyBuilder;
use crate::connect::apply_links;
use crate::types::{Params, TopoResult, TopologyError};

/// Validate a link latency such as "1ns" or "30ns"
///
/// The value stays a string: its meaning belongs to the runtime's contract
/// and it is carried through verbatim. Only the grammar is checked, so a
/// malformed document fails at load rather than at simulation start.
pub fn parse_latency_str<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(&s)
        .map_err(|e| de::Error::custom(format!("Unable to parse '{s}' as a latency: {e}")))?;
    Ok(s)
}

#[derive(Debug, Deserialize)]
pub struct TopologyConfig {
    pub components: Option<Vec<ComponentSection>>,
    pub links: Option<Vec<LinkSection>>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentSection {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub subcomponents: Vec<SubcomponentSection>,
}

#[derive(Debug, Deserialize)]
pub struct SubcomponentSection {
    pub slot: String,
    pub model: String,
    #[serde(default)]
    pub index: u64,
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, Deserialize)]
pub struct LinkSection {
    pub name: String,
    pub connect: Vec<String>,
    #[serde(deserialize_with = "parse_latency_str")]
    pub latency: String,
}

impl TopologyConfig {
    pub fn from_file(config_path: &Path) -> Result<Self, TopologyError> {
        let s = std::fs::read_to_string(config_path).map_err(|e| {
            TopologyError::Config(format!("Unable to read {}: {e}", config_path.display()))
        })?;
        Self::from_string(&s)
    }

    pub fn from_string(config_str: &str) -> Result<Self, TopologyError> {
        serde_yaml::from_str(config_str)
            .map_err(|e| TopologyError::Config(format!("serde_yaml::from_str failed: {e}")))
    }

    /// Replay the document through `builder`
    ///
    /// Components are created first (with their subcomponents, in document
    /// order), then links, so a link may refer to any component in the
    /// document regardless of declaration order. On error the builder keeps
    /// everything up to, and nothing from, the failing entry.
    pub fn build(&self, builder: &mut TopologyBuilder) -> TopoResult {
        if let Some(components) = &self.components {
            for component in components {
                let params = component.params.clone();
                builder.create_component(&component.name, &component.model, params)?;
                for sub in &component.subcomponents {
                    builder.attach_subcomponent_with_params(
                        &component.name,
                        &sub.slot,
                        &sub.model,
                        sub.index,
                        sub.params.clone(),
                    )?;
                }
            }
        }
        if let Some(links) = &self.links {
            apply_links(builder, links)?;
        }
        Ok(())
    }
}
