use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::codec::{ParseError, ParseErrorKind};

/// Attribute name addressing [`Node::initial_biomass`].
pub const INITIAL_BIOMASS: &str = "initialBiomass";
/// Attribute name addressing [`Node::per_unit_biomass`].
pub const PER_UNIT_BIOMASS: &str = "perUnitBiomass";

/// Attributes tracked by the sweep and mixture generators, in sweep order.
pub const TRACKED_ATTRIBUTES: [&str; 4] = [INITIAL_BIOMASS, "K", "R", "X"];

/// One species entry of a food-web configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, unique within a [`NodeConfig`].
    pub node_id: u32,
    /// Initial biomass of the species.
    pub initial_biomass: f64,
    /// Biomass of a single individual.
    pub per_unit_biomass: f64,
    /// Named role parameters (`K`, `R` for basal species, `X` for consumers).
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

impl Node {
    /// Creates a node without role parameters.
    pub fn new(node_id: u32, initial_biomass: f64, per_unit_biomass: f64) -> Self {
        Self {
            node_id,
            initial_biomass,
            per_unit_biomass,
            params: BTreeMap::new(),
        }
    }

    /// Builder helper adding a named parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Reads an attribute by name; biomass fields are addressable like params.
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            INITIAL_BIOMASS => Some(self.initial_biomass),
            PER_UNIT_BIOMASS => Some(self.per_unit_biomass),
            other => self.params.get(other).copied(),
        }
    }

    /// Returns true when the attribute is present on this node.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Writes an attribute by name, inserting the parameter if absent.
    pub fn set_attribute(&mut self, name: &str, value: f64) {
        match name {
            INITIAL_BIOMASS => self.initial_biomass = value,
            PER_UNIT_BIOMASS => self.per_unit_biomass = value,
            other => {
                self.params.insert(other.to_string(), value);
            }
        }
    }
}

/// Ordered sequence of nodes with unique ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct NodeConfig {
    nodes: Vec<Node>,
}

impl NodeConfig {
    /// Builds a config, rejecting duplicate node ids.
    pub fn new(nodes: Vec<Node>) -> Result<Self, ParseError> {
        let mut seen = BTreeSet::new();
        for node in &nodes {
            if !seen.insert(node.node_id) {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateNodeId,
                    0,
                    format!("[{}]", node.node_id),
                ));
            }
        }
        Ok(Self { nodes })
    }

    /// Nodes in configuration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access for in-place perturbation. The slice cannot grow, and
    /// generators never rewrite ids.
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the config holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, node_id: u32) -> Option<&Node> {
        self.nodes.iter().find(|node| node.node_id == node_id)
    }

    /// Position of the node with the given id.
    pub fn position(&self, node_id: u32) -> Option<usize> {
        self.nodes.iter().position(|node| node.node_id == node_id)
    }

    /// Node ids sorted ascending.
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.nodes.iter().map(|node| node.node_id).collect();
        ids.sort_unstable();
        ids
    }

    /// Food-web identity: sorted node ids joined by `-`.
    pub fn food_web_id(&self) -> String {
        food_web_key(&self.sorted_ids())
    }
}

impl TryFrom<Vec<Node>> for NodeConfig {
    type Error = ParseError;

    fn try_from(nodes: Vec<Node>) -> Result<Self, Self::Error> {
        NodeConfig::new(nodes)
    }
}

impl From<NodeConfig> for Vec<Node> {
    fn from(config: NodeConfig) -> Self {
        config.nodes
    }
}

/// Joins already-sorted ids into a food-web key such as `5-14-31`.
pub fn food_web_key(sorted_ids: &[u32]) -> String {
    sorted_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_web_id_sorts_ids() {
        let config = NodeConfig::new(vec![
            Node::new(31, 1.0, 1.0),
            Node::new(5, 1.0, 1.0),
            Node::new(14, 1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(config.food_web_id(), "5-14-31");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = NodeConfig::new(vec![Node::new(5, 1.0, 1.0), Node::new(5, 2.0, 1.0)])
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::DuplicateNodeId);
    }

    #[test]
    fn biomass_fields_are_addressable_by_name() {
        let mut node = Node::new(5, 2000.0, 1.0).with_param("K", 10000.0);
        assert_eq!(node.attribute(INITIAL_BIOMASS), Some(2000.0));
        assert_eq!(node.attribute("K"), Some(10000.0));
        assert!(!node.has_attribute("X"));
        node.set_attribute(INITIAL_BIOMASS, 1000.0);
        node.set_attribute("R", 1.0);
        assert_eq!(node.initial_biomass, 1000.0);
        assert_eq!(node.params["R"], 1.0);
    }
}
