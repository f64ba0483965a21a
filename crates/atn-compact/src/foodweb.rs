//! Predator/prey graph loaded from the species and consume tables, random
//! selection of connected sub-webs, and the structured export of an induced
//! sub-web.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};
use atn_core::rng::RngHandle;
use rand::seq::SliceRandom;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

/// Attempts made by [`FoodWebGraph::predator_complete_subweb`] before it
/// gives up.
pub const SUBWEB_ATTEMPTS: usize = 11;

#[derive(Debug, Deserialize)]
struct SpeciesRow {
    species_id: u32,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConsumeRow {
    prey_id: u32,
    species_id: u32,
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, code: &str) -> Result<Vec<T>, AtnError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|err| AtnError::Serde(ErrorInfo::new(code, err.to_string()))))
        .collect()
}

fn open(path: &Path, code: &str) -> Result<std::fs::File, AtnError> {
    std::fs::File::open(path).map_err(|err| AtnError::from_io(code, path, err))
}

/// Directed graph with an edge from each prey to each of its predators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodWebGraph {
    names: BTreeMap<u32, String>,
    edges: BTreeSet<(u32, u32)>,
}

impl FoodWebGraph {
    pub fn from_csv_paths(species: &Path, consume: &Path) -> Result<Self, AtnError> {
        Self::from_readers(open(species, "foodweb-open")?, open(consume, "foodweb-open")?)
    }

    pub fn from_readers<S: Read, C: Read>(species: S, consume: C) -> Result<Self, AtnError> {
        let mut graph = Self::default();
        for row in read_rows::<SpeciesRow, _>(species, "foodweb-species-row")? {
            graph.names.insert(row.species_id, row.name);
        }
        for row in read_rows::<ConsumeRow, _>(consume, "foodweb-consume-row")? {
            graph.names.entry(row.prey_id).or_default();
            graph.names.entry(row.species_id).or_default();
            graph.edges.insert((row.prey_id, row.species_id));
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.names.contains_key(&id)
    }

    /// Predators of `prey`, not counting `prey` itself.
    pub fn predators(&self, prey: u32) -> impl Iterator<Item = u32> + '_ {
        self.edges
            .range((prey, u32::MIN)..=(prey, u32::MAX))
            .map(|&(_, predator)| predator)
            .filter(move |&predator| predator != prey)
    }

    fn has_prey(&self, id: u32) -> bool {
        self.edges
            .iter()
            .any(|&(prey, predator)| predator == id && prey != id)
    }

    /// Species that eat nothing but possibly themselves, ascending.
    pub fn basal_species(&self) -> Vec<u32> {
        self.names
            .keys()
            .copied()
            .filter(|&id| !self.has_prey(id))
            .collect()
    }

    fn plant_eaters(&self) -> BTreeSet<u32> {
        let basal: BTreeSet<u32> = self.basal_species().into_iter().collect();
        self.edges
            .iter()
            .filter(|&&(prey, predator)| basal.contains(&prey) && prey != predator)
            .map(|&(_, predator)| predator)
            .collect()
    }

    /// Grows a connected sub-web of `size` species from `seed_count` species
    /// drawn out of `seeds`, adding one predator of the current selection at
    /// a time. A plant eater left without any of its predators is served
    /// first. Returns the species ids in ascending order.
    pub fn predator_complete_subweb(
        &self,
        size: usize,
        seeds: &[u32],
        seed_count: usize,
        rng: &mut RngHandle,
    ) -> Result<Vec<u32>, AtnError> {
        let seeds: Vec<u32> = seeds
            .iter()
            .copied()
            .filter(|&id| self.contains(id))
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect();
        if seed_count == 0 || seed_count > size || seed_count > seeds.len() {
            return Err(AtnError::Generator(
                ErrorInfo::new("subweb-seeds", "seed count must be between 1 and both the size and the known seeds")
                    .with_context("size", size.to_string())
                    .with_context("seed_count", seed_count.to_string())
                    .with_context("seeds", seeds.len().to_string()),
            ));
        }

        let plant_eaters = self.plant_eaters();
        for attempt in 0..SUBWEB_ATTEMPTS {
            if let Some(nodes) = self.grow_subweb(size, &seeds, seed_count, &plant_eaters, rng) {
                return Ok(nodes.into_iter().collect());
            }
            debug!(attempt, size, seed_count, "sub-web attempt failed, retrying");
        }
        Err(AtnError::Generator(
            ErrorInfo::new("subweb-exhausted", "no connected sub-web of the requested size was found")
                .with_context("size", size.to_string())
                .with_context("attempts", SUBWEB_ATTEMPTS.to_string()),
        ))
    }

    fn grow_subweb(
        &self,
        size: usize,
        seeds: &[u32],
        seed_count: usize,
        plant_eaters: &BTreeSet<u32>,
        rng: &mut RngHandle,
    ) -> Option<BTreeSet<u32>> {
        let mut nodes: BTreeSet<u32> = seeds.choose_multiple(rng, seed_count).copied().collect();
        while nodes.len() < size {
            let mut lonely_predators = Vec::new();
            for &eater in plant_eaters.intersection(&nodes) {
                let predators: Vec<u32> = self.predators(eater).collect();
                if predators.iter().all(|predator| !nodes.contains(predator)) {
                    lonely_predators.extend(predators);
                }
            }
            if let Some(&predator) = lonely_predators.choose(rng) {
                nodes.insert(predator);
                continue;
            }

            let neighbours: Vec<u32> = nodes
                .iter()
                .flat_map(|&id| self.predators(id))
                .filter(|id| !nodes.contains(id))
                .collect::<BTreeSet<u32>>()
                .into_iter()
                .collect();
            let &next = neighbours.choose(rng)?;
            nodes.insert(next);
        }
        (self.component_count(&nodes) == 1).then_some(nodes)
    }

    /// Weakly connected components of the sub-web induced by `nodes`.
    fn component_count(&self, nodes: &BTreeSet<u32>) -> usize {
        let mut adjacent: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for &(prey, predator) in &self.edges {
            if prey != predator && nodes.contains(&prey) && nodes.contains(&predator) {
                adjacent.entry(prey).or_default().push(predator);
                adjacent.entry(predator).or_default().push(prey);
            }
        }
        let mut seen = BTreeSet::new();
        let mut components = 0;
        for &start in nodes {
            if !seen.insert(start) {
                continue;
            }
            components += 1;
            let mut stack = vec![start];
            while let Some(id) = stack.pop() {
                for &next in adjacent.get(&id).into_iter().flatten() {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }
        components
    }

    /// Sub-web on `ids` keeping every edge whose ends are both included.
    /// Ids missing from the graph still appear as unnamed nodes.
    pub fn induced(&self, ids: &[u32]) -> SubWeb {
        let keep: BTreeSet<u32> = ids.iter().copied().collect();
        let nodes = keep
            .iter()
            .map(|id| SubWebNode {
                id: *id,
                name: self.names.get(id).cloned().unwrap_or_default(),
            })
            .collect();
        let links = self
            .edges
            .iter()
            .filter(|(prey, predator)| keep.contains(prey) && keep.contains(predator))
            .map(|(prey, predator)| Link {
                source: *prey,
                target: *predator,
            })
            .collect();
        SubWeb { nodes, links }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubWebNode {
    pub id: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Prey to predator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: u32,
    pub target: u32,
}

/// Node-link export of a food web, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubWeb {
    pub nodes: Vec<SubWebNode>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SubWeb {
    /// Export used when no graph was loaded: nodes, no links.
    pub fn nodes_only(ids: &[u32]) -> Self {
        let keep: BTreeSet<u32> = ids.iter().copied().collect();
        Self {
            nodes: keep
                .into_iter()
                .map(|id| SubWebNode {
                    id,
                    name: String::new(),
                })
                .collect(),
            links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECIES: &str = "species_id,name,organism_type\n5,Grass,1\n14,Gazelle,0\n31,Lion,0\n42,Acacia,1\n";
    const CONSUME: &str = "species_id,prey_id\n14,5\n31,14\n14,42\n";

    #[test]
    fn induced_keeps_edges_inside_selection() {
        let graph = FoodWebGraph::from_readers(SPECIES.as_bytes(), CONSUME.as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let web = graph.induced(&[31, 5, 14]);
        let ids: Vec<u32> = web.nodes.iter().map(|node| node.id).collect();
        assert_eq!(ids, vec![5, 14, 31]);
        assert_eq!(web.nodes[2].name, "Lion");
        assert_eq!(
            web.links,
            vec![Link { source: 5, target: 14 }, Link { source: 14, target: 31 }]
        );
    }

    #[test]
    fn bad_rows_are_serde_errors() {
        let err = FoodWebGraph::from_readers(SPECIES.as_bytes(), "species_id,prey_id\nx,1\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.info().code, "foodweb-consume-row");
    }
}
