use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};
use serde::Deserialize;

use crate::node::{Node, NodeConfig};

/// Organism type code used for plants in the species table.
pub const PLANT: u32 = 1;

/// Default initial biomass assigned by [`SpeciesCatalog::base_config`].
pub const DEFAULT_BIOMASS: f64 = 1000.0;

/// One row of the species table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesRecord {
    /// Species identifier.
    pub species_id: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Space separated node ids implementing the species.
    pub node_id_list: String,
    /// `1` for plants, anything else for animals.
    pub organism_type: u32,
    /// Per-unit biomass.
    pub biomass: f64,
    /// Carrying capacity (plants).
    #[serde(default)]
    pub carrying_capacity: Option<f64>,
    /// Growth rate (plants).
    #[serde(default)]
    pub growth_rate: Option<f64>,
    /// Metabolic rate (animals).
    #[serde(default)]
    pub metabolism: Option<f64>,
}

impl SpeciesRecord {
    fn node_ids(&self) -> Result<Vec<u32>, AtnError> {
        self.node_id_list
            .split_whitespace()
            .map(|raw| {
                raw.parse::<u32>().map_err(|err| {
                    AtnError::Serde(
                        ErrorInfo::new("catalog-node-id", err.to_string())
                            .with_context("species_id", self.species_id.to_string())
                            .with_context("token", raw),
                    )
                })
            })
            .collect()
    }
}

/// Species table used to build base configurations from species id lists.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: BTreeMap<u32, SpeciesRecord>,
}

impl SpeciesCatalog {
    /// Loads the catalog from a CSV file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self, AtnError> {
        let file = std::fs::File::open(path)
            .map_err(|err| AtnError::from_io("catalog-open", path, err))?;
        Self::from_reader(file)
    }

    /// Loads the catalog from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AtnError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut species = BTreeMap::new();
        for row in csv_reader.deserialize::<SpeciesRecord>() {
            let record = row.map_err(|err| {
                AtnError::Serde(ErrorInfo::new("catalog-row", err.to_string()))
            })?;
            species.insert(record.species_id, record);
        }
        Ok(Self { species })
    }

    /// Looks up a species.
    pub fn get(&self, species_id: u32) -> Option<&SpeciesRecord> {
        self.species.get(&species_id)
    }

    /// Number of species in the catalog.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// True when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Builds a template config for the given species. Plants receive `K`
    /// and `R`, animals receive `X`. Nodes are sorted by id when `sort` is
    /// set; otherwise the input order is kept.
    pub fn base_config(
        &self,
        species_ids: &[u32],
        basal_biomass: f64,
        non_basal_biomass: f64,
        sort: bool,
    ) -> Result<NodeConfig, AtnError> {
        let mut nodes = Vec::with_capacity(species_ids.len());
        for &species_id in species_ids {
            let species = self.get(species_id).ok_or_else(|| {
                AtnError::NotFound(
                    ErrorInfo::new("catalog-species", "species is not in the catalog")
                        .with_context("species_id", species_id.to_string()),
                )
            })?;
            let node_ids = species.node_ids()?;
            let node_id = match node_ids.as_slice() {
                [single] => *single,
                _ => {
                    return Err(AtnError::Generator(
                        ErrorInfo::new(
                            "catalog-multi-node",
                            "species must map to exactly one node",
                        )
                        .with_context("species_id", species_id.to_string())
                        .with_context("node_id_list", species.node_id_list.clone()),
                    ))
                }
            };

            let mut node = Node::new(node_id, non_basal_biomass, species.biomass);
            if species.organism_type == PLANT {
                node.initial_biomass = basal_biomass;
                node.set_attribute("K", required(species, "carrying_capacity", species.carrying_capacity)?);
                node.set_attribute("R", required(species, "growth_rate", species.growth_rate)?);
            } else {
                node.set_attribute("X", required(species, "metabolism", species.metabolism)?);
            }
            nodes.push(node);
        }

        if sort {
            nodes.sort_by_key(|node| node.node_id);
        }
        NodeConfig::new(nodes).map_err(AtnError::from)
    }
}

fn required(species: &SpeciesRecord, column: &str, value: Option<f64>) -> Result<f64, AtnError> {
    value.ok_or_else(|| {
        AtnError::Serde(
            ErrorInfo::new("catalog-missing-column", "species row lacks a required value")
                .with_context("species_id", species.species_id.to_string())
                .with_context("column", column),
        )
    })
}
