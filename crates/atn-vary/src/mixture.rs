//! Sampling node configs from an already-fitted Gaussian mixture.
//!
//! Attributes are independent within a component: the fitted model carries a
//! mean and standard deviation per node attribute, never a covariance.

use std::collections::BTreeMap;

use atn_core::errors::{AtnError, ErrorInfo};
use atn_core::rng::RngHandle;
use atn_nodecfg::NodeConfig;
use serde::{Deserialize, Serialize};

/// Univariate normal distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub mean: f64,
    pub std_dev: f64,
}

/// One mixture component: a prior weight and per-node, per-attribute
/// Gaussians.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MixtureComponent {
    pub prior: f64,
    #[serde(default)]
    pub nodes: BTreeMap<u32, BTreeMap<String, Gaussian>>,
}

/// A validated mixture with non-negative priors summing to a positive total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MixtureComponent>", into = "Vec<MixtureComponent>")]
pub struct Mixture {
    components: Vec<MixtureComponent>,
    cumulative: Vec<f64>,
}

impl Mixture {
    pub fn new(components: Vec<MixtureComponent>) -> Result<Self, AtnError> {
        if components.is_empty() {
            return Err(AtnError::Generator(ErrorInfo::new(
                "mixture-empty",
                "a mixture needs at least one component",
            )));
        }
        let mut cumulative = Vec::with_capacity(components.len());
        let mut total = 0.0;
        for (index, component) in components.iter().enumerate() {
            if !component.prior.is_finite() || component.prior < 0.0 {
                return Err(AtnError::Generator(
                    ErrorInfo::new("mixture-prior", "priors must be finite and non-negative")
                        .with_context("component", index.to_string())
                        .with_context("prior", component.prior.to_string()),
                ));
            }
            total += component.prior;
            cumulative.push(total);
        }
        if total <= 0.0 {
            return Err(AtnError::Generator(ErrorInfo::new(
                "mixture-prior",
                "priors must not all be zero",
            )));
        }
        Ok(Self {
            components,
            cumulative,
        })
    }

    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    /// Weighted choice: a uniform draw in `[0, sum(priors))` located in the
    /// cumulative priors.
    pub fn choose_component(&self, rng: &mut RngHandle) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let draw = rng.unit() * total;
        let index = self.cumulative.partition_point(|edge| *edge <= draw);
        index.min(self.components.len() - 1)
    }

    /// Samples `count` configs and reports which component produced each.
    pub fn sample_tagged(
        &self,
        template: &NodeConfig,
        count: usize,
        rng: &mut RngHandle,
    ) -> Result<Vec<(usize, NodeConfig)>, AtnError> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.choose_component(rng);
            let component = &self.components[index];
            let mut variant = template.clone();
            for node in variant.nodes_mut() {
                let attributes = component.nodes.get(&node.node_id).ok_or_else(|| {
                    AtnError::Generator(
                        ErrorInfo::new("mixture-node", "mixture has no distribution for node")
                            .with_context("node_id", node.node_id.to_string())
                            .with_context("component", index.to_string()),
                    )
                })?;
                for (name, gaussian) in attributes {
                    node.set_attribute(name, rng.gauss(gaussian.mean, gaussian.std_dev));
                }
            }
            out.push((index, variant));
        }
        Ok(out)
    }

    /// Samples `count` configs from the mixture.
    pub fn sample(
        &self,
        template: &NodeConfig,
        count: usize,
        rng: &mut RngHandle,
    ) -> Result<Vec<NodeConfig>, AtnError> {
        Ok(self
            .sample_tagged(template, count, rng)?
            .into_iter()
            .map(|(_, config)| config)
            .collect())
    }
}

impl TryFrom<Vec<MixtureComponent>> for Mixture {
    type Error = AtnError;

    fn try_from(components: Vec<MixtureComponent>) -> Result<Self, Self::Error> {
        Mixture::new(components)
    }
}

impl From<Mixture> for Vec<MixtureComponent> {
    fn from(mixture: Mixture) -> Self {
        mixture.components
    }
}
