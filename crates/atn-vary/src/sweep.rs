//! Systematic sweeps: single-parameter, pairwise, triple and the basal grid.

use atn_core::errors::{AtnError, ErrorInfo};
use atn_nodecfg::{NodeConfig, TRACKED_ATTRIBUTES};
use serde::{Deserialize, Serialize};

/// Inclusive integer percentage range walked in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl PercentRange {
    /// Builds a range, rejecting a zero step or inverted bounds.
    pub fn new(min: u32, max: u32, step: u32) -> Result<Self, AtnError> {
        if step == 0 || min > max {
            return Err(AtnError::Generator(
                ErrorInfo::new("percent-range", "percentage range must be ascending with a positive step")
                    .with_context("min", min.to_string())
                    .with_context("max", max.to_string())
                    .with_context("step", step.to_string()),
            ));
        }
        Ok(Self { min, max, step })
    }

    /// Percentages from `min` up to and including `max` when it lands on a step.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }

    /// Number of values in the range.
    pub fn steps(&self) -> usize {
        self.values().count()
    }
}

fn scale(value: f64, percent: u32) -> f64 {
    value * f64::from(percent) / 100.0
}

fn set(config: &mut NodeConfig, index: usize, param: &str, value: f64) {
    if let Some(node) = config.nodes_mut().get_mut(index) {
        node.set_attribute(param, value);
    }
}

fn template_value(template: &NodeConfig, index: usize, param: &str) -> Option<f64> {
    template.nodes().get(index).and_then(|node| node.attribute(param))
}

/// Scales one tracked attribute of one node at a time. The unmodified
/// template is not part of the output, and 100% is skipped.
pub fn single_param_sweep(template: &NodeConfig, range: &PercentRange) -> Vec<NodeConfig> {
    let mut out = Vec::new();
    for (index, node) in template.nodes().iter().enumerate() {
        for param in TRACKED_ATTRIBUTES {
            let Some(base) = node.attribute(param) else {
                continue;
            };
            for percent in range.values().filter(|percent| *percent != 100) {
                let mut variant = template.clone();
                set(&mut variant, index, param, scale(base, percent));
                out.push(variant);
            }
        }
    }
    out
}

/// Every unordered pair of nodes carrying `param`, starting at node index
/// `start_pos`, crossed over the full percentage grid.
pub fn pair_sweep(
    template: &NodeConfig,
    param: &str,
    range: &PercentRange,
    start_pos: usize,
) -> Vec<NodeConfig> {
    let mut out = Vec::new();
    let len = template.len();
    for i in start_pos..len {
        let Some(base_i) = template_value(template, i, param) else {
            continue;
        };
        for j in (i + 1)..len {
            let Some(base_j) = template_value(template, j, param) else {
                continue;
            };
            for percent_i in range.values() {
                for percent_j in range.values() {
                    let mut variant = template.clone();
                    set(&mut variant, i, param, scale(base_i, percent_i));
                    set(&mut variant, j, param, scale(base_j, percent_j));
                    out.push(variant);
                }
            }
        }
    }
    out
}

/// Fixes a third node by adding `percent / 100` to its value, then runs the
/// pair sweep over the nodes after it so no pair repeats.
pub fn triple_sweep(template: &NodeConfig, param: &str, range: &PercentRange) -> Vec<NodeConfig> {
    let mut out = Vec::new();
    for k in 0..template.len().saturating_sub(2) {
        let Some(base_k) = template_value(template, k, param) else {
            continue;
        };
        for percent in range.values() {
            let mut anchored = template.clone();
            set(&mut anchored, k, param, base_k + f64::from(percent) / 100.0);
            out.extend(pair_sweep(&anchored, param, range, k + 1));
        }
    }
    out
}

/// For every `K` and `R` percentage of the first (basal) node, sweeps `X` of
/// each consumer one at a time.
pub fn basal_grid(template: &NodeConfig, range: &PercentRange) -> Result<Vec<NodeConfig>, AtnError> {
    let basal = template.nodes().first().ok_or_else(|| {
        AtnError::Generator(ErrorInfo::new("basal-grid", "template has no nodes"))
    })?;
    let (Some(base_k), Some(base_r)) = (basal.attribute("K"), basal.attribute("R")) else {
        return Err(AtnError::Generator(
            ErrorInfo::new("basal-grid", "first node must carry K and R")
                .with_context("node_id", basal.node_id.to_string()),
        ));
    };

    let mut out = Vec::new();
    for percent_k in range.values() {
        for percent_r in range.values() {
            let mut grid_point = template.clone();
            set(&mut grid_point, 0, "K", scale(base_k, percent_k));
            set(&mut grid_point, 0, "R", scale(base_r, percent_r));
            for i in 1..template.len() {
                let Some(base_x) = template_value(template, i, "X") else {
                    continue;
                };
                for percent_x in range.values() {
                    let mut variant = grid_point.clone();
                    set(&mut variant, i, "X", scale(base_x, percent_x));
                    out.push(variant);
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atn_nodecfg::decode;

    #[test]
    fn percent_range_includes_max_on_step() {
        let range = PercentRange::new(50, 150, 10).unwrap();
        assert_eq!(range.steps(), 11);
        assert_eq!(range.values().last(), Some(150));
        let uneven = PercentRange::new(50, 145, 10).unwrap();
        assert_eq!(uneven.values().last(), Some(140));
        assert!(PercentRange::new(50, 150, 0).is_err());
        assert!(PercentRange::new(150, 50, 5).is_err());
    }

    #[test]
    fn triple_anchor_is_additive() {
        let template = decode("3,[1],1.0,1.0,1,X=0.5,0,[2],1.0,1.0,1,X=0.5,0,[3],1.0,1.0,1,X=0.5,0").unwrap();
        let range = PercentRange::new(100, 100, 10).unwrap();
        let out = triple_sweep(&template, "X", &range);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].nodes()[0].params["X"], 1.5);
        assert_eq!(out[0].nodes()[1].params["X"], 0.5);
    }
}
