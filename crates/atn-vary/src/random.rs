//! Bounded random perturbation and linear sweeps of a single attribute.

use atn_core::errors::{AtnError, ErrorInfo};
use atn_core::rng::RngHandle;
use atn_nodecfg::{clip_to_registered, NodeConfig, INITIAL_BIOMASS, PER_UNIT_BIOMASS};

/// Emits `count` configs. The first is the template itself; each later one
/// scales every listed attribute of every node by an independent ratio drawn
/// from `[min_percent, max_percent] / 100`, clipped to the registered range.
pub fn bounded_random(
    template: &NodeConfig,
    params: &[&str],
    min_percent: f64,
    max_percent: f64,
    count: usize,
    rng: &mut RngHandle,
) -> Vec<NodeConfig> {
    let min_ratio = min_percent / 100.0;
    let max_ratio = max_percent / 100.0;
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }
    out.push(template.clone());

    for _ in 1..count {
        let mut variant = template.clone();
        for node in variant.nodes_mut() {
            let names: Vec<String> = [INITIAL_BIOMASS, PER_UNIT_BIOMASS]
                .iter()
                .map(|name| name.to_string())
                .chain(node.params.keys().cloned())
                .filter(|name| params.contains(&name.as_str()))
                .collect();
            for name in names {
                if let Some(base) = node.attribute(&name) {
                    let value = base * rng.uniform(min_ratio, max_ratio);
                    node.set_attribute(&name, clip_to_registered(&name, value));
                }
            }
        }
        out.push(variant);
    }
    out
}

/// Varies one attribute of one node linearly from `min_percent` to
/// `max_percent` of its template value, both ends included.
pub fn linear_sweep(
    template: &NodeConfig,
    node_id: u32,
    param: &str,
    min_percent: f64,
    max_percent: f64,
    count: usize,
) -> Result<Vec<NodeConfig>, AtnError> {
    let index = template.position(node_id).ok_or_else(|| {
        AtnError::Generator(
            ErrorInfo::new("linear-sweep-node", "node is not part of the template")
                .with_context("node_id", node_id.to_string()),
        )
    })?;
    let base = template.nodes()[index].attribute(param).ok_or_else(|| {
        AtnError::Generator(
            ErrorInfo::new("linear-sweep-param", "node does not carry the parameter")
                .with_context("node_id", node_id.to_string())
                .with_context("param", param),
        )
    })?;

    let min_ratio = min_percent / 100.0;
    let max_ratio = max_percent / 100.0;
    let step = if count > 1 {
        (max_ratio - min_ratio) / (count - 1) as f64
    } else {
        0.0
    };

    Ok((0..count)
        .map(|i| {
            let mut variant = template.clone();
            let ratio = step * i as f64 + min_ratio;
            variant.nodes_mut()[index].set_attribute(param, base * ratio);
            variant
        })
        .collect())
}
