use atn_core::rng::RngHandle;
use atn_nodecfg::NodeConfig;
use rand::seq::SliceRandom;

/// Emits the template `count` times, reshuffling every node after the first
/// `prefix` positions between emissions. Shuffles accumulate.
pub fn order_shuffles(
    template: &NodeConfig,
    prefix: usize,
    count: usize,
    rng: &mut RngHandle,
) -> Vec<NodeConfig> {
    let mut current = template.clone();
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(current.clone());
        let nodes = current.nodes_mut();
        if prefix < nodes.len() {
            nodes[prefix..].shuffle(rng);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use atn_nodecfg::decode;

    #[test]
    fn prefix_stays_in_place() {
        let template = decode(
            "4,[1],1.0,1.0,0,0,[2],1.0,1.0,0,0,[3],1.0,1.0,0,0,[4],1.0,1.0,0,0",
        )
        .unwrap();
        let mut rng = RngHandle::from_seed(5);
        let out = order_shuffles(&template, 2, 10, &mut rng);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0], template);
        for config in &out {
            assert_eq!(config.nodes()[0].node_id, 1);
            assert_eq!(config.nodes()[1].node_id, 2);
            assert_eq!(config.sorted_ids(), vec![1, 2, 3, 4]);
        }
    }
}
