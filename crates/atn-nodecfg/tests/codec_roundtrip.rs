use atn_nodecfg::{decode, encode, Node, NodeConfig};
use proptest::prelude::*;

/// Values with at most six significant digits survive the text encoding
/// exactly.
fn six_digit_value() -> impl Strategy<Value = f64> {
    (1u32..=999_999, -6i32..=6).prop_map(|(mantissa, exponent)| {
        format!("{mantissa}e{exponent}")
            .parse::<f64>()
            .expect("finite literal")
    })
}

fn node_strategy() -> impl Strategy<Value = Node> {
    (
        six_digit_value(),
        six_digit_value(),
        proptest::option::of(six_digit_value()),
        proptest::option::of(six_digit_value()),
        proptest::option::of(six_digit_value()),
    )
        .prop_map(|(initial, per_unit, k, r, x)| {
            let mut node = Node::new(0, initial, per_unit);
            for (name, value) in [("K", k), ("R", r), ("X", x)] {
                if let Some(value) = value {
                    node.set_attribute(name, value);
                }
            }
            node
        })
}

fn config_strategy() -> impl Strategy<Value = NodeConfig> {
    (
        proptest::collection::btree_set(1u32..2000, 1..12),
        proptest::collection::vec(node_strategy(), 12),
    )
        .prop_map(|(ids, templates)| {
            let nodes = ids
                .into_iter()
                .zip(templates)
                .map(|(id, mut node)| {
                    node.node_id = id;
                    node
                })
                .collect();
            NodeConfig::new(nodes).expect("ids are unique")
        })
}

proptest! {
    #[test]
    fn decode_inverts_encode(config in config_strategy()) {
        let text = encode(&config);
        let decoded = decode(&text).expect("decode encoded text");
        prop_assert_eq!(decoded, config);
    }

    #[test]
    fn every_node_ends_with_zero_link_count(config in config_strategy()) {
        let text = encode(&config);
        let fields: Vec<&str> = text.split(',').collect();
        let mut pos = 1;
        for node in config.nodes() {
            pos += 3;
            let param_count: usize = fields[pos].parse().expect("param count");
            prop_assert_eq!(param_count, node.params.len());
            pos += 1 + param_count;
            prop_assert_eq!(fields[pos], "0");
            pos += 1;
        }
        prop_assert_eq!(pos, fields.len());
    }
}

#[test]
fn two_node_structure_round_trips() {
    let config = NodeConfig::new(vec![
        Node::new(5, 2000.0, 1.0).with_param("K", 10000.0),
        Node::new(14, 1751.0, 20.0).with_param("X", 0.201),
    ])
    .expect("config");

    let text = encode(&config);
    assert_eq!(text, "2,[5],2000.0,1.0,1,K=10000.0,0,[14],1751.0,20.0,1,X=0.201,0");
    assert_eq!(decode(&text).expect("decode"), config);
}

#[test]
fn decoded_text_re_encodes_identically_after_normalisation() {
    let raw = "2,[2],433,528.000,2,R=2.000,K=3000.000,0,[49],1308,0.355,1,X=0.870,0";
    let config = decode(raw).expect("decode");
    let normalised = encode(&config);
    assert_eq!(
        normalised,
        "2,[2],433.0,528.0,2,K=3000.0,R=2.0,0,[49],1308.0,0.355,1,X=0.87,0"
    );
    assert_eq!(encode(&decode(&normalised).expect("decode")), normalised);
}
