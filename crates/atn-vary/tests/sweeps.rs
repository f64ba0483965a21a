use atn_nodecfg::{decode, NodeConfig};
use atn_vary::{
    basal_grid, linear_sweep, pair_sweep, single_param_sweep, triple_sweep, PercentRange,
    TEST_TEMPLATE,
};

fn template() -> NodeConfig {
    decode(TEST_TEMPLATE).expect("template")
}

fn differing_fields(a: &NodeConfig, b: &NodeConfig) -> usize {
    a.nodes()
        .iter()
        .zip(b.nodes())
        .map(|(x, y)| {
            let mut diff = 0;
            if x.initial_biomass != y.initial_biomass {
                diff += 1;
            }
            if x.per_unit_biomass != y.per_unit_biomass {
                diff += 1;
            }
            diff + x
                .params
                .iter()
                .filter(|(name, value)| y.params.get(*name) != Some(value))
                .count()
        })
        .sum()
}

#[test]
fn single_sweep_with_step_fifty_yields_two_variants_per_attribute() {
    let single = decode("1,[14],1751.0,20.0,1,X=0.201,0").expect("single node");
    let range = PercentRange::new(50, 150, 50).expect("range");
    let variants = single_param_sweep(&single, &range);

    // initialBiomass and X, each at 50% and 150%.
    assert_eq!(variants.len(), 4);
    assert_eq!(variants[0].nodes()[0].initial_biomass, 875.5);
    assert_eq!(variants[1].nodes()[0].initial_biomass, 2626.5);
    assert_eq!(variants[2].nodes()[0].params["X"], 0.201 * 50.0 / 100.0);
    assert_eq!(variants[3].nodes()[0].params["X"], 0.201 * 150.0 / 100.0);
    for variant in &variants {
        assert_eq!(variant.nodes()[0].per_unit_biomass, 20.0);
        assert_eq!(differing_fields(variant, &single), 1);
    }
}

#[test]
fn single_sweep_touches_exactly_one_field_per_variant() {
    let base = template();
    let range = PercentRange::new(50, 150, 5).expect("range");
    let variants = single_param_sweep(&base, &range);

    // 5 initialBiomass + K + R + 4 X = 11 attributes, 20 percentages each.
    assert_eq!(variants.len(), 11 * 20);
    for variant in &variants {
        assert_eq!(variant.sorted_ids(), base.sorted_ids());
        assert_eq!(differing_fields(variant, &base), 1);
    }
}

#[test]
fn pair_sweep_count_is_pairs_times_steps_squared() {
    let base = template();
    let range = PercentRange::new(50, 150, 10).expect("range");
    let variants = pair_sweep(&base, "X", &range, 0);

    let k = 4;
    let s = range.steps();
    assert_eq!(variants.len(), k * (k - 1) / 2 * s * s);

    let none = pair_sweep(&base, "K", &range, 0);
    assert!(none.is_empty());
}

#[test]
fn triple_sweep_never_repeats_a_pair_anchor() {
    let base = template();
    let range = PercentRange::new(50, 150, 50).expect("range");
    let variants = triple_sweep(&base, "X", &range);

    // Anchors at X-nodes 14 and 31 (the last two positions cannot anchor).
    // Anchor 14 pairs among {31, 42, 70}: 3 pairs; anchor 31 among {42, 70}: 1.
    let s = range.steps();
    assert_eq!(variants.len(), s * 3 * s * s + s * s * s);
    let anchored = &variants[0];
    assert!((anchored.nodes()[1].params["X"] - (0.201 + 0.5)).abs() < 1e-12);
}

#[test]
fn basal_grid_requires_k_and_r() {
    let range = PercentRange::new(50, 150, 50).expect("range");
    let grid = basal_grid(&template(), &range).expect("grid");
    assert_eq!(grid.len(), 3 * 3 * 4 * 3);

    let no_r = decode("1,[5],1.0,1.0,1,K=2000.0,0").expect("no r");
    assert!(basal_grid(&no_r, &range).is_err());
}

#[test]
fn linear_sweep_covers_both_ends() {
    let base = template();
    let variants = linear_sweep(&base, 31, "X", 5.0, 100.0, 20).expect("sweep");
    assert_eq!(variants.len(), 20);
    let first = variants[0].node(31).expect("node").params["X"];
    let last = variants[19].node(31).expect("node").params["X"];
    assert!((first - 0.05).abs() < 1e-12);
    assert!((last - 1.0).abs() < 1e-12);

    assert!(linear_sweep(&base, 99, "X", 5.0, 100.0, 20).is_err());
    assert!(linear_sweep(&base, 14, "K", 5.0, 100.0, 20).is_err());
}
