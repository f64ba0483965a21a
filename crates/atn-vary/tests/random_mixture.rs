use std::collections::BTreeMap;

use atn_core::rng::RngHandle;
use atn_nodecfg::{decode, registered_range, NodeConfig};
use atn_vary::{bounded_random, order_shuffles, Gaussian, Mixture, MixtureComponent, TEST_TEMPLATE};

fn template() -> NodeConfig {
    decode(TEST_TEMPLATE).expect("template")
}

#[test]
fn unit_ratio_reproduces_template() {
    let base = template();
    let mut rng = RngHandle::from_seed(11);
    let trials = bounded_random(&base, &["initialBiomass", "K", "R", "X"], 100.0, 100.0, 25, &mut rng);
    assert_eq!(trials.len(), 25);
    assert!(trials.iter().all(|trial| *trial == base));
}

#[test]
fn random_values_are_clipped_and_reproducible() {
    let base = template();
    let params = ["initialBiomass", "K", "R", "X"];
    let mut rng_a = RngHandle::from_seed(3);
    let mut rng_b = RngHandle::from_seed(3);
    let a = bounded_random(&base, &params, 50.0, 400.0, 200, &mut rng_a);
    let b = bounded_random(&base, &params, 50.0, 400.0, 200, &mut rng_b);
    assert_eq!(a, b);
    assert_eq!(a[0], base);

    for trial in &a[1..] {
        for node in trial.nodes() {
            for name in params {
                if let (Some(value), Some(range)) = (node.attribute(name), registered_range(name)) {
                    assert!(range.contains(value), "{name}={value} escaped {range:?}");
                }
            }
            let original = base.node(node.node_id).expect("node");
            assert_eq!(node.per_unit_biomass, original.per_unit_biomass);
        }
    }
    let clipped_x = a[1..]
        .iter()
        .filter(|trial| trial.node(31).expect("node").params["X"] == 1.0)
        .count();
    assert!(clipped_x > 0);
}

#[test]
fn shuffles_keep_composition() {
    let base = template();
    let mut rng = RngHandle::from_seed(9);
    let out = order_shuffles(&base, 1, 10, &mut rng);
    assert_eq!(out[0], base);
    assert!(out.iter().all(|config| config.sorted_ids() == base.sorted_ids()));
    assert!(out.iter().all(|config| config.nodes()[0].node_id == 5));
}

fn two_component_mixture(priors: [f64; 2]) -> Mixture {
    let component = |prior: f64, mean: f64| {
        let mut nodes = BTreeMap::new();
        for id in [5u32, 14, 31, 42, 70] {
            let mut attributes = BTreeMap::new();
            attributes.insert(
                "initialBiomass".to_string(),
                Gaussian { mean, std_dev: 1.0 },
            );
            nodes.insert(id, attributes);
        }
        MixtureComponent { prior, nodes }
    };
    Mixture::new(vec![component(priors[0], 100.0), component(priors[1], 900.0)])
        .expect("mixture")
}

#[test]
fn mixture_selection_frequency_tracks_priors() {
    let mixture = two_component_mixture([0.35, 0.65]);
    let base = template();
    let mut rng = RngHandle::from_seed(2024);
    let draws = mixture.sample_tagged(&base, 20_000, &mut rng).expect("sample");

    let first = draws.iter().filter(|(index, _)| *index == 0).count();
    let frequency = first as f64 / draws.len() as f64;
    assert!((frequency - 0.35).abs() < 0.02, "frequency {frequency}");

    for (index, config) in draws.iter().take(200) {
        let biomass = config.node(14).expect("node").initial_biomass;
        let mean = if *index == 0 { 100.0 } else { 900.0 };
        assert!((biomass - mean).abs() < 10.0);
        assert_eq!(config.node(14).expect("node").params["X"], 0.201);
    }
}

#[test]
fn unnormalised_priors_are_scaled() {
    let mixture = two_component_mixture([1.0, 3.0]);
    let mut rng = RngHandle::from_seed(1);
    let picks: Vec<usize> = (0..20_000).map(|_| mixture.choose_component(&mut rng)).collect();
    let first = picks.iter().filter(|index| **index == 0).count() as f64 / picks.len() as f64;
    assert!((first - 0.25).abs() < 0.02);

    let zero_first = two_component_mixture([0.0, 1.0]);
    assert!((0..1000).all(|_| zero_first.choose_component(&mut rng) == 1));
}

#[test]
fn invalid_mixtures_are_rejected() {
    assert!(Mixture::new(Vec::new()).is_err());
    assert!(Mixture::new(vec![MixtureComponent { prior: -1.0, nodes: BTreeMap::new() }]).is_err());
    assert!(Mixture::new(vec![MixtureComponent { prior: 0.0, nodes: BTreeMap::new() }]).is_err());

    let empty_nodes = Mixture::new(vec![MixtureComponent { prior: 1.0, nodes: BTreeMap::new() }])
        .expect("mixture");
    let mut rng = RngHandle::from_seed(0);
    let err = empty_nodes.sample(&template(), 1, &mut rng).expect_err("missing node");
    assert_eq!(err.info().code, "mixture-node");
}
