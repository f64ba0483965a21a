use atn_core::rng::{derive_substream_seed, RngHandle};
use atn_core::AtnError;
use atn_nodecfg::{decode, SpeciesCatalog};
use atn_vary::{GenContext, GeneratorTable, TemplateSource, CONVERGENCE_TEMPLATES, TEST_TEMPLATE};

fn context(seed: u64, set: u32) -> GenContext<'static> {
    GenContext::new(None, RngHandle::from_seed(derive_substream_seed(seed, u64::from(set))))
}

#[test]
fn table_lists_registered_sets() {
    let ids = GeneratorTable::builtin().ids();
    for expected in [1, 2, 3, 4, 5, 6, 7, 9, 12, 13, 22, 40, 53, 56, 65, 75, 79, 89, 90, 99, 100, 101, 102, 176, 177, 251] {
        assert!(ids.contains(&expected), "missing set {expected}");
    }
    assert!(!ids.contains(&8));
    assert!(!ids.contains(&252));
    assert_eq!(ids.last(), Some(&251));
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn every_literal_template_decodes() {
    for entry in GeneratorTable::builtin().entries() {
        if let TemplateSource::Text { config } = &entry.template {
            decode(config).unwrap_or_else(|err| panic!("set {}: {err}", entry.set));
        }
    }
}

#[test]
fn set_one_starts_with_baseline() {
    let table = GeneratorTable::builtin();
    let configs = table.generate(1, &mut context(0, 1)).expect("set 1");
    let template = decode(TEST_TEMPLATE).expect("template");
    assert_eq!(configs[0], template);
    assert_eq!(configs.len(), 1 + 11 * 20);
}

#[test]
fn pair_set_has_expected_size() {
    let configs = GeneratorTable::builtin()
        .generate(2, &mut context(0, 2))
        .expect("set 2");
    assert_eq!(configs.len(), 6 * 11 * 11);
}

#[test]
fn seeded_random_sets_are_reproducible() {
    let table = GeneratorTable::builtin();
    let a = table.generate(75, &mut context(42, 75)).expect("set 75");
    let b = table.generate(75, &mut context(42, 75)).expect("set 75");
    let c = table.generate(75, &mut context(43, 75)).expect("set 75");
    assert_eq!(a.len(), 1000);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let per_unit = table.generate(13, &mut context(1, 13)).expect("set 13");
    let template = decode(CONVERGENCE_TEMPLATES[1]).expect("template");
    assert_eq!(per_unit.len(), 100);
    for config in &per_unit {
        for (node, original) in config.nodes().iter().zip(template.nodes()) {
            assert_eq!(node.initial_biomass, original.initial_biomass);
            assert_eq!(node.params, original.params);
        }
    }
}

#[test]
fn shuffle_set_keeps_basal_node_first() {
    let configs = GeneratorTable::builtin()
        .generate(42, &mut context(5, 42))
        .expect("set 42");
    assert_eq!(configs.len(), 10);
    assert!(configs.iter().all(|config| config.nodes()[0].node_id == 5));
}

#[test]
fn catalog_sets_need_a_catalog() {
    let table = GeneratorTable::builtin();
    let err = table.generate(22, &mut context(0, 22)).expect_err("no catalog");
    assert!(matches!(err, AtnError::Generator(_)));
    assert_eq!(err.info().code, "catalog-required");

    let csv = "\
species_id,name,node_id_list,organism_type,biomass,carrying_capacity,growth_rate,metabolism
42,Hornbill,42,0,0.205,,,0.637
31,Tree Mouse,31,0,0.0075,,,1.0
5,Grass and Herbs,5,1,1.0,10000,1.0,
85,Leopard,85,0,108.0,,,0.0726
1005,Shrubs,6,1,20.0,5000,2.0,
";
    let catalog = SpeciesCatalog::from_reader(csv.as_bytes()).expect("catalog");
    let mut ctx = GenContext::new(Some(&catalog), RngHandle::from_seed(1));
    let configs = table.generate(22, &mut ctx).expect("set 22");
    assert_eq!(configs.len(), 1000);
    assert_eq!(configs[0].sorted_ids(), vec![5, 6, 31, 42, 85]);
    assert_eq!(configs[0].nodes()[0].initial_biomass, 1000.0);
}

#[test]
fn unknown_set_lists_valid_numbers() {
    let err = GeneratorTable::builtin()
        .generate(8, &mut context(0, 8))
        .expect_err("unknown");
    assert_eq!(err.info().code, "unknown-set");
    let hint = err.info().hint.clone().expect("hint");
    assert!(hint.starts_with("valid set numbers: 1 2 3"));
}

#[test]
fn later_catalog_webs_bind_their_own_species() {
    let table = GeneratorTable::builtin();
    let species = |set: u32| match &table.get(set).expect("registered").template {
        TemplateSource::Catalog { species, .. } => species.clone(),
        TemplateSource::Text { .. } => panic!("set {set} should build from the catalog"),
    };
    assert_eq!(species(102), vec![2, 31, 55, 88, 1001]);
    assert_eq!(species(103), vec![3, 14, 42, 45, 1001]);
    assert_eq!(species(127).len(), 10);
    assert_eq!(species(176).len(), 15);

    for set in [102, 176] {
        let err = table.generate(set, &mut context(0, set)).expect_err("no catalog");
        assert_eq!(err.info().code, "catalog-required");
    }
}

#[test]
fn later_xk_sets_vary_surviving_webs() {
    let table = GeneratorTable::builtin();
    let configs = table.generate(251, &mut context(9, 251)).expect("set 251");
    assert_eq!(configs.len(), 1000);
    assert!(configs.iter().all(|config| config.nodes().len() == 15));

    let ten = table.generate(90, &mut context(9, 90)).expect("set 90");
    assert!(ten.iter().all(|config| config.nodes().len() == 10));
    let five = table.generate(177, &mut context(9, 177)).expect("set 177");
    assert!(five.iter().all(|config| config.nodes().len() == 5));
}
