use std::collections::BTreeSet;

use atn_compact::FoodWebGraph;
use atn_core::rng::RngHandle;
use atn_core::AtnError;

// Grass (1), shrubs (2) and fruit (3) at the bottom; hyrax (13) eats fruit
// only and nothing hunts it.
const SPECIES: &str = "\
species_id,name
1,Grass
2,Shrubs
3,Fruit
10,Gazelle
11,Zebra
12,Buffalo
13,Hyrax
20,Cheetah
21,Lion
30,Vulture
";
const CONSUME: &str = "\
species_id,prey_id
10,1
10,2
10,3
11,1
11,2
11,3
12,1
12,2
12,3
13,3
20,10
20,11
20,20
21,11
21,12
30,20
30,21
";

fn graph() -> FoodWebGraph {
    FoodWebGraph::from_readers(SPECIES.as_bytes(), CONSUME.as_bytes()).expect("graph")
}

#[test]
fn basal_species_have_no_prey() {
    let graph = graph();
    assert_eq!(graph.basal_species(), vec![1, 2, 3]);
    let predators: Vec<u32> = graph.predators(20).collect();
    assert_eq!(predators, vec![30]);
}

#[test]
fn every_consumer_in_a_subweb_has_prey_inside() {
    let graph = graph();
    let basal = graph.basal_species();
    for seed in 0..32 {
        let mut rng = RngHandle::from_seed(seed);
        let web = graph
            .predator_complete_subweb(6, &basal, 2, &mut rng)
            .expect("sub-web");
        assert_eq!(web.len(), 6);
        assert!(web.windows(2).all(|pair| pair[0] < pair[1]));

        let members: BTreeSet<u32> = web.iter().copied().collect();
        let induced = graph.induced(&web);
        for &id in web.iter().filter(|id| !basal.contains(*id)) {
            assert!(
                induced.links.iter().any(|link| link.target == id && link.source != id),
                "seed {seed}: {id} has no prey in {members:?}"
            );
        }
        assert_eq!(web.iter().filter(|id| basal.contains(*id)).count(), 2);
    }
}

#[test]
fn subweb_selection_is_seeded() {
    let graph = graph();
    let basal = graph.basal_species();
    let a = graph.predator_complete_subweb(5, &basal, 1, &mut RngHandle::from_seed(7));
    let b = graph.predator_complete_subweb(5, &basal, 1, &mut RngHandle::from_seed(7));
    assert_eq!(a.expect("first"), b.expect("second"));
}

#[test]
fn unreachable_size_gives_up() {
    let graph = graph();
    let basal = graph.basal_species();
    let err = graph
        .predator_complete_subweb(10, &basal, 2, &mut RngHandle::from_seed(1))
        .expect_err("only nine species are reachable from two seeds");
    assert!(matches!(err, AtnError::Generator(_)));
    assert_eq!(err.info().code, "subweb-exhausted");

    let err = graph
        .predator_complete_subweb(4, &basal, 5, &mut RngHandle::from_seed(1))
        .expect_err("more seeds than size");
    assert_eq!(err.info().code, "subweb-seeds");
}
