//! Static table of numbered generator sets.
//!
//! Every slot owns its template and recipe outright; the table is assembled
//! once and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use atn_core::errors::{AtnError, ErrorInfo};
use atn_core::rng::RngHandle;
use atn_nodecfg::{decode, NodeConfig, SpeciesCatalog, DEFAULT_BIOMASS, INITIAL_BIOMASS, PER_UNIT_BIOMASS};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::random::{bounded_random, linear_sweep};
use crate::shuffle::order_shuffles;
use crate::sweep::{basal_grid, pair_sweep, single_param_sweep, triple_sweep, PercentRange};
use crate::webs::{
    CATALOG_WEBS, CATALOG_WEBS_START, CATALOG_XK_START, CATALOG_XK_TEMPLATES, XK_WEBS,
};

/// Target ecosystems of the Convergence game.
pub const CONVERGENCE_TEMPLATES: [&str; 5] = [
    "5,[5],2000.0,1.0,1,K=10000.000,0,[14],1751.0,20.0,1,X=0.201,0,[31],1415.0,0.0075,1,X=1.000,0,[42],240.0,0.205,1,X=0.637,0,[70],2494.0,13.0,1,X=0.155,0",
    "6,[5],2000,1.000,1,K=8000.000,0,[14],1051,20.000,1,X=0.200,0,[31],29,0.008,1,X=0.950,0,[33],2476,0.400,1,X=0.370,0,[56],738,6.250,1,X=0.180,0,[59],674,3.350,1,X=0.220,0",
    "11,[2],433,528.000,2,R=2.000,K=3000.000,0,[3],433,528.000,1,K=3000.000,0,[4],433,528.000,1,K=3000.000,0,[5],2000,1.000,1,K=4000.000,0,[7],668,816.000,1,K=3000.000,0,[49],1308,0.355,1,X=0.870,0,[55],576,0.213,1,X=0.990,0,[61],601,54.000,1,X=0.010,0,[74],725,50.000,1,X=0.100,0,[82],700,50.000,1,X=0.750,0,[83],300,103.000,1,X=0.210,0",
    "15,[1],400,1.000,1,K=2000.000,0,[2],1056,20.000,1,K=3000.000,0,[5],2000,1.000,1,K=7000.000,0,[7],1322,40.000,1,K=3000.000,0,[9],1913,0.071,1,X=0.310,0,[12],300,1.000,0,0,[26],1164,0.011,1,X=1.000,0,[45],916,0.425,1,X=0.400,0,[49],1015,0.355,1,X=0.300,0,[55],1849,0.310,1,X=0.480,0,[67],1434,9.600,1,X=0.340,0,[71],564,4.990,1,X=0.270,0,[75],568,1.590,1,X=0.010,0,[80],575,41.500,1,X=0.220,0,[87],240,112.000,1,X=0.100,0",
    "17,[1],2000,1000.000,2,K=3000.000,X=0.052,0,[2],657,528.000,1,K=3000.000,0,[3],657,528.000,1,K=3000.000,0,[4],657,528.000,1,K=3000.000,0,[5],2000,1.000,1,K=5000.000,0,[7],1015,816.000,1,K=3000.000,0,[19],211,20.000,1,X=0.100,0,[21],400,0.200,1,X=0.200,0,[26],496,0.011,1,X=0.910,0,[29],964,0.035,1,X=0.680,0,[31],700,0.008,1,X=1.000,0,[35],1000,250.000,1,X=0.070,0,[36],1322,3.500,1,X=0.010,0,[39],1178,0.085,1,X=0.540,0,[56],1281,6.250,1,X=0.090,0,[66],203,10.200,1,X=0.160,0,[80],719,41.500,1,X=0.120,0",
];

/// The five-species Convergence web with the grass growth rate made explicit.
pub const TEST_TEMPLATE: &str = "5,[5],2000.0,1.0,2,K=10000.0,R=1.0,0,[14],1751.0,20.0,1,X=0.201,0,[31],1415.0,0.0075,1,X=1.0,0,[42],240.0,0.205,1,X=0.637,0,[70],2494.0,13.0,1,X=0.155,0";

const SET_51_TEMPLATE: &str = "5,[5],1555.63,1.0,1,K=11091.4,0,[14],1071.01,20.0,1,X=0.254849,0,[31],1844.15,0.0075,1,X=0.517565,0,[42],133.96,0.205,1,X=0.726891,0,[70],2110.84,13.0,1,X=0.194138,0";
const SET_52_TEMPLATE: &str = "11,[2],645.546,528.0,2,K=1660.64,R=1.0,0,[3],599.66,528.0,1,K=4441.54,0,[4],595.662,528.0,1,K=2754.94,0,[5],1426.75,1.0,1,K=2084.45,0,[7],639.183,816.0,1,K=4015.18,0,[49],1511.23,0.355,1,X=1.0,0,[55],739.104,0.213,1,X=0.496037,0,[61],392.821,54.0,1,X=0.00999599,0,[74],924.06,50.0,1,X=0.115569,0,[82],525.34,50.0,1,X=0.376351,0,[83],233.019,103.0,1,X=0.180538,0";

const XK_TEMPLATES: [(u32, &str); 5] = [
    (75, "5,[2],408.544,20.0,2,K=10000.0,R=1.0,0,[15],388.199,0.071,1,X=0.00412167,0,[17],256.225,0.17,1,X=0.00331341,0,[55],866.213,0.213,1,X=0.344497,0,[80],736.208,41.5,1,X=0.0922079,0"),
    (76, "5,[5],541.624,40.0,2,K=10000.0,R=1.0,0,[57],460.599,4.2,1,X=0.163481,0,[61],274.932,54.0,1,X=0.00361033,0,[67],444.404,9.6,1,X=0.132957,0,[70],304.869,13.0,1,X=0.123252,0"),
    (77, "5,[4],1090.86,20.0,2,K=10000.0,R=1.0,0,[26],724.713,0.011,1,X=0.722657,0,[40],640.404,0.325,1,X=0.309963,0,[49],1242.61,0.355,1,X=0.303196,0,[73],396.618,17.0,1,X=0.115257,0"),
    (78, "5,[5],262.045,40.0,2,K=10000.0,R=1.0,0,[14],1076.64,20.0,1,X=0.00100607,0,[67],1204.03,9.6,1,X=0.132957,0,[85],492.77,108.0,1,X=0.072598,0,[94],530.41,1550.0,1,X=0.037299,0"),
    (79, "5,[4],756.561,20.0,2,K=10000.0,R=1.0,0,[74],667.793,23.8,1,X=0.105959,0,[82],1521.54,50.0,1,X=0.0880112,0,[86],1060.07,156.0,1,X=0.0662215,0,[89],1440.2,470.0,1,X=0.0502639,0"),
];

const INITIAL_BIOMASS_WEBS: [(u32, &[u32]); 24] = [
    (57, &[8, 4, 1002, 36, 14]),
    (58, &[65, 50, 1003, 55, 33]),
    (59, &[1002, 36, 14, 46, 31]),
    (60, &[66, 83, 82, 53, 71, 88, 1001, 7, 1004, 1005]),
    (61, &[88, 2, 4, 21, 87, 8, 1001, 1002, 1003, 14]),
    (62, &[49, 83, 53, 28, 1001, 42, 1003, 1004, 85, 44]),
    (63, &[80, 66, 1003, 4, 31]),
    (64, &[80, 49, 82, 50, 69, 71, 88, 1001, 1003, 1005]),
    (70, &[15, 17, 55, 80, 1002]),
    (71, &[2, 5, 57, 61, 1005]),
    (72, &[26, 40, 49, 73, 1004]),
    (73, &[5, 14, 67, 85, 1005]),
    (74, &[53, 74, 82, 86, 1004]),
    (80, &[14, 18, 31, 32, 49, 57, 63, 69, 1002, 1004]),
    (81, &[2, 21, 43, 49, 50, 53, 69, 86, 1003, 1004]),
    (82, &[3, 15, 27, 33, 38, 53, 69, 85, 1002, 1004]),
    (83, &[31, 44, 45, 47, 49, 50, 66, 75, 1001, 1005]),
    (84, &[53, 55, 59, 71, 74, 86, 87, 88, 1004, 1005]),
    (85, &[11, 31, 39, 43, 49, 51, 66, 69, 72, 80, 82, 88, 1001, 1003, 1004]),
    (86, &[15, 16, 22, 24, 26, 29, 31, 49, 53, 73, 74, 80, 1002, 1004, 1005]),
    (87, &[16, 30, 31, 38, 49, 50, 53, 57, 66, 67, 83, 86, 1001, 1003, 1005]),
    (88, &[2, 3, 15, 18, 22, 34, 42, 49, 50, 52, 57, 67, 1002, 1004, 1005]),
    (89, &[4, 5, 27, 45, 53, 59, 61, 63, 67, 80, 82, 86, 1001, 1004, 1005]),
    (100, &[2, 3, 42, 52, 53, 69, 75, 86, 1001, 1005]),
];

const ALL_ATTRIBUTES: [&str; 4] = [INITIAL_BIOMASS, "K", "R", "X"];

/// Where a slot's template comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateSource {
    /// Literal node-config text.
    Text { config: &'static str },
    /// Base config assembled from the species catalog.
    Catalog { species: Vec<u32>, sort: bool },
}

/// The perturbation applied to a slot's template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recipe {
    /// Template first, then the single-parameter sweep.
    SingleSweep { range: PercentRange },
    PairSweep { param: &'static str, range: PercentRange },
    TripleSweep { param: &'static str, range: PercentRange },
    BasalGrid { range: PercentRange },
    Random {
        params: Vec<&'static str>,
        min_percent: f64,
        max_percent: f64,
        count: usize,
    },
    LinearSweep {
        node_id: u32,
        param: &'static str,
        min_percent: f64,
        max_percent: f64,
        count: usize,
    },
    Shuffle { prefix: usize, count: usize },
    /// The template alone.
    BaseOnly,
}

impl Recipe {
    /// Short name recorded in set descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Recipe::SingleSweep { .. } => "single-sweep",
            Recipe::PairSweep { .. } => "pair-sweep",
            Recipe::TripleSweep { .. } => "triple-sweep",
            Recipe::BasalGrid { .. } => "basal-grid",
            Recipe::Random { .. } => "bounded-random",
            Recipe::LinearSweep { .. } => "linear-sweep",
            Recipe::Shuffle { .. } => "order-shuffle",
            Recipe::BaseOnly => "base-config",
        }
    }
}

/// One numbered slot of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorEntry {
    pub set: u32,
    pub description: &'static str,
    pub template: TemplateSource,
    pub recipe: Recipe,
}

impl GeneratorEntry {
    /// Generator arguments as recorded in a set descriptor.
    pub fn args(&self) -> Value {
        json!({
            "set": self.set,
            "template": self.template,
            "recipe": self.recipe,
        })
    }
}

/// Inputs shared by every generator invocation.
pub struct GenContext<'a> {
    pub catalog: Option<&'a SpeciesCatalog>,
    pub rng: RngHandle,
}

impl<'a> GenContext<'a> {
    pub fn new(catalog: Option<&'a SpeciesCatalog>, rng: RngHandle) -> Self {
        Self { catalog, rng }
    }
}

/// Integer-keyed generator table.
#[derive(Debug, Clone, Default)]
pub struct GeneratorTable {
    entries: BTreeMap<u32, GeneratorEntry>,
}

fn range(min: u32, max: u32, step: u32) -> PercentRange {
    PercentRange { min, max, step }
}

fn text(config: &'static str) -> TemplateSource {
    TemplateSource::Text { config }
}

fn catalog(species: &[u32]) -> TemplateSource {
    TemplateSource::Catalog {
        species: species.to_vec(),
        sort: true,
    }
}

fn random(params: &[&'static str], min_percent: f64, max_percent: f64, count: usize) -> Recipe {
    Recipe::Random {
        params: params.to_vec(),
        min_percent,
        max_percent,
        count,
    }
}

fn ids(list: &str) -> Vec<u32> {
    list.split_whitespace()
        .filter_map(|raw| raw.parse().ok())
        .collect()
}

impl GeneratorTable {
    /// The process-wide table, assembled on first use.
    pub fn builtin() -> &'static GeneratorTable {
        static TABLE: OnceLock<GeneratorTable> = OnceLock::new();
        TABLE.get_or_init(GeneratorTable::assemble)
    }

    fn insert(&mut self, set: u32, description: &'static str, template: TemplateSource, recipe: Recipe) {
        self.entries.insert(
            set,
            GeneratorEntry {
                set,
                description,
                template,
                recipe,
            },
        );
    }

    fn assemble() -> GeneratorTable {
        let mut table = GeneratorTable::default();
        let [conv_five, conv_six, eco3, conv_fifteen, conv_seventeen] = CONVERGENCE_TEMPLATES;

        table.insert(1, "single-parameter sweep of the five-species web", text(TEST_TEMPLATE), Recipe::SingleSweep { range: range(50, 150, 5) });
        table.insert(2, "pairwise X sweep of the five-species web", text(TEST_TEMPLATE), Recipe::PairSweep { param: "X", range: range(50, 150, 10) });
        table.insert(3, "triple X sweep of the five-species web", text(TEST_TEMPLATE), Recipe::TripleSweep { param: "X", range: range(50, 150, 10) });
        table.insert(4, "grass K/R grid with consumer X sweeps", text(TEST_TEMPLATE), Recipe::BasalGrid { range: range(50, 150, 10) });
        table.insert(5, "single-parameter sweep of Convergence ecosystem 3", text(eco3), Recipe::SingleSweep { range: range(50, 150, 5) });
        table.insert(6, "pairwise X sweep of Convergence ecosystem 3", text(eco3), Recipe::PairSweep { param: "X", range: range(50, 150, 10) });
        table.insert(7, "triple X sweep of Convergence ecosystem 3", text(eco3), Recipe::TripleSweep { param: "X", range: range(50, 150, 10) });
        table.insert(9, "single-parameter sweep of Convergence ecosystem 2", text(conv_six), Recipe::SingleSweep { range: range(50, 150, 5) });
        table.insert(10, "single-parameter sweep of Convergence ecosystem 4", text(conv_fifteen), Recipe::SingleSweep { range: range(50, 150, 5) });
        table.insert(11, "single-parameter sweep of Convergence ecosystem 5", text(conv_seventeen), Recipe::SingleSweep { range: range(50, 150, 5) });
        table.insert(12, "random variation of Convergence ecosystem 2", text(conv_six), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(13, "random per-unit biomass of Convergence ecosystem 2", text(conv_six), random(&[PER_UNIT_BIOMASS], 50.0, 150.0, 100));

        let seven_a = ids("9 19 32 57 61 64 89");
        table.insert(16, "initial biomass of a generated seven-species web", catalog(&seven_a), random(&[INITIAL_BIOMASS], 20.0, 200.0, 1000));
        table.insert(17, "wider initial biomass of a generated seven-species web", catalog(&seven_a), random(&[INITIAL_BIOMASS], 10.0, 300.0, 2000));
        table.insert(18, "initial biomass of a generated seven-species web", catalog(&ids("8 9 31 52 55 1002 1005")), random(&[INITIAL_BIOMASS], 10.0, 300.0, 2000));
        table.insert(19, "initial biomass of a generated five-species web", catalog(&ids("9 10 12 25 89")), random(&[INITIAL_BIOMASS], 10.0, 300.0, 2000));
        table.insert(20, "initial biomass of a generated five-species web", catalog(&ids("15 17 26 77 1002")), random(&[INITIAL_BIOMASS], 10.0, 300.0, 2000));
        table.insert(21, "all attributes of a generated five-species web", catalog(&ids("15 17 26 77 1002")), random(&ALL_ATTRIBUTES, 33.0, 300.0, 3000));

        let generated_webs: [(u32, &str); 13] = [
            (22, "42 31 5 85 1005"),
            (23, "72 33 1003 28 51"),
            (24, "1001 87 75 14 33"),
            (25, "16 82 83 1004 86"),
            (26, "65 66 51 85 6 63 74 1003 1004 45 31"),
            (27, "34 22 70 28 40 9 47 1004 1005 14 45"),
            (28, "83 85 6 39 8 44 1002 55 1004 74 31"),
            (29, "64 16 26 69 87 1001 42 1003 45 31"),
            (30, "48 33 82 52 25 17 1001 1003 13 46"),
            (31, "48 66 27 4 85 1001 10 11 1004 45"),
            (32, "2 42 5 72 83 1002 1003 74 14 53"),
            (33, "2 42 5 72 83 1002 1003 74 14 53"),
            (34, "85 70 71 40 41 26 59 1004 1005"),
        ];
        for (set, species) in generated_webs {
            table.insert(set, "all attributes of a generated web", catalog(&ids(species)), random(&ALL_ATTRIBUTES, 50.0, 200.0, 1000));
        }
        let small_runs: [(u32, &str); 5] = [
            (35, "16 21 38 55 1002 1003 28 46 31"),
            (36, "16 17 53 1001 1003 77 14 21"),
            (37, "16 17 53 1001 1003 77 14 21"),
            (38, "80 1 11 69 27 71 1001 1003"),
            (39, "80 49 55 8 1002 15"),
        ];
        for (set, species) in small_runs {
            table.insert(set, "all attributes of a generated web, short run", catalog(&ids(species)), random(&ALL_ATTRIBUTES, 50.0, 200.0, 100));
        }

        let ten_species = ids("2 42 5 72 83 1002 1003 74 14 53");
        table.insert(40, "node order shuffles of a ten-species web", catalog(&ten_species), Recipe::Shuffle { prefix: 0, count: 10 });
        table.insert(41, "consumer order shuffles of a ten-species web", catalog(&ten_species), Recipe::Shuffle { prefix: 2, count: 10 });
        table.insert(42, "consumer order shuffles of Convergence ecosystem 1", text(conv_five), Recipe::Shuffle { prefix: 1, count: 10 });
        table.insert(
            43,
            "all attributes of a topologically ordered ten-species web",
            TemplateSource::Catalog { species: ids("1003 1001 31 45 87 69 16 26 42 64"), sort: false },
            random(&ALL_ATTRIBUTES, 50.0, 200.0, 1000),
        );
        let five_species = ids("72 33 1003 28 51");
        table.insert(44, "linear initial biomass sweep of node 51", catalog(&five_species), Recipe::LinearSweep { node_id: 51, param: INITIAL_BIOMASS, min_percent: 5.0, max_percent: 100.0, count: 1000 });
        table.insert(45, "linear X sweep of node 51", catalog(&five_species), Recipe::LinearSweep { node_id: 51, param: "X", min_percent: 5.0, max_percent: 100.0, count: 1000 });
        table.insert(46, "all attributes of a five-species web", catalog(&[1005, 14, 31, 42, 2]), random(&ALL_ATTRIBUTES, 50.0, 200.0, 1000));
        table.insert(47, "random variation of Convergence ecosystem 1", text(conv_five), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(48, "random variation of Convergence ecosystem 2", text(conv_six), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(49, "all attributes of a six-species web", catalog(&ids("80 51 52 71 1001 75")), random(&ALL_ATTRIBUTES, 50.0, 200.0, 100));
        table.insert(50, "random variation of Convergence ecosystem 3", text(eco3), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(51, "K and X around a set 47 trial", text(SET_51_TEMPLATE), random(&["K", "X"], 50.0, 150.0, 100));
        table.insert(52, "K and X around a set 50 trial", text(SET_52_TEMPLATE), random(&["K", "X"], 50.0, 150.0, 100));
        table.insert(53, "full order shuffles of Convergence ecosystem 1", text(conv_five), Recipe::Shuffle { prefix: 0, count: 10 });

        let web: [u32; 5] = [73, 1003, 61, 55, 33];
        table.insert(54, "initial biomass of a five-species web", catalog(&web), random(&[INITIAL_BIOMASS], 25.0, 175.0, 1000));
        table.insert(55, "linear R sweep of node 3", catalog(&web), Recipe::LinearSweep { node_id: 3, param: "R", min_percent: 10.0, max_percent: 300.0, count: 100 });
        table.insert(56, "linear initial biomass sweep of node 3", catalog(&web), Recipe::LinearSweep { node_id: 3, param: INITIAL_BIOMASS, min_percent: 50.0, max_percent: 500.0, count: 100 });

        for (set, species) in INITIAL_BIOMASS_WEBS {
            table.insert(set, "initial biomass of a catalog web", catalog(species), random(&[INITIAL_BIOMASS], 25.0, 175.0, 1000));
        }
        table.insert(65, "base config of a five-species web", catalog(&[53, 73, 74, 80, 1005]), Recipe::BaseOnly);
        table.insert(66, "base config of a five-species web", catalog(&[47, 49, 83, 86, 1003]), Recipe::BaseOnly);
        table.insert(67, "all attributes of a five-species web", catalog(&[39, 80, 31, 72, 1003]), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(68, "all attributes of a ten-species web", catalog(&[49, 4, 18, 50, 36, 9, 85, 14, 8, 1002]), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));
        table.insert(69, "all attributes of a ten-species web", catalog(&[3, 49, 41, 86, 47, 61, 83, 33, 1004, 1005]), random(&ALL_ATTRIBUTES, 50.0, 150.0, 1000));

        for (set, config) in XK_TEMPLATES {
            table.insert(set, "X and K of a surviving five-species web", text(config), random(&["X", "K"], 50.0, 150.0, 1000));
        }
        for (set, config) in XK_WEBS {
            table.insert(set, "X and K of a surviving catalog web", text(config), random(&["X", "K"], 50.0, 150.0, 1000));
        }
        for (set, species) in (CATALOG_WEBS_START..).zip(CATALOG_WEBS) {
            table.insert(set, "initial biomass of a catalog web", catalog(species), random(&[INITIAL_BIOMASS], 25.0, 175.0, 1000));
        }
        for (set, config) in (CATALOG_XK_START..).zip(CATALOG_XK_TEMPLATES) {
            table.insert(set, "X and K of a surviving catalog web", text(config), random(&["X", "K"], 50.0, 150.0, 1000));
        }
        table
    }

    pub fn get(&self, set: u32) -> Option<&GeneratorEntry> {
        self.entries.get(&set)
    }

    /// Registered set numbers in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GeneratorEntry> {
        self.entries.values()
    }

    /// Runs the generator registered under `set`.
    pub fn generate(&self, set: u32, ctx: &mut GenContext<'_>) -> Result<Vec<NodeConfig>, AtnError> {
        let entry = self.get(set).ok_or_else(|| {
            let valid = self
                .ids()
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            AtnError::Generator(
                ErrorInfo::new("unknown-set", "no generator is registered for this set")
                    .with_context("set", set.to_string())
                    .with_hint(format!("valid set numbers: {valid}")),
            )
        })?;
        debug!(set, recipe = entry.recipe.name(), "running generator");
        let template = resolve_template(entry, ctx.catalog)?;
        run_recipe(&entry.recipe, &template, &mut ctx.rng)
    }
}

fn resolve_template(entry: &GeneratorEntry, catalog: Option<&SpeciesCatalog>) -> Result<NodeConfig, AtnError> {
    match &entry.template {
        TemplateSource::Text { config } => decode(config).map_err(AtnError::from),
        TemplateSource::Catalog { species, sort } => {
            let catalog = catalog.ok_or_else(|| {
                AtnError::Generator(
                    ErrorInfo::new("catalog-required", "this set builds its template from the species catalog")
                        .with_context("set", entry.set.to_string())
                        .with_hint("pass --catalog <species-table.csv>"),
                )
            })?;
            catalog.base_config(species, DEFAULT_BIOMASS, DEFAULT_BIOMASS, *sort)
        }
    }
}

/// Applies a recipe to an already resolved template.
pub fn run_recipe(recipe: &Recipe, template: &NodeConfig, rng: &mut RngHandle) -> Result<Vec<NodeConfig>, AtnError> {
    let configs = match recipe {
        Recipe::SingleSweep { range } => {
            let range = PercentRange::new(range.min, range.max, range.step)?;
            let mut out = vec![template.clone()];
            out.extend(single_param_sweep(template, &range));
            out
        }
        Recipe::PairSweep { param, range } => {
            let range = PercentRange::new(range.min, range.max, range.step)?;
            pair_sweep(template, param, &range, 0)
        }
        Recipe::TripleSweep { param, range } => {
            let range = PercentRange::new(range.min, range.max, range.step)?;
            triple_sweep(template, param, &range)
        }
        Recipe::BasalGrid { range } => {
            let range = PercentRange::new(range.min, range.max, range.step)?;
            basal_grid(template, &range)?
        }
        Recipe::Random {
            params,
            min_percent,
            max_percent,
            count,
        } => bounded_random(template, params, *min_percent, *max_percent, *count, rng),
        Recipe::LinearSweep {
            node_id,
            param,
            min_percent,
            max_percent,
            count,
        } => linear_sweep(template, *node_id, param, *min_percent, *max_percent, *count)?,
        Recipe::Shuffle { prefix, count } => order_shuffles(template, *prefix, *count, rng),
        Recipe::BaseOnly => vec![template.clone()],
    };
    Ok(configs)
}
