//! Generators producing families of node configurations from a template:
//! systematic sweeps, bounded random and linear variation, order shuffles and
//! Gaussian-mixture sampling, plus the numbered generator table.

mod mixture;
mod random;
mod shuffle;
mod sweep;
mod table;
mod webs;
mod weka;

pub use mixture::{Gaussian, Mixture, MixtureComponent};
pub use random::{bounded_random, linear_sweep};
pub use shuffle::order_shuffles;
pub use sweep::{basal_grid, pair_sweep, single_param_sweep, triple_sweep, PercentRange};
pub use table::{
    run_recipe, GenContext, GeneratorEntry, GeneratorTable, Recipe, TemplateSource,
    CONVERGENCE_TEMPLATES, TEST_TEMPLATE,
};
pub use weka::{parse_attribute_blocks, parse_report, parse_report_file};
