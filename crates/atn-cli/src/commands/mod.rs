use std::error::Error;
use std::path::Path;

use atn_pipe::CampaignConfig;

pub mod compact;
pub mod generate;
pub mod mixture;
pub mod sequence;
pub mod subweb;

/// Campaign config from `--config`, or defaults with env overrides.
pub(crate) fn load_config(path: Option<&Path>) -> Result<CampaignConfig, Box<dyn Error>> {
    Ok(match path {
        Some(path) => CampaignConfig::load(path)?,
        None => CampaignConfig::default().with_env_overrides(),
    })
}
