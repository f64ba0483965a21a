use std::path::Path;

use atn_core::errors::AtnError;
use tracing::debug;

use crate::foodweb::SubWeb;

/// Drawing backend for food-web diagrams and trajectory plots.
pub trait Renderer {
    fn render_food_web(&mut self, web: &SubWeb, output: &Path) -> Result<(), AtnError>;

    /// `data` is the group's trajectory slot; `output` the matching plot slot.
    fn render_trajectory(&mut self, data: &Path, title: &str, output: &Path) -> Result<(), AtnError>;
}

/// Draws nothing; logs each request at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render_food_web(&mut self, web: &SubWeb, output: &Path) -> Result<(), AtnError> {
        debug!(nodes = web.nodes.len(), links = web.links.len(), output = %output.display(), "food web render skipped");
        Ok(())
    }

    fn render_trajectory(&mut self, data: &Path, title: &str, output: &Path) -> Result<(), AtnError> {
        debug!(data = %data.display(), title, output = %output.display(), "trajectory render skipped");
        Ok(())
    }
}
