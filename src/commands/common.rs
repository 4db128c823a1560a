//! Common utilities and helper functions shared across commands.

use std::{path::PathBuf, sync::Arc};

use tracing::debug;

use crate::{
    analysis::HttpAnalysisApi,
    cli::types::OutputFormat,
    config::{config_path, load_file_config, FileConfig, Settings},
    core::write_output,
    view::Renderer,
    Result,
};

/// Resources every command needs: the API handle, a renderer and where
/// the rendered output goes.
pub struct CommandContext {
    pub settings: Settings,
    pub api: Arc<HttpAnalysisApi>,
    pub renderer: Box<dyn Renderer>,
    pub output: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(settings: Settings, format: OutputFormat, output: Option<PathBuf>) -> Result<Self> {
        let api = HttpAnalysisApi::new(&settings.base_url)?;
        debug!(base_url = %api.base_url(), %format, "command context ready");
        Ok(Self {
            settings,
            api: Arc::new(api),
            renderer: format.renderer()?,
            output,
        })
    }

    /// Write rendered text to `--output` or stdout.
    pub fn emit(&self, rendered: &str) -> Result<()> {
        write_output(self.output.as_deref(), rendered)?;
        Ok(())
    }
}

/// Load the config file from its default location.
pub fn load_default_file_config() -> Result<FileConfig> {
    load_file_config(&config_path())
}
