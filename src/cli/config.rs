//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::ValueEnum;

use crate::render::DEFAULT_FUNCTION_NAME;

/// How the reply table is written out
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// JavaScript lookup function returning an object literal
    #[default]
    Js,
    /// Pretty-printed JSON object
    Json,
}

/// Settings for rendering and writing the reply table
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output style
    pub format: OutputFormat,
    /// Name of the emitted JavaScript function
    pub function_name: String,
    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,
    /// Whether to show a spinner while building
    pub progress: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            output: None,
            progress: true,
        }
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
