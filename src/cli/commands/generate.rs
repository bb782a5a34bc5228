//! Generate command - compute the reply table and render it

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    cli::{
        config::{OutputFormat, RenderConfig},
        output::{create_spinner, write_output},
    },
    plan::TreeBuilder,
    render::{self, DEFAULT_FUNCTION_NAME},
};

#[derive(Parser, Debug)]
#[command(about = "Compute Circle's reply for every position and render the table")]
pub struct GenerateArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "js")]
    pub format: OutputFormat,

    /// Output file path (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Name of the generated JavaScript function
    #[arg(long, default_value = DEFAULT_FUNCTION_NAME)]
    pub function_name: String,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

impl From<GenerateArgs> for RenderConfig {
    fn from(args: GenerateArgs) -> Self {
        let config = RenderConfig::new(args.format)
            .with_function_name(args.function_name)
            .with_progress(!args.no_progress);
        match args.output {
            Some(path) => config.with_output(path),
            None => config,
        }
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    run(&RenderConfig::from(args))
}

/// Build the table and write it according to `config`
pub fn run(config: &RenderConfig) -> Result<()> {
    let contents = generate(config)?;
    write_output(&contents, config.output.as_deref())?;

    if let Some(path) = &config.output {
        info!(path = %path.display(), "reply table written");
    }
    Ok(())
}

/// Build the table and render it without writing anywhere
pub fn generate(config: &RenderConfig) -> Result<String> {
    let spinner = if config.progress {
        Some(create_spinner("Building position graph...")?)
    } else {
        None
    };

    let mut builder = TreeBuilder::new();
    let table = builder.recommended_moves()?;

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "{} positions, {} replies",
            builder.stats().nodes,
            table.len()
        ));
    }

    let rendered = match config.format {
        OutputFormat::Js => render::javascript(&table, &config.function_name),
        OutputFormat::Json => render::json(&table)?,
    };
    Ok(rendered)
}
