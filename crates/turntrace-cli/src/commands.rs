use super::args::{Cli, Commands, OutputFormat};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use anyhow::Result;
use turntrace_engine::ReconstructOptions;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let format = resolve_format(&cli, &config);
    let options = resolve_options(&cli, &config);
    tracing::debug!(
        config = ?cli.config.clone().or_else(Config::default_path),
        ?format,
        max_line_bytes = options.max_line_bytes,
        "resolved settings"
    );
    let ctx = HandlerContext::new(format, options);

    match cli.command {
        Commands::Turns { file } => handlers::turns::handle(&ctx, &file),
        Commands::Locate { file, tool_use_id } => {
            handlers::locate::handle(&ctx, &file, &tool_use_id)
        }
        Commands::Stats { files } => handlers::stats::handle(&ctx, &files),
    }
}

/// Flag, then config file, then text
fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.or(config.format).unwrap_or_default()
}

fn resolve_options(cli: &Cli, config: &Config) -> ReconstructOptions {
    let mut options = ReconstructOptions::default();
    if let Some(limit) = cli.max_line_bytes.or(config.max_line_bytes) {
        options.max_line_bytes = limit;
    }
    options
}
