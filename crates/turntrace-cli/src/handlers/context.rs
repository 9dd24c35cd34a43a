use crate::args::OutputFormat;
use crate::presentation::DisplayOptions;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use turntrace_engine::ReconstructOptions;

/// Resolved settings shared by every handler
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: ReconstructOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: ReconstructOptions) -> Self {
        Self { format, options }
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    /// Print `value` as pretty JSON, or the text lines produced by `text`
    pub fn render<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&DisplayOptions) -> Vec<String>,
    {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
            OutputFormat::Text => {
                for line in text(&self.display_options()) {
                    println!("{}", line);
                }
            }
        }
        Ok(())
    }
}
