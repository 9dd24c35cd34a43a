use super::HandlerContext;
use crate::presentation::format_turns;
use anyhow::{Context, Result};
use std::path::Path;
use turntrace_engine::reconstruct_file;

pub fn handle(ctx: &HandlerContext, file: &Path) -> Result<()> {
    let turns = reconstruct_file(file, &ctx.options)
        .with_context(|| format!("Failed to reconstruct {}", file.display()))?;

    ctx.render(&turns, |opts| format_turns(&turns, opts))
}
