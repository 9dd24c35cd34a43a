use super::HandlerContext;
use crate::presentation::format_stats;
use anyhow::{Context, Result};
use std::path::PathBuf;
use turntrace_engine::{TurnLengthStats, reconstruct_file};

pub fn handle(ctx: &HandlerContext, files: &[PathBuf]) -> Result<()> {
    let mut sessions = Vec::with_capacity(files.len());
    for file in files {
        let turns = reconstruct_file(file, &ctx.options)
            .with_context(|| format!("Failed to reconstruct {}", file.display()))?;
        sessions.push(turns);
    }

    let stats = TurnLengthStats::from_sessions(sessions.iter().map(Vec::as_slice));

    ctx.render(&stats, |_| format_stats(&stats))
}
