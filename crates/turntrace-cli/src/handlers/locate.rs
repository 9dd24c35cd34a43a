use super::HandlerContext;
use crate::presentation::format_location;
use anyhow::Result;
use std::path::Path;
use turntrace_engine::enrich_tool_use_with;

/// A miss, an unparseable log or an unreadable file prints
/// "no enrichment available" and succeeds
pub fn handle(ctx: &HandlerContext, file: &Path, tool_use_id: &str) -> Result<()> {
    let location = match std::fs::read(file) {
        Ok(bytes) => enrich_tool_use_with(&bytes, tool_use_id, &ctx.options),
        Err(err) => {
            tracing::debug!(
                path = %file.display(),
                error = %err,
                "session log unreadable, no enrichment"
            );
            None
        }
    };

    ctx.render(&location, |_| format_location(location.as_ref()))
}
