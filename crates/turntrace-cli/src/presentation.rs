use owo_colors::OwoColorize;
use serde_json::Value;
use turntrace_engine::{StepLocation, TurnLengthStats};
use turntrace_types::{Step, Turn};

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

const INPUT_PREVIEW_CHARS: usize = 60;

pub fn format_turns(turns: &[Turn], opts: &DisplayOptions) -> Vec<String> {
    if turns.is_empty() {
        let msg = "No turns to display";
        return vec![if opts.enable_color {
            format!("{}", msg.bright_black())
        } else {
            msg.to_string()
        }];
    }

    let mut lines = Vec::new();
    for turn in turns {
        let started = turn
            .started_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        let duration = match turn.duration_ms {
            Some(ms) => format!("{}ms", ms),
            None => "open".to_string(),
        };

        let header = format!(
            "Turn {} [{}] {} steps, {}",
            turn.turn_id(),
            started,
            turn.step_count(),
            duration
        );
        lines.push(if opts.enable_color {
            format!("{}", header.bold())
        } else {
            header
        });

        for step in &turn.steps {
            lines.push(format_step(step, opts));
        }
    }
    lines
}

fn format_step(step: &Step, opts: &DisplayOptions) -> String {
    let marker = if step.is_parallel { "||" } else { "  " };
    let status = if step.is_error { "FAIL" } else { "ok" };
    let input = input_preview(&step.input);

    let mut line = if opts.enable_color {
        let status = if step.is_error {
            format!("{}", status.red())
        } else {
            format!("{}", status.green())
        };
        format!(
            "  {} {:>2}. {} {} {}",
            marker.yellow(),
            step.sequence,
            step.tool_name.cyan(),
            input.bright_black(),
            status
        )
    } else {
        format!(
            "  {} {:>2}. {} {} {}",
            marker, step.sequence, step.tool_name, input, status
        )
    };

    if step.is_error && !step.error.is_empty() {
        line.push_str(&format!(": {}", first_line(&step.error)));
    }
    line
}

/// Short, single-line preview of a tool input
fn input_preview(input: &Value) -> String {
    let primary = ["command", "file_path", "pattern", "path", "url", "query"]
        .iter()
        .find_map(|key| input.get(*key).and_then(Value::as_str));

    let text = match primary {
        Some(text) => text.to_string(),
        None => input.to_string(),
    };
    truncate(first_line(&text), INPUT_PREVIEW_CHARS)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn format_location(location: Option<&StepLocation>) -> Vec<String> {
    match location {
        Some(loc) => vec![
            format!("turn_id: {}", loc.turn_id),
            format!("sequence: {}", loc.sequence),
            format!("turn_step_count: {}", loc.turn_step_count),
        ],
        None => vec!["no enrichment available".to_string()],
    }
}

pub fn format_stats(stats: &TurnLengthStats) -> Vec<String> {
    vec![
        format!("turns:            {}", stats.turn_count),
        format!("steps:            {}", stats.step_count),
        format!("closed turns:     {}", stats.explicitly_closed_turns),
        format!("parallel steps:   {}", stats.parallel_steps),
        format!("failed steps:     {}", stats.failed_steps),
        format!(
            "steps per turn:   min {} / median {:.1} / mean {:.1} / max {}",
            stats.min_steps, stats.median_steps, stats.mean_steps, stats.max_steps
        ),
        format!("total duration:   {}ms", stats.total_duration_ms),
    ]
}
