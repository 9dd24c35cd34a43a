use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive, e.g. `turntrace_engine=trace`
pub const LOG_ENV: &str = "TURNTRACE_LOG";

/// Install the stderr subscriber.
///
/// `TURNTRACE_LOG` wins when set; otherwise `-v` selects debug and the
/// default is warn. Repeated initialisation is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
