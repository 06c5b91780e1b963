use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "vectorize");
/// // Or with additional fields:
/// trace_time!(start, "vectorize", rows = index.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    init_with_directive(&directive_for(verbose, log_level), log_json)
}

/// Resolve the filter directive for the given flags.
///
/// A bare level such as `trace` is scoped to the marquee crates; anything
/// containing `=` is passed through untouched.
fn directive_for(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("marquee={level},marquee_core={level}"),
        (true, None) => "marquee=debug,marquee_core=debug".to_string(),
        (false, None) => "marquee=warn,marquee_core=warn".to_string(),
    }
}

fn init_with_directive(directive: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins, then MARQUEE_LOG, then the CLI flags
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("MARQUEE_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(
            directive_for(false, None),
            "marquee=warn,marquee_core=warn"
        );
    }

    #[test]
    fn test_verbose_is_debug() {
        assert_eq!(
            directive_for(true, None),
            "marquee=debug,marquee_core=debug"
        );
    }

    #[test]
    fn test_explicit_level_beats_verbose() {
        assert_eq!(
            directive_for(true, Some("trace")),
            "marquee=trace,marquee_core=trace"
        );
    }

    #[test]
    fn test_full_directive_passes_through() {
        assert_eq!(
            directive_for(false, Some("marquee_core::vectorize=trace")),
            "marquee_core::vectorize=trace"
        );
    }
}
