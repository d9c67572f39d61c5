use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// RUST_LOG 優先，否則依 verbose 決定本 crate 的日誌等級
fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "pairwise_lists=debug,info"
    } else {
        "pairwise_lists=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable compact lines on stderr, keeping stdout for results.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// One JSON object per event on stderr, with event fields flattened to the
/// top level and source locations kept for log collectors.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_builds_for_both_levels() {
        // Only checks the fallback directives parse; RUST_LOG may override in CI.
        let quiet = default_filter(false).to_string();
        let verbose = default_filter(true).to_string();
        if std::env::var("RUST_LOG").is_err() {
            assert!(quiet.contains("pairwise_lists=info"));
            assert!(verbose.contains("pairwise_lists=debug"));
        }
    }
}
