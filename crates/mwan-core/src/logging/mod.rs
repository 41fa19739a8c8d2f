use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON logging on stderr.
///
/// When `verbose` is false, only error-level events are emitted so stdout and
/// stderr stay clean for the dashboard. When `verbose` is true, info-level and
/// above events are emitted. `RUST_LOG` directives are honored on top.
pub fn init_logging(verbose: bool) {
    let directive = if verbose { "mwan=info" } else { "mwan=error" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}
