use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Routes the adder's debug/trace events to stderr.
///
/// `RUST_LOG` takes precedence; without it `verbose` picks between
/// `digit_adder=trace` and `digit_adder=info`. Returns `false` when a global
/// subscriber is already installed, so callers such as test suites may call
/// it more than once.
///
/// ```
/// digit_adder::utils::logger::init_logger(false);
/// let sum = digit_adder::add(Some(&[4][..]), Some(&[8][..])).unwrap();
/// assert_eq!(sum, Some(vec![1, 2]));
/// ```
pub fn init_logger(verbose: bool) -> bool {
    let default_directive = if verbose {
        "digit_adder=trace"
    } else {
        "digit_adder=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}
