use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` wins when set; otherwise
/// `--verbose` selects debug and the default is info. Output goes to stderr
/// so calculator JSON on stdout stays machine-readable.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "fincalc=debug,tower_http=debug"
    } else {
        "fincalc=info,tower_http=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert!(default_filter(true).contains("fincalc=debug"));
        assert!(default_filter(false).contains("fincalc=info"));
    }

    #[test]
    fn default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}
