use clap::{ArgAction, Args};

/// Logging options. Logs go to stderr; stdout only carries the result.
#[derive(Clone, Args)]
pub struct LogOptions {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl LogOptions {
    fn default_level(&self) -> tracing_subscriber::filter::LevelFilter {
        use tracing_subscriber::filter::LevelFilter;
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Try set up the logger based on the verbosity level
    pub fn try_setup_logger(&self) {
        use tracing_subscriber::{
            EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
        };

        if self.quiet {
            return;
        }

        let filter = EnvFilter::builder()
            .with_default_directive(self.default_level().into())
            .from_env_lossy();

        let fmt_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_thread_ids(false)
            .with_thread_names(false)
            .without_time();

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .ok();
    }
}
