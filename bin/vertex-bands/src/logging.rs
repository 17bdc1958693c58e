//! Logging setup for the band tool.

use clap::Args;
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "Logging")]
pub(crate) struct LogArgs {
    /// Silence all output.
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbosity: u8,

    /// Log filter directive (e.g., "vertex_net_peer_band=debug").
    #[arg(long = "log.filter", value_name = "DIRECTIVE", global = true)]
    pub(crate) filter: Option<String>,
}

impl LogArgs {
    /// Build the filter.
    ///
    /// `--quiet` keeps errors only. Otherwise `RUST_LOG` wins over the level
    /// chosen by `-v`, and `--log.filter` directives are added on top.
    pub(crate) fn env_filter(&self) -> EnvFilter {
        if self.quiet {
            return EnvFilter::new("error");
        }

        let base_level = match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let mut filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level));

        if let Some(custom_filter) = &self.filter {
            for directive in custom_filter.split(',') {
                if let Ok(d) = directive.parse() {
                    filter = filter.add_directive(d);
                }
            }
        }

        filter
    }
}

/// Initialize logging to stderr so command output stays clean on stdout.
pub(crate) fn init_logging(args: &LogArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|err| eyre::eyre!(err))
}
