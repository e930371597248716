//! Learning progress tracker - interactive console front end.

mod command;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use session::{Session, SessionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Track student points across the Java, DSA, Databases and Spring courses", long_about = None)]
struct Cli {
    /// Log filter, e.g. "info" or "tracker_registry=debug"
    #[arg(long, env = "TRACKER_LOG", default_value = "warn")]
    log_level: String,

    /// Skip the start-up banner
    #[arg(long)]
    quiet_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the session transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig {
        banner: !cli.quiet_banner,
        ..Default::default()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).with_config(config);
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tracker"]).unwrap();
        assert!(!cli.quiet_banner);

        let cli = Cli::try_parse_from(["tracker", "--quiet-banner", "--log-level", "debug"]).unwrap();
        assert!(cli.quiet_banner);
        assert_eq!(cli.log_level, "debug");
    }
}
