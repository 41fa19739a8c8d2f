use clap::{Arg, ArgAction, Command};
use mwan_core::OutputFormat;

pub fn build_cli() -> Command {
    Command::new("mwan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live status dashboard for the mini-mwan multi-WAN monitor")
        .long_about("Reads the status snapshot written by the mini-mwan daemon and renders the state of every monitored WAN interface: link status, latency, gateway and ping target. With --watch the dashboard re-reads the snapshot and redraws in place.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("status")
                .about("Show WAN interface status from the daemon's snapshot")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("Status snapshot to read (overrides config, default: /var/run/mini-mwan.status)")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (overrides config, default: text)")
                        .value_parser(OutputFormat::VALUES)
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .short('w')
                        .help("Continuously refresh the dashboard")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds (overrides config, default: 5)")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("no-color")
                        .long("no-color")
                        .help("Disable colored output")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("utc")
                        .long("utc")
                        .help("Show timestamps in UTC instead of local time")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell))
                )
        )
}
