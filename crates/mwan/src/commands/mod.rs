use clap::ArgMatches;
use tracing::error;

use mwan_core::events;

mod completions;
mod status;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let Some((command, sub_matches)) = matches.subcommand() else {
        error!(event = "cli.command_missing");
        return Err("No command given".into());
    };

    events::log_command_started(command);

    let result = match command {
        "status" => status::handle_status_command(sub_matches),
        "completions" => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown", command = command);
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_command_failed(command, &**e);
    }
    result
}
