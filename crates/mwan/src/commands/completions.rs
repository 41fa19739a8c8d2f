use clap::ArgMatches;
use clap_complete::Shell;
use std::io::{self, Write};

use crate::app::build_cli;

const BIN_NAME: &str = "mwan";

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .copied()
        .ok_or("Shell argument is required")?;

    write_completions(shell, &mut io::stdout().lock());
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = build_cli();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_status_flags() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("mwan"));
        assert!(script.contains("--watch"));
        assert!(script.contains("--interval"));
    }
}
