use clap::ArgMatches;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tracing::{error, info, warn};

use mwan_core::config::MwanConfig;
use mwan_core::refresh::{RefreshLoop, Surface};
use mwan_core::render::{Renderer, Zone};
use mwan_core::source::{self, FileSource};
use mwan_core::view::{Node, TextOptions};
use mwan_core::{OutputFormat, events, status};

use crate::terminal::{Markup, TerminalSurface};

/// Settings for one `status` run: CLI flags over config over defaults.
#[derive(Debug)]
struct StatusOptions {
    path: PathBuf,
    format: OutputFormat,
    watch: bool,
    interval_secs: u64,
    color: bool,
    zone: Zone,
}

impl StatusOptions {
    fn resolve(
        matches: &ArgMatches,
        config: &MwanConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let format = match matches.get_one::<String>("format") {
            Some(format) => format.parse()?,
            None => config.output_format(),
        };

        Ok(Self {
            path: matches
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or_else(|| config.status_path()),
            format,
            watch: matches.get_flag("watch"),
            interval_secs: matches
                .get_one::<u64>("interval")
                .copied()
                .unwrap_or_else(|| config.refresh_interval_secs()),
            color: !matches.get_flag("no-color") && config.color() && io::stdout().is_terminal(),
            zone: if matches.get_flag("utc") {
                Zone::utc()
            } else {
                Zone::Local
            },
        })
    }

    fn markup(&self) -> Markup {
        match self.format {
            OutputFormat::Html => Markup::Html,
            OutputFormat::Text | OutputFormat::Json => {
                Markup::Text(TextOptions { color: self.color })
            }
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> MwanConfig {
    match MwanConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.mini-mwan/config.toml and ./.mini-mwan/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            MwanConfig::default()
        }
    }
}

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let options = StatusOptions::resolve(matches, &config)?;

    info!(
        event = "cli.status_started",
        path = %options.path.display(),
        format = options.format.as_str(),
        watch_mode = options.watch,
        interval = options.interval_secs
    );

    if options.format == OutputFormat::Json && options.watch {
        eprintln!("❌ JSON output cannot be combined with --watch");
        error!(event = "cli.status_invalid_options", format = "json", watch_mode = true);
        return Err("JSON output cannot be combined with --watch".into());
    }

    let renderer = Renderer::new()
        .with_translator(Arc::new(config.translator()))
        .with_zone(options.zone)
        .with_refresh_interval(options.interval_secs);

    let mut source = FileSource::new(&options.path);
    let raw = source::load_initial(&mut source);
    let parsed = status::parse(Some(&raw));
    events::log_snapshot_loaded(&options.path, parsed.as_ref());

    if options.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);

        info!(event = "cli.status_completed");
        return Ok(());
    }

    let initial = Arc::new(renderer.render_status(parsed.as_ref()));

    if options.watch {
        run_status_watch_loop(source, renderer, initial, &options)
    } else {
        let mut surface = TerminalSurface::new(io::stdout(), options.markup());
        surface.replace(initial)?;

        info!(event = "cli.status_completed");
        Ok(())
    }
}

fn run_status_watch_loop(
    source: FileSource,
    renderer: Renderer,
    initial: Arc<Node>,
    options: &StatusOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut surface = TerminalSurface::new(io::stdout(), options.markup()).redrawing(format!(
        "Refreshing every {}s. Press Ctrl+C to exit.",
        options.interval_secs
    ));
    surface.replace(initial)?;

    // Nothing sends on this channel; the loop runs until the process is interrupted.
    let (_stop_tx, stop_rx) = mpsc::channel();
    let mut refresh = RefreshLoop::new(
        source,
        renderer,
        Duration::from_secs(options.interval_secs),
    );

    if let Err(e) = refresh.run(&mut surface, &stop_rx) {
        eprintln!("❌ Failed to update the dashboard: {}", e);
        error!(event = "cli.status_watch_failed", error = %e);
        return Err(e.into());
    }
    Ok(())
}
