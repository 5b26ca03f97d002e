use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use rg110_setup::error::{Rg110Error, Result};
use rg110_setup::event::{Event, EventHandler};
use rg110_setup::setup::{ConfigurationRecord, SetupAction, SetupApp, SetupConfig, Step};
use std::io::stdout;
use std::panic;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rg110-setup")]
#[command(author, version, about = "Step-by-step setup wizard for the RG110 tracker")]
struct Args {
    /// Path to setup config file (default: ~/.config/rg110/setup.toml, then /etc/rg110/setup.toml)
    #[arg(long)]
    config: Option<String>,

    /// Step to open on: a name like `port` or a number from 1 to 7
    #[arg(long)]
    step: Option<String>,

    /// Print the finished configuration as TOML on exit
    #[arg(long)]
    emit_config: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

/// How the wizard loop ended
struct Outcome {
    completed: bool,
    record: ConfigurationRecord,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging only if log file is specified
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if let Some(file) = file {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();

            info!("Starting rg110-setup");
        }
    }

    let config = load_config(args.config.as_deref());
    let start = args.step.as_deref().map(Step::resolve).unwrap_or_default();

    // Set up panic handler to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_setup(&mut terminal, SetupApp::starting_at(config, start)).await;
    restore_terminal()?;

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Setup error: {}", e);
            return Err(e);
        }
    };

    info!("Wizard closed (completed: {})", outcome.completed);
    if args.emit_config && outcome.completed {
        print!("{}", outcome.record.to_toml()?);
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> SetupConfig {
    let loaded = match path {
        Some(path) => SetupConfig::load_from(path),
        None => SetupConfig::load(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        SetupConfig::default()
    })
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| Rg110Error::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| Rg110Error::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| Rg110Error::Terminal(e.to_string()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| Rg110Error::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen)
        .map_err(|e| Rg110Error::Terminal(e.to_string()))?;
    Ok(())
}

async fn run_setup(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: SetupApp,
) -> Result<Outcome> {
    let tick_rate = Duration::from_millis(250);
    let mut events = EventHandler::new(tick_rate);

    loop {
        terminal
            .draw(|frame| rg110_setup::setup::ui::draw(frame, &app))
            .map_err(|e| Rg110Error::Terminal(e.to_string()))?;

        let Some(event) = events.next().await else {
            // Input thread is gone; treat it like an abandoned session
            return Ok(Outcome {
                completed: false,
                record: app.record().clone(),
            });
        };

        match event {
            Event::Key(key) => {
                if let Some(SetupAction::Exit { completed }) = app.handle_key(key) {
                    return Ok(Outcome {
                        completed,
                        record: app.record().clone(),
                    });
                }
            }
            Event::Resize | Event::Tick => {}
        }
    }
}
