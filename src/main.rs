use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use shotfind::app::App;
use shotfind::cli::{Args, Command, locate_sequence, load_projects};
use shotfind::{cli, config, settings};

fn main() -> Result<()> {
    // Writes to /tmp/shotfind-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/shotfind-debug.log")
            .expect("Failed to open /tmp/shotfind-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SHOTFIND DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    match args.command {
        Command::Find { projects, sequence } => {
            run_panel(projects, sequence, config_result)?;
        }
        Command::Search {
            pattern,
            projects,
            regex,
            ignore_case,
            scope,
        } => {
            cli::run_search_command(&pattern, &projects, regex, ignore_case, scope)?;
        }
        Command::Export {
            project,
            sequence,
            output,
        } => {
            let path = cli::run_export_command(
                &project,
                sequence.as_deref(),
                output.as_deref(),
                &config_result.config,
            )?;
            println!("Wrote {}", path.display());
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SHOTFIND DEBUG SESSION ENDED ===");

    Ok(())
}

fn run_panel(
    project_paths: Vec<PathBuf>,
    sequence: Option<String>,
    config_result: config::ConfigResult,
) -> Result<()> {
    // Load everything before touching the terminal so failures print
    // normally.
    let projects = load_projects(&project_paths)?;

    let mut app = App::new(projects, settings::load_settings());
    if let Some(name) = sequence {
        match locate_sequence(&app.projects, &name) {
            Some(focused) => app.focused = focused,
            None => {
                return Err(
                    shotfind::FindError::ProjectLoad(format!("no sequence named '{}'", name))
                        .into(),
                );
            }
        }
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.status.set_error(warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
