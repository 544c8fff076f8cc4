use crossterm::{execute, terminal::SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use zpad::app::Workbench;
use zpad::kernel::services::adapters::{
    ensure_settings_file, load_settings, load_settings_from, ClipboardService,
};
use zpad::kernel::store::resolve_path;
use zpad::kernel::Action;
use zpad::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use zpad::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const USAGE: &str = "Usage: zpad [PATH]

Opens PATH for editing. A PATH that does not exist yet is created on first save.

Options:
  -h, --help       Print this help
  -V, --version    Print the version";

#[derive(Debug, PartialEq, Eq)]
enum CliCommand {
    Run(Option<String>),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliCommand, String> {
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            _ => {}
        }
        if arg.starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option '{arg}'"));
        }
        if path.is_some() {
            return Err("only one PATH may be given".to_string());
        }
        path = Some(arg);
    }
    Ok(CliCommand::Run(path))
}

#[derive(Debug, PartialEq, Eq)]
enum StartupFile {
    /// Opened right away.
    Existing(PathBuf),
    /// Becomes the save target of the empty document.
    New(PathBuf),
}

fn resolve_startup_file(cwd: &Path, arg: Option<&str>) -> io::Result<Option<StartupFile>> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let path = resolve_path(cwd, arg);
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    if path.exists() {
        Ok(Some(StartupFile::Existing(path)))
    } else {
        Ok(Some(StartupFile::New(path)))
    }
}

fn main() -> io::Result<()> {
    let path_arg = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(path)) => path,
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("zpad {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("zpad: {message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let cwd = std::env::current_dir()?;
    let startup = resolve_startup_file(&cwd, path_arg.as_deref())?;

    let logging_guard = logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "zpad starting");

    let settings = match ensure_settings_file() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "settings file unavailable");
            load_settings()
        }
    }
    .unwrap_or_default();

    let mut workbench = Workbench::new(cwd, settings, ClipboardService::new());
    workbench.adapt_to_terminal_capabilities();
    match startup {
        Some(StartupFile::Existing(path)) => {
            workbench.open_path(path);
        }
        Some(StartupFile::New(path)) => {
            workbench.dispatch_kernel(Action::AdoptPath(path));
        }
        None => {}
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    {
        let restorer = guard.restorer();
        if let Err(e) = zpad::tui::terminal_guard::install_termination_signals(restorer, signal_tx)
        {
            tracing::warn!(error = %e, "signal handlers not installed");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let outcome = match Terminal::new(CrosstermBackend::new(io::stdout())) {
        Ok(mut terminal) => run(&mut workbench, &mut terminal, &signal_rx),
        Err(e) => Err(e),
    };
    drop(guard);

    let signal = outcome?;
    tracing::info!("zpad exiting");
    drop(logging_guard);
    if let Some(signal) = signal {
        std::process::exit(signal.exit_code());
    }
    Ok(())
}

/// Draw/poll loop. Returns the signal that ended it, if any.
fn run(
    workbench: &mut Workbench,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    terminal.clear()?;
    let mut needs_redraw = true;
    let mut title = String::new();

    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(signal = signal.name(), "shutting down");
            return Ok(Some(signal));
        }

        let next_title = workbench.title();
        if next_title != title {
            execute!(io::stdout(), SetTitle(&next_title))?;
            title = next_title;
        }

        if needs_redraw {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            needs_redraw = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = zpad::tui::crossterm::into_input_event(crossterm::event::read()?);
        let result = workbench.handle_input(&event);
        if result.is_quit() {
            return Ok(None);
        }
        needs_redraw |= result.needs_redraw();
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod cli_startup_paths;
