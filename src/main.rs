use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use sealui::App;
use sealui::backend;
use sealui::config;
use sealui::error::SealuiError;

/// Terminal UI for sealing Kubernetes secrets
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Edit, encode and seal Kubernetes secrets through a sealed-secrets backend"
)]
struct Args {
    /// Secret manifest to open (YAML or JSON)
    input: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/sealui-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();
    if let Some(url) = args.server {
        config_result.config.server.url = url;
    }

    // Read before touching the terminal so errors print normally
    let initial_secret = args.input.as_deref().map(read_input).transpose()?;

    let terminal = init_terminal()?;

    let app = App::new(initial_secret, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SEALUI DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/sealui-debug.log")
    else {
        return;
    };

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

    log::debug!("=== SEALUI DEBUG SESSION STARTED ===");
}

fn read_input(path: &Path) -> Result<String, SealuiError> {
    std::fs::read_to_string(path).map_err(|source| SealuiError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Initialize terminal with raw mode, alternate screen, bracketed paste and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<()> {
    // Notifications mount against the viewport, so set it before the first show
    let size = terminal.size()?;
    app.notification
        .set_viewport(Rect::new(0, 0, size.width, size.height));

    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_backend_worker(&mut app, &config_result.config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.take_bell() {
            let mut out = stdout();
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the backend worker thread and channels
fn setup_backend_worker(app: &mut App, config: &config::Config) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_backend_channels(request_tx, response_rx);

    backend::spawn_worker(&config.server, request_rx, response_tx);
}
