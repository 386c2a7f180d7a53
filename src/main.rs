//! Demoscope - A terminal-based scatter plot explorer for state metrics.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use demoscope::app::App;
use demoscope::data::DatasetReader;
use demoscope::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "demoscope")]
#[command(about = "A terminal-based scatter plot explorer for U.S. state demographic and health data", long_about = None)]
struct Args {
    /// Path to the state metrics CSV file
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Demoscope");
    }

    // Load the dataset before touching the terminal. Load failures are
    // fatal and must not leave the user on a blank alternate screen.
    let rows = DatasetReader::read_file(&args.file)
        .with_context(|| format!("could not load {}", args.file.display()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file, rows);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Demoscope exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Short poll so in-flight 1000ms transitions render smoothly.
        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Axis switching
                    (KeyModifiers::NONE, KeyCode::Char('x')) => app.cycle_x(),
                    (KeyModifiers::SHIFT, KeyCode::Char('X')) => app.cycle_x_back(),
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.cycle_y(),
                    (KeyModifiers::SHIFT, KeyCode::Char('Y')) => app.cycle_y_back(),

                    // Theme and help
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => app.show_help(),

                    // Escape - hide the tooltip
                    (KeyModifiers::NONE, KeyCode::Esc) => app.clear_hover(),

                    _ => {},
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        app.on_click(mouse.column, mouse.row);
                    },
                    MouseEventKind::Moved => {
                        app.on_mouse_move(mouse.column, mouse.row);
                    },
                    _ => {},
                },
                _ => {},
            }
        }
    }
}
