use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use quickclip::app::App;
use quickclip::clipboard::{self, ClipboardBackend, UnavailableBackend};
use quickclip::controller::ClipListController;
use quickclip::logging;
use quickclip::storage::{
    BackgroundStore, ClipPersistence, Config, ConfigStorage, JsonFileStore, MemoryStore,
    SyncStore, TomlConfigStorage, ensure_directories,
};

/// How long the event loop waits for input before running housekeeping
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "quickclip")]
#[command(about = "Keep short text clips and copy them back on demand", long_about = None)]
struct Cli {
    /// Keep clips in memory only; the store file is neither read nor written
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print stored clips
    List,

    /// Add a clip
    Add {
        /// Text to store
        value: String,

        /// Short label shown before the value (at most 20 characters)
        #[arg(short, long, default_value = "")]
        alias: String,
    },

    /// Delete the clip at INDEX
    Delete { index: usize },

    /// Copy the clip at INDEX to the system clipboard
    Copy { index: usize },

    /// Drop the clip at FROM onto position TO
    Move { from: usize, to: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_tui(cli.ephemeral);
    };

    env_logger::init();

    let (data_dir, config_dir) = ensure_directories()?;
    let config = load_config(&config_dir)?;
    let store = open_store(&config, &data_dir, cli.ephemeral, false);

    match command {
        Commands::List => cmd_list(store, &config),
        Commands::Add { value, alias } => cmd_add(store, &config, &value, &alias),
        Commands::Delete { index } => cmd_delete(store, &config, index),
        Commands::Copy { index } => cmd_copy(store, &config, index),
        Commands::Move { from, to } => cmd_move(store, &config, from, to),
    }
}

fn load_config(config_dir: &Path) -> Result<Config> {
    TomlConfigStorage::new(config_dir.join("quickclip.toml")).load()
}

/// Pick the backing store. The TUI may defer writes to a background thread;
/// subcommands always write synchronously so the process can exit right after.
fn open_store(
    config: &Config,
    data_dir: &Path,
    ephemeral: bool,
    background: bool,
) -> Box<dyn SyncStore> {
    if ephemeral {
        log::info!("Ephemeral session, clips will not be saved");
        return Box::new(MemoryStore::new());
    }

    let file_store = JsonFileStore::new(config.general.store_path(data_dir));
    log::debug!("Store file: {:?}", file_store.path());
    if background && config.general.background_writes {
        Box::new(BackgroundStore::new(file_store))
    } else {
        Box::new(file_store)
    }
}

fn open_clipboard() -> Box<dyn ClipboardBackend> {
    match clipboard::create_backend() {
        Ok(backend) => {
            log::info!("Using {} clipboard backend", backend.name());
            backend
        }
        Err(e) => {
            log::warn!("Clipboard unavailable: {:#}", e);
            Box::new(UnavailableBackend::new(format!("{:#}", e)))
        }
    }
}

fn open_controller(store: Box<dyn SyncStore>, config: &Config) -> ClipListController {
    let persistence = ClipPersistence::new(store, config.general.storage_key.clone());
    ClipListController::new(persistence, open_clipboard())
}

fn print_clips(controller: &ClipListController) {
    if controller.clips().is_empty() {
        println!("(no clips yet)");
        return;
    }

    for (i, clip) in controller.clips().iter().enumerate() {
        match &clip.alias {
            Some(alias) => println!("{:3}. [{}] {}", i, alias, clip.preview(60)),
            None => println!("{:3}. {}", i, clip.preview(60)),
        }
    }
}

fn cmd_list(store: Box<dyn SyncStore>, config: &Config) -> Result<()> {
    let controller = open_controller(store, config);
    print_clips(&controller);
    Ok(())
}

fn cmd_add(store: Box<dyn SyncStore>, config: &Config, value: &str, alias: &str) -> Result<()> {
    let mut controller = open_controller(store, config);
    match controller.add_clip(value, alias)? {
        Some(index) => println!("Added clip {}", index),
        None => println!("Nothing to add: value is empty"),
    }
    Ok(())
}

fn cmd_delete(store: Box<dyn SyncStore>, config: &Config, index: usize) -> Result<()> {
    let mut controller = open_controller(store, config);
    let removed = controller.delete_clip(index)?;
    println!("Deleted: {}", removed.preview(60));
    Ok(())
}

fn cmd_copy(store: Box<dyn SyncStore>, config: &Config, index: usize) -> Result<()> {
    let controller = open_controller(store, config);
    controller.copy_clip(index)?;
    println!("Copied clip {}", index);
    Ok(())
}

fn cmd_move(store: Box<dyn SyncStore>, config: &Config, from: usize, to: usize) -> Result<()> {
    let mut controller = open_controller(store, config);
    if controller.move_clip(from, to)? {
        print_clips(&controller);
    } else {
        println!("Clip {} is already at position {}", from, to);
    }
    Ok(())
}

/// Launch the interactive TUI
fn run_tui(ephemeral: bool) -> Result<()> {
    let (data_dir, config_dir) = ensure_directories()?;
    let config = load_config(&config_dir)?;

    let (flash_tx, flash_rx) = mpsc::channel();
    logging::init_logger(
        data_dir.join("quickclip.log"),
        Some(flash_tx),
        &config.general.log_level,
        &config.general.flash_level,
    )?;
    log::info!("quickclip starting");

    let store = open_store(&config, &data_dir, ephemeral, true);
    let controller = open_controller(store, &config);
    let mouse = config.general.mouse;
    let mut app = App::new(controller, config, Some(flash_rx));

    let mut terminal = setup_terminal(mouse).context("Failed to set up terminal")?;
    let result = run_event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal, mouse).context("Failed to restore terminal")?;

    // Dropping the app flushes queued background writes
    drop(app);
    log::info!("quickclip exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(TICK_RATE)? {
            let event = event::read()?;
            if let Err(e) = app.handle_event(event) {
                log::error!("Error handling event: {:#}", e);
            }
        }
    }
    Ok(())
}

fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
