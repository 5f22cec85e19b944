use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use promptbox::app::App;
use promptbox::config;
use promptbox::submit::{SubmitError, SubmitHandler};

/// Interactive terminal prompt composer
#[derive(Debug, Parser)]
#[command(name = "promptbox", version, about)]
struct Args {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the character cap for the draft
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Override the placeholder text
    #[arg(long, value_name = "TEXT")]
    placeholder: Option<String>,
}

/// Stand-in for a real generation backend: collects each submitted prompt
/// so the session can print them once the terminal is restored
struct CollectingHandler {
    collected: Arc<Mutex<Vec<String>>>,
}

impl SubmitHandler for CollectingHandler {
    fn submit(&mut self, prompt: &str) -> Result<(), SubmitError> {
        self.collected
            .lock()
            .map_err(|_| SubmitError("prompt store poisoned".to_string()))?
            .push(prompt.to_string());
        Ok(())
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only active in debug builds; release builds own the terminal
    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    if let Some(max_chars) = args.max_chars {
        config.prompt.max_chars = max_chars;
    }
    if let Some(placeholder) = args.placeholder {
        config.prompt.placeholder = placeholder;
    }

    let collected = Arc::new(Mutex::new(Vec::new()));
    let app = App::new(
        &config,
        Box::new(CollectingHandler {
            collected: collected.clone(),
        }),
    );

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let _ = execute!(std::io::stdout(), EnableBracketedPaste);

    let result = run(&mut terminal, app);

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    // Emit the prompts composed this session now that stdout is ours again
    if let Ok(prompts) = collected.lock() {
        for prompt in prompts.iter() {
            println!("{prompt}");
        }
    }

    result
}

/// Tick interval: drives pulse expiry, spinner frames, and outcome polling
const TICK: Duration = Duration::from_millis(50);

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Paste(text) => {
                    app.handle_paste_event(text);
                }
                _ => {}
            }
        }

        app.on_tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
