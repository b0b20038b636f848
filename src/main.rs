use anyhow::{Context, Result};
use calcdeck::calculator::{CalculatorSession, InputEvent, copy_to_clipboard, parse_line};
use calcdeck::config::Config;
use calcdeck::display::{render, render_history};
use calcdeck::history::{FileStore, KeyValueStore, MemoryStore, save_history};
use clap::Parser;
use std::io::{BufRead, Write};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
    .context("Failed to load configuration")?;

    calcdeck::logging::init(&config.logging);

    let store = open_store(&cli, &config);
    let mut session = CalculatorSession::restore(store.as_ref());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&mut session, store.as_ref(), &config),
        Commands::Eval { keys } => {
            let line = keys.join(" ");
            let events = parse_line(&line, session.history())?;
            apply_all(&mut session, store.as_ref(), events);
            println!("{}", render(&session, config.group_digits));
            Ok(())
        }
        Commands::History { clear } => {
            if clear {
                apply_all(&mut session, store.as_ref(), vec![InputEvent::ClearHistory]);
            }
            println!("{}", render_history(session.history()));
            Ok(())
        }
    }
}

/// Pick the history store from CLI flags and config.
fn open_store(cli: &Cli, config: &Config) -> Box<dyn KeyValueStore> {
    if cli.no_persist || !config.persist_history {
        tracing::debug!("History persistence disabled");
        return Box::new(MemoryStore::new());
    }

    let store = match cli.data_dir.as_ref().or(config.data_dir.as_ref()) {
        Some(dir) => FileStore::new(dir.clone()),
        None => FileStore::default_location(),
    };
    tracing::debug!(dir = %store.dir().display(), "Using history store");
    Box::new(store)
}

/// Apply events in order, saving history whenever it changed.
fn apply_all(session: &mut CalculatorSession, store: &dyn KeyValueStore, events: Vec<InputEvent>) {
    for event in events {
        if session.apply(event) {
            save_history(store, session.history());
        }
    }
}

fn run_repl(session: &mut CalculatorSession, store: &dyn KeyValueStore, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}", render(session, config.group_digits));

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "history" | "h" => {
                println!("{}", render_history(session.history()));
                continue;
            }
            "copy" => {
                match copy_to_clipboard(session.current_input()) {
                    Ok(()) => println!("Copied {}", session.current_input()),
                    Err(e) => eprintln!("{}", e),
                }
                continue;
            }
            keys => match parse_line(keys, session.history()) {
                Ok(events) => apply_all(session, store, events),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
        }

        println!("{}", render(session, config.group_digits));
    }

    Ok(())
}
