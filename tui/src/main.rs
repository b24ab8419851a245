mod args;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use lifeloop_lib::{Controller, TextFormat, TextPresenter};
use log::info;
use std::{io, process};

#[cfg(feature = "tui")]
use tui::run_with_tui;

/// Runs some generations without any interface, and prints the last one.
fn run_headless(
    mut controller: Controller,
    generations: u64,
    format: TextFormat,
) -> io::Result<()> {
    for _ in 0..generations {
        controller.step();
    }
    info!(
        "Stopped at generation {} with {} living cells.",
        controller.generation(),
        controller.population()
    );
    let stdout = io::stdout();
    controller.present(&mut TextPresenter::new(stdout.lock(), format))
}

#[cfg(feature = "tui")]
fn run(args: Args) -> io::Result<()> {
    if args.no_tui {
        run_headless(args.controller, args.generations, args.format)
    } else {
        let controller = run_with_tui(args.controller, args.paused)?;
        let stdout = io::stdout();
        controller.present(&mut TextPresenter::new(stdout.lock(), args.format))
    }
}

#[cfg(not(feature = "tui"))]
fn run(args: Args) -> io::Result<()> {
    run_headless(args.controller, args.generations, args.format)
}

fn main() {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
