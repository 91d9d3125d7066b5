#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[cfg(feature = "std")]
use battleship_batch::{
    init_logging,
    source::{prompt_path, read_lines},
    Event, GameEngine, Status,
};
#[cfg(feature = "std")]
use clap::Parser;

/// Play a scripted game of Battleship from a placement file and a guess file.
///
/// When the file names are not given as arguments they are read from
/// standard input, one per line: placements first, then guesses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Ship placements, one `KIND x1 y1 x2 y2` per line.
    placements: Option<PathBuf>,
    /// Guesses, one `x y` per line.
    guesses: Option<PathBuf>,
    #[arg(long, help = "Print the board after placement and when the game ends")]
    show_board: bool,
    #[arg(long, help = "Print a JSON summary of the game after the transcript")]
    summary: bool,
    #[arg(long, help = "Exit with status 1 when the placement file is rejected")]
    strict: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let placements_path = match cli.placements {
        Some(path) => path,
        None => prompt_path(&mut input)?,
    };
    let placements = read_lines(&placements_path)?;
    log::info!("placing ships from {}", placements_path.display());

    let mut engine = GameEngine::new();
    let status = match engine.run_placements(&placements) {
        Status::Fatal(err) => {
            writeln!(out, "{}", Event::Fatal(err.clone()))?;
            Status::Fatal(err)
        }
        _ => {
            if cli.show_board {
                writeln!(out, "{}", engine.board())?;
            }
            // The guess file is only opened once the fleet is accepted.
            let guesses_path = match cli.guesses {
                Some(path) => path,
                None => prompt_path(&mut input)?,
            };
            let guesses = read_lines(&guesses_path)?;
            log::info!("reading guesses from {}", guesses_path.display());

            let mut written = Ok(());
            let status = engine.run_guesses(&guesses, |event| {
                if written.is_ok() {
                    written = writeln!(out, "{}", event);
                }
            });
            written?;
            if cli.show_board {
                writeln!(out, "{}", engine.board())?;
            }
            status
        }
    };
    log::info!("game finished: {:?}", status);

    if cli.summary {
        writeln!(out, "{}", serde_json::to_string(engine.summary())?)?;
    }
    out.flush()?;

    if cli.strict && matches!(status, Status::Fatal(_)) {
        std::process::exit(1);
    }
    Ok(())
}
