//! rho CLI
//!
//! Command-line runner for pawn-race matches: play one side of a match
//! over stdin/stdout against a host process, or watch the engine play
//! itself. All diagnostics go to stderr; stdout is reserved for the
//! match protocol.

mod config;
mod session;

use config::Config;
use rho_agent::Agent;
use rho_board::{Colour, File, Move};
use rho_game::{run_match, Game, MovePicker, Outcome, WinReason};
use serde::Serialize;
use session::Session;
use std::io;
use std::path::PathBuf;
use std::process;

/// An agent plus the configured gap announcement for the Black side.
struct EnginePicker {
    agent: Agent,
    gaps: (File, File),
}

impl MovePicker for EnginePicker {
    fn pick(&mut self, game: &Game) -> Option<Move> {
        self.agent.pick(game)
    }

    fn choose_gaps(&mut self) -> (File, File) {
        self.gaps
    }
}

/// JSON output for the demo command
#[derive(Debug, Serialize)]
struct DemoSummary {
    winner: Option<Colour>,
    reason: Option<WinReason>,
    plies: usize,
    moves: Vec<String>,
}

fn cmd_play(colour: Colour, config: &Config) -> Result<(), String> {
    let gaps = config
        .gaps()
        .map_err(|e| format!("Invalid gap configuration: {}", e))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    let mut picker = EnginePicker {
        agent: Agent::new(config.depth),
        gaps,
    };
    tracing::info!(side = %colour, depth = config.depth, "starting stdio match");

    let outcome =
        run_match(&mut session, &mut picker, colour).map_err(|e| format!("Match failed: {}", e))?;

    eprintln!("{}", outcome);
    Ok(())
}

fn cmd_demo(config: &Config, seed: Option<u64>, quiet: bool, json: bool) -> Result<(), String> {
    let gaps = config
        .gaps()
        .map_err(|e| format!("Invalid gap configuration: {}", e))?;

    let mut game = Game::new(gaps.0, gaps.1);
    let (mut white, mut black) = match seed {
        Some(seed) => (
            Agent::with_seed(config.depth, seed),
            Agent::with_seed(config.depth, seed.wrapping_add(1)),
        ),
        None => (Agent::new(config.depth), Agent::new(config.depth)),
    };

    let verbose = !quiet && !json;
    if verbose {
        println!("{}", game.board().render(config.ascii));
    }

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }

        let agent = if game.to_move() == Colour::White {
            &mut white
        } else {
            &mut black
        };
        let mv = agent
            .pick(&game)
            .ok_or_else(|| "No move available in a live position".to_string())?;
        game.apply(&mv)
            .map_err(|e| format!("Engine produced an unplayable move: {}", e))?;

        if verbose {
            if let Some(record) = game.history().last() {
                println!("{:>2}. {} {}", game.ply(), record.colour, record.san);
            }
            println!("{}", game.board().render(config.ascii));
        }
    };

    let moves: Vec<String> = game.history().iter().map(|r| r.san.clone()).collect();

    if json {
        let (winner, reason) = match outcome {
            Outcome::Win { winner, reason } => (Some(winner), Some(reason)),
            Outcome::Draw => (None, None),
        };
        let summary = DemoSummary {
            winner,
            reason,
            plies: game.ply(),
            moves,
        };
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        println!("{}", outcome);
        println!("Plies: {}", game.ply());
        println!("Moves: {}", moves.join(" "));
    }
    Ok(())
}

fn build_config(
    path: Option<PathBuf>,
    depth: Option<u32>,
    ascii: bool,
) -> Result<Config, String> {
    let mut config = match path {
        Some(path) => {
            Config::from_file(&path).map_err(|e| format!("Failed to load config: {}", e))?
        }
        None => Config::default(),
    };

    config.apply_env();
    if let Some(depth) = depth {
        config.depth = depth;
    }
    if ascii {
        config.ascii = true;
    }
    Ok(config)
}

fn parse_args() -> Result<(String, Vec<String>), String> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return Err("Usage: rho <command> [options]".to_string());
    }

    Ok((args[1].clone(), args[2..].to_vec()))
}

fn print_usage() {
    println!("rho - pawn race engine");
    println!();
    println!("USAGE:");
    println!("    rho play --colour <W|B> [--depth <plies>] [--config <file>]");
    println!("    rho demo [--depth <plies>] [--seed <n>] [--white-gap <a-h>]");
    println!("             [--black-gap <a-h>] [--config <file>] [--ascii] [--quiet] [--json]");
    println!();
    println!("COMMANDS:");
    println!("    play      Play one side of a match over stdin/stdout");
    println!("    demo      Watch the engine play itself");
    println!();
    println!("OPTIONS:");
    println!("    --colour, -c    Side to play: W or B");
    println!("    --depth, -d     Search depth in plies (default 4)");
    println!("    --seed          Fix the tie-breaking seed for reproducible demos");
    println!("    --white-gap     Empty file in White's starting rank");
    println!("    --black-gap     Empty file in Black's starting rank");
    println!("    --config        TOML configuration file");
    println!("    --ascii         Draw boards with ASCII glyphs");
    println!("    --quiet         Skip per-move boards, print only the summary");
    println!("    --json          Emit the summary as JSON");
    println!();
    println!("EXAMPLES:");
    println!("    rho play --colour W --depth 5");
    println!("    rho demo --seed 7 --white-gap c --black-gap f --ascii");
    println!("    rho demo --quiet --json");
}

fn main() {
    rho_game::logging::init_stderr();

    let (command, args) = match parse_args() {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("Error: {}", e);
            println!();
            print_usage();
            process::exit(1);
        }
    };

    let result = match command.as_str() {
        "play" => {
            let mut colour = None;
            let mut depth: Option<u32> = None;
            let mut config_path = None;

            let mut i = 0;
            while i < args.len() {
                match args[i].as_str() {
                    "--colour" | "-c" => {
                        i += 1;
                        if i < args.len() {
                            colour = Some(args[i].clone());
                        }
                    }
                    "--depth" | "-d" => {
                        i += 1;
                        if i < args.len() {
                            depth = args[i].parse().ok();
                        }
                    }
                    "--config" => {
                        i += 1;
                        if i < args.len() {
                            config_path = Some(PathBuf::from(&args[i]));
                        }
                    }
                    _ => {}
                }
                i += 1;
            }

            match colour {
                Some(colour) => colour
                    .parse::<Colour>()
                    .map_err(|e| format!("Invalid colour: {}", e))
                    .and_then(|colour| {
                        let config = build_config(config_path, depth, false)?;
                        cmd_play(colour, &config)
                    }),
                None => Err("Missing --colour argument".to_string()),
            }
        }
        "demo" => {
            let mut depth: Option<u32> = None;
            let mut seed: Option<u64> = None;
            let mut white_gap = None;
            let mut black_gap = None;
            let mut config_path = None;
            let mut ascii = false;
            let mut quiet = false;
            let mut json = false;

            let mut i = 0;
            while i < args.len() {
                match args[i].as_str() {
                    "--depth" | "-d" => {
                        i += 1;
                        if i < args.len() {
                            depth = args[i].parse().ok();
                        }
                    }
                    "--seed" => {
                        i += 1;
                        if i < args.len() {
                            seed = args[i].parse().ok();
                        }
                    }
                    "--white-gap" => {
                        i += 1;
                        if i < args.len() {
                            white_gap = Some(args[i].clone());
                        }
                    }
                    "--black-gap" => {
                        i += 1;
                        if i < args.len() {
                            black_gap = Some(args[i].clone());
                        }
                    }
                    "--config" => {
                        i += 1;
                        if i < args.len() {
                            config_path = Some(PathBuf::from(&args[i]));
                        }
                    }
                    "--ascii" => ascii = true,
                    "--quiet" => quiet = true,
                    "--json" => json = true,
                    _ => {}
                }
                i += 1;
            }

            build_config(config_path, depth, ascii).and_then(|mut config| {
                if let Some(gap) = white_gap {
                    config.white_gap = gap;
                }
                if let Some(gap) = black_gap {
                    config.black_gap = gap;
                }
                cmd_demo(&config, seed, quiet, json)
            })
        }
        _ => {
            print_usage();
            Err(format!("Unknown command: {}", command))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
