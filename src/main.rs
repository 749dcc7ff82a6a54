use clap::{Parser, Subcommand};
use domino_duel::cli::{outcome_message, run_session};
use domino_duel::game::GameState;
use domino_duel::rng::GameRng;
use domino_duel::simulation::{aggregate_results, run_game, GameResult};
use domino_duel::tile::{create_tile_set, distribute, ArtworkIndex, Tile};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domino-duel")]
#[command(about = "Two-player dominoes in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log engine events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hot-seat game in the terminal (default)
    Play,

    /// Print the opening deal
    Deal {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run self-play games and report outcome statistics
    Simulate {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },

    /// Check that an artwork directory has an image for every tile
    Assets {
        /// Directory holding {low}-{high}.png files
        #[arg(short, long, default_value = "assets")]
        dir: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None | Some(Commands::Play) => play(cli.seed),
        Some(Commands::Deal { json }) => print_deal(cli.seed, json),
        Some(Commands::Simulate { games }) => simulate(games, cli.seed, cli.verbose),
        Some(Commands::Assets { dir }) => check_assets(&dir),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn play(seed: Option<u64>) {
    let mut rng = GameRng::new(seed);
    println!("\n=== Domino Game ===\n");
    println!("Seed: {}\n", rng.seed());

    let mut state = GameState::deal(&mut rng);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match run_session(&mut state, stdin.lock(), &mut stdout) {
        Ok(Some(outcome)) => tracing::info!("session finished: {}", outcome_message(outcome)),
        Ok(None) => println!("\nGame abandoned."),
        Err(e) => {
            eprintln!("✗ Terminal error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_deal(seed: Option<u64>, json: bool) {
    let mut rng = GameRng::new(seed);
    let deal = distribute(create_tile_set(), &mut rng);

    if json {
        match serde_json::to_string_pretty(&deal) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to encode deal: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Seed: {}", rng.seed());
    println!("Player 1:  {}", tile_line(&deal.player_one));
    println!("Player 2:  {}", tile_line(&deal.player_two));
    println!("Draw pile: {}", tile_line(&deal.draw_pile));
}

fn tile_line(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
}

fn simulate(num_games: usize, seed: Option<u64>, verbose: bool) {
    let base_seed = seed.unwrap_or_else(|| GameRng::new(None).seed());

    println!("\n=== Domino Self-Play ===\n");
    println!("Games: {}", num_games);
    println!("Base seed: {}", base_seed);
    println!();

    let start = std::time::Instant::now();
    let results: Vec<GameResult> = if verbose {
        // Sequential so the narration of the first game stays readable
        (0..num_games)
            .map(|i| run_game(base_seed.wrapping_add(i as u64), i == 0))
            .collect()
    } else {
        let progress = ProgressBar::new(num_games as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")
        {
            progress.set_style(style);
        }
        let results: Vec<GameResult> = (0..num_games)
            .into_par_iter()
            .map(|i| {
                let result = run_game(base_seed.wrapping_add(i as u64), false);
                progress.inc(1);
                result
            })
            .collect();
        progress.finish_and_clear();
        results
    };
    let elapsed = start.elapsed();

    let stats = aggregate_results(&results);
    let pct = |count: usize| stats.rate(count) * 100.0;

    println!("=== Results ===\n");
    println!("Player 1 wins: {:5.1}% ({})", pct(stats.player_one_wins), stats.player_one_wins);
    println!("Player 2 wins: {:5.1}% ({})", pct(stats.player_two_wins), stats.player_two_wins);
    println!("Draws:         {:5.1}% ({})", pct(stats.draws), stats.draws);
    if stats.blocked > 0 {
        println!("  of which locked before a play: {}", stats.blocked);
    }
    if stats.unfinished > 0 {
        println!("Unfinished:    {:5.1}% ({})", pct(stats.unfinished), stats.unfinished);
    }
    println!();
    println!("Average turns: {:.2}", stats.avg_turns);
    println!("Average plays: {:.2}", stats.avg_plays);
    println!("Average draws: {:.2}", stats.avg_draws);
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        num_games as f64 / elapsed.as_secs_f64()
    );
}

fn check_assets(dir: &str) {
    let index = match ArtworkIndex::from_dir(dir) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("✗ Failed to scan artwork: {}", e);
            std::process::exit(1);
        }
    };

    if index.is_complete() {
        println!("✓ All 28 tile images found in {}", index.root().display());
        return;
    }

    let missing = index.missing();
    println!("✗ Missing {} tile image(s) in {}:", missing.len(), index.root().display());
    for tile in missing {
        println!("  {} ({})", tile.artwork_name(), tile);
    }
    std::process::exit(1);
}
