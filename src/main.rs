use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;

use lottery_stats::stats::{build_report, verify_report};
use lottery_stats::store;
use lottery_stats::{Draw, DrawHistory, GameType, LotteryError};

#[derive(Parser)]
#[command(name = "lottery-stats")]
#[command(about = "Analyze lottery draw histories and build statistics reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build statistics reports for both games
    Stats {
        /// Mega Millions draw history (JSON)
        #[arg(long, default_value = "data/mm.json")]
        mm_input: PathBuf,

        /// Powerball draw history (JSON)
        #[arg(long, default_value = "data/pb.json")]
        pb_input: PathBuf,

        /// Output file for Mega Millions statistics
        #[arg(long, default_value = "data/mm-stats.json")]
        mm_output: PathBuf,

        /// Output file for Powerball statistics
        #[arg(long, default_value = "data/pb-stats.json")]
        pb_output: PathBuf,
    },

    /// Display information about a draw history file
    Info {
        /// Input file to inspect
        input: PathBuf,
    },

    /// Validate a draw history file
    Validate {
        /// Input file to validate
        input: PathBuf,

        /// Check every record against this game (mega-millions or powerball)
        /// instead of each record's own declared type
        #[arg(long)]
        game: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            mm_input,
            pb_input,
            mm_output,
            pb_output,
        } => {
            stats(&mm_input, &pb_input, &mm_output, &pb_output)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
        Commands::Validate { input, game } => {
            validate(&input, game.as_deref())?;
        }
    }

    Ok(())
}

fn stats(
    mm_input: &PathBuf,
    pb_input: &PathBuf,
    mm_output: &PathBuf,
    pb_output: &PathBuf,
) -> Result<()> {
    println!("Reading Mega Millions draws from {}", mm_input.display());
    let mm_draws =
        store::read_draws_or_empty(mm_input).context("Failed to read Mega Millions draws")?;

    println!("Reading Powerball draws from {}", pb_input.display());
    let pb_draws =
        store::read_draws_or_empty(pb_input).context("Failed to read Powerball draws")?;

    println!(
        "Found {} Mega Millions draws and {} Powerball draws",
        mm_draws.len(),
        pb_draws.len()
    );

    let mm_history = DrawHistory::from_draws(GameType::MegaMillions, mm_draws);
    let pb_history = DrawHistory::from_draws(GameType::Powerball, pb_draws);

    // The two games share no data; analyze them side by side.
    let (mm_report, pb_report) = rayon::join(
        || build_report(&mm_history),
        || build_report(&pb_history),
    );

    for report in [&mm_report, &pb_report] {
        match verify_report(report) {
            Ok(()) => println!(
                "{}: frequency sums verified ({} draws)",
                report.game_type, report.total_draws
            ),
            Err(e) => println!(
                "Warning: {} report failed verification: {}",
                report.game_type, e
            ),
        }
    }

    println!("Writing Mega Millions statistics to {}", mm_output.display());
    store::write_report(&mm_report, mm_output)
        .context("Failed to write Mega Millions statistics")?;

    println!("Writing Powerball statistics to {}", pb_output.display());
    store::write_report(&pb_report, pb_output).context("Failed to write Powerball statistics")?;

    println!("Done!");
    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let draws = store::read_draws(input).context("Failed to read draw file")?;

    println!("Draw file: {}", input.display());
    println!("Records: {}", draws.len());
    println!();

    for game in [GameType::MegaMillions, GameType::Powerball] {
        let game_draws: Vec<Draw> = draws
            .iter()
            .filter(|d| d.game_type == game)
            .cloned()
            .collect();
        if game_draws.is_empty() {
            continue;
        }

        let history = DrawHistory::from_draws(game, game_draws);
        println!("{}: {} draws", game, history.total_draws());
        if let (Some(latest), Some(oldest)) = (history.latest(), history.draws().last()) {
            println!("  From {} to {}", oldest.date, latest.date);
            println!(
                "  Latest numbers: {:?} + {}",
                latest.numbers, latest.special_ball
            );
        }
        println!();
    }

    Ok(())
}

fn validate(input: &PathBuf, game: Option<&str>) -> Result<()> {
    let forced = match game {
        Some(name) => Some(
            GameType::from_name(name)
                .ok_or_else(|| LotteryError::UnknownGame(name.to_string()))?,
        ),
        None => None,
    };

    let content = std::fs::read_to_string(input).context("Failed to read draw file")?;
    let (draws, mut issues) =
        store::parse_draws(&content).context("Failed to parse draw file")?;

    println!("Draw file: {}", input.display());
    println!("  {} records parsed", draws.len());

    let mut seen = HashSet::new();
    for draw in &draws {
        if let Some(forced) = forced {
            if draw.game_type != forced {
                issues.push(format!(
                    "{}: {} draw in a {} file",
                    draw.date, draw.game_type, forced
                ));
            }
        }
        let config = forced.unwrap_or(draw.game_type).config();
        if let Err(e) = draw.check(&config) {
            issues.push(format!("{}: {}", draw.date, e));
        }
        if !seen.insert((draw.date, draw.numbers, draw.special_ball)) {
            issues.push(format!("{}: duplicate draw", draw.date));
        }
    }

    if issues.is_empty() {
        println!("  No issues found");
    } else {
        println!("  Issues found:");
        for issue in &issues {
            println!("    - {}", issue);
        }
    }

    Ok(())
}
