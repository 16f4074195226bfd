//! Trainer Binary
//!
//! One self-play training run straight against the models directory,
//! without going through the HTTP host.
//!
//! Options: --games, --config, --models, --output

use clap::Parser;
use colored::Colorize;
use gomoku::board::Board;
use gomoku::board::Move;
use gomoku::board::Stone;
use gomoku::config::Config;
use gomoku::save::Disk;
use gomoku::save::Output;
use gomoku::training::Trainer;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Train both Gomoku agents by self-play")]
struct Args {
    /// self-play games in this run
    #[arg(long)]
    games: Option<usize>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// directory holding the value tables
    #[arg(long)]
    models: Option<PathBuf>,
    /// directory receiving the final board dump
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::from_env()?,
        };
        if let Some(games) = self.games {
            config.training.games = games;
        }
        if let Some(models) = self.models {
            config.storage.models = models;
        }
        if let Some(output) = self.output {
            config.storage.output = output;
        }
        config.validate()?;
        Ok(config)
    }
}

fn paint(board: &Board) -> String {
    (0..board.size())
        .map(|r| {
            (0..board.size())
                .map(|c| match board.get(Move::from((r, c))) {
                    Some(Stone::Black) => "b".bright_red().bold().to_string(),
                    Some(Stone::White) => "w".bright_cyan().bold().to_string(),
                    None => ".".dimmed().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> anyhow::Result<()> {
    gomoku::log()?;
    let config = Args::parse().config()?;
    let disk = Disk::new(config.storage.models.clone());
    let output = Output::new(config.storage.output.clone());
    let trainer = Trainer::run(&disk, &output, &config)?;
    println!("{}", trainer.report());
    if let Some((board, outcome)) = trainer.last() {
        println!("{}\n{}", outcome.to_string().bold(), paint(board));
    }
    Ok(())
}
