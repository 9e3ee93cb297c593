use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flover::{Game, JsonFileStore, Mode, Settings};

type QuizGame = Game<JsonFileStore>;

#[derive(Parser, Debug)]
#[command(version, about = "Lyric fill-in-the-blank quiz")]
struct Args {
    /// Catalog file for easy mode
    #[arg(long)]
    easy_catalog: Option<PathBuf>,
    /// Catalog file for hard mode
    #[arg(long)]
    hard_catalog: Option<PathBuf>,
    /// Leaderboard file
    #[arg(long)]
    leaderboard: Option<PathBuf>,
    /// Print the leaderboard and exit
    #[arg(long)]
    show_leaderboard: bool,
    /// Remove the leaderboard entry at this rank (1-based) and exit
    #[arg(long, value_name = "RANK")]
    remove_entry: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = Settings::default();
    if let Some(path) = args.easy_catalog {
        settings.easy.catalog_path = path;
    }
    if let Some(path) = args.hard_catalog {
        settings.hard.catalog_path = path;
    }
    if let Some(path) = args.leaderboard {
        settings.leaderboard_path = path;
    }

    let mut game = Game::new(settings);

    if args.show_leaderboard {
        print_leaderboard(&game);
        return Ok(());
    }
    if let Some(rank) = args.remove_entry {
        if rank == 0 {
            bail!("Ranks start at 1");
        }
        game.leaderboard().remove_at(rank - 1)?;
        print_leaderboard(&game);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("🎵 Path of Flover — fill in the missing lyric!");
    loop {
        let mode = match prompt_mode(&mut input)? {
            Some(mode) => mode,
            None => break,
        };
        game.begin(mode)?;
        play(&mut game, &mut input)?;
        print_summary(&game);

        if game.qualifies_for_leaderboard() {
            println!("\n🏅 You made the top 10! Enter your name:");
            let name = read_line(&mut input)?.unwrap_or_default();
            game.record_score(&name)?;
            print_leaderboard(&game);
        }

        println!("\nPlay again? [y/N]");
        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => game.reset(),
            _ => break,
        }
    }
    Ok(())
}

fn play(game: &mut QuizGame, input: &mut impl BufRead) -> Result<()> {
    while !game.is_over() {
        let view = match game.current_question() {
            Some(view) => view,
            None => break,
        };
        println!("\n🎶 {} — question {}/{}", view.song, view.number, view.total);
        println!("{}", view.question);
        print!("[{}s] your answer: ", view.time_remaining.as_secs());
        io::stdout().flush()?;

        let started = Instant::now();
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };
        game.tick(started.elapsed());

        // The countdown may have consumed the question while the player
        // was typing; their answer then applies to nothing.
        let still_current = game.current_question().map(|v| v.number) == Some(view.number);
        if still_current {
            if game.guess(&line)? {
                println!("✅ Correct!");
            } else {
                println!("❌ Wrong.");
            }
        } else {
            println!("⏰ Time's up!");
        }
    }
    Ok(())
}

fn prompt_mode(input: &mut impl BufRead) -> Result<Option<Mode>> {
    loop {
        println!("\nChoose a mode: [e]asy or [h]ard (q to quit)");
        let choice = match read_line(input)? {
            Some(choice) => choice,
            None => return Ok(None),
        };
        match choice.trim().to_lowercase().as_str() {
            "e" | "easy" => return Ok(Some(Mode::Easy)),
            "h" | "hard" => return Ok(Some(Mode::Hard)),
            "q" | "quit" => return Ok(None),
            _ => println!("Please answer e or h."),
        }
    }
}

fn print_summary(game: &QuizGame) {
    if let Some(summary) = game.summary() {
        println!("\n🎉 Done! Score: {}/{}", summary.score, summary.total);
        println!("\n📖 Answers:");
        for outcome in &summary.breakdown {
            let mark = if outcome.correct { "O" } else { "X" };
            println!("  {} [{}] {}", mark, outcome.song, outcome.revealed);
        }
    }
}

fn print_leaderboard(game: &QuizGame) {
    let entries = game.leaderboard().load();
    if entries.is_empty() {
        println!("\n🏆 The leaderboard is empty.");
        return;
    }
    println!("\n🏆 Top 10");
    for (rank, entry) in entries.iter().enumerate() {
        println!("  {:>2}. {:<8} {}", rank + 1, entry.name, entry.score);
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_owned()))
}
