use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chess_rules::core::promotion::{self, parse_choice, CHOICES};
use chess_rules::{Game, MoveOutcome, Square};
use log::info;
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;

const USAGE: &str = "usage: chess [random <plies> [seed]]";

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None => interactive(),
        Some("random") => {
            let plies: usize = args
                .get(2)
                .context(USAGE)?
                .parse()
                .context("plies must be a number")?;
            let seed: u64 = args
                .get(3)
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("seed must be a number")?
                .unwrap_or(0);
            random_game(plies, seed)
        }
        Some(other) => bail!("unknown mode `{other}`\n{USAGE}"),
    }
}

fn describe(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Applied { captured, promoted } => {
            let mut text = String::from("ok");
            if let Some(kind) = captured {
                text.push_str(&format!(", captured {kind}"));
            }
            if let Some(kind) = promoted {
                text.push_str(&format!(", promoted to {kind}"));
            }
            text
        }
        other => other.message().to_owned(),
    }
}

fn random_game(plies: usize, seed: u64) -> Result<()> {
    info!("Random game: {plies} plies, seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    for ply in 1..=plies {
        let color = game.active_color();
        let chosen = game
            .board()
            .iter_pieces()
            .filter(|(_, piece)| piece.color == color)
            .flat_map(|(source, _)| {
                game.legal_destinations(source)
                    .into_iter()
                    .map(move |destination| (source, destination))
            })
            .choose(&mut rng);
        let Some((source, destination)) = chosen else {
            println!("{color} has no moves left");
            break;
        };
        let request = game
            .request(source, destination)
            .context("moving piece vanished from the board")?;
        let outcome = match game.submit(request) {
            MoveOutcome::PromotionPending { .. } => game
                .resolve_promotion(CHOICES.choose(&mut rng).copied())
                .context("promotion wasn't pending")?,
            outcome => outcome,
        };
        println!("{ply}. {color} {source}-{destination}: {}", describe(&outcome));
    }
    println!("{}", game.board());
    Ok(())
}

fn play(game: &mut Game, from: &str, to: &str, choice: Option<&str>) -> Result<MoveOutcome> {
    let source: Square = from.parse()?;
    let destination: Square = to.parse()?;
    let mut request = game
        .request(source, destination)
        .with_context(|| format!("no piece on {source}"))?;
    if let Some(choice) = choice {
        request = request.with_promotion(promotion::resolve(parse_choice(choice)));
    }
    Ok(game.submit(request))
}

fn interactive() -> Result<()> {
    let mut game = Game::new();
    println!("{}\n{} to move", game.board(), game.active_color());
    let mut stdout = io::stdout();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let words: Vec<_> = line.split_whitespace().collect();
        let outcome = match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["board"] => {
                println!("{}", game.board());
                continue;
            }
            ["new"] => {
                game.reset();
                println!("{}", game.board());
                continue;
            }
            ["moves", square] => {
                match square.parse::<Square>() {
                    Ok(square) => {
                        let moves: Vec<_> = game
                            .legal_destinations(square)
                            .iter()
                            .map(ToString::to_string)
                            .collect();
                        println!("{}", moves.join(" "));
                    }
                    Err(err) => println!("{err}"),
                }
                continue;
            }
            [choice] if game.pending_promotion().is_some() => {
                game.resolve_promotion(parse_choice(choice))
                    .context("promotion wasn't pending")?
            }
            [from, to, rest @ ..] => match play(&mut game, from, to, rest.first().copied()) {
                Ok(outcome) => outcome,
                Err(err) => {
                    println!("{err:#}");
                    continue;
                }
            },
            _ => {
                println!("commands: <from> <to> [promotion], moves <square>, board, new, quit");
                continue;
            }
        };
        println!("{}", describe(&outcome));
        if outcome.is_applied() {
            println!("{}\n{} to move", game.board(), game.active_color());
        }
        stdout.flush()?;
    }
    Ok(())
}
