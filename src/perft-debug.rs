use std::{env, fs};

use anyhow::{bail, Context};
use log::info;

use chess_rules::utils::{perft_divide, PerftResult};
use chess_rules::{Board, Color, GameState};

// usage: perft-debug <depth> [expected] [layout-file] [w|b]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let depth: usize = args
        .get(1)
        .context("missing depth argument")?
        .parse()
        .context("depth must be a number")?;
    let expected: Option<usize> = args
        .get(2)
        .map(|arg| arg.parse())
        .transpose()
        .context("expected node count must be a number")?;
    let board = match args.get(3) {
        Some(path) => {
            let layout = fs::read_to_string(path)
                .with_context(|| format!("failed to read layout from {path}"))?;
            Board::from_layout(&layout).with_context(|| format!("bad layout in {path}"))?
        }
        None => Board::default(),
    };
    let side = match args.get(4).map(String::as_str) {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => bail!("side to move must be `w` or `b`, got `{other}`"),
    };

    let mut game = GameState::with_board(board, side);
    info!("Running perft to depth {depth}");
    let mut total = PerftResult::default();
    for (_move, result) in perft_divide(&mut game, depth) {
        println!(" {_move} : {result}");
        total += result;
    }
    println!("+ total: {total}");

    match expected {
        Some(expected) if expected != total.nodes => {
            bail!("found {} nodes, expected {expected}", total.nodes)
        }
        _ => Ok(()),
    }
}
