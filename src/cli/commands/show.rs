//! Show command - inspect a single position

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{format_grid, print_kv, print_section},
    plan::TreeBuilder,
    tictactoe::{CanonicalKey, Position, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Show the score, continuations and reply for one position")]
pub struct ShowArgs {
    /// Board as nine cells (X, O, .), rows may be separated by '/'
    pub board: String,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let position: Position = args.board.parse()?;

    let mut builder = TreeBuilder::new();
    builder.build()?;
    let Some(node) = builder.node(&position) else {
        bail!("position '{position}' is not reachable from the empty board with Cross moving first");
    };

    print_section(&format!("Position {}", CanonicalKey::of(&position)));
    println!("{}\n", format_grid(&position));
    print_kv(
        "To move",
        match node.who_moves() {
            Side::Circle => "Circle (O)",
            Side::Cross => "Cross (X)",
        },
    );
    print_kv("Score", &format!("{:+.6}", node.score()));

    if node.is_terminal() {
        println!("\n  (position is terminal)");
        return Ok(());
    }

    println!("\n  Continuations:");
    for (cell, &id) in node.children() {
        if let Some(child) = builder.get(id) {
            let marker = if node.recommended_move() == Some(*cell) {
                "  <- reply"
            } else {
                ""
            };
            println!("    cell {cell}: {:+.6}{marker}", child.score());
        }
    }

    if let Some(cell) = node.recommended_move() {
        print_kv("Recommended", &format!("cell {cell} (row {}, col {})", cell / 3, cell % 3));
    }

    Ok(())
}
