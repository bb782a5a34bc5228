//! Stats command - summarize the position graph

use std::collections::HashSet;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    plan::TreeBuilder,
    tictactoe::{Side, TOTAL_CELLS},
};

#[derive(Parser, Debug)]
#[command(about = "Show counts for the full position graph")]
pub struct StatsArgs {
    /// Also break counts down by number of marks on the board
    #[arg(long)]
    pub by_depth: bool,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let mut builder = TreeBuilder::new();
    let root = builder.build()?;
    let stats = builder.stats();

    print_section("Position Graph");
    print_kv("Positions", &format_number(stats.nodes));
    print_kv("Terminal", &format_number(stats.terminal_nodes));
    print_kv("Transpositions", &format_number(stats.memo_hits));
    print_kv("Circle replies", &format_number(stats.recommendations));
    if let Some(node) = builder.get(root) {
        print_kv("Root score", &format!("{:+.6}", node.score()));
    }

    if args.by_depth {
        let rows = depth_breakdown(&builder);
        print_section("By Depth");
        println!("  {:>5} {:>10} {:>10} {:>10}", "marks", "positions", "terminal", "replies");
        for (depth, row) in rows.iter().enumerate() {
            if row.positions == 0 {
                continue;
            }
            println!(
                "  {depth:>5} {:>10} {:>10} {:>10}",
                row.positions, row.terminal, row.replies
            );
        }
    }

    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct DepthRow {
    positions: usize,
    terminal: usize,
    replies: usize,
}

fn depth_breakdown(builder: &TreeBuilder) -> [DepthRow; TOTAL_CELLS + 1] {
    let mut rows = [DepthRow::default(); TOTAL_CELLS + 1];
    let Some(root) = builder.root() else {
        return rows;
    };

    // Walk from the root so every node is counted once
    let mut seen = HashSet::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        let Some(node) = builder.get(id) else {
            continue;
        };
        let depth = TOTAL_CELLS - node.position().empty_cells().count();
        let row = &mut rows[depth];
        row.positions += 1;
        if node.is_terminal() {
            row.terminal += 1;
        } else if node.who_moves() == Side::Circle {
            row.replies += 1;
        }
        stack.extend(node.children().values().copied());
    }
    rows
}
