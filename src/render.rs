//! Text renderings of the reply table

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Result, plan::RecommendationTable};

/// Default name of the emitted JavaScript lookup function
pub const DEFAULT_FUNCTION_NAME: &str = "getMoves";

/// Render the table as a JavaScript function returning an object literal.
///
/// Keys appear in ascending order and every pair is followed by a comma:
/// `function getMoves() { return {2:4,6:4,};}`
pub fn javascript(table: &RecommendationTable, function_name: &str) -> String {
    let mut out = String::with_capacity(32 + table.len() * 8);
    out.push_str(&format!("function {function_name}() {{ return {{"));
    for (key, cell) in table {
        out.push_str(&format!("{key}:{cell},"));
    }
    out.push_str("};}");
    out
}

#[derive(Serialize)]
struct TableExport<'a> {
    description: &'static str,
    side: &'static str,
    total_positions: usize,
    moves: BTreeMap<u16, &'a usize>,
}

/// Render the table as pretty-printed JSON keyed by position key
pub fn json(table: &RecommendationTable) -> Result<String> {
    let export = TableExport {
        description: "Circle reply per position key (base-3, cell 0 least significant)",
        side: "circle",
        total_positions: table.len(),
        moves: table.iter().map(|(key, cell)| (key.value(), cell)).collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{CanonicalKey, CellState, Position};

    fn sample_table() -> RecommendationTable {
        let cross_0 = Position::new().make_move(0, CellState::Cross).unwrap();
        let cross_1 = Position::new().make_move(1, CellState::Cross).unwrap();
        RecommendationTable::from([
            (CanonicalKey::of(&cross_1), 4),
            (CanonicalKey::of(&cross_0), 4),
        ])
    }

    #[test]
    fn test_javascript_matches_lookup_format() {
        assert_eq!(
            javascript(&sample_table(), DEFAULT_FUNCTION_NAME),
            "function getMoves() { return {2:4,6:4,};}"
        );
    }

    #[test]
    fn test_javascript_empty_table() {
        assert_eq!(
            javascript(&RecommendationTable::new(), "replies"),
            "function replies() { return {};}"
        );
    }

    #[test]
    fn test_json_export() {
        let rendered = json(&sample_table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["total_positions"], 2);
        assert_eq!(value["side"], "circle");
        assert_eq!(value["moves"]["2"], 4);
        assert_eq!(value["moves"]["6"], 4);
    }
}
