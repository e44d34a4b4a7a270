//! Text and graphviz rendering of positions and game trees

use std::fmt::Write;

use crate::tictactoe::{GameTree, Player, Position};

/// Font size of node labels per level; deeper levels fall back to 14.
const LEVEL_FONT_SIZES: [usize; 10] = [48, 48, 24, 14, 14, 14, 14, 14, 24, 48];

/// Return the position as a graphviz record label, for example
/// `{{x|o| }|{ |x|o}|{ | |x}}`.
pub fn dot_record(position: &Position) -> String {
    let rows: Vec<String> = position
        .cells()
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            format!("{{{}}}", cells.join("|"))
        })
        .collect();
    format!("{{{}}}", rows.join("|"))
}

/// Lay out boards horizontally, two spaces apart.
pub fn side_by_side(positions: &[Position]) -> String {
    let rendered: Vec<String> = positions.iter().map(Position::to_string).collect();
    let line_count = rendered.iter().map(|r| r.lines().count()).max().unwrap_or(0);

    (0..line_count)
        .map(|line| {
            rendered
                .iter()
                .map(|board| board.lines().nth(line).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// ASCII rendering of the whole tree: each level's boards, their indices,
/// and the children of each board.
pub fn to_text(tree: &GameTree) -> String {
    let mut out = String::new();
    for (level, positions) in tree.levels().iter().enumerate() {
        let _ = writeln!(out, "{}", side_by_side(positions).trim_end());

        let indices: Vec<String> = (0..positions.len()).map(|i| format!("{i:3}   ")).collect();
        let _ = writeln!(out, "{}", indices.join(" "));

        if let Some(links) = tree.links().get(level) {
            let children: Vec<String> = links
                .iter()
                .map(|targets| {
                    let listed: String = targets.iter().map(|t| format!("{t} ")).collect();
                    if listed.len() > 7 {
                        format!("{}..", &listed[..4])
                    } else {
                        listed
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", children.join(" "));
        }
        out.push('\n');
    }
    out
}

fn node_style(position: &Position) -> &'static str {
    if position.has_won(Player::X) {
        r#",color="blue",fontcolor="blue""#
    } else if position.has_won(Player::O) {
        r#",color="red",fontcolor="red""#
    } else if position.is_drawn() {
        r#",color="green",fontcolor="green""#
    } else {
        ""
    }
}

/// Return the game tree as a graphviz dot digraph.
///
/// Wins for X are drawn blue, wins for O red and draws green.
pub fn to_dot(tree: &GameTree) -> String {
    let mut out = String::new();
    out.push_str("digraph G {\n");
    out.push_str("graph [ranksep=3, rankdir=\"LR\"];\n");
    out.push_str("node [shape=record, fontname=\"monaco\",margin=0];\n");

    for (level, positions) in tree.levels().iter().enumerate() {
        let font_size = LEVEL_FONT_SIZES.get(level).copied().unwrap_or(14);
        let _ = writeln!(out, "/* Level {level} */");
        for (index, position) in positions.iter().enumerate() {
            let _ = writeln!(
                out,
                "V{index}L{level} [label=\"{}\",fontsize={font_size}{}];",
                dot_record(position),
                node_style(position)
            );
        }
    }

    for (level, links) in tree.links().iter().enumerate() {
        let _ = writeln!(out, "/* Level {level} */");
        for (index, targets) in links.iter().enumerate() {
            for target in targets {
                let _ = writeln!(out, "V{index}L{level} -> V{target}L{};", level + 1);
            }
        }
    }
    out.push('}');
    out
}
