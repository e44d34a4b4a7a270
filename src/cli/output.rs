//! Output formatting and progress bars for CLI

use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{render, tictactoe::GameTree};

/// How a finished tree is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz digraph (pipe through `dot -Tpdf`)
    Dot,
    /// ASCII boards per level with child indices
    Text,
    /// JSON with levels, links and strategy
    Json,
    /// Number of positions per level
    Sizes,
}

/// Create a progress bar for level expansion
pub fn create_level_progress(total_levels: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_levels);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} levels ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render `tree` in the requested format.
pub fn format_tree(tree: &GameTree, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Dot => render::to_dot(tree),
        OutputFormat::Text => render::to_text(tree),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tree).context("failed to serialize game tree")?
        }
        OutputFormat::Sizes => {
            let sizes = tree.level_sizes();
            let listed: Vec<String> = sizes.iter().map(usize::to_string).collect();
            format!(
                "{}\ntotal: {} positions, {} links",
                listed.join(" "),
                sizes.iter().sum::<usize>(),
                tree.link_count()
            )
        }
    };
    Ok(text)
}

/// Write the rendered tree to `output`, or stdout when no path is given.
pub fn write_tree(tree: &GameTree, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let text = format_tree(tree, format)?;
    match output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "tree written");
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Strategy;

    #[test]
    fn sizes_format_lists_levels() {
        let tree = GameTree::new(2, Strategy::Legal);
        let text = format_tree(&tree, OutputFormat::Sizes).unwrap();
        assert_eq!(text, "1 3 12\ntotal: 16 positions, 15 links");
    }

    #[test]
    fn json_format_contains_levels_and_links() {
        let tree = GameTree::new(1, Strategy::Legal);
        let text = format_tree(&tree, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["levels"][0][0], ".........");
        assert_eq!(value["links"][0][0], serde_json::json!([0, 1, 2]));
        assert_eq!(value["strategy"]["x"], "legal");
    }
}
