use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::Sentiment;

/// Render a colored terminal report: one row per instance, summary counts.
pub fn render(
    instances: &[String],
    labels: &[Sentiment],
    endpoint_url: &str,
    quiet: bool,
) -> Result<()> {
    let positive = labels.iter().filter(|l| **l == Sentiment::Positive).count();
    let negative = labels.len() - positive;

    if quiet {
        println!(
            "Total: {}  Positive: {}  Negative: {}",
            labels.len(),
            positive.to_string().green(),
            negative.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "sentiment-relay".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Endpoint: {}\n", endpoint_url);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Instance").add_attribute(Attribute::Bold),
            Cell::new("Sentiment").add_attribute(Attribute::Bold),
        ]);

    for (i, (text, label)) in instances.iter().zip(labels).enumerate() {
        let (label_str, label_color) = match label {
            Sentiment::Positive => ("✓ positive", Color::Green),
            Sentiment::Negative => ("✗ negative", Color::Red),
        };

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(truncate(text, 60)),
            Cell::new(label_str)
                .fg(label_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
    println!(
        "\n {} instances  {} positive  {} negative",
        labels.len(),
        positive.to_string().green(),
        negative.to_string().red(),
    );

    Ok(())
}

/// Keep table rows readable for long review texts.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(80);
        let cut = truncate(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with('…'));
    }
}
