// Colored terminal output for comparison results and token listings.
//
// main.rs decides what to show; this module decides how it looks.

use colored::Colorize;

use crate::pipeline::report::Comparison;
use crate::text::normalize::TokenSequence;

use super::{format_percent, SimilarityBand};

/// Display a comparison: the headline score, its band, and the top shared terms.
pub fn display_comparison(comparison: &Comparison, top_terms: usize) {
    let band = SimilarityBand::from_score(comparison.score);

    println!(
        "\n{} {}  {}",
        "Similarity score:".bold(),
        colorize_band(band, &format_percent(comparison.score)),
        format!("({band})").dimmed()
    );
    println!(
        "  Tokens: {} in text, {} in reference, {} distinct",
        comparison.text_tokens, comparison.reference_tokens, comparison.vocabulary_size
    );

    if comparison.has_empty_side() {
        println!(
            "  {}",
            "One text has no comparable words after stop-word removal.".yellow()
        );
        return;
    }

    if comparison.shared_terms.is_empty() || top_terms == 0 {
        return;
    }

    println!("\n  Shared terms (share of score):");
    for term in comparison.shared_terms.iter().take(top_terms) {
        println!(
            "    {:<24} {:>7}",
            term.term,
            format_percent(term.contribution).dimmed()
        );
    }
    let hidden = comparison.shared_terms.len().saturating_sub(top_terms);
    if hidden > 0 {
        println!("    {}", format!("... and {hidden} more").dimmed());
    }
}

/// Display a normalized token sequence.
pub fn display_tokens(tokens: &TokenSequence) {
    if tokens.is_empty() {
        println!("{}", "(no tokens survive normalization)".dimmed());
    } else {
        println!("{tokens}");
    }
}

/// Colorize text by similarity band.
fn colorize_band(band: SimilarityBand, text: &str) -> colored::ColoredString {
    match band {
        SimilarityBand::High => text.red().bold(),
        SimilarityBand::Moderate => text.bright_red(),
        SimilarityBand::Low => text.yellow(),
        SimilarityBand::Minimal => text.green(),
    }
}
