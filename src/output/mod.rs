// Output formatting: percentages, similarity bands and terminal display.

pub mod terminal;

/// Format a [0.0, 1.0] score the way the checker always has: a percentage
/// with two decimals ("71.68%").
pub fn format_percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Coarse label for a similarity score, used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    Minimal,
    Low,
    Moderate,
    High,
}

impl SimilarityBand {
    /// Determine the band from a score in [0.0, 1.0].
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.80 => SimilarityBand::High,
            s if s >= 0.50 => SimilarityBand::Moderate,
            s if s >= 0.20 => SimilarityBand::Low,
            _ => SimilarityBand::Minimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::Minimal => "Minimal",
            SimilarityBand::Low => "Low",
            SimilarityBand::Moderate => "Moderate",
            SimilarityBand::High => "High",
        }
    }
}

impl std::fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.716_845), "71.68%");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SimilarityBand::from_score(0.80), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_score(0.7999), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.50), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.20), SimilarityBand::Low);
        assert_eq!(SimilarityBand::from_score(0.1999), SimilarityBand::Minimal);
        assert_eq!(SimilarityBand::from_score(0.0), SimilarityBand::Minimal);
    }
}
