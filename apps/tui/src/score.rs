//! Five-tier score classification shared by score text, rating badge and
//! dimension bars. Tiers are percentage-based, never absolute.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Adequate,
    Weak,
    Poor,
}

impl ScoreTier {
    /// Classifies `score / max_score`: >=90% top tier, then 75/60/45.
    pub fn classify(score: f64, max_score: f64) -> Self {
        if max_score <= 0.0 {
            return ScoreTier::Poor;
        }
        let percentage = score / max_score * 100.0;
        if percentage >= 90.0 {
            ScoreTier::Excellent
        } else if percentage >= 75.0 {
            ScoreTier::Good
        } else if percentage >= 60.0 {
            ScoreTier::Adequate
        } else if percentage >= 45.0 {
            ScoreTier::Weak
        } else {
            ScoreTier::Poor
        }
    }

    /// Tier for the rating badge, derived from the rating label text.
    pub fn from_rating(rating: &str) -> Self {
        if rating.contains("Excellent") {
            ScoreTier::Excellent
        } else if rating.contains("Good") {
            ScoreTier::Good
        } else if rating.contains("Adequate") {
            ScoreTier::Adequate
        } else if rating.contains("Weak") {
            ScoreTier::Weak
        } else {
            ScoreTier::Poor
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ScoreTier::Excellent => Color::Green,
            ScoreTier::Good => Color::Blue,
            ScoreTier::Adequate => Color::Yellow,
            ScoreTier::Weak => Color::Rgb(255, 165, 0), // orange
            ScoreTier::Poor => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_out_of_100() {
        assert_eq!(ScoreTier::classify(90.0, 100.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::classify(89.0, 100.0), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(75.0, 100.0), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(74.0, 100.0), ScoreTier::Adequate);
        assert_eq!(ScoreTier::classify(60.0, 100.0), ScoreTier::Adequate);
        assert_eq!(ScoreTier::classify(59.0, 100.0), ScoreTier::Weak);
        assert_eq!(ScoreTier::classify(45.0, 100.0), ScoreTier::Weak);
        assert_eq!(ScoreTier::classify(44.0, 100.0), ScoreTier::Poor);
    }

    #[test]
    fn tiers_are_percentage_based_for_any_max_score() {
        // 18/20 = 90%
        assert_eq!(ScoreTier::classify(18.0, 20.0), ScoreTier::Excellent);
        // 17/20 = 85%
        assert_eq!(ScoreTier::classify(17.0, 20.0), ScoreTier::Good);
        // 9/15 = 60%
        assert_eq!(ScoreTier::classify(9.0, 15.0), ScoreTier::Adequate);
        // 4/10 = 40%
        assert_eq!(ScoreTier::classify(4.0, 10.0), ScoreTier::Poor);
    }

    #[test]
    fn zero_max_score_is_poor_not_a_panic() {
        assert_eq!(ScoreTier::classify(5.0, 0.0), ScoreTier::Poor);
    }

    #[test]
    fn rating_labels_map_to_tiers() {
        assert_eq!(
            ScoreTier::from_rating("Excellent - Ready for production with minor refinements"),
            ScoreTier::Excellent
        );
        assert_eq!(
            ScoreTier::from_rating("Good - Needs targeted improvements in specific areas"),
            ScoreTier::Good
        );
        assert_eq!(ScoreTier::from_rating("something else"), ScoreTier::Poor);
    }
}
