use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBadge {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl ScoreBadge {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBadge::Excellent,
            70..=79 => ScoreBadge::Good,
            50..=69 => ScoreBadge::Fair,
            30..=49 => ScoreBadge::Poor,
            _ => ScoreBadge::VeryPoor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBadge::Excellent => "Excellent",
            ScoreBadge::Good => "Good",
            ScoreBadge::Fair => "Fair",
            ScoreBadge::Poor => "Poor",
            ScoreBadge::VeryPoor => "Very Poor",
        }
    }
}

/// Coarse traffic-light grouping for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Gold,
    Red,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => ScoreBand::Green,
            50..=69 => ScoreBand::Gold,
            _ => ScoreBand::Red,
        }
    }
}
