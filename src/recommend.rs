use std::fmt;

// Fixed policy thresholds on the historical over percentage.
const OVER_THRESHOLD: f64 = 65.0;
const UNDER_THRESHOLD: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bet {
    Over(f64),
    Under(f64),
    NoBet,
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bet::Over(line) => write!(f, "OVER {}", line),
            Bet::Under(line) => write!(f, "UNDER {}", line),
            Bet::NoBet => f.write_str("NO BET"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High => "High",
            Confidence::Low => "Low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub bet: Bet,
    pub confidence: Confidence,
}

/// Qualitative betting call from the historical over percentage. The
/// comparisons are strict, so exactly 65 or 35 lands on no bet.
pub fn recommend(over_percentage: f64, betting_line: f64) -> Recommendation {
    if over_percentage > OVER_THRESHOLD {
        Recommendation {
            bet: Bet::Over(betting_line),
            confidence: Confidence::High,
        }
    } else if over_percentage < UNDER_THRESHOLD {
        Recommendation {
            bet: Bet::Under(betting_line),
            confidence: Confidence::High,
        }
    } else {
        Recommendation {
            bet: Bet::NoBet,
            confidence: Confidence::Low,
        }
    }
}
