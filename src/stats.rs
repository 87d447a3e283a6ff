use crate::record::ScoreRecord;
use serde::Serialize;
use tracing::instrument;

/// Aggregate metrics for one match set against the current betting line. The
/// rate fields are kept as one-decimal strings because that is exactly what the
/// panels and the export document show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_matches: usize,
    pub team1_average: String,
    pub team2_average: String,
    pub over_percentage: String,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub draws: usize,
}

impl Default for Statistics {
    fn default() -> Statistics {
        Statistics {
            total_matches: 0,
            team1_average: "0.0".to_string(),
            team2_average: "0.0".to_string(),
            over_percentage: "0.0".to_string(),
            team1_wins: 0,
            team2_wins: 0,
            draws: 0,
        }
    }
}

impl Statistics {
    /// The over percentage back as a number, for the recommendation policy.
    /// Parsing the formatted string keeps the policy working on the same
    /// rounded value the panels display.
    pub fn over_percentage_value(&self) -> f64 {
        self.over_percentage.parse().unwrap_or(0.0)
    }
}

fn one_decimal(x: f64) -> String {
    format!("{:.1}", x)
}

/// Reduces a match set to its summary metrics. An empty set yields the zeroed
/// default rather than dividing by zero.
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(records), fields(matches = records.len()))]
pub fn calculate_statistics(records: &[ScoreRecord], betting_line: f64) -> Statistics {
    if records.is_empty() {
        return Statistics::default();
    }

    let len = records.len() as f64;
    let team1_total: u32 = records.iter().map(|r| r.team1_score).sum();
    let team2_total: u32 = records.iter().map(|r| r.team2_score).sum();
    let over_count = records
        .iter()
        .filter(|r| f64::from(r.total_score) > betting_line)
        .count();

    Statistics {
        total_matches: records.len(),
        team1_average: one_decimal(f64::from(team1_total) / len),
        team2_average: one_decimal(f64::from(team2_total) / len),
        over_percentage: one_decimal(over_count as f64 / len * 100.0),
        team1_wins: records
            .iter()
            .filter(|r| r.team1_score > r.team2_score)
            .count(),
        team2_wins: records
            .iter()
            .filter(|r| r.team2_score > r.team1_score)
            .count(),
        draws: records
            .iter()
            .filter(|r| r.team1_score == r.team2_score)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_statistics, Statistics};
    use crate::record::ScoreRecord;
    use assert_approx_eq::assert_approx_eq;

    fn records(pairs: &[(u32, u32)]) -> Vec<ScoreRecord> {
        pairs
            .iter()
            .map(|&(a, b)| ScoreRecord::new(a, b, String::new()))
            .collect()
    }

    #[test]
    fn test_empty_set_defaults() {
        let stats = calculate_statistics(&[], 7.0);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.team1_average, "0.0");
        assert_eq!(stats.team2_average, "0.0");
        assert_eq!(stats.over_percentage, "0.0");
        assert_eq!(
            (stats.team1_wins, stats.team2_wins, stats.draws),
            (0, 0, 0)
        );
    }

    #[test]
    fn test_known_set_against_line_7() {
        // totals [8, 4, 7]; only 8 clears a line of 7 under strict greater-than
        let stats = calculate_statistics(&records(&[(5, 3), (2, 2), (6, 1)]), 7.0);
        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.team1_average, "4.3");
        assert_eq!(stats.team2_average, "2.0");
        assert_eq!(stats.over_percentage, "33.3");
        assert_eq!(stats.team1_wins, 2);
        assert_eq!(stats.team2_wins, 0);
        assert_eq!(stats.draws, 1);
        assert_approx_eq!(stats.over_percentage_value(), 33.3);
    }

    #[test]
    fn test_outcomes_partition_the_set() {
        let stats = calculate_statistics(&records(&[(5, 3), (2, 2), (6, 1), (0, 9), (4, 4)]), 5.0);
        assert_eq!(
            stats.team1_wins + stats.team2_wins + stats.draws,
            stats.total_matches
        );
    }

    #[test]
    fn test_over_percentage_monotonic_in_over_records() {
        let mut pairs = vec![(2u32, 2u32), (1, 1)];
        let mut previous = calculate_statistics(&records(&pairs), 7.0).over_percentage_value();
        for _ in 0..5 {
            pairs.push((6, 6));
            let current = calculate_statistics(&records(&pairs), 7.0).over_percentage_value();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_line_comparison_is_strict() {
        let exactly_on_line = calculate_statistics(&records(&[(4, 3)]), 7.0);
        assert_eq!(exactly_on_line.over_percentage, "0.0");
        let above = calculate_statistics(&records(&[(4, 3)]), 6.5);
        assert_eq!(above.over_percentage, "100.0");
    }
}
