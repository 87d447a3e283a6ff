//! Renders computed statistics and predictions into text panels and chart-ready
//! series. Everything here is a pure function of already-computed values;
//! nothing in this module looks at the session directly.

use crate::predict::Prediction;
use crate::recommend::Recommendation;
use crate::record::ScoreRecord;
use crate::stats::Statistics;

pub const NO_DATA: &str = "No match data available";
pub const NO_RECOMMENDATION: &str = "Add match data to see betting recommendations";

#[allow(clippy::cast_precision_loss)]
fn rate(count: usize, total: usize) -> String {
    if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", count as f64 / total as f64 * 100.0)
    }
}

pub fn general_stats_panel(stats: &Statistics, left: &str, right: &str) -> String {
    format!(
        "General Statistics\n  \
         Total Matches: {}\n  \
         {} Average: {}\n  \
         {} Average: {}\n  \
         Over Percentage: {}%\n  \
         Head-to-Head Record: {} {}-{}-{} {}",
        stats.total_matches,
        left,
        stats.team1_average,
        right,
        stats.team2_average,
        stats.over_percentage,
        left,
        stats.team1_wins,
        stats.draws,
        stats.team2_wins,
        right,
    )
}

pub fn win_rates_panel(stats: &Statistics, left: &str, right: &str) -> String {
    format!(
        "Win Rates\n  {}: {}%\n  {}: {}%\n  Draws: {}%",
        left,
        rate(stats.team1_wins, stats.total_matches),
        right,
        rate(stats.team2_wins, stats.total_matches),
        rate(stats.draws, stats.total_matches),
    )
}

/// The predicted-winner line compares the two probabilities strictly, so a tie
/// (both at 40) displays the right-hand side.
pub fn prediction_panel(
    prediction: &Prediction,
    left: &str,
    right: &str,
    betting_line: f64,
) -> String {
    let winner = if prediction.team1_win_prob > prediction.team2_win_prob {
        left
    } else {
        right
    };
    let probability = prediction.team1_win_prob.max(prediction.team2_win_prob);
    let position = if f64::from(prediction.total_score) > betting_line {
        "OVER"
    } else {
        "UNDER"
    };
    format!(
        "Next Match Prediction\n  \
         Predicted Winner: {} ({}% probability)\n  \
         Predicted Total: {} ({})",
        winner, probability, prediction.total_score, position,
    )
}

pub fn recommendation_panel(
    recommendation: &Recommendation,
    matchup: &str,
    over_percentage: &str,
) -> String {
    format!(
        "{}\n  Recommended Bet: {} ({} Confidence)\n  Historical Over: {}%",
        matchup, recommendation.bet, recommendation.confidence, over_percentage,
    )
}

/// One column of the total-score chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalScoreBar {
    pub label: String,
    pub total: u32,
    pub over: bool,
}

pub fn total_score_series(records: &[ScoreRecord], betting_line: f64) -> Vec<TotalScoreBar> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| TotalScoreBar {
            label: format!("Match {}", i + 1),
            total: record.total_score,
            over: f64::from(record.total_score) > betting_line,
        })
        .collect()
}

/// The two per-side lines of the performance chart.
pub fn team_score_series(records: &[ScoreRecord]) -> (Vec<u32>, Vec<u32>) {
    (
        records.iter().map(|r| r.team1_score).collect(),
        records.iter().map(|r| r.team2_score).collect(),
    )
}

pub fn total_score_panel(records: &[ScoreRecord], betting_line: f64) -> String {
    let mut panel = format!("Total Scores (line {})", betting_line);
    for bar in total_score_series(records, betting_line) {
        panel.push_str(&format!(
            "\n  {}: {} ({})",
            bar.label,
            bar.total,
            if bar.over { "over" } else { "under" },
        ));
    }
    panel
}

pub fn team_performance_panel(records: &[ScoreRecord], left: &str, right: &str) -> String {
    let (team1, team2) = team_score_series(records);
    let join = |scores: Vec<u32>| {
        scores
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Team Performance\n  {}: {}\n  {}: {}",
        left,
        join(team1),
        right,
        join(team2),
    )
}
