use crate::record::ScoreRecord;
use serde::Serialize;
use std::fmt;
use tracing::{instrument, trace};

/// How many trailing records feed the projection.
const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Team1Win,
    Team2Win,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Team1Win => "Team 1 Win",
            Outcome::Team2Win => "Team 2 Win",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub team1_win_prob: u8,
    pub team2_win_prob: u8,
    pub outcome: Outcome,
    pub total_score: u32,
}

/// Naive recency projection: mean each side's score over the trailing window
/// (up to [`TREND_WINDOW`] records) and hand the strictly higher mean a 60/40
/// edge. Equal means leave both probabilities at 40 and the outcome label falls
/// through to team 2 — a quirk carried over from the tool this replaces.
///
/// Returns `None` for an empty set.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[instrument(skip(records), fields(matches = records.len()))]
pub fn predict_next_match(records: &[ScoreRecord]) -> Option<Prediction> {
    if records.is_empty() {
        return None;
    }

    let window = &records[records.len().saturating_sub(TREND_WINDOW)..];
    let len = window.len() as f64;
    let team1_avg = window
        .iter()
        .map(|r| f64::from(r.team1_score))
        .sum::<f64>()
        / len;
    let team2_avg = window
        .iter()
        .map(|r| f64::from(r.team2_score))
        .sum::<f64>()
        / len;
    trace!(%team1_avg, %team2_avg, window = window.len());

    Some(Prediction {
        team1_win_prob: if team1_avg > team2_avg { 60 } else { 40 },
        team2_win_prob: if team2_avg > team1_avg { 60 } else { 40 },
        outcome: if team1_avg > team2_avg {
            Outcome::Team1Win
        } else {
            Outcome::Team2Win
        },
        total_score: (team1_avg + team2_avg).round() as u32,
    })
}
