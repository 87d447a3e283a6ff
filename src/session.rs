use crate::record::{parse_score, MatchKind, MatchStore, ScoreRecord};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::trace;

/// Display names for the three sides. Free text, no uniqueness constraint;
/// changing them never touches stored records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamLabels {
    pub team1: String,
    pub team2: String,
    pub opponent: String,
}

impl Default for TeamLabels {
    fn default() -> TeamLabels {
        TeamLabels {
            team1: "Team 1".to_string(),
            team2: "Team 2".to_string(),
            opponent: "Opponent".to_string(),
        }
    }
}

impl TeamLabels {
    /// The (left, right) display names for a matchup type.
    pub fn sides(&self, kind: MatchKind) -> (&str, &str) {
        match kind {
            MatchKind::HeadToHead => (&self.team1, &self.team2),
            MatchKind::Team1Opponent => (&self.team1, &self.opponent),
            MatchKind::Team2Opponent => (&self.team2, &self.opponent),
        }
    }

    pub fn matchup(&self, kind: MatchKind) -> String {
        let (left, right) = self.sides(kind);
        format!("{} vs {}", left, right)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinePoint {
    pub value: f64,
    pub timestamp: String,
}

/// The whole analysis state: team labels, the current betting line and its
/// history, and the three match sets.
#[derive(Debug)]
pub struct Session {
    pub user: String,
    pub timestamp: String,
    pub teams: TeamLabels,
    pub betting_line: f64,
    pub betting_line_history: Vec<LinePoint>,
    pub matches: MatchStore,
}

/// One form row: the two raw score inputs as entered.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRow(pub String, pub String);

/// Raw score rows for all three matchup types, mirroring the input form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreForm {
    #[serde(default)]
    pub head_to_head: Vec<ScoreRow>,
    #[serde(default)]
    pub team1_opponent: Vec<ScoreRow>,
    #[serde(default)]
    pub team2_opponent: Vec<ScoreRow>,
}

impl ScoreForm {
    fn rows(&self, kind: MatchKind) -> &[ScoreRow] {
        match kind {
            MatchKind::HeadToHead => &self.head_to_head,
            MatchKind::Team1Opponent => &self.team1_opponent,
            MatchKind::Team2Opponent => &self.team2_opponent,
        }
    }
}

/// A session document as read from disk. Every field is optional; absent ones
/// fall back to the same defaults the blank form had.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub teams: Option<TeamLabels>,
    #[serde(default)]
    pub betting_line: Option<f64>,
    #[serde(default)]
    pub scores: ScoreForm,
}

impl Session {
    pub fn new(user: String, timestamp: String) -> Session {
        Session {
            user,
            timestamp,
            teams: TeamLabels::default(),
            betting_line: 0.0,
            betting_line_history: Vec::new(),
            matches: MatchStore::default(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Session> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("unable to open session document {}", path.display()))?;
        let input = serde_json::from_reader(file)
            .with_context(|| format!("malformed session document {}", path.display()))?;
        Ok(Session::from_input(input, crate::time::now()))
    }

    pub fn from_input(input: SessionInput, timestamp: String) -> Session {
        let mut session = Session::new(
            input.user.unwrap_or_else(|| "anonymous".to_string()),
            timestamp,
        );
        if let Some(teams) = input.teams {
            session.set_teams(teams);
        }
        if let Some(line) = input.betting_line {
            session.set_betting_line(line);
        }
        session.submit_scores(&input.scores);
        session
    }

    pub fn set_teams(&mut self, teams: TeamLabels) {
        trace!(team1 = %teams.team1, team2 = %teams.team2, opponent = %teams.opponent);
        self.teams = teams;
    }

    /// Updates the current line and appends to the history. The history is
    /// append-only and never pruned.
    pub fn set_betting_line(&mut self, value: f64) {
        trace!(betting_line = %value);
        self.betting_line = value;
        self.betting_line_history.push(LinePoint {
            value,
            timestamp: self.timestamp.clone(),
        });
    }

    /// Parses the form rows into records and replaces all three match sets
    /// wholesale.
    pub fn submit_scores(&mut self, form: &ScoreForm) {
        for &kind in &MatchKind::ALL {
            let records = form
                .rows(kind)
                .iter()
                .map(|row| {
                    ScoreRecord::new(
                        parse_score(&row.0),
                        parse_score(&row.1),
                        self.timestamp.clone(),
                    )
                })
                .collect();
            self.matches.replace(kind, records);
        }
    }

    /// Empties the match sets and the line history. The current line value and
    /// the team labels survive a reset.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.betting_line_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionInput, TeamLabels};
    use crate::record::MatchKind;

    fn session() -> Session {
        Session::new("tester".to_string(), "2025-06-03 17:10:55".to_string())
    }

    fn input(json: &str) -> SessionInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_line_history_append_only() {
        let mut session = session();
        session.set_betting_line(7.0);
        session.set_betting_line(7.5);
        session.set_betting_line(7.0);
        assert_eq!(session.betting_line, 7.0);
        let values: Vec<f64> = session
            .betting_line_history
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, [7.0, 7.5, 7.0]);
    }

    #[test]
    fn test_reset_keeps_line_and_labels() {
        let mut session = session();
        session.set_teams(TeamLabels {
            team1: "Alpha".to_string(),
            team2: "Beta".to_string(),
            opponent: "Gamma".to_string(),
        });
        session.set_betting_line(42.5);
        session.submit_scores(&input(r#"{"scores": {"headToHead": [["5", "3"]]}}"#).scores);

        session.reset();
        assert!(session.matches.get(MatchKind::HeadToHead).is_empty());
        assert!(session.betting_line_history.is_empty());
        assert_eq!(session.betting_line, 42.5);
        assert_eq!(session.teams.team1, "Alpha");
    }

    #[test]
    fn test_submit_parses_rows_with_zero_default() {
        let mut session = session();
        session.submit_scores(
            &input(r#"{"scores": {"headToHead": [["5", "3"], ["", "oops"]]}}"#).scores,
        );
        let records = session.matches.get(MatchKind::HeadToHead);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total_score, 8);
        assert_eq!(records[1].team1_score, 0);
        assert_eq!(records[1].team2_score, 0);
        assert_eq!(records[0].timestamp, "2025-06-03 17:10:55");
    }

    #[test]
    fn test_from_input_defaults() {
        let session = Session::from_input(input("{}"), "t".to_string());
        assert_eq!(session.user, "anonymous");
        assert_eq!(session.teams, TeamLabels::default());
        assert_eq!(session.betting_line, 0.0);
        assert!(session.betting_line_history.is_empty());
    }

    #[test]
    fn test_from_input_records_line_history() {
        let session = Session::from_input(input(r#"{"bettingLine": 7.5}"#), "t".to_string());
        assert_eq!(session.betting_line, 7.5);
        assert_eq!(session.betting_line_history.len(), 1);
    }

    #[test]
    fn test_sides_and_matchup() {
        let labels = TeamLabels::default();
        assert_eq!(labels.sides(MatchKind::HeadToHead), ("Team 1", "Team 2"));
        assert_eq!(
            labels.sides(MatchKind::Team2Opponent),
            ("Team 2", "Opponent")
        );
        assert_eq!(labels.matchup(MatchKind::Team1Opponent), "Team 1 vs Opponent");
    }
}
