use serde::{Deserialize, Serialize};

/// One match's two side-scores plus the derived total. Records are replace-only,
/// so `total_score` is fixed at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub team1_score: u32,
    pub team2_score: u32,
    pub total_score: u32,
    pub timestamp: String,
}

impl ScoreRecord {
    pub fn new(team1_score: u32, team2_score: u32, timestamp: String) -> ScoreRecord {
        ScoreRecord {
            team1_score,
            team2_score,
            total_score: team1_score + team2_score,
            timestamp,
        }
    }
}

/// JS `parseInt(value) || 0` on the non-negative domain: skip leading whitespace,
/// take the longest leading run of ASCII digits, 0 for everything else.
pub fn parse_score(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    HeadToHead,
    Team1Opponent,
    Team2Opponent,
}

impl MatchKind {
    pub const ALL: [MatchKind; 3] = [
        MatchKind::HeadToHead,
        MatchKind::Team1Opponent,
        MatchKind::Team2Opponent,
    ];
}

/// The three named match sets, each in insertion (chronological) order. Sets are
/// replaced wholesale on submission, never appended to incrementally.
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStore {
    pub head_to_head: Vec<ScoreRecord>,
    pub team1_opponent: Vec<ScoreRecord>,
    pub team2_opponent: Vec<ScoreRecord>,
}

impl MatchStore {
    pub fn get(&self, kind: MatchKind) -> &[ScoreRecord] {
        match kind {
            MatchKind::HeadToHead => &self.head_to_head,
            MatchKind::Team1Opponent => &self.team1_opponent,
            MatchKind::Team2Opponent => &self.team2_opponent,
        }
    }

    pub fn replace(&mut self, kind: MatchKind, records: Vec<ScoreRecord>) {
        match kind {
            MatchKind::HeadToHead => self.head_to_head = records,
            MatchKind::Team1Opponent => self.team1_opponent = records,
            MatchKind::Team2Opponent => self.team2_opponent = records,
        }
    }

    pub fn clear(&mut self) {
        self.head_to_head.clear();
        self.team1_opponent.clear();
        self.team2_opponent.clear();
    }
}
