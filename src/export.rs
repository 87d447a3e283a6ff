use crate::record::{MatchKind, MatchStore};
use crate::session::{LinePoint, Session, TeamLabels};
use crate::stats::{calculate_statistics, Statistics};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// The exported analysis document. Field names follow the established export
/// format, so downstream consumers of the old tool keep working.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    metadata: Metadata<'a>,
    teams: &'a TeamLabels,
    betting_line: f64,
    betting_line_history: &'a [LinePoint],
    matches: &'a MatchStore,
    statistics: StatisticsBlock,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    export_date: &'a str,
    user: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsBlock {
    head_to_head: Statistics,
    team1_opponent: Statistics,
    team2_opponent: Statistics,
}

impl<'a> ExportDocument<'a> {
    pub fn build(session: &'a Session) -> ExportDocument<'a> {
        let stats = |kind| calculate_statistics(session.matches.get(kind), session.betting_line);
        ExportDocument {
            metadata: Metadata {
                export_date: &session.timestamp,
                user: &session.user,
            },
            teams: &session.teams,
            betting_line: session.betting_line,
            betting_line_history: &session.betting_line_history,
            matches: &session.matches,
            statistics: StatisticsBlock {
                head_to_head: stats(MatchKind::HeadToHead),
                team1_opponent: stats(MatchKind::Team1Opponent),
                team2_opponent: stats(MatchKind::Team2Opponent),
            },
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "match-analysis-{}.json",
            crate::time::date_part(self.metadata.export_date)
        )
    }

    /// Writes the document into `dir` as pretty-printed JSON and returns the
    /// full path.
    #[instrument(skip(self, dir))]
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        let file = File::create(&path)
            .with_context(|| format!("unable to create export file {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(path)
    }
}
