#![warn(clippy::pedantic, rust_2018_idioms)]

mod export;
mod predict;
mod recommend;
mod record;
mod session;
mod stats;
mod time;
mod view;

use crate::export::ExportDocument;
use crate::record::MatchKind;
use crate::session::Session;
use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "session.json".to_string());
    let session = Session::load(&path)?;

    for &kind in &MatchKind::ALL {
        print_analysis(&session, kind);
    }

    let export = ExportDocument::build(&session);
    let path = export.write(".")?;
    println!("exported {}", path.display());
    Ok(())
}

fn print_analysis(session: &Session, kind: MatchKind) {
    let records = session.matches.get(kind);
    let (left, right) = session.teams.sides(kind);
    let matchup = session.teams.matchup(kind);
    let statistics = stats::calculate_statistics(records, session.betting_line);

    println!("=== {} ===", matchup);
    if statistics.total_matches == 0 {
        println!("{}", view::NO_DATA);
        println!("{}\n", view::NO_RECOMMENDATION);
        return;
    }

    println!("{}", view::total_score_panel(records, session.betting_line));
    println!("{}", view::team_performance_panel(records, left, right));
    println!("{}", view::general_stats_panel(&statistics, left, right));
    println!("{}", view::win_rates_panel(&statistics, left, right));
    if let Some(prediction) = predict::predict_next_match(records) {
        println!(
            "{}",
            view::prediction_panel(&prediction, left, right, session.betting_line)
        );
    }
    let recommendation = recommend::recommend(
        statistics.over_percentage_value(),
        session.betting_line,
    );
    println!(
        "{}\n",
        view::recommendation_panel(&recommendation, &matchup, &statistics.over_percentage)
    );
}
