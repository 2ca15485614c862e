use clap::{Subcommand, ValueEnum};
use lifeweeks_core::{datasets, merge_events, weeks, Week};

use super::common::{ConfigArgs, FilterArgs};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SourceArg {
    Personal,
    World,
    All,
}

#[derive(Subcommand)]
pub enum EventsAction {
    /// List events that survive the current filters, with their weeks
    List {
        #[command(flatten)]
        config: ConfigArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Restrict to one dataset
        #[arg(long, value_enum, default_value_t = SourceArg::All)]
        source: SourceArg,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EventsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EventsAction::List {
            config,
            filters,
            source,
            json,
        } => {
            let app = config.effective();
            let grid: Vec<Week> = weeks(&app.weeks_config()?).collect();
            let derived = app.derived()?;
            let life = datasets::sample_life_events();
            let world = datasets::builtin_world_events();
            let merged = merge_events(&grid, &life, &world, &derived, &filters.filters(&app));

            let keep = |s: lifeweeks_core::EventSource| match source {
                SourceArg::All => true,
                SourceArg::Personal => s == lifeweeks_core::EventSource::Personal,
                SourceArg::World => s == lifeweeks_core::EventSource::World,
            };

            let rows: Vec<_> = merged
                .iter()
                .filter(|w| w.has_events())
                .flat_map(|w| {
                    w.events
                        .iter()
                        .filter(|e| keep(e.source))
                        .map(move |e| (w, e))
                })
                .collect();

            if json {
                let payload: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|(w, e)| {
                        serde_json::json!({
                            "week_index": w.week.index,
                            "week_start": w.week.start,
                            "event": e,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for (w, e) in rows {
                    println!("week {:>5}  {}  {}", w.week.index, w.week.start, e.headline);
                }
            }
        }
    }
    Ok(())
}
