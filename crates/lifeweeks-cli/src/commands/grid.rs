use clap::Subcommand;
use lifeweeks_core::{
    datasets, decade_id, merge_events, weeks, MergedWeek, Week,
};

use super::common::{ConfigArgs, FilterArgs};

#[derive(Subcommand)]
pub enum GridAction {
    /// Render the merged week grid
    Show {
        #[command(flatten)]
        config: ConfigArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit the full merged sequence as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GridAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GridAction::Show {
            config,
            filters,
            json,
        } => {
            let app = config.effective();
            let grid: Vec<Week> = weeks(&app.weeks_config()?).collect();
            let derived = app.derived()?;
            let life = datasets::sample_life_events();
            let world = datasets::builtin_world_events();
            let merged = merge_events(&grid, &life, &world, &derived, &filters.filters(&app));

            if json {
                println!("{}", serde_json::to_string_pretty(&merged)?);
            } else {
                render_text(&merged);
            }
        }
    }
    Ok(())
}

/// One text row per year of age, 52-odd cells wide.
fn render_text(merged: &[MergedWeek]) {
    let mut current_age: Option<u32> = None;
    let mut row = String::new();

    for week in merged {
        if current_age != Some(week.week.age_years) {
            if !row.is_empty() {
                println!("{row}");
            }
            if week.week.age_years % 10 == 0 {
                println!("# {}", decade_id(week.week.decade));
            }
            row = format!("age {:>3} ", week.week.age_years);
            current_age = Some(week.week.age_years);
        }
        row.push(glyph(week));
    }
    if !row.is_empty() {
        println!("{row}");
    }
    println!();
    println!("legend: B birthday  * milestone  + event  . empty");
}

fn glyph(week: &MergedWeek) -> char {
    if week.events.iter().any(|e| e.milestone) {
        '*'
    } else if week.week.birthday_week {
        'B'
    } else if week.has_events() {
        '+'
    } else {
        '.'
    }
}
