use clap::Subcommand;

use super::common::ConfigArgs;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration and derived values
    Show {
        #[command(flatten)]
        config: ConfigArgs,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { config, json } => {
            let app = config.effective();
            // Derivation doubles as validation: bad birth dates fail here.
            let derived = app.derived()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "config": app,
                        "derived": derived,
                    }))?
                );
            } else {
                print!("{}", toml::to_string_pretty(&app)?);
                println!();
                println!("birth_year = {}", derived.birth_year);
                println!("end_year = {}", derived.end_year);
                println!("life_expectancy_date = {}", derived.life_expectancy_date);
                println!(
                    "japan_life_expectancy_date = {}",
                    derived.japan_life_expectancy_date
                );
            }
        }
    }
    Ok(())
}
