use clap::Subcommand;
use lifeweeks_core::decade_milestones;

use super::common::ConfigArgs;

#[derive(Subcommand)]
pub enum DecadesAction {
    /// List decade navigation anchors
    List {
        #[command(flatten)]
        config: ConfigArgs,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DecadesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DecadesAction::List { config, json } => {
            let app = config.effective();
            let milestones = decade_milestones(&app.weeks_config()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&milestones)?);
            } else {
                for milestone in &milestones {
                    println!(
                        "#{:<10} {:>4}  {}",
                        milestone.id, milestone.label, milestone.target_date
                    );
                }
            }
        }
    }
    Ok(())
}
