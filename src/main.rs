use clap::Parser;
use dialoguer::Confirm;
use shift_roster::{cli, commands, config, error, grid};
use cli::{Cli, Commands};
use commands::ScanOptions;
use config::Config;
use grid::SheetSelector;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shift_roster=debug,shift_roster_common=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Generate { grid, output, layout, sheet } => {
            println!("🗓  shift-roster - generate\n");

            let options = ScanOptions {
                layout: commands::load_layout(&config.layout_file(layout.as_deref()))?,
                sheet: SheetSelector::or(sheet.as_deref(), SheetSelector::First),
                min_name_len: config.min_name_len,
            };
            let roster = commands::generate(&grid, &output, &options)?;

            println!("\n✅ {} people on the roster", roster.len());
        }

        Commands::Update { grid, output, existing, existing_sheet, layout, sheet, yes } => {
            println!("🗓  shift-roster - update\n");

            let options = ScanOptions {
                layout: commands::load_layout(&config.layout_file(layout.as_deref()))?,
                sheet: SheetSelector::or(sheet.as_deref(), SheetSelector::First),
                min_name_len: config.min_name_len,
            };
            let existing_sheet = SheetSelector::or(existing_sheet.as_deref(), SheetSelector::Last);
            let ask = !yes && config.confirm_updates;

            let summary = commands::update(
                &grid,
                &output,
                &existing,
                &existing_sheet,
                &options,
                |removals| {
                    if !ask {
                        return Ok(true);
                    }
                    Confirm::new()
                        .with_prompt(format!(
                            "Remove {} people (and any notes in their rows)?",
                            removals.len()
                        ))
                        .default(false)
                        .interact()
                        .map_err(error::ShiftRosterError::from)
                },
            )?;

            println!();
            println!("  added:     {}", summary.added.len());
            for name in &summary.added {
                println!("    + {}", name);
            }
            println!("  updated:   {}", summary.updated.len());
            for name in &summary.updated {
                println!("    ~ {}", name);
            }
            println!("  removed:   {}", summary.removed.len());
            for name in &summary.removed {
                println!("    - {}", name);
            }
            println!("  unchanged: {}", summary.unchanged);

            if summary.has_changes() {
                println!("\n✅ Roster updated");
            } else {
                println!("\n✅ No changes since the last roster");
            }
        }

        Commands::Daily { roster, output, date, sheet } => {
            println!("🗓  shift-roster - daily\n");

            let sheet = SheetSelector::or(sheet.as_deref(), SheetSelector::Last);
            commands::daily(&roster, &output, &date, &sheet)?;

            println!("\n✅ Daily roster complete");
        }

        Commands::Config { show, set_layout } => {
            let mut config = config;

            if let Some(path) = set_layout {
                config.set_layout_path(path)?;
                println!("✔ Default layout set");
            }

            if show {
                println!("Config file: {}", Config::config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
