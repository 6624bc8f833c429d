mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display::output::{
    display_draft, display_error, display_heroes, display_info, display_prediction,
    display_recommendations, display_success, display_warning,
};
use dota_pick::config::{parse_top_n, Config};
use dota_pick::{DenseNetwork, Engine, HeroCatalog, TeamRoster};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Dota Pick")]
#[command(about = "Recommend the next hero for your draft and predict who wins", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Hero list JSON (default: $DOTA_PICK_HEROES or heroes.json)
    #[arg(long, global = true)]
    heroes: Option<PathBuf>,

    /// Model JSON (default: $DOTA_PICK_MODEL or model.json)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest heroes to add to your team
    Recommend {
        /// Your heroes, comma separated ids or names
        #[arg(long, default_value = "")]
        mine: String,

        /// Enemy heroes, comma separated ids or names
        #[arg(long, default_value = "")]
        theirs: String,

        /// Number of suggestions, 1 to 3 (default: $DOTA_PICK_TOP_N or 3)
        #[arg(short, long)]
        top_n: Option<String>,
    },
    /// Win probability of your team against theirs
    Predict {
        #[arg(long, default_value = "")]
        mine: String,

        #[arg(long, default_value = "")]
        theirs: String,
    },
    /// List the hero catalog
    Heroes,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(heroes) = args.heroes {
        config.heroes_path = heroes;
    }
    if let Some(model) = args.model {
        config.model_path = model;
    }

    let catalog = HeroCatalog::load(&config.heroes_path).context("Could not load hero catalog")?;
    if !args.json {
        display_success(&format!(
            "Loaded {} heroes from {}",
            catalog.len(),
            config.heroes_path.display()
        ));
    }

    match args.command {
        Command::Heroes => {
            if args.json {
                let heroes: Vec<_> = catalog
                    .choices()
                    .into_iter()
                    .map(|(id, name)| json!({ "id": id, "name": name }))
                    .collect();
                println!(
                    "{}",
                    json!({ "heroes": heroes, "unused_ids": catalog.missing_ids() })
                );
            } else {
                display_heroes(&catalog);
            }
        }
        Command::Recommend {
            mine,
            theirs,
            top_n,
        } => {
            if let Some(raw) = top_n {
                config.top_n = parse_top_n(&raw)?;
            }

            let mine = parse_team(&mine, &catalog).context("Invalid --mine")?;
            let theirs = parse_team(&theirs, &catalog).context("Invalid --theirs")?;

            if mine.is_full() {
                return report_message(
                    args.json,
                    "Your team is full! Remove a hero from your team to get a recommendation.",
                );
            }
            // Only a fully empty draft is refused; an empty own team still gets a solo pick.
            if mine.is_empty() && theirs.is_empty() {
                return report_message(
                    args.json,
                    "Your team is empty! Pick at least one hero to continue.",
                );
            }

            let engine = load_engine(&config, catalog, args.json)?.with_top_k(config.top_n);
            let recommendations = engine.recommend(&mine, &theirs)?;
            let current = engine.predict(&mine, &theirs)?;

            if args.json {
                let picks: Vec<_> = recommendations
                    .iter()
                    .map(|rec| {
                        json!({
                            "hero": rec.hero,
                            "name": engine.catalog().label(rec.hero),
                            "probability": rec.probability,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    json!({ "recommendations": picks, "win_probability": current })
                );
            } else {
                display_draft(&mine, &theirs, engine.catalog());
                display_recommendations(&recommendations, engine.catalog(), current);
            }
        }
        Command::Predict { mine, theirs } => {
            let mine = parse_team(&mine, &catalog).context("Invalid --mine")?;
            let theirs = parse_team(&theirs, &catalog).context("Invalid --theirs")?;

            let engine = load_engine(&config, catalog, args.json)?;
            let probability = engine.predict(&mine, &theirs)?;

            if args.json {
                println!("{}", json!({ "win_probability": probability }));
            } else {
                display_draft(&mine, &theirs, engine.catalog());
                display_prediction(probability);
            }
        }
    }

    Ok(())
}

fn load_engine(config: &Config, catalog: HeroCatalog, quiet: bool) -> Result<Engine<DenseNetwork>> {
    if !quiet {
        display_info(&format!("Loading model from {}", config.model_path.display()));
    }
    let model = DenseNetwork::load(&config.model_path).context("Could not load model")?;
    let engine = Engine::new(catalog, model).context("Model does not match the hero catalog")?;
    Ok(engine)
}

/// Comma separated ids or names; blanks and "Nil" are skipped.
fn parse_team(raw: &str, catalog: &HeroCatalog) -> Result<TeamRoster> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && !token.eq_ignore_ascii_case("nil"))
        .map(|token| catalog.resolve(token))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TeamRoster::new(ids)?)
}

fn report_message(json: bool, message: &str) -> Result<()> {
    if json {
        println!("{}", json!({ "message": message }));
    } else {
        display_warning(message);
    }
    Ok(())
}
