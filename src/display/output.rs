use colored::*;
use dota_pick::{HeroCatalog, Recommendation, TeamRoster};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PickRow {
    rank: String,
    id: String,
    hero: String,
    win_chance: String,
}

#[derive(Tabled)]
struct HeroRow {
    id: String,
    hero: String,
    attribute: String,
    attack: String,
    roles: String,
}

pub fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn team_names(team: &TeamRoster, catalog: &HeroCatalog) -> String {
    if team.is_empty() {
        return "-".to_string();
    }
    team.iter()
        .map(|id| catalog.label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_draft(mine: &TeamRoster, theirs: &TeamRoster, catalog: &HeroCatalog) {
    println!("{} {}", "My Team:".bold(), team_names(mine, catalog));
    println!("{} {}", "Their Team:".bold(), team_names(theirs, catalog));
}

pub fn display_recommendations(
    recommendations: &[Recommendation],
    catalog: &HeroCatalog,
    current: f64,
) {
    println!("\n{}", "🎯 Recommended Picks".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if recommendations.is_empty() {
        println!("{}", "No heroes left to recommend".yellow());
    } else {
        let rows: Vec<PickRow> = recommendations
            .iter()
            .enumerate()
            .map(|(idx, rec)| PickRow {
                rank: format!("#{}", idx + 1),
                id: rec.hero.to_string(),
                hero: catalog.label(rec.hero),
                win_chance: percent(rec.probability),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!(
        "\nThe probability of your team winning is {} with the current team composition.\n",
        percent(current).bold()
    );
}

pub fn display_prediction(probability: f64) {
    let formatted = percent(probability);
    let colored_prob = if probability >= 0.5 {
        formatted.green()
    } else {
        formatted.red()
    };
    println!(
        "\nThe probability of your team winning is {} with the proposed team composition.\n",
        colored_prob.bold()
    );
}

pub fn display_heroes(catalog: &HeroCatalog) {
    let rows: Vec<HeroRow> = catalog
        .valid_ids()
        .filter_map(|id| catalog.get(id))
        .map(|hero| HeroRow {
            id: hero.id.to_string(),
            hero: hero.localized_name.clone(),
            attribute: hero.primary_attr.clone(),
            attack: hero.attack_type.clone(),
            roles: hero.roles.join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let gaps: Vec<String> = catalog
        .missing_ids()
        .iter()
        .map(|id| id.to_string())
        .collect();
    println!(
        "\n{} {} heroes, max id {}, unused ids: {}\n",
        "📋".cyan(),
        catalog.len(),
        catalog.max_id(),
        if gaps.is_empty() { "-".to_string() } else { gaps.join(", ") }
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
