use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_dota_pick")
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dota-pick-{name}-{stamp}.json"))
}

const HEROES: &str = r#"[
    {"id": 1, "localized_name": "Anti-Mage", "primary_attr": "agi", "roles": ["Carry"]},
    {"id": 2, "localized_name": "Axe", "primary_attr": "str", "roles": ["Initiator"]},
    {"id": 3, "localized_name": "Bane", "primary_attr": "all", "roles": ["Support"]},
    {"id": 5, "localized_name": "Crystal Maiden", "primary_attr": "int", "roles": ["Support"]},
    {"id": 6, "localized_name": "Drow Ranger", "primary_attr": "agi", "roles": ["Carry"]}
]"#;

// Width 10: my heroes 1,2,3,5,6 then their heroes 1,2,3,5,6.
fn logistic_model(my_weights: [f32; 5]) -> String {
    let kernel: Vec<Vec<f32>> = my_weights
        .iter()
        .copied()
        .chain([0.0; 5])
        .map(|w| vec![w])
        .collect();
    serde_json::json!({
        "input_width": kernel.len(),
        "layers": [{ "kernel": kernel, "bias": [0.0], "activation": "sigmoid" }]
    })
    .to_string()
}

struct Fixture {
    heroes: PathBuf,
    model: PathBuf,
}

impl Fixture {
    fn new(name: &str, model: &str) -> Self {
        let heroes = unique_temp_path(&format!("{name}-heroes"));
        let model_path = unique_temp_path(&format!("{name}-model"));
        fs::write(&heroes, HEROES).expect("write heroes fixture");
        fs::write(&model_path, model).expect("write model fixture");
        Fixture {
            heroes,
            model: model_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(bin())
            .args(args)
            .arg("--heroes")
            .arg(&self.heroes)
            .arg("--model")
            .arg(&self.model)
            .env("NO_COLOR", "1")
            .env_remove("DOTA_PICK_TOP_N")
            .output()
            .expect("dota_pick should run")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.heroes);
        let _ = fs::remove_file(&self.model);
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("command should emit json")
}

#[test]
fn recommend_ranks_candidates_and_reports_current_odds() {
    let fixture = Fixture::new("recommend", &logistic_model([0.0, 0.0, 1.0, 2.0, -1.0]));
    let output = fixture.run(&["recommend", "--mine", "1", "--theirs", "Axe", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    let picks = payload["recommendations"].as_array().expect("array of picks");

    let heroes: Vec<_> = picks.iter().map(|p| p["hero"].as_u64().unwrap()).collect();
    assert_eq!(heroes, vec![5, 3, 6]);
    assert_eq!(picks[0]["name"], "Crystal Maiden");

    let top = picks[0]["probability"].as_f64().unwrap();
    assert!((top - sigmoid(2.0)).abs() < 1e-6);

    let current = payload["win_probability"].as_f64().unwrap();
    assert!((current - 0.5).abs() < 1e-6);
}

#[test]
fn recommend_honours_top_n() {
    let fixture = Fixture::new("top-n", &logistic_model([0.0, 0.0, 1.0, 2.0, -1.0]));
    let output = fixture.run(&["recommend", "--mine", "1", "--top-n", "1", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert_eq!(payload["recommendations"].as_array().map(Vec::len), Some(1));
}

#[test]
fn recommend_rejects_top_n_above_three() {
    let fixture = Fixture::new("top-n-cap", &logistic_model([0.0, 0.0, 1.0, 2.0, -1.0]));
    let output = fixture.run(&["recommend", "--mine", "1", "--top-n", "4", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 3"));
}

#[test]
fn recommend_with_full_team_prints_message() {
    let fixture = Fixture::new("full", &logistic_model([0.0; 5]));
    let output = fixture.run(&["recommend", "--mine", "1,2,3,5,6", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert!(payload["message"].as_str().unwrap().contains("full"));
}

#[test]
fn recommend_with_empty_draft_prints_message() {
    let fixture = Fixture::new("empty", &logistic_model([0.0; 5]));
    let output = fixture.run(&["recommend", "--mine", "Nil", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert!(payload["message"].as_str().unwrap().contains("empty"));
}

#[test]
fn predict_accepts_names_and_ids() {
    let fixture = Fixture::new("predict", &logistic_model([0.0, 0.0, 1.0, 2.0, -1.0]));
    let output = fixture.run(&[
        "predict",
        "--mine",
        "crystal maiden, 3",
        "--theirs",
        "2",
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let p = stdout_json(&output)["win_probability"].as_f64().unwrap();
    assert!((p - sigmoid(3.0)).abs() < 1e-6);
}

#[test]
fn hero_on_both_teams_is_rejected() {
    let fixture = Fixture::new("overlap", &logistic_model([0.0; 5]));
    let output = fixture.run(&["predict", "--mine", "1", "--theirs", "1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("both teams"));
}

#[test]
fn model_for_another_catalog_is_rejected() {
    let model = serde_json::json!({
        "input_width": 3,
        "layers": [{ "kernel": [[0.0], [0.0], [0.0]], "bias": [0.0], "activation": "sigmoid" }]
    })
    .to_string();
    let fixture = Fixture::new("mismatch", &model);
    let output = fixture.run(&["predict", "--mine", "1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("width mismatch"));
}

#[test]
fn heroes_lists_catalog_and_unused_ids() {
    let fixture = Fixture::new("heroes", &logistic_model([0.0; 5]));
    let output = fixture.run(&["heroes", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let payload = stdout_json(&output);
    assert_eq!(payload["heroes"].as_array().map(Vec::len), Some(5));
    assert_eq!(payload["unused_ids"], serde_json::json!([0, 4]));
}
