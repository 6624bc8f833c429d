use crate::analysis::recommender::MAX_TOP_K;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub heroes_path: PathBuf,
    pub model_path: PathBuf,
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let heroes_path = env::var("DOTA_PICK_HEROES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("heroes.json"));

        let model_path = env::var("DOTA_PICK_MODEL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("model.json"));

        let top_n = match env::var("DOTA_PICK_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => MAX_TOP_K,
        };

        Ok(Config {
            heroes_path,
            model_path,
            top_n,
        })
    }
}

pub fn parse_top_n(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_TOP_K).contains(&n) => Ok(n),
        _ => Err(AppError::ConfigError(format!(
            "top-n must be between 1 and {}, got {:?}",
            MAX_TOP_K, raw
        ))),
    }
}
