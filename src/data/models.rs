use serde::Deserialize;

pub type HeroId = u32;

// One entry of the hero dump (heroes.json)
#[derive(Debug, Deserialize, Clone)]
pub struct HeroRecord {
    pub id: HeroId,
    pub localized_name: String,
    #[serde(default)]
    pub primary_attr: String, // str, agi, int, all
    #[serde(default)]
    pub attack_type: String, // Melee, Ranged
    #[serde(default)]
    pub roles: Vec<String>,
}
