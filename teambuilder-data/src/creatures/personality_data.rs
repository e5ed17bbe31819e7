use serde::{
    Deserialize,
    Serialize,
};

use crate::PersonalityId;

/// Data about a personality.
///
/// Each modifier is a fraction applied on top of the base stat (for example, `0.1` is +10%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityData {
    pub id: PersonalityId,
    pub name: String,
    #[serde(default)]
    pub hp_mod_pct: f32,
    #[serde(default)]
    pub phy_atk_mod_pct: f32,
    #[serde(default)]
    pub mag_atk_mod_pct: f32,
    #[serde(default)]
    pub phy_def_mod_pct: f32,
    #[serde(default)]
    pub mag_def_mod_pct: f32,
    #[serde(default)]
    pub spd_mod_pct: f32,
}

