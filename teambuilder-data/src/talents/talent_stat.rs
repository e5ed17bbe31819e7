use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A stat that can receive a talent boost.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TalentStat {
    #[string = "hp"]
    #[alias = "HP"]
    Hp,
    #[string = "phy_atk"]
    #[alias = "Physical Attack"]
    PhyAtk,
    #[string = "mag_atk"]
    #[alias = "Magical Attack"]
    MagAtk,
    #[string = "phy_def"]
    #[alias = "Physical Defense"]
    PhyDef,
    #[string = "mag_def"]
    #[alias = "Magical Defense"]
    MagDef,
    #[string = "spd"]
    #[alias = "Speed"]
    Spd,
}

impl TalentStat {
    /// All stats, in display order.
    pub const ALL: [TalentStat; 6] = [
        Self::Hp,
        Self::PhyAtk,
        Self::MagAtk,
        Self::PhyDef,
        Self::MagDef,
        Self::Spd,
    ];
}
