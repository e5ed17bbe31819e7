use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::TalentStat;

/// A partial set of talent boosts, keyed by stat.
///
/// Stats missing from the map are left untouched when merged into a [`TalentTable`].
pub type PartialTalentTable = HashMap<TalentStat, u8>;

fn next_stat_for_iterator(stat: TalentStat) -> Option<TalentStat> {
    match stat {
        TalentStat::Hp => Some(TalentStat::PhyAtk),
        TalentStat::PhyAtk => Some(TalentStat::MagAtk),
        TalentStat::MagAtk => Some(TalentStat::PhyDef),
        TalentStat::PhyDef => Some(TalentStat::MagDef),
        TalentStat::MagDef => Some(TalentStat::Spd),
        TalentStat::Spd => None,
    }
}

/// Iterator over the entries of a [`TalentTable`].
pub struct TalentTableEntries<'t> {
    table: &'t TalentTable,
    next_stat: Option<TalentStat>,
}

impl<'t> TalentTableEntries<'t> {
    fn new(table: &'t TalentTable) -> Self {
        Self {
            table,
            next_stat: Some(TalentStat::Hp),
        }
    }
}

impl<'t> Iterator for TalentTableEntries<'t> {
    type Item = (TalentStat, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.table.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

/// Talent boosts for all six stats.
///
/// Field names match the persisted talent record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TalentTable {
    #[serde(default, rename = "hp_boost")]
    pub hp: u8,
    #[serde(default, rename = "phy_atk_boost")]
    pub phy_atk: u8,
    #[serde(default, rename = "mag_atk_boost")]
    pub mag_atk: u8,
    #[serde(default, rename = "phy_def_boost")]
    pub phy_def: u8,
    #[serde(default, rename = "mag_def_boost")]
    pub mag_def: u8,
    #[serde(default, rename = "spd_boost")]
    pub spd: u8,
}

impl TalentTable {
    /// Returns the boost for the given stat.
    pub fn get(&self, stat: TalentStat) -> u8 {
        match stat {
            TalentStat::Hp => self.hp,
            TalentStat::PhyAtk => self.phy_atk,
            TalentStat::MagAtk => self.mag_atk,
            TalentStat::PhyDef => self.phy_def,
            TalentStat::MagDef => self.mag_def,
            TalentStat::Spd => self.spd,
        }
    }

    /// Sets the boost for the given stat.
    pub fn set(&mut self, stat: TalentStat, value: u8) {
        let stat = match stat {
            TalentStat::Hp => &mut self.hp,
            TalentStat::PhyAtk => &mut self.phy_atk,
            TalentStat::MagAtk => &mut self.mag_atk,
            TalentStat::PhyDef => &mut self.phy_def,
            TalentStat::MagDef => &mut self.mag_def,
            TalentStat::Spd => &mut self.spd,
        };
        *stat = value;
    }

    /// Creates an iterator over all entries, in display order.
    pub fn entries<'t>(&'t self) -> TalentTableEntries<'t> {
        TalentTableEntries::new(self)
    }

    /// Creates an iterator over all boost values.
    pub fn values<'t>(&'t self) -> impl Iterator<Item = u8> + 't {
        self.entries().map(|(_, value)| value)
    }

    /// Stats that have a nonzero boost.
    pub fn boosted_stats<'t>(&'t self) -> impl Iterator<Item = TalentStat> + 't {
        self.entries()
            .filter(|(_, value)| *value > 0)
            .map(|(stat, _)| stat)
    }

    /// The number of stats with a nonzero boost.
    pub fn boosted_count(&self) -> usize {
        self.values().filter(|value| *value > 0).count()
    }

    /// Returns a copy of this table with the partial table merged on top.
    pub fn merged(&self, partial: &PartialTalentTable) -> Self {
        let mut out = self.clone();
        for (stat, value) in partial {
            out.set(*stat, *value);
        }
        out
    }
}

impl FromIterator<(TalentStat, u8)> for TalentTable {
    fn from_iter<T: IntoIterator<Item = (TalentStat, u8)>>(iter: T) -> Self {
        let mut out = TalentTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'t> IntoIterator for &'t TalentTable {
    type IntoIter = TalentTableEntries<'t>;
    type Item = (TalentStat, u8);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod talent_table_test {
    use pretty_assertions::assert_eq;

    use crate::{
        PartialTalentTable,
        TalentStat,
        TalentTable,
        test_util::assert_parses_to,
    };

    #[test]
    fn gets_and_sets_associated_value() {
        let mut table = TalentTable::default();
        for (i, stat) in TalentStat::ALL.into_iter().enumerate() {
            table.set(stat, i as u8 + 1);
        }
        assert_eq!(
            table,
            TalentTable {
                hp: 1,
                phy_atk: 2,
                mag_atk: 3,
                phy_def: 4,
                mag_def: 5,
                spd: 6,
            }
        );
        assert_eq!(table.get(TalentStat::MagDef), 5);
    }

    #[test]
    fn entries_iterate_in_display_order() {
        let table = TalentTable {
            hp: 7,
            spd: 10,
            ..Default::default()
        };
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![
                (TalentStat::Hp, 7),
                (TalentStat::PhyAtk, 0),
                (TalentStat::MagAtk, 0),
                (TalentStat::PhyDef, 0),
                (TalentStat::MagDef, 0),
                (TalentStat::Spd, 10),
            ]
        );
        assert_eq!(
            table.boosted_stats().collect::<Vec<_>>(),
            vec![TalentStat::Hp, TalentStat::Spd]
        );
    }

    #[test]
    fn counts_boosted_stats() {
        assert_eq!(TalentTable::default().boosted_count(), 0);
        let table = TalentTable::from_iter([
            (TalentStat::PhyAtk, 10),
            (TalentStat::MagAtk, 10),
            (TalentStat::PhyDef, 10),
        ]);
        assert_eq!(table.boosted_count(), 3);
    }

    #[test]
    fn merges_partial_table() {
        let table = TalentTable {
            phy_atk: 10,
            mag_atk: 10,
            ..Default::default()
        };
        let partial = PartialTalentTable::from_iter([(TalentStat::PhyAtk, 0), (TalentStat::Spd, 8)]);
        assert_eq!(
            table.merged(&partial),
            TalentTable {
                mag_atk: 10,
                spd: 8,
                ..Default::default()
            }
        );
    }

    #[test]
    fn deserializes_persisted_field_names() {
        assert_parses_to(
            r#"{"hp_boost":0,"phy_atk_boost":10,"mag_atk_boost":9,"phy_def_boost":0,"mag_def_boost":0,"spd_boost":7}"#,
            TalentTable {
                phy_atk: 10,
                mag_atk: 9,
                spd: 7,
                ..Default::default()
            },
        );
        assert_parses_to(
            r#"{"hp_boost":8}"#,
            TalentTable {
                hp: 8,
                ..Default::default()
            },
        );
    }
}
