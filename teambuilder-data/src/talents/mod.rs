mod talent_stat;
mod talent_table;

pub use talent_stat::TalentStat;
pub use talent_table::{
    PartialTalentTable,
    TalentTable,
    TalentTableEntries,
};
