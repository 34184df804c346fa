pub mod card;
pub mod data_table;
pub mod stat;
