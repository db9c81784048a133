pub mod balance;
pub mod riot_ids;
