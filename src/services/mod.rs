pub mod ids;
pub mod inventory;
