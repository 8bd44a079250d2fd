pub mod month;
pub mod transaction;
