pub mod query;
pub mod time;
pub mod validation;
