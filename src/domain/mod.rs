pub mod points;
pub mod receipt;
pub mod validate;
