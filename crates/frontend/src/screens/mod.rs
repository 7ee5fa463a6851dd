pub mod apps;
pub mod verification;
