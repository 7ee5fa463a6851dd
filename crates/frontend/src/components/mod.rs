pub mod header;
pub mod spinner;

pub use header::Header;
pub use spinner::LoadingSpinner;
