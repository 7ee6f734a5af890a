pub mod banner;
pub mod console_tests;
pub mod input;
pub mod prompt;
pub mod rules;

pub use prompt::{Console, ReportFormat};
