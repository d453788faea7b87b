//! Interactive and presentational front-end pieces: prompt flows for entering
//! and confirming records, plus the small text helpers used in the start-up
//! summary.

mod helpers;
mod prompts;

pub use helpers::{group_digits, print_banner, print_store_summary};
pub use prompts::Prompter;
