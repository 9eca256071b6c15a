// Job application intake. Submissions are validated and acknowledged, never stored.

pub mod handlers;
pub mod intake;
pub mod models;
