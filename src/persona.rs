pub mod agents;
pub mod prompt;
