pub mod cache;
pub mod cli;
pub mod collect;
pub mod error;
pub mod history;
pub mod model;
pub mod report;
pub mod walk;
