pub mod config;
pub mod list;
pub mod plan;
pub mod run;
pub mod schema;
