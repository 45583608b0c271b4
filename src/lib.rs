pub mod codes;
pub mod config;
pub mod energy;
pub mod error;
pub mod experiment;
pub mod hashing;
pub mod optimizer;
pub mod schedule;
pub mod state;
pub mod table;
// cmd and reports are binary modules (see main.rs).
