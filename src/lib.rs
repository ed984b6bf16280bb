pub mod config;
pub mod grammar;
pub mod markdown;
pub mod routes;
pub mod store;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod testing;
