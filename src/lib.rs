pub mod cli;
pub mod config;
pub mod lister;
pub mod registry;
pub mod report;
pub mod resources;

#[cfg(test)]
mod testing;
