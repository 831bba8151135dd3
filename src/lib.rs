pub mod config;
pub mod delegate;
pub mod error;
pub mod fsutil;
pub mod launch;
pub mod logging;
pub mod platform;
pub mod resolver;
#[cfg(test)]
pub mod tests;
