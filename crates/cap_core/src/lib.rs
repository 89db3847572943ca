//! Cap Core - Caption timeline engine for Caption Player
//!
//! This crate contains all caption business logic with zero UI dependencies.
//! It can be used by the player GUI or a CLI tool.

pub mod captions;
pub mod config;
pub mod logging;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
