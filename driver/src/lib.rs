pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod module;

pub(crate) fn env(key: &str) -> Option<String> {
    dotenvy::var(key).ok()
}
