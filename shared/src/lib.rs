// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("store: {0}")]
    Store(String),
    #[error("sync: {0}")]
    Sync(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Per-entry expiry in whole seconds.
#[derive(Clone, Copy, Debug)]
pub struct TtlSecs(pub u64);

pub mod config;
