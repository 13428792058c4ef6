pub mod cache_ops;
pub mod health;

pub use cache_ops::{get_cache, set_cache};
pub use health::{health_check, index};
