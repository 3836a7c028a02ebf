pub mod config;
pub mod extract;
pub mod inspect;

pub use config::*;
pub use extract::*;
pub use inspect::*;
