pub mod config;
pub mod constants;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod input;
pub mod params;
pub mod registry;
pub mod scheduler;
pub mod shade;
pub mod state;
pub static RIPPLE_WGSL: &str = include_str!("../shaders/ripple.wgsl");

pub use config::*;
pub use engine::*;
pub use error::*;
pub use params::*;
pub use registry::*;
pub use scheduler::*;
pub use state::*;
