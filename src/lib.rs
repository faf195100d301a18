// Domain layer - Simulation engine and grid state
pub mod domain;

// Application layer - Input-to-engine coordination
pub mod application;

// Infrastructure layer - Rendering, input polling, launcher configuration
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Controller;
pub use config::{Config, ConfigError};
pub use domain::{Cell, Engine, EngineError, Grid};
pub use rendering::ColorLut;
