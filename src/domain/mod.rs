mod cell;
mod engine;
mod error;
mod grid;

pub use cell::Cell;
pub use engine::Engine;
pub use error::EngineError;
pub use grid::Grid;
