use std::mem;

use super::{Cell, EngineError, Grid};

/// Double-buffered simulation state: generations are computed from
/// `current` into `next`, then the two buffers swap identities in O(1).
struct Buffers {
    current: Grid,
    next: Grid,
    generation: u64,
}

enum State {
    Uninitialized,
    Ready(Buffers),
    Released,
}

/// Engine owns both grid buffers and applies the Game of Life rule.
///
/// Lifecycle: `initialize` must succeed before any other operation;
/// `release` frees the grids and invalidates the engine permanently.
/// Mutations are not re-entrant; the frame loop is the sole caller.
pub struct Engine {
    state: State,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    fn buffers(&self) -> Result<&Buffers, EngineError> {
        match &self.state {
            State::Ready(buffers) => Ok(buffers),
            State::Uninitialized => Err(EngineError::NotInitialized),
            State::Released => Err(EngineError::UseAfterFree),
        }
    }

    fn buffers_mut(&mut self) -> Result<&mut Buffers, EngineError> {
        match &mut self.state {
            State::Ready(buffers) => Ok(buffers),
            State::Uninitialized => Err(EngineError::NotInitialized),
            State::Released => Err(EngineError::UseAfterFree),
        }
    }

    /// Allocate both buffers with all cells dead. Repeated calls
    /// reinitialize and discard prior state.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), EngineError> {
        if matches!(self.state, State::Released) {
            return Err(EngineError::UseAfterFree);
        }
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        self.state = State::Ready(Buffers {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            generation: 0,
        });
        Ok(())
    }

    /// Advance one generation: compute into the inactive buffer reading
    /// only from the active one, then swap the buffer identities.
    pub fn step(&mut self) -> Result<(), EngineError> {
        let buffers = self.buffers_mut()?;
        buffers.current.step_into(&mut buffers.next);
        mem::swap(&mut buffers.current, &mut buffers.next);
        buffers.generation += 1;
        Ok(())
    }

    /// Flip one cell in the current buffer. Out-of-range coordinates are
    /// a no-op.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        self.buffers_mut()?.current.toggle(x, y);
        Ok(())
    }

    /// Kill every cell in the current buffer. The next buffer is left
    /// untouched until the following step rewrites it.
    pub fn clear(&mut self) -> Result<(), EngineError> {
        self.buffers_mut()?.current.fill(Cell::Dead);
        Ok(())
    }

    /// Return both buffers and the generation counter to their
    /// post-initialize values. Dimensions are unchanged.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let buffers = self.buffers_mut()?;
        buffers.current.fill(Cell::Dead);
        buffers.next.fill(Cell::Dead);
        buffers.generation = 0;
        Ok(())
    }

    /// Seed the current buffer with a random soup and reset the
    /// generation counter.
    pub fn randomize(&mut self) -> Result<(), EngineError> {
        let buffers = self.buffers_mut()?;
        buffers.current.randomize();
        buffers.generation = 0;
        Ok(())
    }

    /// The buffer holding the generation to display
    pub fn current(&self) -> Result<&Grid, EngineError> {
        Ok(&self.buffers()?.current)
    }

    /// Generations completed since initialize or restart
    pub fn generation(&self) -> Result<u64, EngineError> {
        Ok(self.buffers()?.generation)
    }

    /// Free grid storage. Every subsequent call, including `initialize`,
    /// fails with `UseAfterFree`.
    pub fn release(&mut self) -> Result<(), EngineError> {
        if matches!(self.state, State::Released) {
            return Err(EngineError::UseAfterFree);
        }
        self.state = State::Released;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
