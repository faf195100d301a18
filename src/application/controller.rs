use crate::domain::{Engine, EngineError};
use crate::input::{InputEvent, Key};

/// Pointer drag state. While dragging, the last toggled cell is
/// remembered so motion events inside the same cell do not re-toggle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { last_toggled: Option<(usize, usize)> },
}

/// Controller translates normalized input events into engine commands
/// and UI-level flags. It holds all interaction state explicitly:
/// paused, quit request, and the drag state machine.
pub struct Controller {
    paused: bool,
    quit_requested: bool,
    drag: DragState,
    cell_size: f32,
}

impl Controller {
    pub fn new(cell_size: u32) -> Self {
        Self {
            paused: false,
            quit_requested: false,
            drag: DragState::Idle,
            cell_size: cell_size as f32,
        }
    }

    pub const fn paused(&self) -> bool {
        self.paused
    }

    pub const fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Dispatch one event. Keys act immediately; pointer events drive the
    /// drag state machine. The pause flag is orthogonal to dragging.
    pub fn apply(&mut self, event: InputEvent, engine: &mut Engine) -> Result<(), EngineError> {
        match event {
            InputEvent::Key(Key::Pause) => self.paused = !self.paused,
            InputEvent::Key(Key::Quit) => self.quit_requested = true,
            InputEvent::Key(Key::Clear) => engine.clear()?,
            InputEvent::Key(Key::Restart) => engine.restart()?,
            InputEvent::Key(Key::Randomize) => engine.randomize()?,
            InputEvent::ButtonDown { x, y } => {
                let cell = self.cell_at(engine, x, y)?;
                if let Some((cx, cy)) = cell {
                    engine.toggle_cell(cx, cy)?;
                }
                // A press outside the grid still starts a drag; painting
                // begins once the pointer enters the grid.
                self.drag = DragState::Dragging { last_toggled: cell };
            }
            InputEvent::PointerMoved { x, y } => {
                if let DragState::Dragging { last_toggled } = self.drag {
                    if let Some((cx, cy)) = self.cell_at(engine, x, y)? {
                        if last_toggled != Some((cx, cy)) {
                            engine.toggle_cell(cx, cy)?;
                            self.drag = DragState::Dragging {
                                last_toggled: Some((cx, cy)),
                            };
                        }
                    }
                }
            }
            InputEvent::ButtonUp => self.drag = DragState::Idle,
        }
        Ok(())
    }

    /// Convert a screen position to a cell coordinate, or None when the
    /// position falls outside the grid's pixel extent.
    fn cell_at(
        &self,
        engine: &Engine,
        x: f32,
        y: f32,
    ) -> Result<Option<(usize, usize)>, EngineError> {
        let (width, height) = engine.current()?.dimensions();
        if x < 0.0 || y < 0.0 {
            return Ok(None);
        }
        let cx = (x / self.cell_size) as usize;
        let cy = (y / self.cell_size) as usize;
        Ok((cx < width && cy < height).then_some((cx, cy)))
    }
}
