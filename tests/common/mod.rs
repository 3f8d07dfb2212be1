//! Shared test helpers: an in-memory pointer device.

use mouse_stabilizer::cursor_control::PointerDevice;
use mouse_stabilizer::{Error, Result};
use std::cell::{Cell, RefCell};

/// Pointer device double recording every cursor write
pub struct MockPointer {
    position: Cell<(i32, i32)>,
    writes: RefCell<Vec<(i32, i32)>>,
    fail_writes: Cell<bool>,
    fail_queries: Cell<bool>,
    screen: (u32, u32),
}

impl MockPointer {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Cell::new((x, y)),
            writes: RefCell::new(Vec::new()),
            fail_writes: Cell::new(false),
            fail_queries: Cell::new(false),
            screen: (1920, 1080),
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn last_write(&self) -> Option<(i32, i32)> {
        self.writes.borrow().last().copied()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.set(fail);
    }

    /// Move the cursor as the user would, without recording a write
    pub fn nudge(&self, dx: i32, dy: i32) {
        let (x, y) = self.position.get();
        self.position.set((x + dx, y + dy));
    }
}

impl PointerDevice for MockPointer {
    fn position(&self) -> Result<(i32, i32)> {
        if self.fail_queries.get() {
            return Err(Error::CursorControl("query failure injected".to_string()));
        }
        Ok(self.position.get())
    }

    fn set_position(&self, x: i32, y: i32) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::CursorControl("write failure injected".to_string()));
        }
        self.position.set((x, y));
        self.writes.borrow_mut().push((x, y));
        Ok(())
    }

    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }
}
