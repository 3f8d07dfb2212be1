//! Cursor control for X11-based systems.
//!
//! The engine only talks to the OS cursor through the [`PointerDevice`]
//! trait, keeping it agnostic to how raw input arrives and testable without
//! a display server. The shipped implementation uses X11 protocols via
//! `x11rb`.

use crate::error::{AppError, Result};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::xproto::{ConnectionExt, Screen},
    rust_connection::RustConnection,
};

/// Minimal OS cursor surface the engine needs
pub trait PointerDevice {
    /// Query the current cursor position
    fn position(&self) -> Result<(i32, i32)>;

    /// Move the cursor to an absolute position
    fn set_position(&self, x: i32, y: i32) -> Result<()>;

    /// Screen dimensions in pixels
    fn screen_size(&self) -> (u32, u32);
}

/// Cursor control implementation for X11
pub struct CursorController {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
}

impl CursorController {
    /// Create a new cursor controller
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| AppError::CursorControl(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| AppError::CursorControl("Failed to get screen".to_string()))?
            .clone();

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
        })
    }
}

impl PointerDevice for CursorController {
    fn position(&self) -> Result<(i32, i32)> {
        let reply = self
            .connection
            .query_pointer(self.screen.root)
            .map_err(|e| AppError::CursorControl(format!("Failed to send query pointer: {e}")))?
            .reply()
            .map_err(|e| AppError::CursorControl(format!("Failed to query pointer: {e}")))?;

        Ok((i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    fn set_position(&self, x: i32, y: i32) -> Result<()> {
        // Clamp to screen bounds safely
        let max_x = i32::from(self.screen_width.saturating_sub(1));
        let max_y = i32::from(self.screen_height.saturating_sub(1));
        let x = i16::try_from(x.clamp(0, max_x)).unwrap_or(i16::MAX);
        let y = i16::try_from(y.clamp(0, max_y)).unwrap_or(i16::MAX);

        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| AppError::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| AppError::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    fn screen_size(&self) -> (u32, u32) {
        (u32::from(self.screen_width), u32::from(self.screen_height))
    }
}
