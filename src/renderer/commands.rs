//! Recorded draw commands
//!
//! Stores what was drawn instead of drawing it. Cloned handles share one
//! buffer, so a host (or test) can keep a handle after giving one to the
//! simulation.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use super::RenderTarget;
use crate::sim::Color;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Circle { center: DVec2, radius: f64, color: Color },
}

/// Shared, append-only command list
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Take and clear the recorded commands
    pub fn drain(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl RenderTarget for CommandBuffer {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands
            .borrow_mut()
            .push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.borrow_mut().push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
