//! Shared helpers for integration tests.

use std::cell::RefCell;

use bubbletip_core::tooltip::TooltipContent;
use bubbletip_core::vgi::Graphics;
use vello::kurbo::{Affine, BezPath, Rect, Size, Stroke};
use vello::peniko::{Brush, Fill};

/// A recorded draw call.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Command {
    Fill { transform: Affine, path: BezPath },
    Stroke { width: f64, transform: Affine, path: BezPath },
    PushLayer { alpha: f32, clip: BezPath },
    PopLayer,
}

/// Graphics backend that only remembers what it was asked to draw.
#[derive(Default)]
pub struct RecordingGraphics {
    pub commands: Vec<Command>,
}

impl Graphics for RecordingGraphics {
    fn fill(&mut self, _fill_rule: Fill, transform: Affine, _brush: &Brush, _brush_transform: Option<Affine>, shape: &BezPath) {
        self.commands.push(Command::Fill {
            transform,
            path: shape.clone(),
        });
    }

    fn stroke(&mut self, style: &Stroke, transform: Affine, _brush: &Brush, _brush_transform: Option<Affine>, shape: &BezPath) {
        self.commands.push(Command::Stroke {
            width: style.width,
            transform,
            path: shape.clone(),
        });
    }

    fn push_layer(&mut self, alpha: f32, _transform: Affine, clip: &BezPath) {
        self.commands.push(Command::PushLayer {
            alpha,
            clip: clip.clone(),
        });
    }

    fn pop_layer(&mut self) {
        self.commands.push(Command::PopLayer);
    }
}

/// Tooltip content of a fixed size that remembers where it was drawn.
pub struct Block {
    pub size: Size,
    pub drawn: RefCell<Vec<Rect>>,
}

impl Block {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            drawn: RefCell::new(Vec::new()),
        }
    }
}

impl TooltipContent for Block {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn render(&self, _graphics: &mut dyn Graphics, _transform: Affine, bounds: Rect) {
        self.drawn.borrow_mut().push(bounds);
    }
}
