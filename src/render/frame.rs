use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PathPrimitive, TextPrimitive};

/// One drawable item of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Path(PathPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
}

impl DrawPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Path(path) => path.validate(),
            Self::Line(line) => line.validate(),
            Self::Text(text) => text.validate(),
        }
    }

    #[must_use]
    pub fn hit_region(&self) -> Option<usize> {
        match self {
            Self::Path(path) => path.hit_region,
            Self::Line(_) | Self::Text(_) => None,
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// `items` is the paint order: backends draw front to back in sequence, so
/// later items cover earlier ones and receive pointer events first.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub items: Vec<DrawPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            items: Vec::new(),
        }
    }

    /// A zero-sized viewport is only valid for a frame with nothing to draw.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() && !self.items.is_empty() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawPrimitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawPrimitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.items.iter().filter_map(|item| match item {
            DrawPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }
}
