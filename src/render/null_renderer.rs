use crate::error::ChartResult;
use crate::render::{DrawPrimitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// it reaches a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_hit_region_count: usize,
    pub render_count: usize,
    /// Hit region of the topmost item of the last frame, if it was one.
    pub last_item_hit_region: Option<usize>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths().count();
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.texts().count();
        self.last_hit_region_count = frame
            .items
            .iter()
            .filter(|item| item.hit_region().is_some())
            .count();
        self.last_item_hit_region = frame.items.last().and_then(DrawPrimitive::hit_region);
        self.render_count += 1;
        Ok(())
    }
}
