use crate::core::Viewport;

use super::{
    ChartLayerKind, ChartLayerStack, DrawPrimitive, LinePrimitive, PathPrimitive, RenderFrame,
    TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    fn empty(kind: ChartLayerKind) -> Self {
        Self {
            kind,
            paths: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }
}

/// Render frame split into ordered layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: ChartLayerStack) -> Self {
        Self {
            viewport,
            layers: stack.layers.into_iter().map(LayerPrimitives::empty).collect(),
        }
    }

    pub fn push_path(&mut self, kind: ChartLayerKind, path: PathPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.paths.push(path);
        }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn layer_order(&self) -> Vec<ChartLayerKind> {
        self.layers.iter().map(|layer| layer.kind).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| {
            layer.paths.is_empty() && layer.lines.is_empty() && layer.texts.is_empty()
        })
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        self.flatten_where(|_| true)
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[ChartLayerKind]) -> RenderFrame {
        self.flatten_where(|kind| include_layers.contains(&kind))
    }

    fn flatten_where(&self, include: impl Fn(ChartLayerKind) -> bool) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in self.layers.iter().filter(|layer| include(layer.kind)) {
            frame
                .items
                .extend(layer.paths.iter().cloned().map(DrawPrimitive::Path));
            frame
                .items
                .extend(layer.lines.iter().copied().map(DrawPrimitive::Line));
            frame
                .items
                .extend(layer.texts.iter().cloned().map(DrawPrimitive::Text));
        }
        frame
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredRenderFrame;
    use crate::core::{PathData, Viewport};
    use crate::render::{
        ChartLayerKind, ChartLayerStack, Color, DrawPrimitive, LinePrimitive, PathPrimitive,
        TextHAlign, TextPrimitive,
    };

    #[test]
    fn layered_render_frame_flattens_in_layer_order() {
        let mut layered =
            LayeredRenderFrame::from_stack(Viewport::new(100, 50), ChartLayerStack::canonical());

        layered.push_path(
            ChartLayerKind::Curve,
            PathPrimitive::stroked(PathData::band_rect(0.0, 1.0, 1.0), Color::rgb(0.1, 0.5, 0.6), 2.0),
        );
        layered.push_path(
            ChartLayerKind::MonthBands,
            PathPrimitive::filled(PathData::band_rect(0.0, 5.0, 5.0), Color::rgb(0.9, 0.9, 0.9)),
        );
        layered.push_line(
            ChartLayerKind::Grid,
            LinePrimitive::new(0.0, 1.0, 5.0, 1.0, 1.0, Color::rgb(0.2, 0.2, 0.2)),
        );
        layered.push_text(
            ChartLayerKind::YAxis,
            TextPrimitive::new("5", 2.0, 4.0, 10.0, Color::rgb(0.4, 0.4, 0.4), TextHAlign::Right),
        );

        let flattened = layered.flatten();
        assert_eq!(flattened.items.len(), 4);
        // Bands, gridline, y label, curve: stack order wins over push order.
        assert!(matches!(&flattened.items[0], DrawPrimitive::Path(path) if path.fill.is_some()));
        assert!(matches!(flattened.items[1], DrawPrimitive::Line(_)));
        assert!(matches!(flattened.items[2], DrawPrimitive::Text(_)));
        assert!(matches!(&flattened.items[3], DrawPrimitive::Path(path) if path.stroke.is_some()));

        let curve_only = layered.flatten_layers(&[ChartLayerKind::Curve]);
        assert_eq!(curve_only.paths().count(), 1);
        assert_eq!(curve_only.lines().count(), 0);
    }
}
