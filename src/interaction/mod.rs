use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public hover state exposed to host applications.
///
/// `x`/`y` are the raw pointer position in viewport pixels. The `snapped_*`
/// fields carry the hovered observation's point, also in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub hovered_index: Option<usize>,
    pub hovered_day: Option<NaiveDate>,
    pub hovered_rank: Option<f64>,
    pub snapped_x: Option<f64>,
    pub snapped_y: Option<f64>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            hovered_index: None,
            hovered_day: None,
            hovered_rank: None,
            snapped_x: None,
            snapped_y: None,
        }
    }
}

impl HoverState {
    /// Pointer is over the chart but no observation owns the position.
    #[must_use]
    pub fn unresolved(x: f64, y: f64) -> Self {
        Self {
            visible: true,
            x,
            y,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        self.hovered_index.is_some()
    }
}
