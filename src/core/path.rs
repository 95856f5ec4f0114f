use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// One drawing command of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    fn translated(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo { x: x + dx, y: y + dy },
            Self::LineTo { x, y } => Self::LineTo { x: x + dx, y: y + dy },
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self::CubicTo {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                x: x + dx,
                y: y + dy,
            },
            Self::Close => Self::Close,
        }
    }

    fn coordinates(self) -> impl Iterator<Item = f64> {
        let values: [Option<f64>; 6] = match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => {
                [Some(x), Some(y), None, None, None, None]
            }
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [Some(x1), Some(y1), Some(x2), Some(y2), Some(x), Some(y)],
            Self::Close => [None; 6],
        };
        values.into_iter().flatten()
    }
}

/// Backend-agnostic path built from plot-space commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle `[x1, x2] x [0, height]`, closed.
    #[must_use]
    pub fn band_rect(x1: f64, x2: f64, height: f64) -> Self {
        let mut path = Self::new();
        path.move_to(x1, 0.0);
        path.line_to(x2, 0.0);
        path.line_to(x2, height);
        path.line_to(x1, height);
        path.close();
        path
    }

    /// Closed polygon through `vertices`; empty input yields an empty path.
    #[must_use]
    pub fn polygon(vertices: &[PlotPoint]) -> Self {
        let mut path = Self::new();
        let Some((first, rest)) = vertices.split_first() else {
            return path;
        };
        path.move_to(first.x, first.y);
        for vertex in rest {
            path.line_to(vertex.x, vertex.y);
        }
        path.close();
        path
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|command| command.translated(dx, dy))
                .collect(),
        }
    }

    /// SVG path data in compact form (`M0,0L10,0Z`).
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for command in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *command {
                PathCommand::MoveTo { x, y } => write!(out, "M{x},{y}"),
                PathCommand::LineTo { x, y } => write!(out, "L{x},{y}"),
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => write!(out, "C{x1},{y1},{x2},{y2},{x},{y}"),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .commands
            .iter()
            .flat_map(|command| command.coordinates())
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
