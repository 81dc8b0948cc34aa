use serde::{Deserialize, Serialize};

/// Point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One quadratic Bézier piece of the smoothed stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadSegment {
    pub start: CurvePoint,
    pub control: CurvePoint,
    pub end: CurvePoint,
}

/// Minimal path-building capability consumed by geometry and renderers.
///
/// Any drawing library can implement this; geometry never sees a concrete
/// backend path type.
pub trait PathSink {
    fn move_to(&mut self, point: CurvePoint);
    fn quad_to(&mut self, control: CurvePoint, end: CurvePoint);
    fn line_to(&mut self, point: CurvePoint);
    fn close(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: CurvePoint },
    QuadTo { control: CurvePoint, to: CurvePoint },
    LineTo { to: CurvePoint },
    Close,
}

/// Recorded path that can be replayed into any `PathSink`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Records `segments` as one open subpath starting at the first segment start.
    #[must_use]
    pub fn from_segments(segments: &[QuadSegment]) -> Self {
        let mut path = Self::with_capacity(segments.len() + 1);
        if let Some(first) = segments.first() {
            path.move_to(first.start);
        }
        for segment in segments {
            path.quad_to(segment.control, segment.end);
        }
        path
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
    pub fn first_point(&self) -> Option<CurvePoint> {
        self.commands.iter().find_map(|command| match *command {
            PathCommand::MoveTo { to } => Some(to),
            _ => None,
        })
    }

    /// End point of the last drawing command, ignoring a trailing `Close`.
    #[must_use]
    pub fn last_point(&self) -> Option<CurvePoint> {
        self.commands.iter().rev().find_map(|command| match *command {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    /// A path is closed when it ends with `Close` and explicitly returns to its start.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
            && self.first_point().is_some()
            && self.first_point() == self.last_point()
    }

    #[must_use]
    pub fn points(&self) -> Vec<CurvePoint> {
        let mut points = Vec::with_capacity(self.commands.len() * 2);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => points.push(to),
                PathCommand::QuadTo { control, to } => {
                    points.push(control);
                    points.push(to);
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo { to } => sink.move_to(to),
                PathCommand::QuadTo { control, to } => sink.quad_to(control, to),
                PathCommand::LineTo { to } => sink.line_to(to),
                PathCommand::Close => sink.close(),
            }
        }
    }
}

impl PathSink for CurvePath {
    fn move_to(&mut self, point: CurvePoint) {
        self.commands.push(PathCommand::MoveTo { to: point });
    }

    fn quad_to(&mut self, control: CurvePoint, end: CurvePoint) {
        self.commands.push(PathCommand::QuadTo { control, to: end });
    }

    fn line_to(&mut self, point: CurvePoint) {
        self.commands.push(PathCommand::LineTo { to: point });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
