use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FillPrimitive, LinePrimitive, StrokePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw fills first, then strokes, then straight lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub fills: Vec<FillPrimitive>,
    pub strokes: Vec<StrokePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fills: Vec::new(),
            strokes: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillPrimitive) -> Self {
        self.fills.push(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokePrimitive) -> Self {
        self.strokes.push(stroke);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for fill in &self.fills {
            fill.validate()?;
        }
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
            && self.strokes.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }
}
