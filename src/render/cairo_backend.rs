use cairo::{Context, Format, ImageSurface, LinearGradient};
use pango::FontDescription;

use crate::core::{CurvePath, CurvePoint, PathSink};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineCap, RenderFrame, Renderer, StrokeStyle, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills_drawn: usize,
    pub strokes_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// `PathSink` that appends to the current Cairo path.
///
/// Cairo has no quadratic primitive, so quadratics are elevated to cubics
/// using the tracked current point.
pub struct CairoPathSink<'a> {
    context: &'a Context,
    current: CurvePoint,
    subpath_start: CurvePoint,
}

impl<'a> CairoPathSink<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        let origin = CurvePoint::new(0.0, 0.0);
        Self {
            context,
            current: origin,
            subpath_start: origin,
        }
    }
}

impl PathSink for CairoPathSink<'_> {
    fn move_to(&mut self, point: CurvePoint) {
        self.context.move_to(point.x, point.y);
        self.current = point;
        self.subpath_start = point;
    }

    fn quad_to(&mut self, control: CurvePoint, end: CurvePoint) {
        let start = self.current;
        let c1x = start.x + 2.0 / 3.0 * (control.x - start.x);
        let c1y = start.y + 2.0 / 3.0 * (control.y - start.y);
        let c2x = end.x + 2.0 / 3.0 * (control.x - end.x);
        let c2y = end.y + 2.0 / 3.0 * (control.y - end.y);
        self.context.curve_to(c1x, c1y, c2x, c2y, end.x, end.y);
        self.current = end;
    }

    fn line_to(&mut self, point: CurvePoint) {
        self.context.line_to(point.x, point.y);
        self.current = point;
    }

    fn close(&mut self) {
        self.context.close_path();
        self.current = self.subpath_start;
    }
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::TRANSPARENT,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        if self.clear_color.alpha > 0.0 {
            apply_color(context, self.clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();

        for fill in &frame.fills {
            let gradient = fill.gradient;
            let pattern = LinearGradient::new(0.0, gradient.start_y, 0.0, gradient.end_y);
            add_color_stop(&pattern, 0.0, gradient.top);
            add_color_stop(&pattern, 1.0, gradient.bottom);
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))?;
            append_path(context, &fill.path);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            stats.fills_drawn += 1;
        }

        for stroke in &frame.strokes {
            apply_stroke_style(context, stroke.style);
            append_path(context, &stroke.path);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke curve", err))?;
            stats.strokes_drawn += 1;
        }

        for line in &frame.lines {
            apply_stroke_style(context, line.style);
            context.new_path();
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let family = if text.bold { "Sans Bold" } else { "Sans" };
            let mut font_description = FontDescription::from_string(family);
            font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn add_color_stop(pattern: &LinearGradient, offset: f64, color: Color) {
    pattern.add_color_stop_rgba(offset, color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke_style(context: &Context, style: StrokeStyle) {
    apply_color(context, style.color);
    context.set_line_width(style.width);
    context.set_line_cap(match style.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
    });
    match style.dash {
        Some(dash) => context.set_dash(&[dash.on, dash.off], dash.phase),
        None => context.set_dash(&[], 0.0),
    }
}

fn append_path(context: &Context, path: &CurvePath) {
    context.new_path();
    let mut sink = CairoPathSink::new(context);
    path.replay(&mut sink);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
