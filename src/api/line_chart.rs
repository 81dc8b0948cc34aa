use tracing::{debug, trace, warn};

use crate::core::{CurveGeometry, DataPoint, Viewport, build_curve_geometry};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::{LineChartOptions, frame_from_geometry};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Chart facade consumed by host applications.
///
/// `LineChart` owns the series, the canvas size and the options, and rebuilds
/// geometry from scratch on every render. Nothing is cached between passes.
pub struct LineChart<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    options: LineChartOptions,
    points: Vec<DataPoint>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, viewport: Viewport, options: LineChartOptions) -> ChartResult<Self> {
        validate_viewport(viewport)?;
        options.validate()?;
        Ok(Self {
            renderer,
            viewport,
            options,
            points: Vec::new(),
        })
    }

    /// Replaces the plotted series.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set line chart data");
        self.points = points;
    }

    /// Updates the canvas size, typically after a host resize.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        validate_viewport(viewport)?;
        trace!(
            width = viewport.width,
            height = viewport.height,
            "set line chart viewport"
        );
        self.viewport = viewport;
        Ok(())
    }

    pub fn set_options(&mut self, options: LineChartOptions) -> ChartResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> LineChartOptions {
        self.options
    }

    pub fn geometry(&self) -> ChartResult<Option<CurveGeometry>> {
        build_curve_geometry(&self.points, self.viewport, self.options.padding)
    }

    pub fn build_frame(&self) -> ChartResult<Option<RenderFrame>> {
        Ok(self.geometry()?.map(|geometry| {
            frame_from_geometry(&self.points, self.viewport, &geometry, &self.options)
        }))
    }

    /// Rebuilds the frame and hands it to the renderer.
    ///
    /// Returns `Ok(false)` without touching the renderer when the series is empty.
    pub fn render(&mut self) -> ChartResult<bool> {
        debug!(count = self.points.len(), "line chart render");
        let Some(frame) = self.build_frame()? else {
            warn!("line chart invoked with empty data");
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        Ok(true)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<bool>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_frame()? else {
            warn!("line chart invoked with empty data");
            return Ok(false);
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        return Ok(());
    }
    Err(ChartError::InvalidViewport {
        width: viewport.width,
        height: viewport.height,
    })
}
