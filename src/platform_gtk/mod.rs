use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::LineChart;
use crate::core::{DataPoint, Viewport};
use crate::render::CairoRenderer;

/// Hosts a `LineChart` inside a GTK `DrawingArea`.
///
/// Every draw callback resizes the chart to the allocated area and rebuilds
/// geometry, so data and size changes both go through one redraw path.
pub struct GtkLineChartAdapter {
    area: gtk::DrawingArea,
    chart: Rc<RefCell<LineChart<CairoRenderer>>>,
}

impl GtkLineChartAdapter {
    #[must_use]
    pub fn new(chart: LineChart<CairoRenderer>) -> Self {
        let area = gtk::DrawingArea::new();
        let chart = Rc::new(RefCell::new(chart));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_, context, width, height| {
            let mut chart = draw_chart.borrow_mut();
            let viewport = Viewport::new(f64::from(width), f64::from(height));
            if let Err(err) = chart.set_viewport(viewport) {
                warn!(error = %err, "skipping chart draw for invalid allocation");
                return;
            }
            if let Err(err) = chart.render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
        });

        Self { area, chart }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the series and schedules a redraw.
    pub fn set_data(&self, points: Vec<DataPoint>) {
        self.chart.borrow_mut().set_data(points);
        self.area.queue_draw();
    }
}
