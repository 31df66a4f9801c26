use std::fmt::Debug;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts::options::{ChartKind, Rgb};
use crate::charts::registry::{ChartError, ChartHandle, ChartSpec, ChartSurface};
use crate::dom;

type Area = DrawingArea<CanvasBackend, Shift>;

fn draw_err<E: Debug>(err: E) -> ChartError {
    ChartError::Draw(format!("{:?}", err))
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Draws charts onto `<canvas>` elements with plotters.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasSurface;

impl ChartSurface for CanvasSurface {
    type Canvas = HtmlCanvasElement;
    type Chart = CanvasChart;

    fn locate(&self, canvas_id: &str) -> Option<HtmlCanvasElement> {
        dom::typed_element_by_id::<HtmlCanvasElement>(canvas_id, "canvas").ok()
    }

    fn build(&self, canvas: HtmlCanvasElement, spec: ChartSpec) -> Result<CanvasChart, ChartError> {
        let chart = CanvasChart { canvas, spec };
        chart.redraw()?;
        Ok(chart)
    }
}

pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    spec: ChartSpec,
}

impl CanvasChart {
    pub fn redraw(&self) -> Result<(), ChartError> {
        clear_canvas(&self.canvas);
        let backend = CanvasBackend::with_canvas_object(self.canvas.clone())
            .ok_or_else(|| ChartError::Draw("canvas has no 2d context".to_string()))?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        match self.spec.kind {
            ChartKind::Sparkline => draw_sparkline(&root, &self.spec)?,
            ChartKind::Bar => draw_bar(&root, &self.spec)?,
            ChartKind::Doughnut => draw_doughnut(&root, &self.spec)?,
        }

        root.present().map_err(draw_err)
    }
}

impl ChartHandle for CanvasChart {
    fn destroy(&mut self) {
        clear_canvas(&self.canvas);
    }
}

fn clear_canvas(canvas: &HtmlCanvasElement) {
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok());
    if let Some(context) = context {
        context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

fn draw_sparkline(root: &Area, spec: &ChartSpec) -> Result<(), ChartError> {
    let config = &spec.config;
    let points: Vec<(usize, f64)> = spec
        .data
        .values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| value.is_finite())
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let (min, max) = (spec.data.min(), spec.data.max());
    let pad = ((max - min) * 0.1).max(1.0);
    let baseline = min - pad;
    let x_max = spec.data.values.len().saturating_sub(1).max(1);
    let line = rgb(config.color(0));

    let mut builder = ChartBuilder::on(root);
    builder.margin(4);
    if let Some(title) = &config.title {
        builder.caption(title, ("sans-serif", 14));
    }
    if config.show_axes {
        builder.x_label_area_size(24).y_label_area_size(40);
    }
    let mut chart = builder
        .build_cartesian_2d(0..x_max, baseline..(max + pad))
        .map_err(draw_err)?;

    if config.show_axes {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_label_formatter(&|x| spec.data.label(*x))
            .y_label_formatter(&|y| config.value_format.format(*y))
            .draw()
            .map_err(draw_err)?;
    }

    let stroke = line.stroke_width(config.line_width);
    let series = if config.fill {
        chart
            .draw_series(AreaSeries::new(points, baseline, line.mix(0.15)).border_style(stroke))
            .map_err(draw_err)?
    } else {
        chart.draw_series(LineSeries::new(points, stroke)).map_err(draw_err)?
    };

    if config.show_legend {
        series
            .label(config.title.clone().unwrap_or_default())
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], line.filled()));
        chart
            .configure_series_labels()
            .border_style(&BLACK.mix(0.2))
            .draw()
            .map_err(draw_err)?;
    }
    Ok(())
}

fn draw_bar(root: &Area, spec: &ChartSpec) -> Result<(), ChartError> {
    let config = &spec.config;
    let count = spec.data.values.len();
    if count == 0 {
        return Ok(());
    }
    let max = spec.data.max();
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut builder = ChartBuilder::on(root);
    builder.margin(8);
    if let Some(title) = &config.title {
        builder.caption(title, ("sans-serif", 16));
    }
    if config.show_axes {
        builder.x_label_area_size(28).y_label_area_size(44);
    }
    let mut chart = builder.build_cartesian_2d(0..count, 0.0..top).map_err(draw_err)?;

    if config.show_axes {
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count)
            .x_label_formatter(&|x| spec.data.label(*x))
            .y_label_formatter(&|y| config.value_format.format(*y))
            .draw()
            .map_err(draw_err)?;
    }

    chart
        .draw_series(
            spec.data
                .values
                .iter()
                .enumerate()
                .filter(|(_, value)| value.is_finite())
                .map(|(i, value)| {
                    let mut bar = Rectangle::new([(i, 0.0), (i + 1, value.max(0.0))], rgb(config.color(i)).filled());
                    bar.set_margin(0, 0, 4, 4);
                    bar
                }),
        )
        .map_err(draw_err)?;
    Ok(())
}

fn draw_doughnut(root: &Area, spec: &ChartSpec) -> Result<(), ChartError> {
    let config = &spec.config;
    let slices: Vec<(usize, f64)> = spec
        .data
        .values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| value.is_finite() && *value > 0.0)
        .collect();
    if slices.is_empty() {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let (width, height) = (width as i32, height as i32);
    let legend_width = if config.show_legend { width * 2 / 5 } else { 0 };
    let title_height = if config.title.is_some() { 24 } else { 0 };
    let pie_width = width - legend_width;
    let center = (pie_width / 2, title_height + (height - title_height) / 2);
    let radius = (f64::from(pie_width.min(height - title_height)) / 2.0 - 8.0).max(4.0);

    if let Some(title) = &config.title {
        root.draw(&Text::new(title.clone(), (8, 4), ("sans-serif", 16).into_font()))
            .map_err(draw_err)?;
    }

    let sizes: Vec<f64> = slices.iter().map(|(_, value)| *value).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|(i, _)| rgb(config.color(*i))).collect();
    let labels: Vec<String> = if config.show_legend {
        vec![String::new(); slices.len()]
    } else {
        slices.iter().map(|(_, value)| config.value_format.format(*value)).collect()
    };

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    root.draw(&pie).map_err(draw_err)?;

    if config.cutout > 0.0 {
        let hole = (radius * config.cutout) as i32;
        root.draw(&Circle::new(center, hole, WHITE.filled())).map_err(draw_err)?;
    }

    if config.show_legend {
        let x = pie_width + 8;
        for (row, (i, value)) in slices.iter().enumerate() {
            let y = title_height + 16 + row as i32 * 22;
            root.draw(&Rectangle::new([(x, y), (x + 12, y + 12)], rgb(config.color(*i)).filled()))
                .map_err(draw_err)?;
            let text = format!("{} ({})", spec.data.label(*i), config.value_format.format(*value));
            root.draw(&Text::new(text, (x + 18, y), ("sans-serif", 13).into_font()))
                .map_err(draw_err)?;
        }
    }
    Ok(())
}
