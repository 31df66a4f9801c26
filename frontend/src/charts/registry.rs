use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::charts::options::{ChartConfig, ChartKind, ChartOptions};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no canvas with id `{0}`")]
    CanvasNotFound(String),
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>, values: Vec<f64>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            values,
        }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self { labels: Vec::new(), values }
    }

    pub fn label(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| (index + 1).to_string())
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::min)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartData,
    pub config: ChartConfig,
}

/// A live chart. `destroy` releases whatever the chart holds on its canvas.
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// Where charts get drawn. The browser implementation is
/// [`CanvasSurface`](crate::charts::canvas::CanvasSurface).
pub trait ChartSurface {
    type Canvas;
    type Chart: ChartHandle;

    fn locate(&self, canvas_id: &str) -> Option<Self::Canvas>;
    fn build(&self, canvas: Self::Canvas, spec: ChartSpec) -> Result<Self::Chart, ChartError>;
}

/// Owns every chart on the page, at most one per canvas id.
pub struct ChartRegistry<S: ChartSurface> {
    surface: S,
    charts: HashMap<String, S::Chart>,
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, charts: HashMap::new() }
    }

    pub fn create_sparkline(&mut self, id: &str, data: ChartData, options: ChartOptions) -> Option<&S::Chart> {
        self.create(ChartKind::Sparkline, id, data, options)
    }

    pub fn create_bar_chart(&mut self, id: &str, data: ChartData, options: ChartOptions) -> Option<&S::Chart> {
        self.create(ChartKind::Bar, id, data, options)
    }

    pub fn create_doughnut_chart(&mut self, id: &str, data: ChartData, options: ChartOptions) -> Option<&S::Chart> {
        self.create(ChartKind::Doughnut, id, data, options)
    }

    fn create(&mut self, kind: ChartKind, id: &str, data: ChartData, options: ChartOptions) -> Option<&S::Chart> {
        let Some(canvas) = self.surface.locate(id) else {
            warn!("{}", ChartError::CanvasNotFound(id.to_string()));
            return None;
        };

        // The old chart must be gone before a new one touches the same canvas.
        self.destroy_chart(id);

        let spec = ChartSpec {
            kind,
            data,
            config: ChartConfig::defaults(kind).merge(options),
        };
        match self.surface.build(canvas, spec) {
            Ok(chart) => {
                self.charts.insert(id.to_string(), chart);
                self.charts.get(id)
            }
            Err(err) => {
                warn!("chart `{}` not created: {}", id, err);
                None
            }
        }
    }

    pub fn destroy_chart(&mut self, id: &str) {
        if let Some(mut chart) = self.charts.remove(id) {
            chart.destroy();
        }
    }

    pub fn destroy_all_charts(&mut self) {
        for (_, mut chart) in self.charts.drain() {
            chart.destroy();
        }
    }
}

#[cfg(test)]
impl<S: ChartSurface> ChartRegistry<S> {
    pub fn get(&self, id: &str) -> Option<&S::Chart> {
        self.charts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    struct FakeChart {
        serial: u32,
        spec: ChartSpec,
        destroyed: Rc<Cell<u32>>,
    }

    impl ChartHandle for FakeChart {
        fn destroy(&mut self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        canvases: HashSet<&'static str>,
        fail_build: bool,
        built: Cell<u32>,
        destroy_counters: RefCell<Vec<Rc<Cell<u32>>>>,
    }

    impl FakeSurface {
        fn with_canvases(ids: &[&'static str]) -> Self {
            Self { canvases: ids.iter().copied().collect(), ..Self::default() }
        }

        fn destroyed(&self, serial: u32) -> u32 {
            self.destroy_counters.borrow()[serial as usize].get()
        }
    }

    impl ChartSurface for FakeSurface {
        type Canvas = String;
        type Chart = FakeChart;

        fn locate(&self, canvas_id: &str) -> Option<String> {
            self.canvases.contains(canvas_id).then(|| canvas_id.to_string())
        }

        fn build(&self, _canvas: String, spec: ChartSpec) -> Result<FakeChart, ChartError> {
            if self.fail_build {
                return Err(ChartError::Draw("boom".into()));
            }
            let serial = self.built.get();
            self.built.set(serial + 1);
            let destroyed = Rc::new(Cell::new(0));
            self.destroy_counters.borrow_mut().push(destroyed.clone());
            Ok(FakeChart { serial, spec, destroyed })
        }
    }

    fn data() -> ChartData {
        ChartData::new(["Mon", "Tue", "Wed"], vec![3.0, 5.0, 4.0])
    }

    #[test]
    fn recreating_replaces_and_destroys_once() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["x"]));

        registry.create_sparkline("x", data(), ChartOptions::default());
        let second = registry
            .create_sparkline("x", data(), ChartOptions::default())
            .map(|chart| chart.serial);

        assert_eq!(second, Some(1));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.surface.destroyed(0), 1);
        assert_eq!(registry.surface.destroyed(1), 0);
    }

    #[test]
    fn missing_canvas_returns_none_and_keeps_existing_chart() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["x"]));
        registry.create_bar_chart("x", data(), ChartOptions::default());
        registry.surface.canvases.clear();

        assert!(registry.create_bar_chart("x", data(), ChartOptions::default()).is_none());
        assert!(registry.create_doughnut_chart("y", data(), ChartOptions::default()).is_none());
        assert!(registry.contains("x"));
        assert_eq!(registry.surface.destroyed(0), 0);
    }

    #[test]
    fn failed_build_leaves_no_entry() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["x"]));
        registry.create_sparkline("x", data(), ChartOptions::default());
        registry.surface.fail_build = true;

        assert!(registry.create_sparkline("x", data(), ChartOptions::default()).is_none());
        assert!(!registry.contains("x"));
        assert_eq!(registry.surface.destroyed(0), 1);
    }

    #[test]
    fn kind_defaults_merge_with_caller_options() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["spark", "donut"]));
        let spark = registry
            .create_sparkline("spark", data(), ChartOptions::default().title("Weekly"))
            .map(|chart| chart.spec.clone())
            .expect("sparkline");
        assert_eq!(spark.kind, ChartKind::Sparkline);
        assert!(!spark.config.show_axes);
        assert_eq!(spark.config.title.as_deref(), Some("Weekly"));

        let donut = registry
            .create_doughnut_chart("donut", data(), ChartOptions { cutout: Some(0.0), ..ChartOptions::default() })
            .map(|chart| chart.spec.clone())
            .expect("doughnut");
        assert_eq!(donut.config.cutout, 0.0);
        assert!(donut.config.show_legend);
    }

    #[test]
    fn destroy_chart_is_a_noop_for_unknown_ids() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["x"]));
        registry.destroy_chart("x");
        registry.create_sparkline("x", data(), ChartOptions::default());
        registry.destroy_chart("x");
        assert!(registry.is_empty());
        assert_eq!(registry.surface.destroyed(0), 1);
    }

    #[test]
    fn destroy_all_empties_registry_and_is_repeatable() {
        let mut registry = ChartRegistry::new(FakeSurface::with_canvases(&["a", "b", "c"]));
        registry.create_sparkline("a", data(), ChartOptions::default());
        registry.create_bar_chart("b", data(), ChartOptions::default());
        registry.create_doughnut_chart("c", data(), ChartOptions::default());
        assert_eq!(registry.len(), 3);

        registry.destroy_all_charts();
        assert!(registry.is_empty());
        assert!(registry.get("a").is_none());
        for serial in 0..3 {
            assert_eq!(registry.surface.destroyed(serial), 1);
        }

        registry.destroy_all_charts();
        assert!(registry.is_empty());
    }

    #[test]
    fn data_summaries_ignore_non_finite_values() {
        let data = ChartData::from_values(vec![2.0, f64::NAN, 5.0, -1.0]);
        assert_eq!(data.max(), 5.0);
        assert_eq!(data.min(), -1.0);
        assert_eq!(data.label(2), "3");
    }
}
