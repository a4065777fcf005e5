use std::collections::HashMap;
use uuid::Uuid;
use crate::enums::chart_slot::ChartSlot;
use crate::errors::{ProdashError, ProdashResult};
use crate::structs::chart_spec::{
    AxisOptions, ChartData, ChartOptions, ChartSpec, ChartType, Dataset, Fill, GridOptions,
    LabelColor, LegendOptions, PluginOptions, ScaleOptions,
};
use crate::structs::statistics_summary::StatisticsSummary;

const LEGEND_LABEL_COLOR: &str = "#cbd5e1";
const AXIS_TICK_COLOR: &str = "#cbd5e1";
const GRID_LINE_COLOR: &str = "rgba(148, 163, 184, 0.1)";

const TYPE_PALETTE: [&str; 4] = ["#6366f1", "#8b5cf6", "#ec4899", "#f59e0b"];
const REGION_BAR_COLOR: &str = "#6366f1";
const COMPLEXITY_PALETTE: [&str; 3] = ["#10b981", "#f59e0b", "#ef4444"];
const STATUS_PALETTE: [&str; 4] = ["#10b981", "#3b82f6", "#ef4444", "#f59e0b"];

/// One built chart. The id distinguishes instances across rebuilds so a
/// disposed handle is never mistaken for its replacement.
#[derive(Debug)]
pub struct ChartHandle {
    pub id: Uuid,
    pub spec: ChartSpec,
}

/// Holds the currently live chart per slot. A rebuild always disposes the
/// previous handles first, so stale canvases cannot accumulate.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<ChartSlot, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disposal runs unconditionally, including on an empty registry.
    pub fn dispose_all(&mut self) -> usize {
        let disposed = self.charts.len();
        if disposed > 0 {
            log::debug!("🧹 Disposing {} chart instance(s)", disposed);
        }
        self.charts.clear();
        disposed
    }

    /// Rebuilds all four slots from a fresh summary. Slots build
    /// independently; one slot failing is logged and skipped without
    /// touching the others.
    pub fn rebuild(&mut self, stats: &StatisticsSummary) {
        self.dispose_all();

        for slot in ChartSlot::ALL {
            match build_chart(slot, stats) {
                Ok(spec) => {
                    self.charts.insert(slot, ChartHandle { id: Uuid::new_v4(), spec });
                }
                Err(e) => {
                    log::error!("❌ Error building chart '{}': {}", slot.canvas_id(), e);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn handle_ids(&self) -> Vec<Uuid> {
        self.charts.values().map(|handle| handle.id).collect()
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartHandle> {
        self.charts.get(&slot)
    }

    /// Specs keyed by canvas element id, ready for the page to feed into
    /// the charting library.
    pub fn specs_by_canvas(&self) -> HashMap<&'static str, &ChartSpec> {
        self.charts
            .iter()
            .map(|(slot, handle)| (slot.canvas_id(), &handle.spec))
            .collect()
    }
}

fn build_chart(slot: ChartSlot, stats: &StatisticsSummary) -> ProdashResult<ChartSpec> {
    match slot {
        ChartSlot::Type => categorical_chart(
            slot,
            ChartType::Doughnut,
            &stats.projects_by_type,
            &TYPE_PALETTE,
        ),
        ChartSlot::Region => region_bar_chart(slot, &stats.projects_by_region),
        ChartSlot::Complexity => categorical_chart(
            slot,
            ChartType::Pie,
            &stats.projects_by_complexity,
            &COMPLEXITY_PALETTE,
        ),
        ChartSlot::Status => categorical_chart(
            slot,
            ChartType::Doughnut,
            &stats.status_breakdown(),
            &STATUS_PALETTE,
        ),
    }
}

fn categorical_chart(
    slot: ChartSlot,
    chart_type: ChartType,
    breakdown: &[(String, u64)],
    palette: &[&str],
) -> ProdashResult<ChartSpec> {
    let (labels, data) = split_breakdown(slot, breakdown)?;
    Ok(ChartSpec {
        chart_type,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: None,
                data,
                background_color: Fill::Palette(palette.iter().map(|c| c.to_string()).collect()),
                border_width: Some(0),
                border_radius: None,
            }],
        },
        options: base_options(None),
    })
}

fn region_bar_chart(slot: ChartSlot, breakdown: &[(String, u64)]) -> ProdashResult<ChartSpec> {
    let (labels, data) = split_breakdown(slot, breakdown)?;
    let scales = ScaleOptions {
        y: AxisOptions {
            begin_at_zero: Some(true),
            ticks: LabelColor { color: AXIS_TICK_COLOR.to_string() },
            grid: GridOptions { color: Some(GRID_LINE_COLOR.to_string()), display: None },
        },
        x: AxisOptions {
            begin_at_zero: None,
            ticks: LabelColor { color: AXIS_TICK_COLOR.to_string() },
            grid: GridOptions { color: None, display: Some(false) },
        },
    };

    Ok(ChartSpec {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: Some("Projects".to_string()),
                data,
                background_color: Fill::Solid(REGION_BAR_COLOR.to_string()),
                border_width: None,
                border_radius: Some(8),
            }],
        },
        options: base_options(Some(scales)),
    })
}

fn split_breakdown(
    slot: ChartSlot,
    breakdown: &[(String, u64)],
) -> ProdashResult<(Vec<String>, Vec<u64>)> {
    if breakdown.is_empty() {
        return Err(ProdashError::render_error(slot.canvas_id(), "no categories to plot"));
    }
    Ok(breakdown.iter().map(|(label, count)| (label.clone(), *count)).unzip())
}

fn base_options(scales: Option<ScaleOptions>) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: true,
        plugins: PluginOptions {
            legend: LegendOptions {
                labels: LabelColor { color: LEGEND_LABEL_COLOR.to_string() },
            },
        },
        scales,
    }
}
