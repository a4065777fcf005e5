use serde::Serialize;

/// Chart configuration in the shape the charting library consumes directly:
/// `new Chart(canvas, spec)` on the page side.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Doughnut,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u8>,
}

/// Single color for bar series, one color per slice otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    Palette(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScaleOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendOptions {
    pub labels: LabelColor,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelColor {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleOptions {
    pub y: AxisOptions,
    pub x: AxisOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub ticks: LabelColor,
    pub grid: GridOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}
