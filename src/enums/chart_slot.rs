/// The four fixed chart panels of the dashboard. Each slot owns one canvas
/// element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Type,
    Region,
    Complexity,
    Status,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 4] = [
        ChartSlot::Type,
        ChartSlot::Region,
        ChartSlot::Complexity,
        ChartSlot::Status,
    ];

    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::Type => "typeChart",
            ChartSlot::Region => "regionChart",
            ChartSlot::Complexity => "complexityChart",
            ChartSlot::Status => "statusChart",
        }
    }
}
