use serde::{Deserialize, Deserializer};
use serde::de::{MapAccess, Visitor};
use std::fmt;

/// Aggregate counts and category breakdowns used to drive the chart panels.
/// Built once per load and discarded after the charts are rebuilt.
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsSummary {
    pub total_projects: u64,
    pub completed_projects: u64,
    pub in_progress_projects: u64,
    pub cancelled_projects: u64,
    pub on_hold_projects: u64,
    pub total_cost: f64,
    #[serde(default)]
    pub total_benefit: f64,
    #[serde(default)]
    pub avg_completion_percent: f64,
    #[serde(default)]
    pub avg_cost: f64,
    #[serde(default)]
    pub avg_benefit: f64,
    #[serde(deserialize_with = "ordered_breakdown")]
    pub projects_by_type: Vec<(String, u64)>,
    #[serde(deserialize_with = "ordered_breakdown")]
    pub projects_by_region: Vec<(String, u64)>,
    #[serde(deserialize_with = "ordered_breakdown")]
    pub projects_by_complexity: Vec<(String, u64)>,
}

impl StatisticsSummary {
    /// Status counts in the fixed presentation order of the status chart.
    pub fn status_breakdown(&self) -> Vec<(String, u64)> {
        vec![
            ("Completed".to_string(), self.completed_projects),
            ("In Progress".to_string(), self.in_progress_projects),
            ("Cancelled".to_string(), self.cancelled_projects),
            ("On Hold".to_string(), self.on_hold_projects),
        ]
    }
}

/// Deserializes a JSON object into label/count pairs, keeping the order the
/// backend emitted them in. Chart labels and data series must stay paired,
/// and the backend sorts its breakdowns by descending count.
fn ordered_breakdown<'de, D>(deserializer: D) -> Result<Vec<(String, u64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BreakdownVisitor;

    impl<'de> Visitor<'de> for BreakdownVisitor {
        type Value = Vec<(String, u64)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of category labels to counts")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((label, count)) = access.next_entry::<String, u64>()? {
                entries.push((label, count));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(BreakdownVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdowns_keep_backend_order() {
        let json = r#"{
            "total_projects": 10,
            "completed_projects": 4,
            "in_progress_projects": 3,
            "cancelled_projects": 2,
            "on_hold_projects": 1,
            "total_cost": 5000.0,
            "projects_by_type": {"INCOME GENERATION": 6, "CAPACITY BUILDING": 4},
            "projects_by_region": {"West": 5, "East": 3, "North": 2},
            "projects_by_complexity": {"High": 7, "Low": 3}
        }"#;
        let stats: StatisticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.projects_by_region[0].0, "West");
        assert_eq!(stats.projects_by_region[2], ("North".to_string(), 2));
        assert_eq!(stats.status_breakdown()[1], ("In Progress".to_string(), 3));
    }
}
