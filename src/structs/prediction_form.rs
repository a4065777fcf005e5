use serde::Deserialize;
use crate::structs::prediction_request::PredictionRequest;

/// Raw prediction form fields as submitted by the dashboard page. All
/// values arrive as text and are coerced without range validation; input
/// that fails to parse becomes NaN and travels to the backend as-is, the
/// same way `parseFloat` garbage would.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionForm {
    pub project_cost: String,
    pub project_benefit: String,
    pub complexity: String,
    pub completionpercent: String,
    pub actual_duration_days: String,
    pub project_type: String,
    pub region: String,
    pub department: String,
}

impl PredictionForm {
    pub fn into_request(self) -> PredictionRequest {
        PredictionRequest {
            project_cost: coerce_float(&self.project_cost),
            project_benefit: coerce_float(&self.project_benefit),
            complexity: self.complexity,
            completionpercent: coerce_float(&self.completionpercent),
            actual_duration_days: coerce_int(&self.actual_duration_days),
            project_type: self.project_type,
            project_manager: "Unknown".to_string(),
            region: self.region,
            department: self.department,
            phase: "Phase 1 - Explore".to_string(),
            status: "In - Progress".to_string(),
        }
    }
}

fn coerce_float(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Integer coercion matching `parseInt`: an optional sign followed by the
/// longest run of leading digits, ignoring whatever trails it ("90.5"
/// becomes 90, "12abc" becomes 12). No digits at all yields NaN.
fn coerce_int(value: &str) -> f64 {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<f64>().map(|v| sign * v).unwrap_or(f64::NAN)
}
