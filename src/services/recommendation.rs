use crate::structs::prediction_result::PredictionResult;

pub const SIGNIFICANT_DELAY: &str =
    "⚠️ Significant delay predicted. Consider allocating additional resources.";
pub const MINOR_DELAY: &str = "⏱️ Minor delay expected. Monitor progress closely.";
pub const ON_TRACK: &str = "✅ Project is on track or ahead of schedule.";
pub const BOTTLENECK: &str =
    "🚧 Resource bottleneck detected. Review team allocation and workload distribution.";
pub const NO_BOTTLENECK: &str =
    "✅ No resource bottlenecks detected. Current allocation appears optimal.";
pub const EXCELLENT_ROI: &str = "💰 Excellent ROI potential. Prioritize this project.";
pub const POSITIVE_ROI: &str = "📊 Positive ROI expected. Project is financially viable.";

/// Return on investment as a percentage. Zero cost yields a non-finite
/// value that flows through the threshold checks unguarded: `inf` clears
/// the excellent-ROI bar, `NaN` clears none.
pub fn roi_percent(cost: f64, benefit: f64) -> f64 {
    (benefit - cost) / cost * 100.0
}

pub fn bottleneck_label(resource_bottleneck: bool) -> &'static str {
    if resource_bottleneck {
        "Yes ⚠️"
    } else {
        "No ✅"
    }
}

/// Canned advice derived from one prediction: exactly one delay message,
/// exactly one bottleneck message, and an ROI message only when the ROI is
/// positive.
pub fn derive_recommendations(result: &PredictionResult) -> Vec<&'static str> {
    let mut recommendations = Vec::with_capacity(3);

    if result.predicted_delay_days > 5.0 {
        recommendations.push(SIGNIFICANT_DELAY);
    } else if result.predicted_delay_days > 0.0 {
        recommendations.push(MINOR_DELAY);
    } else {
        recommendations.push(ON_TRACK);
    }

    if result.resource_bottleneck {
        recommendations.push(BOTTLENECK);
    } else {
        recommendations.push(NO_BOTTLENECK);
    }

    let roi = roi_percent(result.input_data.project_cost, result.input_data.project_benefit);
    if roi > 50.0 {
        recommendations.push(EXCELLENT_ROI);
    } else if roi > 0.0 {
        recommendations.push(POSITIVE_ROI);
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::prediction_request::PredictionRequest;

    fn prediction(delay: f64, bottleneck: bool, cost: f64, benefit: f64) -> PredictionResult {
        PredictionResult {
            predicted_delay_days: delay,
            resource_bottleneck: bottleneck,
            input_data: PredictionRequest {
                project_cost: cost,
                project_benefit: benefit,
                complexity: "High".to_string(),
                completionpercent: 40.0,
                actual_duration_days: 90.0,
                project_type: "INCOME GENERATION".to_string(),
                project_manager: "Unknown".to_string(),
                region: "North".to_string(),
                department: "Admin & BI".to_string(),
                phase: "Phase 1 - Explore".to_string(),
                status: "In - Progress".to_string(),
            },
        }
    }

    #[test]
    fn delay_thresholds_pick_exactly_one_message() {
        let messages = derive_recommendations(&prediction(6.0, false, 100.0, 100.0));
        assert!(messages.contains(&SIGNIFICANT_DELAY));
        assert!(!messages.contains(&MINOR_DELAY));
        assert!(!messages.contains(&ON_TRACK));

        let messages = derive_recommendations(&prediction(2.0, false, 100.0, 100.0));
        assert!(messages.contains(&MINOR_DELAY));
        assert!(!messages.contains(&SIGNIFICANT_DELAY));

        let messages = derive_recommendations(&prediction(0.0, false, 100.0, 100.0));
        assert!(messages.contains(&ON_TRACK));
        assert!(!messages.contains(&MINOR_DELAY));
    }

    #[test]
    fn bottleneck_flag_selects_message_and_label() {
        assert!(derive_recommendations(&prediction(0.0, true, 100.0, 100.0)).contains(&BOTTLENECK));
        assert!(derive_recommendations(&prediction(0.0, false, 100.0, 100.0)).contains(&NO_BOTTLENECK));
        assert_eq!(bottleneck_label(true), "Yes ⚠️");
        assert_eq!(bottleneck_label(false), "No ✅");
    }

    #[test]
    fn roi_thresholds() {
        // (160 - 100) / 100 * 100 = 60
        let messages = derive_recommendations(&prediction(0.0, false, 100.0, 160.0));
        assert!(messages.contains(&EXCELLENT_ROI));

        // ROI of 10
        let messages = derive_recommendations(&prediction(0.0, false, 100.0, 110.0));
        assert!(messages.contains(&POSITIVE_ROI));
        assert!(!messages.contains(&EXCELLENT_ROI));

        // ROI of -5: no ROI message at all
        let messages = derive_recommendations(&prediction(0.0, false, 100.0, 95.0));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn zero_cost_roi_is_non_finite_and_unguarded() {
        assert!(roi_percent(0.0, 100.0).is_infinite());
        assert!(roi_percent(0.0, 0.0).is_nan());

        // Infinite ROI clears the > 50 threshold.
        let messages = derive_recommendations(&prediction(0.0, false, 0.0, 100.0));
        assert!(messages.contains(&EXCELLENT_ROI));

        // NaN ROI clears none.
        let messages = derive_recommendations(&prediction(0.0, false, 0.0, 0.0));
        assert_eq!(messages.len(), 2);
    }
}
