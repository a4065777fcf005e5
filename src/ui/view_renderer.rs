use serde::Serialize;
use crate::config::constants::{MAX_FEATURE_TAGS, PLACEHOLDER_NO_PROJECTS};
use crate::helpers::format::{escape_html, format_currency, status_css_class};
use crate::services::recommendation;
use crate::structs::model_info::ModelInfo;
use crate::structs::prediction_result::PredictionResult;
use crate::structs::project_record::ProjectRecord;
use crate::structs::statistics_summary::StatisticsSummary;

/// Headline counters of the dashboard section. Cost is pre-formatted; the
/// page drops values into text nodes as-is.
#[derive(Debug, Serialize)]
pub struct CountersView {
    pub total_projects: u64,
    pub completed_projects: u64,
    pub in_progress_projects: u64,
    pub total_cost: String,
}

#[derive(Debug, Serialize)]
pub struct ModelInfoView {
    pub delay: DelayModelView,
    pub bottleneck: BottleneckModelView,
}

#[derive(Debug, Serialize)]
pub struct DelayModelView {
    pub model_type: String,
    pub mae: String,
    pub r2_score: String,
    pub n_estimators: u32,
    pub features_html: String,
}

#[derive(Debug, Serialize)]
pub struct BottleneckModelView {
    pub model_type: String,
    pub accuracy: String,
    pub n_estimators: u32,
    pub features_html: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionView {
    pub delay: String,
    pub bottleneck_label: String,
    pub recommendations_html: String,
}

/// Stateless HTML/view-model rendering. Every call is a full re-render;
/// there is no pagination, sorting, or diffing.
pub struct ViewRenderer;

impl ViewRenderer {
    /// One row per record in fixed column order. An empty list renders a
    /// single placeholder row spanning all eight columns.
    pub fn render_table_body(projects: &[ProjectRecord]) -> String {
        if projects.is_empty() {
            return Self::render_placeholder_row(PLACEHOLDER_NO_PROJECTS);
        }

        projects
            .iter()
            .map(|project| {
                format!(
                    "<tr>\
                     <td><strong>{name}</strong></td>\
                     <td>{project_type}</td>\
                     <td><span class=\"status-badge status-{status_class}\">{status}</span></td>\
                     <td>{completion}%</td>\
                     <td>{cost}</td>\
                     <td>{benefit}</td>\
                     <td>{region}</td>\
                     <td>{complexity}</td>\
                     </tr>",
                    name = escape_html(&project.project_name),
                    project_type = escape_html(&project.project_type),
                    status_class = status_css_class(&project.status),
                    status = escape_html(&project.status),
                    completion = project.completionpercent,
                    cost = format_currency(project.project_cost),
                    benefit = format_currency(project.project_benefit),
                    region = escape_html(&project.region),
                    complexity = escape_html(&project.complexity),
                )
            })
            .collect()
    }

    pub fn render_placeholder_row(message: &str) -> String {
        format!(
            "<tr><td colspan=\"8\" class=\"loading-cell\">{}</td></tr>",
            escape_html(message)
        )
    }

    pub fn render_counters(stats: &StatisticsSummary) -> CountersView {
        CountersView {
            total_projects: stats.total_projects,
            completed_projects: stats.completed_projects,
            in_progress_projects: stats.in_progress_projects,
            total_cost: format_currency(stats.total_cost),
        }
    }

    pub fn render_model_info(model_info: &ModelInfo) -> ModelInfoView {
        ModelInfoView {
            delay: DelayModelView {
                model_type: model_info.delay_model.model_type.clone(),
                mae: format!("{:.3}", model_info.delay_model.mae),
                r2_score: format!("{:.3}", model_info.delay_model.r2_score),
                n_estimators: model_info.delay_model.n_estimators,
                features_html: Self::render_feature_tags(&model_info.delay_model.features),
            },
            bottleneck: BottleneckModelView {
                model_type: model_info.bottleneck_model.model_type.clone(),
                accuracy: format!("{:.1}%", model_info.bottleneck_model.accuracy * 100.0),
                n_estimators: model_info.bottleneck_model.n_estimators,
                features_html: Self::render_feature_tags(&model_info.bottleneck_model.features),
            },
        }
    }

    pub fn render_prediction(result: &PredictionResult) -> PredictionView {
        let items: String = recommendation::derive_recommendations(result)
            .iter()
            .map(|message| format!("<li>{}</li>", message))
            .collect();

        PredictionView {
            delay: format!("{:.2}", result.predicted_delay_days),
            bottleneck_label: recommendation::bottleneck_label(result.resource_bottleneck).to_string(),
            recommendations_html: format!(
                "<h4>💡 Recommendations</h4><ul class=\"recommendation-list\">{}</ul>",
                items
            ),
        }
    }

    /// Top-ranked features rendered as tag spans, truncated to the first
    /// ten.
    fn render_feature_tags(features: &[String]) -> String {
        features
            .iter()
            .take(MAX_FEATURE_TAGS)
            .map(|feature| format!("<span class=\"feature-tag\">{}</span>", escape_html(feature)))
            .collect()
    }
}
