/// Formats a value as whole US dollars with comma grouping: `1234.5`
/// becomes `"$1,235"`. Ties round away from zero, matching the page
/// formatter this replaces. Non-finite input is rendered as-is rather than
/// guarded; upstream produces NaN for unparseable form input and the
/// rendered text is expected to show it.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Derives the CSS class token for a status badge. Both the backend's
/// `"In - Progress"` form and the plain `"In Progress"` form map to
/// `in-progress`.
pub fn status_css_class(status: &str) -> String {
    status.to_lowercase().replace(" - ", " ").replace(' ', "-")
}

/// Minimal HTML escaping for record-derived text interpolated into
/// rendered fragments.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_dollars_with_grouping() {
        assert_eq!(format_currency(1234.5), "$1,235");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-1234.5), "-$1,235");
    }

    #[test]
    fn non_finite_values_render_raw() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$inf");
    }

    #[test]
    fn derives_status_classes() {
        assert_eq!(status_css_class("In Progress"), "in-progress");
        assert_eq!(status_css_class("In - Progress"), "in-progress");
        assert_eq!(status_css_class("On Hold"), "on-hold");
        assert_eq!(status_css_class("On - Hold"), "on-hold");
        assert_eq!(status_css_class("Completed"), "completed");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#x27;");
        assert_eq!(escape_html("Dam Rehab"), "Dam Rehab");
    }
}
