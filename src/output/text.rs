//! Plain-text dashboard summary for the terminal.
//!
//! Renders the report sections in dashboard order with simple bar charts.

use crate::parser::schema::DashboardReport;

const BAR_WIDTH: usize = 40;

/// Render the full summary
///
/// **Public** - `top_categories` limits only the category section
pub fn render_summary(report: &DashboardReport, top_categories: usize) -> String {
    let mut lines = Vec::new();
    let rule = "=".repeat(72);

    lines.push(rule.clone());
    lines.push("ORDER DASHBOARD".to_string());
    lines.push(rule.clone());
    lines.push(format!("Source:       {}", report.source));
    lines.push(format!(
        "Date range:   {} to {}",
        report.range.start, report.range.end
    ));
    lines.push(format!("Total orders: {}", report.total_orders));

    lines.push(String::new());
    lines.push("  YEARLY ORDER TREND".to_string());
    let max_yearly = report.yearly_orders.iter().map(|y| y.total_orders).max();
    if report.yearly_orders.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for entry in &report.yearly_orders {
        lines.push(format!(
            "  {:<6} {} {}",
            entry.year,
            bar(entry.total_orders, max_yearly),
            entry.total_orders
        ));
    }

    lines.push(String::new());
    lines.push(format!("  TOP {} PRODUCT CATEGORIES", top_categories));
    let max_category = report.category_orders.first().map(|c| c.total_orders);
    if report.category_orders.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for entry in report.category_orders.iter().take(top_categories) {
        lines.push(format!(
            "  {:<32} {} {}",
            truncate(&entry.category, 32),
            bar(entry.total_orders, max_category),
            entry.total_orders
        ));
    }

    lines.push(String::new());
    lines.push("  AVERAGE SHIPPING TIME".to_string());
    lines.push(format!("  {}", format_shipping_metric(report.avg_shipping_days)));

    lines.push(String::new());
    lines.push("  PAYMENT METHOD DISTRIBUTION".to_string());
    let max_payment = report.payment_distribution.first().map(|p| p.count);
    if report.payment_distribution.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for entry in &report.payment_distribution {
        lines.push(format!(
            "  {:<16} {} {}",
            entry.payment_type,
            bar(entry.count, max_payment),
            entry.count
        ));
    }

    lines.push(String::new());
    lines.push("  REVIEW SCORE VS SHIPPING DAYS".to_string());
    if report.review_shipping.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for entry in &report.review_shipping {
        lines.push(format!(
            "  score {}  {:>8.2} days",
            entry.review_score, entry.shipping_days
        ));
    }

    let quality = &report.data_quality;
    if quality.negative_shipping > 0 {
        lines.push(String::new());
        lines.push(format!(
            "  ! {} order(s) delivered before purchase were left out of shipping time",
            quality.negative_shipping
        ));
    }

    lines.push(rule);
    lines.join("\n")
}

/// Average shipping time as a labeled metric
pub fn format_shipping_metric(avg_days: Option<f64>) -> String {
    match avg_days {
        Some(days) => format!("Average shipping time: {:.2} days", days),
        None => "Average shipping time: N/A".to_string(),
    }
}

fn bar(value: usize, max: Option<usize>) -> String {
    let max = max.unwrap_or(0).max(1);
    let filled = (value * BAR_WIDTH + max / 2) / max;
    format!("{:<width$}", "█".repeat(filled.min(BAR_WIDTH)), width = BAR_WIDTH)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{
        CategoryOrders, DataQuality, PaymentCount, ReportRange, ReviewShipping, YearlyOrders,
    };
    use chrono::NaiveDate;

    fn report() -> DashboardReport {
        DashboardReport {
            version: "1.0.0".to_string(),
            source: "orders.csv".to_string(),
            range: ReportRange {
                start: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            },
            total_orders: 3,
            yearly_orders: vec![
                YearlyOrders { year: 2021, total_orders: 2 },
                YearlyOrders { year: 2022, total_orders: 1 },
            ],
            category_orders: vec![
                CategoryOrders { category: "toys".to_string(), total_orders: 2 },
                CategoryOrders { category: "books".to_string(), total_orders: 1 },
            ],
            avg_shipping_days: Some(3.67),
            payment_distribution: vec![PaymentCount {
                payment_type: "boleto".to_string(),
                count: 2,
            }],
            review_shipping: vec![ReviewShipping { review_score: 5, shipping_days: 2.0 }],
            data_quality: DataQuality::default(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_render_summary_sections() {
        let text = render_summary(&report(), 10);

        assert!(text.contains("YEARLY ORDER TREND"));
        assert!(text.contains("2021"));
        assert!(text.contains("Average shipping time: 3.67 days"));
        assert!(text.contains("boleto"));
        assert!(text.contains("score 5"));
        assert!(!text.contains("delivered before purchase"));
    }

    #[test]
    fn test_top_categories_limit() {
        let text = render_summary(&report(), 1);
        assert!(text.contains("toys"));
        assert!(!text.contains("books"));
    }

    #[test]
    fn test_shipping_metric_no_data() {
        assert_eq!(format_shipping_metric(None), "Average shipping time: N/A");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, Some(10)).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(5, Some(10)).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, None).trim(), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("cama_mesa_banho_extra_long", 10), "cama_me...");
    }
}
