use super::ui;
use crate::core::badge::Badge;
use crate::core::format::{format_count, format_crore, format_inr, format_latency, format_percent};
use crate::core::model::{DecisionInsights, TimeRange};
use crate::core::provider::DataProvider;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(range: TimeRange, insights: &DecisionInsights) -> String {
    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text("Decision Insights & Analytics", ui::StyleType::Title),
        ui::style_text(
            &format!("Cross-sell performance and decision outcomes • {}", range.label()),
            ui::StyleType::Subtle
        ),
    );

    let headline = ui::key_value_table([
        ("Total Offers Sent", format_count(insights.total_offers)),
        ("Conversion Rate", format_percent(insights.conversion_rate)),
        ("Revenue Generated", format_crore(insights.revenue)),
        ("Avg. Offer Value", format_inr(insights.avg_offer_value)),
    ]);
    output.push_str(&headline.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section(
        "Cross-Sell Performance by Product",
        "Conversion rates and revenue",
    ));
    let mut products = ui::new_styled_table();
    products.set_header(vec![
        ui::header_cell("Product"),
        ui::header_cell("Offers Sent"),
        ui::header_cell("Accepted"),
        ui::header_cell("Conversion Rate"),
        ui::header_cell("Revenue"),
        ui::header_cell("Avg. Value"),
        ui::header_cell("ROI"),
    ]);
    for product in &insights.product_performance {
        products.add_row(vec![
            Cell::new(&product.name),
            ui::amount_cell(format_count(product.sent)),
            ui::amount_cell(product.accepted.to_string()),
            ui::badge_cell(
                &format_percent(product.conversion_rate),
                product.conversion_badge,
            ),
            ui::amount_cell(format_inr(product.revenue)),
            ui::amount_cell(format_inr(product.avg_value)),
            ui::badge_cell(&format!("{}x", product.roi), Badge::Success),
        ]);
    }
    output.push_str(&products.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section(
        "Recent Conversions",
        "Offers accepted by customers",
    ));
    let mut conversions = ui::new_styled_table();
    conversions.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Customer"),
        ui::header_cell("Product"),
        ui::header_cell("Channel"),
        ui::header_cell("Value"),
        ui::header_cell("Decision Time"),
    ]);
    for conversion in &insights.recent_conversions {
        conversions.add_row(vec![
            Cell::new(&conversion.time),
            Cell::new(format!(
                "{}\n{}",
                conversion.customer_name, conversion.customer_id
            )),
            Cell::new(&conversion.product),
            Cell::new(&conversion.channel),
            ui::amount_cell(format_inr(conversion.value)),
            Cell::new(format_latency(conversion.decision_time)),
        ]);
    }
    output.push_str(&conversions.to_string());

    output
}

pub async fn run(provider: &dyn DataProvider, range: TimeRange) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Loading insights for {}...", range.label()));
    let result = provider.decision_insights(range).await;
    spinner.finish_and_clear();

    match result {
        Ok(insights) => println!("{}", render(range, &insights)),
        Err(e) => println!(
            "{}",
            ui::style_text(
                &format!("Could not load decision insights: {e}"),
                ui::StyleType::Error
            )
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fixture_data::fixtures;

    #[test]
    fn test_render_fixture_insights() {
        let output = render(TimeRange::Week, &fixtures().insights);
        assert!(output.contains("This Week"));
        assert!(output.contains("9,215"));
        assert!(output.contains("28%"));
        assert!(output.contains("₹4580.00Cr"));
        assert!(output.contains("₹2,08,333"));
        assert!(output.contains("12.4x"));
        assert!(output.contains("Home Equity Line"));
        assert!(output.contains("Personal Banker"));
        assert!(output.contains("128ms"));
    }
}
