use super::ui;
use crate::core::badge::{Badge, status_label_badge};
use crate::core::format::{format_inr, initials};
use crate::core::model::{CustomerProfile, CustomerTransaction};
use crate::core::provider::{DataProvider, ProviderError};
use anyhow::Result;
use comfy_table::{Cell, Color};
use tracing::instrument;

pub const NOT_FOUND_MESSAGE: &str = "Customer not found. Please try a different Customer ID.";

/// Everything the customer 360 view shows for one id.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerView {
    pub profile: Option<CustomerProfile>,
    pub activity: Vec<CustomerTransaction>,
}

#[instrument(skip(provider))]
pub async fn load(
    provider: &dyn DataProvider,
    customer_id: &str,
) -> Result<CustomerView, ProviderError> {
    let Some(profile) = provider.customer_profile(customer_id).await? else {
        return Ok(CustomerView {
            profile: None,
            activity: Vec::new(),
        });
    };
    let activity = provider.customer_transactions(customer_id).await?;
    Ok(CustomerView {
        profile: Some(profile),
        activity,
    })
}

pub fn render(view: &CustomerView) -> String {
    match &view.profile {
        None => ui::style_text(NOT_FOUND_MESSAGE, ui::StyleType::Warning),
        Some(profile) => render_profile(profile, &view.activity),
    }
}

fn render_profile(profile: &CustomerProfile, activity: &[CustomerTransaction]) -> String {
    let mut output = format!(
        "{}\n\n{}  {}\n{}\n\n",
        ui::style_text("Customer 360° Profile", ui::StyleType::Title),
        ui::style_text(
            &format!("[{}]", initials(&profile.first_name, &profile.last_name)),
            ui::StyleType::Value
        ),
        ui::style_text(&profile.full_name(), ui::StyleType::Subtitle),
        ui::style_text(&profile.customer_id, ui::StyleType::Subtle),
    );

    let mut details = ui::key_value_table([
        ("Customer Since", profile.customer_since.to_string()),
        ("Credit Score", profile.credit_score.to_string()),
        ("Life Stage", profile.life_stage.clone()),
        ("Lifetime Value", format_inr(profile.lifetime_value)),
        ("Annual Income", format_inr(profile.annual_income)),
        ("Email", profile.email.clone()),
        ("Phone", profile.phone.clone()),
        ("Location", format!("{}, {}", profile.city, profile.state)),
    ]);
    details.add_row(vec![
        Cell::new("Tier").fg(Color::Cyan),
        ui::badge_cell(&profile.tier, profile.tier_badge),
    ]);
    output.push_str(&details.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section("Product Holdings", "Active accounts and products"));
    let mut products = ui::new_styled_table();
    products.set_header(vec![
        ui::header_cell("Product"),
        ui::header_cell("Balance"),
        ui::header_cell("Account"),
    ]);
    for product in &profile.products {
        products.add_row(vec![
            Cell::new(&product.kind),
            ui::amount_cell(format_inr(product.balance)),
            Cell::new(&product.account_number),
        ]);
    }
    output.push_str(&products.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section("Financial Summary", "Total assets and liabilities"));
    let summary = ui::key_value_table([
        ("Total Assets", format_inr(profile.total_assets)),
        ("Total Liabilities", format_inr(profile.total_liabilities)),
        ("Net Worth", format_inr(profile.net_worth())),
    ]);
    output.push_str(&summary.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section("Recent Transactions", "Last 10 transactions"));
    let mut recent = ui::new_styled_table();
    recent.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Description"),
        ui::header_cell("Date"),
        ui::header_cell("Account"),
        ui::header_cell("Amount"),
        ui::header_cell("Status"),
    ]);
    for txn in activity {
        let amount_color = if txn.amount_class == "positive" {
            Color::Green
        } else {
            Color::Reset
        };
        let badge = match txn.status_badge {
            Badge::Secondary => status_label_badge(&txn.status),
            badge => badge,
        };
        recent.add_row(vec![
            Cell::new(&txn.icon),
            Cell::new(&txn.description),
            Cell::new(txn.date.to_string()),
            Cell::new(&txn.account_type),
            ui::amount_cell(txn.amount.clone()).fg(amount_color),
            ui::badge_cell(&txn.status, badge),
        ]);
    }
    output.push_str(&recent.to_string());

    output
}

pub async fn run(provider: &dyn DataProvider, customer_id: &str) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Loading customer {customer_id}..."));
    let result = load(provider, customer_id).await;
    spinner.finish_and_clear();

    match result {
        Ok(view) => println!("{}", render(&view)),
        Err(e) => println!(
            "{}",
            ui::style_text(
                &format!("Could not load customer profile: {e}"),
                ui::StyleType::Error
            )
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::FixtureProvider;

    #[tokio::test]
    async fn test_unknown_fixture_customer_shows_first_record() {
        let provider = FixtureProvider::new(false);
        let view = load(&provider, "C999999").await.unwrap();
        let output = render(&view);
        assert!(output.contains("Sarah Johnson"));
        assert!(output.contains("C123456"));
        assert!(!output.contains(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_render_profile_details() {
        let provider = FixtureProvider::new(false);
        let view = load(&provider, "C234567").await.unwrap();
        assert_eq!(view.activity.len(), 10);

        let output = render(&view);
        assert!(output.contains("[TA]"));
        assert!(output.contains("Tom Anderson"));
        assert!(output.contains("2019-06-18"));
        assert!(output.contains("Net Worth"));
        assert!(output.contains("₹78,00,000"));
        assert!(output.contains("-₹18,50,000"));
        assert!(output.contains("Mobile Deposit"));
    }

    #[test]
    fn test_render_absent_customer() {
        let view = CustomerView {
            profile: None,
            activity: Vec::new(),
        };
        assert!(render(&view).contains(NOT_FOUND_MESSAGE));
    }
}
