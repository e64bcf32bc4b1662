use askama::Template;

use crate::cache::Records;

use super::{ViewError, ViewFormat};

mod brands;
mod carts;
mod discounts;
mod panels;
mod products;

pub use brands::BrandRowView;
pub use carts::{CartRowView, OrderLineRowView};
pub use discounts::DiscountRowView;
pub use products::ProductRowView;

/// Render a fetched collection in `format`.
pub fn render_records(format: ViewFormat, records: &Records) -> Result<String, ViewError> {
    match (format, records) {
        (ViewFormat::Json, records) => Ok(serde_json::to_string_pretty(records)?),
        (format, Records::Products(rows)) => products::render(format, rows),
        (format, Records::Brands(rows)) => brands::render(format, rows),
        (format, Records::Carts(rows)) => carts::render(format, rows),
        (format, Records::Discounts(rows)) => discounts::render(format, rows),
    }
}

pub fn render_processor_panel(format: ViewFormat) -> Result<String, ViewError> {
    panels::processor(format)
}

pub fn render_login_prompt(format: ViewFormat) -> Result<String, ViewError> {
    panels::login(format)
}

fn render_either<T: Template, H: Template>(
    format: ViewFormat,
    text: impl FnOnce() -> T,
    html: impl FnOnce() -> H,
) -> Result<String, ViewError> {
    Ok(match format {
        ViewFormat::Html => html().render()?,
        ViewFormat::Text | ViewFormat::Json => text().render()?,
    })
}

/// Whole currency units with two decimals, sign before the `$`.
pub(crate) fn money(amount: i32) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${:.2}", f64::from(amount).abs())
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

pub(crate) fn optional_id(id: Option<i32>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use vitrine_api_types::Brand;

    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(12), "$12.00");
        assert_eq!(money(0), "$0.00");
        assert_eq!(money(-3), "-$3.00");
    }

    #[test]
    fn json_output_is_the_raw_records() -> Result<(), ViewError> {
        let records = Records::Brands(vec![Brand {
            id: 2,
            name: "Acme".into(),
            description: None,
        }]);
        let rendered = render_records(ViewFormat::Json, &records)?;
        let value: serde_json::Value = serde_json::from_str(&rendered)?;
        assert_eq!(value[0]["name"], "Acme");
        assert_eq!(value[0]["id"], 2);
        Ok(())
    }

    #[test]
    fn every_collection_renders_in_every_format() -> Result<(), ViewError> {
        let collections = [
            Records::Products(Vec::new()),
            Records::Brands(vec![Brand {
                id: 2,
                name: "Acme".into(),
                description: Some("Anvils".into()),
            }]),
            Records::Carts(Vec::new()),
            Records::Discounts(Vec::new()),
        ];
        for records in &collections {
            for format in [ViewFormat::Text, ViewFormat::Html, ViewFormat::Json] {
                assert!(!render_records(format, records)?.is_empty());
            }
        }
        let html = render_records(ViewFormat::Html, &collections[1])?;
        assert!(html.contains("data-id=\"2\""));
        Ok(())
    }

    #[test]
    fn panels_render_in_both_formats() -> Result<(), ViewError> {
        assert!(render_processor_panel(ViewFormat::Text)?.contains("processor pause"));
        assert!(render_processor_panel(ViewFormat::Html)?.contains("pauseProcessorButton"));
        assert!(render_login_prompt(ViewFormat::Text)?.contains("Not logged in"));
        assert!(render_login_prompt(ViewFormat::Html)?.contains("loginForm"));
        Ok(())
    }
}
