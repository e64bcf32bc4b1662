use askama::Template;
use vitrine_api_types::{Discount, NAIVE_DATETIME_FORMAT};

use crate::presentation::{ViewError, ViewFormat};

#[derive(Clone, Debug)]
pub struct DiscountRowView {
    pub id: i32,
    pub name: String,
    pub discount_type: String,
    pub value: i32,
    pub start_date: String,
    pub end_date: String,
    pub min_quantity: i32,
}

impl TryFrom<&Discount> for DiscountRowView {
    type Error = ViewError;

    fn try_from(discount: &Discount) -> Result<Self, Self::Error> {
        Ok(Self {
            id: discount.id,
            name: discount.name.clone(),
            discount_type: discount.discount_type.clone(),
            value: discount.value,
            start_date: discount.start_date.format(NAIVE_DATETIME_FORMAT)?,
            end_date: discount.end_date.format(NAIVE_DATETIME_FORMAT)?,
            min_quantity: discount.min_quantity,
        })
    }
}

#[derive(Template)]
#[template(path = "text/discounts.txt")]
pub struct DiscountsTextTemplate {
    pub items: Vec<DiscountRowView>,
}

#[derive(Template)]
#[template(path = "html/discounts.html")]
pub struct DiscountsHtmlTemplate {
    pub items: Vec<DiscountRowView>,
}

pub(super) fn render(format: ViewFormat, rows: &[Discount]) -> Result<String, ViewError> {
    let items = rows
        .iter()
        .map(DiscountRowView::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(match format {
        ViewFormat::Html => DiscountsHtmlTemplate { items }.render()?,
        ViewFormat::Text | ViewFormat::Json => DiscountsTextTemplate { items }.render()?,
    })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn shows_validity_window() -> Result<(), ViewError> {
        let rows = [Discount {
            id: 3,
            name: "Spring".into(),
            discount_type: "percentage".into(),
            value: 15,
            start_date: datetime!(2024-03-01 00:00:00),
            end_date: datetime!(2024-03-31 23:59:00),
            min_quantity: 2,
        }];

        let text = render(ViewFormat::Text, &rows)?;
        assert!(text.contains("#3 Spring"));
        assert!(text.contains("Valid: 2024-03-01T00:00:00 to 2024-03-31T23:59:00"));
        assert!(text.contains("Min quantity: 2"));

        let html = render(ViewFormat::Html, &rows)?;
        assert!(html.contains("Discount Name: Spring"));
        assert!(html.contains("Delete Discount"));
        Ok(())
    }
}
