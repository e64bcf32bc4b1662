use askama::Template;
use vitrine_api_types::ProductWithDiscount;

use super::{money, optional_id, yes_no};
use crate::presentation::{ViewError, ViewFormat};

#[derive(Clone, Debug)]
pub struct ProductRowView {
    pub id: i32,
    pub name: String,
    pub brand_id: String,
    pub category_id: String,
    pub price: String,
    pub in_stock: &'static str,
    pub discount_count: usize,
}

impl From<&ProductWithDiscount> for ProductRowView {
    fn from(item: &ProductWithDiscount) -> Self {
        let product = &item.product;
        Self {
            id: product.id,
            name: product.name.clone(),
            brand_id: optional_id(product.brand_id),
            category_id: optional_id(product.category_id),
            price: money(product.price),
            in_stock: yes_no(product.in_stock),
            discount_count: item.discounts.len(),
        }
    }
}

#[derive(Template)]
#[template(path = "text/products.txt")]
pub struct ProductsTextTemplate {
    pub items: Vec<ProductRowView>,
}

#[derive(Template)]
#[template(path = "html/products.html")]
pub struct ProductsHtmlTemplate {
    pub items: Vec<ProductRowView>,
}

pub(super) fn render(format: ViewFormat, rows: &[ProductWithDiscount]) -> Result<String, ViewError> {
    let items: Vec<ProductRowView> = rows.iter().map(ProductRowView::from).collect();
    Ok(match format {
        ViewFormat::Html => ProductsHtmlTemplate { items }.render()?,
        ViewFormat::Text | ViewFormat::Json => ProductsTextTemplate { items }.render()?,
    })
}
