use askama::Template;
use vitrine_api_types::Brand;

use crate::presentation::{ViewError, ViewFormat};

#[derive(Clone, Debug)]
pub struct BrandRowView {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<&Brand> for BrandRowView {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name.clone(),
            description: brand.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "text/brands.txt")]
pub struct BrandsTextTemplate {
    pub items: Vec<BrandRowView>,
}

#[derive(Template)]
#[template(path = "html/brands.html")]
pub struct BrandsHtmlTemplate {
    pub items: Vec<BrandRowView>,
}

pub(super) fn render(format: ViewFormat, rows: &[Brand]) -> Result<String, ViewError> {
    let items: Vec<BrandRowView> = rows.iter().map(BrandRowView::from).collect();
    Ok(match format {
        ViewFormat::Html => BrandsHtmlTemplate { items }.render()?,
        ViewFormat::Text | ViewFormat::Json => BrandsTextTemplate { items }.render()?,
    })
}
