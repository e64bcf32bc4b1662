use askama::Template;
use vitrine_api_types::{CartWithOrderLines, OrderLineInCart};

use super::money;
use crate::presentation::{ViewError, ViewFormat};

#[derive(Clone, Debug)]
pub struct OrderLineRowView {
    pub id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub total_with_discount: String,
    pub discount_amount: String,
}

impl From<&OrderLineInCart> for OrderLineRowView {
    fn from(line: &OrderLineInCart) -> Self {
        Self {
            id: line.id,
            product_name: line.product.name.clone(),
            quantity: line.quantity,
            total_with_discount: money(line.orderline_total_with_discount),
            discount_amount: money(line.orderline_total_discount_amount),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CartRowView {
    pub id: i32,
    pub status: &'static str,
    pub lines: Vec<OrderLineRowView>,
}

impl From<&CartWithOrderLines> for CartRowView {
    fn from(item: &CartWithOrderLines) -> Self {
        Self {
            id: item.cart.id,
            status: if item.cart.is_active {
                "active"
            } else {
                "inactive"
            },
            lines: item.order_lines.iter().map(OrderLineRowView::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "text/carts.txt")]
pub struct CartsTextTemplate {
    pub items: Vec<CartRowView>,
}

#[derive(Template)]
#[template(path = "html/carts.html")]
pub struct CartsHtmlTemplate {
    pub items: Vec<CartRowView>,
}

pub(super) fn render(format: ViewFormat, rows: &[CartWithOrderLines]) -> Result<String, ViewError> {
    let items: Vec<CartRowView> = rows.iter().map(CartRowView::from).collect();
    Ok(match format {
        ViewFormat::Html => CartsHtmlTemplate { items }.render()?,
        ViewFormat::Text | ViewFormat::Json => CartsTextTemplate { items }.render()?,
    })
}

#[cfg(test)]
mod tests {
    use vitrine_api_types::{Cart, DiscountBreakdown, Product};

    use super::*;

    fn cart_with_line() -> CartWithOrderLines {
        CartWithOrderLines {
            cart: Cart {
                id: 4,
                is_active: true,
            },
            order_lines: vec![OrderLineInCart {
                id: 11,
                cart_id: 4,
                product: Product {
                    id: 7,
                    name: "Lamp".into(),
                    in_stock: true,
                    category_id: None,
                    brand_id: None,
                    price: 12,
                    tax_rate: 0,
                },
                quantity: 2,
                orderline_total: 24,
                orderline_total_discount_amount: 4,
                orderline_total_with_discount: 20,
                discounts: Vec::new(),
                discount_resolution_breakdown: DiscountBreakdown::default(),
            }],
        }
    }

    #[test]
    fn text_lists_order_lines_under_cart() -> Result<(), ViewError> {
        let empty = CartWithOrderLines {
            cart: Cart {
                id: 5,
                is_active: false,
            },
            order_lines: Vec::new(),
        };
        let out = render(ViewFormat::Text, &[cart_with_line(), empty])?;
        assert!(out.contains("Cart ID: 4 (active)"));
        assert!(out.contains("line #11: 2 x Lamp = $20.00 (discount $4.00)"));
        assert!(out.contains("Cart ID: 5 (inactive)"));
        assert!(out.contains("(empty)"));
        Ok(())
    }

    #[test]
    fn html_keeps_empty_cart_button() -> Result<(), ViewError> {
        let out = render(ViewFormat::Html, &[cart_with_line()])?;
        assert!(out.contains("Cart ID: 4"));
        assert!(out.contains("<button data-id=\"4\" class=\"delete\">Empty Cart</button>"));
        Ok(())
    }
}
