//! Form values for every mutating action.
//!
//! Each form is filled from command-line flags, validated, and converted
//! into the request body the backend expects. Update forms patch a record
//! fetched from the backend, since updates are sent as full records.

use clap::{Args, ValueEnum, builder::BoolishValueParser};
use thiserror::Error;
use time::PrimitiveDateTime;
use vitrine_api_types::{
    Brand, Discount, DiscountBrand, DiscountCategory, DiscountProduct, NAIVE_DATETIME_FORMAT,
    NewBrand, NewDiscount, NewOrderLine, NewProduct, OrderLine, Product,
};

use crate::api::DiscountAssociation;

/// Length of `YYYY-MM-DDTHH:MM`, the value a datetime-local input produces.
const MINUTE_PRECISION_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FormError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProductForm {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub in_stock: bool,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub weight: Option<String>,
    #[arg(long)]
    pub weight_unit: Option<String>,
    #[arg(long)]
    pub width: Option<String>,
    #[arg(long)]
    pub height: Option<String>,
    #[arg(long)]
    pub category_id: Option<String>,
    #[arg(long)]
    pub brand_id: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub tax_rate: Option<String>,
}

impl ProductForm {
    /// Blank text becomes `null`, blank numbers become `0`, and a blank
    /// category or brand is left unset.
    pub fn into_request(self) -> Result<NewProduct, FormError> {
        Ok(NewProduct {
            name: non_blank(self.name.as_deref()),
            in_stock: self.in_stock,
            size: non_blank(self.size.as_deref()),
            color: non_blank(self.color.as_deref()),
            weight: number_or_zero("weight", self.weight.as_deref())?,
            weight_unit: non_blank(self.weight_unit.as_deref()),
            width: number_or_zero("width", self.width.as_deref())?,
            height: number_or_zero("height", self.height.as_deref())?,
            category_id: optional_number("category_id", self.category_id.as_deref())?,
            brand_id: optional_number("brand_id", self.brand_id.as_deref())?,
            price: number_or_zero("price", self.price.as_deref())?,
            tax_rate: number_or_zero("tax_rate", self.tax_rate.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProductUpdateForm {
    #[arg(value_name = "ID")]
    pub id: i32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub in_stock: Option<bool>,
    #[arg(long)]
    pub category_id: Option<i32>,
    #[arg(long)]
    pub brand_id: Option<i32>,
    #[arg(long)]
    pub price: Option<i32>,
    #[arg(long)]
    pub tax_rate: Option<i32>,
}

impl ProductUpdateForm {
    pub fn apply(self, current: Product) -> Result<Product, FormError> {
        let name = match self.name {
            Some(name) => required("name", &name)?,
            None => current.name,
        };
        Ok(Product {
            id: self.id,
            name,
            in_stock: self.in_stock.unwrap_or(current.in_stock),
            category_id: self.category_id.or(current.category_id),
            brand_id: self.brand_id.or(current.brand_id),
            price: self.price.unwrap_or(current.price),
            tax_rate: self.tax_rate.unwrap_or(current.tax_rate),
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BrandForm {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

impl BrandForm {
    pub fn into_request(self) -> Result<NewBrand, FormError> {
        Ok(NewBrand {
            name: required("name", &self.name)?,
            description: non_blank(self.description.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct BrandUpdateForm {
    #[arg(value_name = "ID")]
    pub id: i32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl BrandUpdateForm {
    pub fn apply(self, current: Brand) -> Result<Brand, FormError> {
        let name = match self.name {
            Some(name) => required("name", &name)?,
            None => current.name,
        };
        let description = match self.description {
            Some(description) => non_blank(Some(&description)),
            None => current.description,
        };
        Ok(Brand {
            id: self.id,
            name,
            description,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OrderLineForm {
    #[arg(long)]
    pub cart_id: i32,
    #[arg(long)]
    pub product_id: i32,
    #[arg(long)]
    pub quantity: i32,
}

impl OrderLineForm {
    pub fn into_request(self) -> Result<NewOrderLine, FormError> {
        Ok(NewOrderLine {
            cart_id: self.cart_id,
            product_id: self.product_id,
            quantity: positive("quantity", self.quantity)?,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OrderLineUpdateForm {
    #[arg(value_name = "ID")]
    pub id: i32,
    #[arg(long)]
    pub cart_id: i32,
    #[arg(long)]
    pub product_id: i32,
    #[arg(long)]
    pub quantity: i32,
}

impl OrderLineUpdateForm {
    pub fn into_request(self) -> Result<OrderLine, FormError> {
        Ok(OrderLine {
            id: self.id,
            cart_id: self.cart_id,
            product_id: self.product_id,
            quantity: positive("quantity", self.quantity)?,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct DiscountForm {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub discount_type: String,
    #[arg(long)]
    pub value: i32,
    /// `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
    #[arg(long, value_name = "DATETIME")]
    pub start_date: String,
    /// `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`.
    #[arg(long, value_name = "DATETIME")]
    pub end_date: String,
    #[arg(long, default_value_t = 1)]
    pub min_quantity: i32,
}

impl DiscountForm {
    pub fn into_request(self) -> Result<NewDiscount, FormError> {
        let start_date = parse_datetime("start_date", &self.start_date)?;
        let end_date = parse_datetime("end_date", &self.end_date)?;
        check_window(start_date, end_date)?;
        Ok(NewDiscount {
            name: required("name", &self.name)?,
            discount_type: required("discount_type", &self.discount_type)?,
            value: self.value,
            start_date,
            end_date,
            min_quantity: self.min_quantity,
        })
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DiscountUpdateForm {
    #[arg(value_name = "ID")]
    pub id: i32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub discount_type: Option<String>,
    #[arg(long)]
    pub value: Option<i32>,
    #[arg(long, value_name = "DATETIME")]
    pub start_date: Option<String>,
    #[arg(long, value_name = "DATETIME")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub min_quantity: Option<i32>,
}

impl DiscountUpdateForm {
    pub fn apply(self, current: Discount) -> Result<Discount, FormError> {
        let start_date = match self.start_date {
            Some(raw) => parse_datetime("start_date", &raw)?,
            None => current.start_date,
        };
        let end_date = match self.end_date {
            Some(raw) => parse_datetime("end_date", &raw)?,
            None => current.end_date,
        };
        check_window(start_date, end_date)?;

        Ok(Discount {
            id: self.id,
            name: match self.name {
                Some(name) => required("name", &name)?,
                None => current.name,
            },
            discount_type: match self.discount_type {
                Some(kind) => required("discount_type", &kind)?,
                None => current.discount_type,
            },
            value: self.value.unwrap_or(current.value),
            start_date,
            end_date,
            min_quantity: self.min_quantity.unwrap_or(current.min_quantity),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssociationTarget {
    Category,
    Brand,
    Product,
}

#[derive(Debug, Clone, Args)]
pub struct AssociationForm {
    #[arg(long)]
    pub discount_id: i32,
    #[arg(long, value_enum)]
    pub target: AssociationTarget,
    #[arg(long)]
    pub target_id: i32,
}

impl AssociationForm {
    pub fn into_request(self) -> DiscountAssociation {
        let discount_id = self.discount_id;
        match self.target {
            AssociationTarget::Category => DiscountAssociation::Category(DiscountCategory {
                discount_id,
                category_id: self.target_id,
            }),
            AssociationTarget::Brand => DiscountAssociation::Brand(DiscountBrand {
                discount_id,
                brand_id: self.target_id,
            }),
            AssociationTarget::Product => DiscountAssociation::Product(DiscountProduct {
                discount_id,
                product_id: self.target_id,
            }),
        }
    }
}

/// Parse a naive timestamp, accepting minute precision.
pub fn parse_datetime(field: &'static str, raw: &str) -> Result<PrimitiveDateTime, FormError> {
    let raw = raw.trim();
    let padded;
    let candidate = if raw.len() == MINUTE_PRECISION_LEN {
        padded = format!("{raw}:00");
        padded.as_str()
    } else {
        raw
    };
    PrimitiveDateTime::parse(candidate, NAIVE_DATETIME_FORMAT).map_err(|err| {
        FormError::invalid(field, format!("expected YYYY-MM-DDTHH:MM[:SS] ({err})"))
    })
}

fn check_window(start: PrimitiveDateTime, end: PrimitiveDateTime) -> Result<(), FormError> {
    if end < start {
        return Err(FormError::invalid(
            "end_date",
            "must not be before start_date",
        ));
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    non_blank(Some(value)).ok_or_else(|| FormError::invalid(field, "must not be blank"))
}

fn optional_number(field: &'static str, value: Option<&str>) -> Result<Option<i32>, FormError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|err| FormError::invalid(field, format!("`{raw}` is not a number ({err})"))),
        None => Ok(None),
    }
}

fn number_or_zero(field: &'static str, value: Option<&str>) -> Result<i32, FormError> {
    Ok(optional_number(field, value)?.unwrap_or(0))
}

fn positive(field: &'static str, value: i32) -> Result<i32, FormError> {
    if value <= 0 {
        return Err(FormError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn empty_product_form_uses_defaults() {
        let product = ProductForm::default().into_request().expect("valid");
        assert_eq!(product.name, None);
        assert!(!product.in_stock);
        assert_eq!(product.price, 0);
        assert_eq!(product.weight, 0);
        assert_eq!(product.category_id, None);
        assert_eq!(product.brand_id, None);
    }

    #[test]
    fn product_form_trims_and_parses() {
        let form = ProductForm {
            name: Some("  Lamp ".into()),
            color: Some("   ".into()),
            price: Some("12".into()),
            brand_id: Some(" 3 ".into()),
            category_id: Some(String::new()),
            ..Default::default()
        };
        let product = form.into_request().expect("valid");
        assert_eq!(product.name.as_deref(), Some("Lamp"));
        assert_eq!(product.color, None);
        assert_eq!(product.price, 12);
        assert_eq!(product.brand_id, Some(3));
        assert_eq!(product.category_id, None);
    }

    #[test]
    fn product_form_rejects_garbage_numbers() {
        let form = ProductForm {
            price: Some("twelve".into()),
            ..Default::default()
        };
        let err = form.into_request().expect_err("not a number");
        assert!(matches!(err, FormError::Invalid { field: "price", .. }));
    }

    #[test]
    fn product_update_keeps_unset_fields() {
        let current = Product {
            id: 7,
            name: "Lamp".into(),
            in_stock: false,
            category_id: Some(1),
            brand_id: Some(2),
            price: 12,
            tax_rate: 20,
        };
        let form = ProductUpdateForm {
            id: 7,
            price: Some(15),
            in_stock: Some(true),
            ..Default::default()
        };
        let updated = form.apply(current).expect("valid");
        assert_eq!(updated.name, "Lamp");
        assert_eq!(updated.price, 15);
        assert!(updated.in_stock);
        assert_eq!(updated.brand_id, Some(2));
    }

    #[test]
    fn brand_name_is_required() {
        let err = BrandForm {
            name: " ".into(),
            description: None,
        }
        .into_request()
        .expect_err("blank name");
        assert_eq!(
            err,
            FormError::Invalid {
                field: "name",
                reason: "must not be blank".into()
            }
        );
    }

    #[test]
    fn order_line_quantity_must_be_positive() {
        let form = OrderLineForm {
            cart_id: 1,
            product_id: 2,
            quantity: 0,
        };
        assert!(form.into_request().is_err());
    }

    #[test]
    fn minute_precision_dates_get_seconds() {
        assert_eq!(
            parse_datetime("start_date", "2024-03-01T09:30").expect("valid"),
            datetime!(2024-03-01 09:30:00)
        );
        assert_eq!(
            parse_datetime("start_date", "2024-03-01T09:30:15").expect("valid"),
            datetime!(2024-03-01 09:30:15)
        );
        assert!(parse_datetime("start_date", "01/03/2024").is_err());
    }

    fn discount_form(start: &str, end: &str) -> DiscountForm {
        DiscountForm {
            name: "Spring".into(),
            discount_type: "percentage".into(),
            value: 10,
            start_date: start.into(),
            end_date: end.into(),
            min_quantity: 1,
        }
    }

    #[test]
    fn discount_window_must_not_be_inverted() {
        let err = discount_form("2024-03-31T00:00", "2024-03-01T00:00")
            .into_request()
            .expect_err("inverted window");
        assert!(matches!(err, FormError::Invalid { field: "end_date", .. }));

        let ok = discount_form("2024-03-01T00:00", "2024-03-01T00:00").into_request();
        assert!(ok.is_ok());
    }

    #[test]
    fn discount_type_must_not_be_blank() {
        let mut form = discount_form("2024-03-01T00:00", "2024-03-31T00:00");
        form.discount_type = String::new();
        let err = form.into_request().expect_err("blank type");
        assert!(matches!(
            err,
            FormError::Invalid {
                field: "discount_type",
                ..
            }
        ));
    }

    #[test]
    fn discount_update_checks_merged_window() {
        let current = Discount {
            id: 3,
            name: "Spring".into(),
            discount_type: "percentage".into(),
            value: 10,
            start_date: datetime!(2024-03-01 00:00:00),
            end_date: datetime!(2024-03-31 00:00:00),
            min_quantity: 1,
        };
        let form = DiscountUpdateForm {
            id: 3,
            start_date: Some("2024-04-15T00:00".into()),
            ..Default::default()
        };
        assert!(form.apply(current).is_err());
    }

    #[test]
    fn association_target_picks_variant() {
        let form = AssociationForm {
            discount_id: 1,
            target: AssociationTarget::Product,
            target_id: 8,
        };
        assert!(matches!(
            form.into_request(),
            DiscountAssociation::Product(DiscountProduct {
                discount_id: 1,
                product_id: 8
            })
        ));
    }
}
