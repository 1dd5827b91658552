use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTitle(String);

impl ProductTitle {
    pub const MIN_LEN: usize = 3;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().chars().count() < Self::MIN_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at least {} characters",
                Self::MIN_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const MONEY_SCALE: u32 = 2;
const MAX_CATALOG_PRICE_CENTS: i64 = 999_999_999_999;

/// Non-negative amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::Validation("price cannot be negative".into()));
        }
        Ok(Self(amount))
    }

    /// Catalog prices must be strictly positive and fit `NUMERIC(12, 2)`.
    pub fn positive(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::Validation("price must be positive".into()));
        }
        if amount > Decimal::new(MAX_CATALOG_PRICE_CENTS, MONEY_SCALE) {
            return Err(DomainError::Validation(format!(
                "price must not exceed {}",
                Decimal::new(MAX_CATALOG_PRICE_CENTS, MONEY_SCALE)
            )));
        }
        if amount.normalize().scale() > MONEY_SCALE {
            return Err(DomainError::Validation(format!(
                "price must have at most {MONEY_SCALE} decimal places"
            )));
        }
        Ok(Self(amount))
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// `price - price * pct / 100`.
    #[must_use]
    pub fn discounted(&self, discount: DiscountPercentage) -> Self {
        if discount.is_zero() {
            return *self;
        }
        let reduced = self.0 - self.0 * discount.value() / Decimal::ONE_HUNDRED;
        Self(reduced.max(Decimal::ZERO))
    }

    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default)]
pub struct DiscountPercentage(Decimal);

impl DiscountPercentage {
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(DomainError::Validation(
                "discount percentage must be between 0 and 100".into(),
            ));
        }
        if value.normalize().scale() > MONEY_SCALE {
            return Err(DomainError::Validation(format!(
                "discount percentage must have at most {MONEY_SCALE} decimal places"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stock(i32);

impl Stock {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::Validation("stock must be positive".into()));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::Validation("stock is too large".into()))
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProductStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown product status `{other}`"
            ))),
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional physical measurements; every present value must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width_cm: Option<f64>,
    pub depth_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl Dimensions {
    pub fn new(
        width_cm: Option<f64>,
        depth_cm: Option<f64>,
        height_cm: Option<f64>,
        weight_kg: Option<f64>,
    ) -> DomainResult<Self> {
        for (name, value) in [
            ("width_cm", width_cm),
            ("depth_cm", depth_cm),
            ("height_cm", height_cm),
            ("weight_kg", weight_kg),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(DomainError::Validation(format!("{name} must be positive")));
                }
            }
        }
        Ok(Self {
            width_cm,
            depth_cm,
            height_cm,
            weight_kg,
        })
    }
}

/// Ordered list of absolute image URLs; the first entry is the main image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImages(Vec<String>);

impl ProductImages {
    pub fn new(urls: Vec<String>) -> DomainResult<Self> {
        if urls.is_empty() {
            return Err(DomainError::Validation(
                "at least one image is required".into(),
            ));
        }
        for raw in &urls {
            url::Url::parse(raw)
                .map_err(|_| DomainError::Validation(format!("invalid image url `{raw}`")))?;
        }
        Ok(Self(urls))
    }

    pub fn main(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Validate a tag list (materials, style, room): entries must be non-empty.
pub fn tag_list(field: &str, values: Vec<String>) -> DomainResult<Vec<String>> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(DomainError::Validation(format!(
            "{field} entries cannot be empty"
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn discount_reduces_price() {
        let price = Price::positive(Decimal::new(20000, 2)).unwrap();
        let pct = DiscountPercentage::new(Decimal::from(15)).unwrap();
        assert_eq!(price.discounted(pct).amount(), Decimal::new(17000, 2));
    }

    #[test]
    fn zero_discount_keeps_price() {
        let price = Price::positive(Decimal::from(99)).unwrap();
        assert_eq!(price.discounted(DiscountPercentage::default()), price);
    }

    #[test]
    fn discount_out_of_range_is_rejected() {
        assert!(DiscountPercentage::new(Decimal::from(101)).is_err());
        assert!(DiscountPercentage::new(Decimal::from(-1)).is_err());
    }

    #[test]
    fn price_rules() {
        assert!(Price::positive(Decimal::ZERO).is_err());
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(Decimal::from(-3)).is_err());
    }

    #[test]
    fn catalog_price_must_fit_the_column() {
        assert!(Price::positive(Decimal::new(999_999_999_999, 2)).is_ok());
        assert!(Price::positive(Decimal::from(10_000_000_000_i64)).is_err());
        assert!(matches!(
            Price::positive(Decimal::new(9_999, 3)),
            Err(DomainError::Validation(_))
        ));
        // Trailing zeros do not count as precision.
        assert!(Price::positive(Decimal::new(1_250_000, 4)).is_ok());
    }

    #[test]
    fn discount_precision_is_limited() {
        assert!(DiscountPercentage::new(Decimal::new(1_250, 2)).is_ok());
        assert!(DiscountPercentage::new(Decimal::new(12_505, 3)).is_err());
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            ProductStatus::Draft,
            ProductStatus::Published,
            ProductStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
        }
        assert!("LIVE".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn images_require_absolute_urls() {
        assert!(ProductImages::new(vec![]).is_err());
        assert!(ProductImages::new(vec!["/img/a.jpg".into()]).is_err());
        let images = ProductImages::new(vec![
            "https://cdn.example.com/a.jpg".into(),
            "https://cdn.example.com/b.jpg".into(),
        ])
        .unwrap();
        assert_eq!(images.main(), Some("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn dimensions_must_be_positive() {
        assert!(Dimensions::new(Some(120.0), None, Some(75.0), None).is_ok());
        assert!(Dimensions::new(Some(0.0), None, None, None).is_err());
        assert!(Dimensions::new(None, None, None, Some(f64::NAN)).is_err());
    }

    #[test]
    fn stock_must_be_positive() {
        assert!(Stock::new(0).is_err());
        assert_eq!(Stock::new(4).unwrap().value(), 4);
        assert!(Stock::new(i64::from(i32::MAX) + 1).is_err());
    }
}
