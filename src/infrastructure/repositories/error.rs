use crate::domain::errors::DomainError;
use crate::domain::slug::Slug;

const CNT_PRODUCT_SLUG: &str = "products_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_LINK_PRODUCT: &str = "product_categories_product_id_fkey";
const CNT_LINK_CATEGORY: &str = "product_categories_category_id_fkey";
const CNT_LINK_PKEY: &str = "product_categories_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PRODUCT_SLUG | CNT_CATEGORY_SLUG => {
                        DomainError::DuplicateSlug(constraint.to_owned())
                    }
                    CNT_LINK_PRODUCT => DomainError::NotFound("product not found".into()),
                    CNT_LINK_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_LINK_PKEY => {
                        DomainError::Conflict("category linked to product twice".into())
                    }
                    other if other.ends_with("_chk") => {
                        DomainError::Validation(format!("check constraint violated: {other}"))
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`] but reports which slug the unique index rejected.
pub(super) fn map_slug_write(err: sqlx::Error, slug: &Slug) -> DomainError {
    match map_sqlx(err) {
        DomainError::DuplicateSlug(_) => DomainError::DuplicateSlug(slug.to_string()),
        other => other,
    }
}
