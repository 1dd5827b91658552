// src/application/commands/unique_slug.rs
use std::fmt::Debug;
use std::future::Future;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::{DomainError, DomainResult},
        slug::{Slug, SlugAllocator},
    },
};

/// Writes racing on the same slug are settled by the unique index; a
/// rejected write re-runs allocation at most this many times in total.
pub(crate) const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Allocate a free slug from `base` and hand it to `write`, allocating again
/// whenever the store reports the slug was claimed in the meantime.
pub(crate) async fn write_with_unique_slug<Id, T, F, Fut>(
    slugs: &SlugAllocator<Id>,
    base: &Slug,
    ignore: Option<Id>,
    mut write: F,
) -> ApplicationResult<T>
where
    Id: Copy + PartialEq + Debug + Send + Sync + 'static,
    F: FnMut(Slug) -> Fut + Send,
    Fut: Future<Output = DomainResult<T>> + Send,
    T: Send,
{
    for attempt in 1..=MAX_WRITE_ATTEMPTS {
        let slug = slugs.allocate_from(base, ignore).await?;
        match write(slug).await {
            Err(DomainError::DuplicateSlug(taken)) => {
                tracing::warn!(attempt, slug = %taken, "slug claimed by a concurrent write, re-allocating");
            }
            other => return other.map_err(ApplicationError::from),
        }
    }

    Err(ApplicationError::conflict(format!(
        "could not claim a unique slug for `{base}`"
    )))
}
