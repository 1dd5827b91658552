// src/domain/slug/allocator.rs
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::{Slug, SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PROBE_LIMIT: u32 = 1000;

/// Answers "which record currently owns this slug" for one entity type.
#[async_trait]
pub trait SlugOwnerLookup<Id>: Send + Sync {
    async fn find_slug_owner(&self, slug: &Slug) -> DomainResult<Option<Id>>;
}

/// Domain service producing slugs that are unique within one entity type.
pub struct SlugAllocator<Id> {
    lookup: Arc<dyn SlugOwnerLookup<Id>>,
    generator: Arc<dyn SlugGenerator>,
    probe_limit: u32,
}

impl<Id> SlugAllocator<Id>
where
    Id: Copy + PartialEq + Debug + Send + Sync + 'static,
{
    pub fn new(
        lookup: Arc<dyn SlugOwnerLookup<Id>>,
        generator: Arc<dyn SlugGenerator>,
        probe_limit: u32,
    ) -> Self {
        Self {
            lookup,
            generator,
            probe_limit: probe_limit.max(1),
        }
    }

    /// Normalize a human title or slug input into the probing base.
    pub fn normalize(&self, input: &str) -> DomainResult<Slug> {
        let base = self.generator.slugify(input);
        if base.is_empty() {
            return Err(DomainError::Validation(format!(
                "`{input}` must contain at least one ASCII letter or digit"
            )));
        }
        Slug::new(base)
    }

    /// Normalize `input` and probe for the first free candidate.
    ///
    /// With `ignore` set, a candidate owned by that record counts as free so
    /// updates can keep their own slug.
    pub async fn allocate(&self, input: &str, ignore: Option<Id>) -> DomainResult<Slug> {
        let base = self.normalize(input)?;
        self.allocate_from(&base, ignore).await
    }

    /// Probe `base`, `base-2`, `base-3`, ... one lookup at a time.
    pub async fn allocate_from(&self, base: &Slug, ignore: Option<Id>) -> DomainResult<Slug> {
        let mut candidate = base.clone();
        let mut suffix = 2u32;

        for _ in 0..self.probe_limit {
            match self.lookup.find_slug_owner(&candidate).await? {
                Some(owner) if ignore != Some(owner) => {
                    tracing::debug!(slug = %candidate, ?owner, "slug taken, probing next");
                    candidate = base.with_suffix(suffix);
                    suffix += 1;
                }
                _ => return Ok(candidate),
            }
        }

        Err(DomainError::SlugSpaceExhausted {
            base: base.to_string(),
            attempts: self.probe_limit,
        })
    }
}
