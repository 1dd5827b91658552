use crate::domain::slug::{SlugGenerator, slugify};

/// Accent-folding kebab-case normalizer used for product and category slugs.
#[derive(Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
