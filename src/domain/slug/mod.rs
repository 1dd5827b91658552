pub mod allocator;
pub mod normalize;
pub mod value_objects;

pub use allocator::{DEFAULT_PROBE_LIMIT, SlugAllocator, SlugOwnerLookup};
pub use normalize::{SlugGenerator, slugify};
pub use value_objects::Slug;
