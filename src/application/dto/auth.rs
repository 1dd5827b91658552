/// Who is asking: decides whether unpublished catalog entries are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    Storefront,
    Admin,
}

impl Audience {
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
