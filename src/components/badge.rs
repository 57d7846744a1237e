use maud::{html, Markup, Render};

use crate::db::CategoryRef;

/// Colored category label shown on feed cards and post headers.
#[derive(Debug, Clone)]
pub struct CategoryBadge<'a> {
    category: &'a CategoryRef,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub fn new(category: &'a CategoryRef) -> Self {
        Self { category }
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        let style = format!(
            "background-color: {color}20; color: {color}",
            color = self.category.color
        );
        html! {
            span class="category-badge" style=(style) {
                (self.category.name)
            }
        }
    }
}
