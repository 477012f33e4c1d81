use crate::responsive::Category;

/// A snapshot of which breakpoint ranges contain the current viewport width.
///
/// Under a well formed [`Breakpoints`](crate::Breakpoints) table exactly one
/// field is true. Consumers must not rely on that: a custom table may
/// produce zero or several true fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResponsiveSignals {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
}

impl ResponsiveSignals {
    /// No range matched.
    pub const NONE: ResponsiveSignals = ResponsiveSignals {
        is_mobile: false,
        is_tablet: false,
        is_desktop: false,
    };

    pub const fn only(category: Category) -> Self {
        Self {
            is_mobile: matches!(category, Category::Mobile),
            is_tablet: matches!(category, Category::Tablet),
            is_desktop: matches!(category, Category::Desktop),
        }
    }

    /// The first true signal in `mobile > tablet > desktop` order.
    pub fn category(&self) -> Option<Category> {
        if self.is_mobile {
            Some(Category::Mobile)
        } else if self.is_tablet {
            Some(Category::Tablet)
        } else if self.is_desktop {
            Some(Category::Desktop)
        } else {
            None
        }
    }
}
