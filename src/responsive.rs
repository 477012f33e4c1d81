use std::fmt;

use crate::error::BreakpointError;
use crate::signals::ResponsiveSignals;
use crate::viewport::Viewport;

/// One of the three width categories a [`Breakpoints`] table distinguishes.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Category {
    Mobile,
    Tablet,
    Desktop,
}

impl Category {
    /// Every category, in precedence order.
    pub const ALL: [Category; 3] = [Category::Mobile, Category::Tablet, Category::Desktop];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Tablet => "tablet",
            Category::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A range of viewport widths in logical pixels. Both bounds are inclusive and
/// an absent bound is unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min_width: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max_width: Option<u32>,
}

impl Breakpoint {
    pub const DESKTOP: Breakpoint = Breakpoint::new(Some(992), None);
    pub const TABLET: Breakpoint = Breakpoint::new(Some(768), Some(991));
    pub const MOBILE: Breakpoint = Breakpoint::new(None, Some(767));

    pub const fn new(min_width: Option<u32>, max_width: Option<u32>) -> Self {
        Self {
            min_width,
            max_width,
        }
    }

    pub fn contains(&self, width: u32) -> bool {
        self.min_width.is_none_or(|min| width >= min)
            && self.max_width.is_none_or(|max| width <= max)
    }

    fn lower(&self) -> u32 {
        self.min_width.unwrap_or(0)
    }

    fn upper(&self) -> u32 {
        self.max_width.unwrap_or(u32::MAX)
    }
}

/// The breakpoint table a classifier evaluates widths against.
///
/// The default table is `mobile ..=767`, `tablet 768..=991`, `desktop 992..`.
/// Custom tables are accepted as is; [`Breakpoints::validate`] reports tables
/// whose ranges overlap or leave widths uncovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Breakpoints {
    pub mobile: Breakpoint,
    pub tablet: Breakpoint,
    pub desktop: Breakpoint,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: Breakpoint::MOBILE,
            tablet: Breakpoint::TABLET,
            desktop: Breakpoint::DESKTOP,
        }
    }
}

impl Breakpoints {
    pub fn get(&self, category: Category) -> &Breakpoint {
        match category {
            Category::Mobile => &self.mobile,
            Category::Tablet => &self.tablet,
            Category::Desktop => &self.desktop,
        }
    }

    /// Evaluates all three ranges against `width`.
    pub fn classify(&self, width: u32) -> ResponsiveSignals {
        ResponsiveSignals {
            is_mobile: self.mobile.contains(width),
            is_tablet: self.tablet.contains(width),
            is_desktop: self.desktop.contains(width),
        }
    }

    /// Evaluates all three ranges through the viewport's own range query.
    pub fn measure(&self, viewport: &dyn Viewport) -> ResponsiveSignals {
        ResponsiveSignals {
            is_mobile: viewport.matches(&self.mobile),
            is_tablet: viewport.matches(&self.tablet),
            is_desktop: viewport.matches(&self.desktop),
        }
    }

    pub fn category_for(&self, width: u32) -> Option<Category> {
        self.classify(width).category()
    }

    /// Checks that the table is well formed: no inverted range, no two
    /// ranges sharing a width, and every width covered by some range.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        for category in Category::ALL {
            let bp = self.get(category);
            if let (Some(min), Some(max)) = (bp.min_width, bp.max_width)
                && min > max
            {
                return Err(BreakpointError::Inverted { category, min, max });
            }
        }

        for (i, &first) in Category::ALL.iter().enumerate() {
            for &second in &Category::ALL[i + 1..] {
                let a = self.get(first);
                let b = self.get(second);
                let start = a.lower().max(b.lower());
                if start <= a.upper().min(b.upper()) {
                    return Err(BreakpointError::Overlap {
                        first,
                        second,
                        width: start,
                    });
                }
            }
        }

        let mut ranges: Vec<(u64, u64)> = Category::ALL
            .iter()
            .map(|c| {
                let bp = self.get(*c);
                (u64::from(bp.lower()), u64::from(bp.upper()))
            })
            .collect();
        ranges.sort_unstable();

        // First width not yet covered by the ranges seen so far.
        let mut next = 0u64;
        for (lower, upper) in ranges {
            if lower > next {
                return Err(BreakpointError::Gap { width: next as u32 });
            }
            next = next.max(upper + 1);
        }
        if next <= u64::from(u32::MAX) {
            return Err(BreakpointError::Gap { width: next as u32 });
        }

        Ok(())
    }

    /// Loads a table from JSON. Categories missing from the document keep
    /// their default range. The loaded table must pass [`Breakpoints::validate`].
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        let breakpoints: Breakpoints = serde_json::from_str(json)?;
        breakpoints.validate()?;
        Ok(breakpoints)
    }
}
