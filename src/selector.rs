//! Picking the content to realize for a set of [`ResponsiveSignals`].
//!
//! Selection is a pure function of the signals and the content map. The
//! first true signal in `mobile > tablet > desktop` order picks the
//! category. That category's own content wins; without it the map's default
//! is realized with the signals passed through; without either nothing is
//! rendered. Empty entries count as absent.

use tracing::trace;

use crate::content::{Content, ContentKey, ContentMap};
use crate::responsive::Category;
use crate::signals::ResponsiveSignals;

/// Which rule a selection resolved through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The matched category's own content.
    Specific(Category),
    /// The default content, standing in for the matched category.
    Fallback(Category),
    /// Nothing to render.
    Nothing,
}

fn pick<'a, V>(
    signals: ResponsiveSignals,
    content: &'a ContentMap<V>,
) -> (Selection, Option<&'a Content<V>>) {
    let Some(category) = signals.category() else {
        return (Selection::Nothing, None);
    };

    let entries = content.normalized();
    if let Some(specific) = entries.get(category.into()) {
        return (Selection::Specific(category), Some(specific));
    }
    match entries.get(ContentKey::Default) {
        Some(fallback) => (Selection::Fallback(category), Some(fallback)),
        None => (Selection::Nothing, None),
    }
}

pub fn resolve<V>(signals: ResponsiveSignals, content: &ContentMap<V>) -> Selection {
    pick(signals, content).0
}

/// Realizes the selected content, or `None` when nothing should render.
pub fn select<V: Clone>(signals: ResponsiveSignals, content: &ContentMap<V>) -> Option<V> {
    let (selection, picked) = pick(signals, content);
    trace!(?signals, ?selection, "selected content");
    picked.map(|c| c.realize(signals))
}
