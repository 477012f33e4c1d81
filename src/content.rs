use std::fmt;

use rustc_hash::FxHashMap;

use crate::responsive::Category;
use crate::signals::ResponsiveSignals;

/// Something that can be realized into a renderable value.
pub enum Content<V> {
    /// Used as is (cloned on every realization).
    Static(V),
    /// Invoked on every realization.
    Producer(Box<dyn Fn() -> V>),
    /// Invoked on every realization with the signals that selected it.
    WithSignals(Box<dyn Fn(ResponsiveSignals) -> V>),
}

impl<V> Content<V> {
    pub fn producer(f: impl Fn() -> V + 'static) -> Self {
        Content::Producer(Box::new(f))
    }

    pub fn with_signals(f: impl Fn(ResponsiveSignals) -> V + 'static) -> Self {
        Content::WithSignals(Box::new(f))
    }

    pub fn realize(&self, signals: ResponsiveSignals) -> V
    where
        V: Clone,
    {
        match self {
            Content::Static(value) => value.clone(),
            Content::Producer(f) => f(),
            Content::WithSignals(f) => f(signals),
        }
    }
}

impl<V> From<V> for Content<V> {
    fn from(value: V) -> Self {
        Content::Static(value)
    }
}

impl<V: fmt::Debug> fmt::Debug for Content<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Content::Producer(_) => f.write_str("Producer(..)"),
            Content::WithSignals(_) => f.write_str("WithSignals(..)"),
        }
    }
}

/// The keys of a [`ContentMap`].
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum ContentKey {
    Mobile,
    Tablet,
    Desktop,
    Default,
}

impl ContentKey {
    const fn index(self) -> usize {
        match self {
            ContentKey::Mobile => 0,
            ContentKey::Tablet => 1,
            ContentKey::Desktop => 2,
            ContentKey::Default => 3,
        }
    }
}

impl From<Category> for ContentKey {
    fn from(category: Category) -> Self {
        match category {
            Category::Mobile => ContentKey::Mobile,
            Category::Tablet => ContentKey::Tablet,
            Category::Desktop => ContentKey::Desktop,
        }
    }
}

/// Content for each width category, plus an optional default.
///
/// A key can be absent, present with content, or present but empty
/// (`set(key, None)`). Selection treats present-but-empty exactly like
/// absent; see [`ContentMap::normalized`].
pub struct ContentMap<V> {
    entries: FxHashMap<ContentKey, Option<Content<V>>>,
}

impl<V> Default for ContentMap<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ContentMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<V> ContentMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mobile(self, content: impl Into<Content<V>>) -> Self {
        self.set(ContentKey::Mobile, Some(content.into()))
    }

    pub fn tablet(self, content: impl Into<Content<V>>) -> Self {
        self.set(ContentKey::Tablet, Some(content.into()))
    }

    pub fn desktop(self, content: impl Into<Content<V>>) -> Self {
        self.set(ContentKey::Desktop, Some(content.into()))
    }

    /// Content used when the matched category has none of its own.
    pub fn fallback(self, content: impl Into<Content<V>>) -> Self {
        self.set(ContentKey::Default, Some(content.into()))
    }

    /// Fallback content that is told which category matched.
    pub fn fallback_with(self, f: impl Fn(ResponsiveSignals) -> V + 'static) -> Self {
        self.set(ContentKey::Default, Some(Content::with_signals(f)))
    }

    /// Sets an entry. `None` keeps the key present but empty.
    pub fn set(mut self, key: ContentKey, content: Option<Content<V>>) -> Self {
        self.entries.insert(key, content);
        self
    }

    pub fn remove(&mut self, key: ContentKey) -> Option<Option<Content<V>>> {
        self.entries.remove(&key)
    }

    /// Whether the key is present, even if its entry is empty.
    pub fn contains_key(&self, key: ContentKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// The entry for `key`; `Some(None)` for a present-but-empty key.
    pub fn entry(&self, key: ContentKey) -> Option<Option<&Content<V>>> {
        self.entries.get(&key).map(Option::as_ref)
    }

    /// A view of the map with every present-but-empty entry collapsed to
    /// absent. Selection only ever looks at this view.
    pub fn normalized(&self) -> Normalized<'_, V> {
        let mut slots = [None, None, None, None];
        for (key, content) in &self.entries {
            if let Some(content) = content {
                slots[key.index()] = Some(content);
            }
        }
        Normalized { slots }
    }
}

/// See [`ContentMap::normalized`].
pub struct Normalized<'a, V> {
    slots: [Option<&'a Content<V>>; 4],
}

impl<'a, V> Normalized<'a, V> {
    pub fn get(&self, key: ContentKey) -> Option<&'a Content<V>> {
        self.slots[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::{Content, ContentKey, ContentMap};
    use crate::signals::ResponsiveSignals;

    #[test]
    fn empty_entry_is_present_but_normalized_away() {
        let map: ContentMap<&str> = ContentMap::new()
            .set(ContentKey::Mobile, None)
            .tablet("T");

        assert!(map.contains_key(ContentKey::Mobile));
        assert!(matches!(map.entry(ContentKey::Mobile), Some(None)));
        assert!(map.entry(ContentKey::Desktop).is_none());

        let normalized = map.normalized();
        assert!(normalized.get(ContentKey::Mobile).is_none());
        assert!(normalized.get(ContentKey::Tablet).is_some());
    }

    #[test]
    fn producers_run_on_each_realization() {
        let calls = Rc::new(Cell::new(0));
        let content = Content::producer({
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                "P"
            }
        });

        assert_eq!(content.realize(ResponsiveSignals::NONE), "P");
        assert_eq!(content.realize(ResponsiveSignals::NONE), "P");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn with_signals_receives_snapshot() {
        let content = Content::with_signals(|s: ResponsiveSignals| s);
        let signals = ResponsiveSignals {
            is_mobile: false,
            is_tablet: true,
            is_desktop: false,
        };
        assert_eq!(content.realize(signals), signals);
    }

    #[test]
    fn remove_makes_key_absent() {
        let mut map = ContentMap::new().desktop(1);
        assert!(map.remove(ContentKey::Desktop).is_some());
        assert!(!map.contains_key(ContentKey::Desktop));
    }
}
