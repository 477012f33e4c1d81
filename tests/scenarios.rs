use floem_responsive::{
    Breakpoints, Category, Content, ContentKey, ContentMap, ResponsiveSignals, Responsiveness,
    select,
};

fn signals_at(width: u32) -> ResponsiveSignals {
    Breakpoints::default().classify(width)
}

#[test]
fn boundary_widths() {
    assert_eq!(signals_at(767), ResponsiveSignals::only(Category::Mobile));
    assert_eq!(signals_at(768), ResponsiveSignals::only(Category::Tablet));
    assert_eq!(signals_at(991), ResponsiveSignals::only(Category::Tablet));
    assert_eq!(signals_at(992), ResponsiveSignals::only(Category::Desktop));
}

#[test]
fn mobile_content_on_mobile() {
    let map = ContentMap::new().mobile("M");
    assert_eq!(select(signals_at(375), &map), Some("M"));
}

#[test]
fn other_category_only_renders_nothing() {
    let map = ContentMap::new().tablet("T");
    assert_eq!(select(signals_at(375), &map), None);
}

#[test]
fn default_producer_sees_mobile() {
    let map = ContentMap::new()
        .tablet("T")
        .fallback_with(|s| if s.is_mobile { "mobile-default" } else { "other" });
    assert_eq!(select(signals_at(375), &map), Some("mobile-default"));
}

#[test]
fn empty_map_renders_nothing() {
    let map: ContentMap<&str> = ContentMap::new();
    assert_eq!(select(signals_at(800), &map), None);
}

#[test]
fn specific_beats_default() {
    let map = ContentMap::new().desktop("D").fallback("DEF");
    assert_eq!(select(signals_at(1200), &map), Some("D"));
}

#[test]
fn default_gets_exact_signals() {
    let map: ContentMap<ResponsiveSignals> = ContentMap::new().fallback_with(|s| s);
    for width in [0, 375, 767, 768, 800, 991, 992, 1200, 4096] {
        let signals = signals_at(width);
        assert_eq!(select(signals, &map), Some(signals), "width {width}");
    }
}

#[test]
fn empty_entry_falls_through_like_absent() {
    let responsive = Responsiveness::new(
        ContentMap::new()
            .set(ContentKey::Mobile, None)
            .set(ContentKey::Tablet, Some(Content::Static("T")))
            .fallback(Content::producer(|| "DEF")),
    );
    assert_eq!(responsive.render_at(375), Some("DEF"));
    assert_eq!(responsive.render_at(800), Some("T"));
    assert_eq!(responsive.render_at(1200), Some("DEF"));

    let responsive = Responsiveness::new(ContentMap::<&str>::new().set(ContentKey::Mobile, None));
    assert_eq!(responsive.render_at(375), None);
}

#[test]
fn element_and_producer_render_the_same() {
    for category in Category::ALL {
        let key = ContentKey::from(category);
        let signals = ResponsiveSignals::only(category);

        let element = ContentMap::new().set(key, Some(Content::Static(category.as_str())));
        let producer = ContentMap::new().set(key, Some(Content::producer(move || category.as_str())));
        assert_eq!(select(signals, &element), Some(category.as_str()));
        assert_eq!(select(signals, &producer), select(signals, &element));
    }
}
