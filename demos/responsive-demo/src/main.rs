use std::rc::Rc;

use floem_responsive::{Content, ContentMap, Responsiveness, SimulatedViewport, Slot};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn mobile_example() -> String {
    "<div>MobileExample</div>".to_string()
}

fn tablet_example() -> String {
    "<div>TabletExample</div>".to_string()
}

fn desktop_example() -> String {
    "<div>DesktopExample</div>".to_string()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let viewport = Rc::new(SimulatedViewport::new(1280));
    let slot = Slot::new();

    let mounted = Responsiveness::new(
        ContentMap::<String>::new()
            .tablet(Content::producer(tablet_example))
            .mobile(Content::producer(mobile_example))
            .desktop(Content::producer(desktop_example))
            .fallback_with(|s| (if s.is_mobile { "mobile" } else { "non-mobile" }).to_string()),
    )
    .mount(viewport.clone(), slot.clone());

    for width in [1280, 1024, 992, 991, 800, 768, 767, 375, 320, 1920] {
        viewport.set_width(width);
        info!(
            width,
            category = ?mounted.signals().and_then(|s| s.category()),
            content = slot.content().as_deref().unwrap_or("<nothing>"),
            "viewport resized"
        );
    }

    mounted.unmount();
}
