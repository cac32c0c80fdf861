//! Store-driven page rendering.

use easel_workpad::{
    Animation, Page, PageElement, PageProps, StateStore, WorkpadPage, WorkpadState,
};
use std::sync::{Arc, Mutex};

fn initial_state() -> WorkpadState {
    WorkpadState::new().with_page(
        Page::new("p1").with_element(PageElement::new("e1", "demodata | pointseries | plot")),
    )
}

#[test]
fn store_driven_rendering_suppresses_unchanged_props() {
    let store = StateStore::new(initial_state());

    let page = Arc::new(Mutex::new(WorkpadPage::new()));
    let renders = Arc::new(Mutex::new(Vec::new()));

    let page_for_listener = Arc::clone(&page);
    let renders_for_listener = Arc::clone(&renders);
    let subscription = store.subscribe(move |state| {
        let rendered = page_for_listener
            .lock()
            .unwrap()
            .render(PageProps::new("p1").selected(true), state);
        renders_for_listener.lock().unwrap().push(rendered);
    });

    store.update(|state| state.pages.push(Page::new("p2")));
    store.update(|state| state.pages.push(Page::new("p3")));

    {
        let recorded = renders.lock().unwrap();
        assert_eq!(recorded.len(), 2);

        let first = recorded[0].as_ref().expect("first commit renders");
        assert!(first.is_interactive());
        assert_eq!(first.view().elements.len(), 1);

        // Identical props on the second commit: previous render stands.
        assert!(recorded[1].is_none());
    }

    store.unsubscribe(subscription);
    store.update(|state| state.fullscreen = true);
    assert_eq!(renders.lock().unwrap().len(), 2);
}

#[test]
fn changed_props_re_render_against_current_state() {
    let store = StateStore::new(initial_state());
    let mut page = WorkpadPage::new();

    let first = page.render(PageProps::new("p1").selected(true), &store.snapshot());
    assert!(first.expect("initial render").is_interactive());

    store.update(|state| state.fullscreen = true);

    // New props bypass the guard and pick up the fullscreen state.
    let second = page
        .render(
            PageProps::new("p1")
                .selected(true)
                .animated(Animation::new("fade", "normal")),
            &store.snapshot(),
        )
        .expect("changed props render");

    assert!(!second.is_interactive());
    assert_eq!(second.view().class_name, "fade");
}
