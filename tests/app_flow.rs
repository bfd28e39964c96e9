//! Event-driven flows through the application layer.

mod common;

use common::{fixture_catalog, loaded_state};
use vitrine::domain::{CategoryFilter, SortKey};
use vitrine::ui::NoticeKind;
use vitrine::worker::{WorkerMessage, WorkerResponse};
use vitrine::{handle_event, Action, AppState, Event, InputMode, PriceLocale, Theme};

fn ids(actions: &[Action]) -> Vec<String> {
    match actions {
        [Action::ResultsChanged { ids }] => ids.clone(),
        other => panic!("expected a single ResultsChanged, got {other:?}"),
    }
}

#[test]
fn search_category_and_sort_scenario() {
    let mut state = loaded_state();

    let (_, actions) = handle_event(&mut state, &Event::SetSearchText("netflix".to_string())).unwrap();
    assert_eq!(ids(&actions), vec!["netflix"]);

    handle_event(&mut state, &Event::SetSearchText(String::new())).unwrap();
    let (_, actions) = handle_event(
        &mut state,
        &Event::SetCategory(CategoryFilter::Only("Games".to_string())),
    )
    .unwrap();
    assert_eq!(ids(&actions), vec!["xbox"]);

    handle_event(&mut state, &Event::SetCategory(CategoryFilter::All)).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::SetSortKey(SortKey::PriceAscending)).unwrap();
    assert_eq!(ids(&actions), vec!["prime", "hbo", "spotify", "netflix", "xbox"]);

    let prices: Vec<f64> = state.results().iter().map(|listing| listing.price).collect();
    assert_eq!(prices.first(), Some(&14.90));
    assert_eq!(prices.last(), Some(&39.90));
}

#[test]
fn catalog_is_requested_and_installed_once() {
    let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);

    let (_, first) = handle_event(&mut state, &Event::RequestCatalog { latency_ms: 0 }).unwrap();
    assert!(matches!(first.as_slice(), [Action::PostToWorker(WorkerMessage::LoadCatalog { latency_ms: 0, .. })]));
    let (_, second) = handle_event(&mut state, &Event::RequestCatalog { latency_ms: 0 }).unwrap();
    assert!(second.is_empty());

    let response = Event::WorkerResponse(WorkerResponse::CatalogLoaded {
        listings: fixture_catalog(),
    });
    let (render, actions) = handle_event(&mut state, &response).unwrap();
    assert!(render);
    match actions.as_slice() {
        [Action::FacetsReady { categories, tags }, Action::ResultsChanged { ids }] => {
            assert_eq!(categories, &["Streaming", "Musica", "Games"]);
            assert_eq!(tags.len(), 6);
            assert_eq!(ids.len(), 5);
        }
        other => panic!("unexpected actions {other:?}"),
    }

    let (render, actions) = handle_event(&mut state, &response).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.catalog().map(|store| store.len()), Some(5));
}

#[test]
fn adding_the_same_listing_twice_keeps_both_in_order() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::OpenDetail).unwrap();
    assert_eq!(state.input_mode, InputMode::Detail);

    let (_, first) = handle_event(&mut state, &Event::AddToCart).unwrap();
    let (_, second) = handle_event(&mut state, &Event::AddToCart).unwrap();

    assert_eq!(
        first,
        vec![Action::CartUpdated { title: "Netflix Premium 4 telas".to_string(), count: 1 }]
    );
    assert_eq!(
        second,
        vec![Action::CartUpdated { title: "Netflix Premium 4 telas".to_string(), count: 2 }]
    );
    assert_eq!(state.cart().items(), ["Netflix Premium 4 telas", "Netflix Premium 4 telas"]);
    assert_eq!(state.input_mode, InputMode::Detail);

    let vm = state.compute_viewmodel(30, 100);
    assert_eq!(vm.detail.map(|detail| detail.cart_count), Some(2));
}

#[test]
fn purchase_closes_detail_and_shows_confirmation() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::OpenDetail).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::SimulatePurchase).unwrap();
    match actions.as_slice() {
        [Action::PurchaseConfirmed(confirmation)] => assert_eq!(confirmation.listing_id, "spotify"),
        other => panic!("unexpected actions {other:?}"),
    }
    assert_eq!(state.input_mode, InputMode::Normal);

    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.message, "Purchase confirmed: Spotify Familiar");
    assert_eq!(notice.kind, NoticeKind::Success);

    let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
    assert!(render);
    assert!(state.notice.is_none());
}

#[test]
fn empty_result_is_distinct_from_loading() {
    let unloaded = AppState::new(Theme::default(), PriceLocale::PtBr);
    let loading = unloaded.compute_viewmodel(24, 80).empty_state.unwrap();
    assert!(loading.is_loading);

    let mut state = loaded_state();
    let (_, actions) = handle_event(&mut state, &Event::SetSearchText("crunchyroll".to_string())).unwrap();
    assert!(ids(&actions).is_empty());

    let vm = state.compute_viewmodel(24, 80);
    let empty = vm.empty_state.unwrap();
    assert!(!empty.is_loading);
    assert_eq!(empty.message, "No listings match the current filters");
    assert!(vm.display_items.is_empty());
}

#[test]
fn keyboard_search_trims_before_filtering() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in " hbo ".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    assert_eq!(state.search_input(), " hbo ");
    assert_eq!(state.query().search_text(), "hbo");
    assert_eq!(state.result_ids(), vec!["hbo"]);

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.result_ids(), vec!["hbo"]);
}
