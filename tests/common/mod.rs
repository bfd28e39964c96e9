//! Shared fixtures for integration tests.

#![allow(dead_code)]

use vitrine::domain::{Listing, Media, Seller};
use vitrine::worker::WorkerResponse;
use vitrine::{handle_event, AppState, Event, PriceLocale, Theme};

pub fn listing(id: &str, title: &str, category: &str, price: f64, rating: f64, tags: &[&str]) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Assinatura {title}"),
        category: category.to_string(),
        price,
        rating,
        seller: Seller::new(format!("{id}-seller"), format!("{title} Store")).with_reputation(4.5),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        media: Media::Symbol("🎬".to_string()),
    }
}

/// Five listings across three categories; only Xbox is in `Games`.
pub fn fixture_catalog() -> Vec<Listing> {
    vec![
        listing("netflix", "Netflix Premium 4 telas", "Streaming", 24.90, 4.8, &["4k", "garantia"]),
        listing("hbo", "HBO Max", "Streaming", 19.90, 4.6, &["filmes"]),
        listing("prime", "Prime Video", "Streaming", 14.90, 4.3, &["frete", "filmes"]),
        listing("spotify", "Spotify Familiar", "Musica", 21.90, 4.7, &["familia"]),
        listing("xbox", "Xbox Game Pass Ultimate", "Games", 39.90, 4.5, &["jogos", "garantia"]),
    ]
}

/// Application state with the fixture catalog already installed.
pub fn loaded_state() -> AppState {
    let mut state = AppState::new(Theme::default(), PriceLocale::PtBr);
    let response = WorkerResponse::CatalogLoaded {
        listings: fixture_catalog(),
    };
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    state
}

pub fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|listing| listing.id.clone()).collect()
}
