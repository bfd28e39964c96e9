//! Mock catalog source with simulated latency.
//!
//! Serves a fixed set of subscription listings after sleeping for a configured
//! delay, standing in for an HTTP fetch.

use super::source::CatalogSource;
use crate::domain::error::Result;
use crate::domain::{Listing, Media, Seller};
use std::time::Duration;

/// Default simulated fetch latency in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 350;

/// Catalog source returning built-in sample listings.
#[derive(Debug, Clone)]
pub struct MockCatalogSource {
    latency: Duration,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LATENCY_MS))
    }
}

impl MockCatalogSource {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the sample listings without any delay.
    #[must_use]
    pub fn sample_listings() -> Vec<Listing> {
        vec![
            listing(
                "netflix-premium",
                "Netflix Premium 4 telas",
                "Streaming",
                24.90,
                4.8,
                Seller::new("stream-plus", "Loja Stream Plus").with_reputation(4.7),
                "Acesso a Netflix Premium com suporte 4K e 4 telas simultâneas.",
                &["entrega-imediata", "4k", "garantia"],
                "🎬",
            ),
            listing(
                "hbo-max",
                "HBO Max Plano Padrão",
                "Streaming",
                19.90,
                4.6,
                Seller::new("hbo-store-br", "HBO Store BR").with_reputation(4.5),
                "Catálogo HBO com filmes e séries exclusivas. Perfil privado disponível.",
                &["entrega-imediata", "perfil-privado"],
                "📺",
            ),
            listing(
                "prime-video",
                "Prime Video + Frete Grátis",
                "Streaming",
                14.90,
                4.4,
                Seller::new("amazon-deals", "Amazon Deals"),
                "Assinatura Prime Video com benefícios do Amazon Prime.",
                &["entrega-imediata", "garantia"],
                "🚚",
            ),
            listing(
                "premiere",
                "Premiere Futebol - Times do Brasil",
                "Esportes",
                29.90,
                4.2,
                Seller::new("fc-sports", "FC Sports").with_reputation(4.0),
                "Assista aos jogos do Brasileirão com qualidade HD.",
                &["garantia"],
                "⚽",
            ),
            listing(
                "spotify-familiar",
                "Spotify Premium Familiar",
                "Música",
                21.90,
                4.7,
                Seller::new("music-pro", "Music Pro").with_reputation(4.8),
                "Plano familiar com até 6 contas individuais.",
                &["perfil-privado", "garantia"],
                "🎵",
            ),
            listing(
                "xbox-game-pass",
                "Xbox Game Pass Ultimate",
                "Games",
                39.90,
                4.5,
                Seller::new("game-vault", "Game Vault"),
                "Centenas de jogos para console e PC, com EA Play incluso.",
                &["entrega-imediata", "garantia"],
                "🎮",
            ),
            listing(
                "alura",
                "Alura - Cursos de Tecnologia",
                "Educação",
                39.90,
                4.9,
                Seller::new("alura-partner", "Alura Partner").with_reputation(4.9),
                "Acesso a centenas de cursos de tecnologia, design e negócios.",
                &["garantia"],
                "💻",
            ),
        ]
    }
}

impl CatalogSource for MockCatalogSource {
    fn load(&self) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("mock_catalog_load",
            latency_ms = u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX)
        ).entered();

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let listings = Self::sample_listings();
        tracing::debug!(listing_count = listings.len(), "mock catalog loaded");
        Ok(listings)
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    category: &str,
    price: f64,
    rating: f64,
    seller: Seller,
    description: &str,
    tags: &[&str],
    symbol: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        rating,
        seller,
        tags: tags.iter().map(ToString::to_string).collect(),
        media: Media::Symbol(symbol.to_string()),
    }
}
