//! In-memory cart and purchase simulation.
//!
//! Neither operation touches the catalog or the filter/sort engine. The cart
//! lives for the plugin session only.

use super::Listing;
use serde::{Deserialize, Serialize};

/// Ordered list of listing display names added during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Appends a display name and returns the new cart length.
    ///
    /// Adding the same name twice keeps both entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::domain::Cart;
    ///
    /// let mut cart = Cart::default();
    /// assert_eq!(cart.add("Spotify Premium Familiar"), 1);
    /// assert_eq!(cart.add("Spotify Premium Familiar"), 2);
    /// ```
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        self.items.push(name.into());
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Confirmation signal of a simulated purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseConfirmation {
    pub listing_id: String,
    pub title: String,
    /// Unix timestamp of the simulated checkout.
    pub confirmed_at: i64,
}

/// Simulates buying a listing. Always succeeds.
#[must_use]
pub fn simulate_purchase(listing: &Listing) -> PurchaseConfirmation {
    PurchaseConfirmation {
        listing_id: listing.id.clone(),
        title: listing.title.clone(),
        confirmed_at: chrono::Utc::now().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Media, Seller};

    #[test]
    fn cart_keeps_call_order_and_duplicates() {
        let mut cart = Cart::default();
        assert!(cart.is_empty());
        cart.add("HBO Max Plano Padrão");
        cart.add("Alura - Cursos de Tecnologia");
        let len = cart.add("HBO Max Plano Padrão");
        assert_eq!(len, 3);
        assert_eq!(
            cart.items(),
            ["HBO Max Plano Padrão", "Alura - Cursos de Tecnologia", "HBO Max Plano Padrão"]
        );
    }

    #[test]
    fn purchase_confirms_listing_identity() {
        let listing = Listing {
            id: "alura".into(),
            title: "Alura - Cursos de Tecnologia".into(),
            description: String::new(),
            category: "Educação".into(),
            price: 39.90,
            rating: 4.9,
            seller: Seller::new("alura-partner", "Alura Partner"),
            tags: vec![],
            media: Media::Symbol("💻".into()),
        };
        let before = chrono::Utc::now().timestamp();
        let confirmation = simulate_purchase(&listing);
        assert_eq!(confirmation.listing_id, "alura");
        assert_eq!(confirmation.title, listing.title);
        assert!(confirmation.confirmed_at >= before);
    }
}
