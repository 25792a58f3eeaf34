// Consuming builder for a store listing.

use serde::Serialize;

// ============================================================================
// Example: Builder (store listing)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub features: Vec<String>,
    pub description: Option<String>,
}

impl Listing {
    pub fn builder() -> ListingBuilder {
        ListingBuilder::default()
    }
}

/// Every setter is optional; `build` takes whatever has been set.
#[derive(Debug, Default)]
#[must_use]
pub struct ListingBuilder {
    name: Option<String>,
    price: Option<f64>,
    features: Vec<String>,
    description: Option<String>,
}

impl ListingBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Replaces the feature list.
    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Listing {
        Listing {
            name: self.name,
            price: self.price,
            features: self.features,
            description: self.description,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_all_fields() {
        let mobile = Listing::builder()
            .name("Mobile")
            .price(500.0)
            .features(["8GB RAM", "128GB SSD", "Snapdragon 8"])
            .description("Samsung m36")
            .build();

        assert_eq!(mobile.name.as_deref(), Some("Mobile"));
        assert_eq!(mobile.price, Some(500.0));
        assert_eq!(mobile.features.len(), 3);
        assert_eq!(mobile.description.as_deref(), Some("Samsung m36"));
    }

    #[test]
    fn test_builder_partial() {
        let laptop = Listing::builder().name("Laptop").price(1000.0).build();
        assert_eq!(laptop.description, None);
        assert!(laptop.features.is_empty());

        assert_eq!(Listing::builder().build(), Listing::default());
    }

    #[test]
    fn test_feature_appends_after_features() {
        let listing = Listing::builder()
            .features(vec!["a".to_string()])
            .feature("b")
            .build();
        assert_eq!(listing.features, vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_to_json() {
        let listing = Listing::builder().name("Laptop").build();
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["name"], "Laptop");
        assert!(json["price"].is_null());
    }
}
