use serde::Serialize;

/// One ring tier offered in the pre-sale.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingVariant {
    /// Tier key used by selection and reservation ("10M", "100M")
    pub key: &'static str,
    /// Short label used in notifications ("10M Sats")
    pub label: &'static str,
    pub name: &'static str,
    /// Heading shown in the product showcase
    pub showcase_title: &'static str,
    pub backing_sats: u64,
    /// Human readable backing amount ("0.1 BTC")
    pub backing_text: &'static str,
    pub description: &'static str,
    /// One-liner shown on the pre-sale card
    pub presale_blurb: &'static str,
    pub production_limit: u32,
}

impl RingVariant {
    pub const SATS_PER_BTC: u64 = 100_000_000;

    pub fn backing_btc(&self) -> f64 {
        self.backing_sats as f64 / Self::SATS_PER_BTC as f64
    }

    pub fn limit_text(&self) -> String {
        format!("Limited to {} pieces", self.production_limit)
    }
}

impl std::fmt::Display for RingVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]: {}, limit {}",
            self.name, self.key, self.backing_text, self.production_limit
        )
    }
}

/// The immutable, ordered set of variants on offer.
///
/// Built once from static configuration; the first entry is the default
/// selection everywhere a selection starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantCatalog {
    variants: &'static [RingVariant],
}

impl VariantCatalog {
    /// Panics at compile time when used in a `const` with an empty slice.
    pub const fn new(variants: &'static [RingVariant]) -> Self {
        assert!(!variants.is_empty(), "a variant catalog needs at least one ring");
        Self { variants }
    }

    pub fn as_slice(&self) -> &'static [RingVariant] {
        self.variants
    }

    pub fn first(&self) -> &'static RingVariant {
        &self.as_slice()[0]
    }

    pub fn get(&self, key: &str) -> Option<&'static RingVariant> {
        self.as_slice().iter().find(|variant| variant.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn at(&self, index: usize) -> Option<&'static RingVariant> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, RingVariant> {
        self.as_slice().iter()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.variants.iter().map(|variant| variant.key).collect()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RING_CATALOG;

    #[test]
    fn catalog_keeps_configuration_order() {
        assert_eq!(RING_CATALOG.keys(), vec!["10M", "100M"]);
        assert_eq!(RING_CATALOG.first().key, "10M");
        assert_eq!(RING_CATALOG.position("100M"), Some(1));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(RING_CATALOG.get("100M").is_some());
        assert!(RING_CATALOG.get("100m").is_none());
        assert!(RING_CATALOG.get("50M").is_none());
        assert!(!RING_CATALOG.contains(""));
    }

    #[test]
    fn backing_amounts_match_the_text() {
        let small = RING_CATALOG.get("10M").unwrap();
        let large = RING_CATALOG.get("100M").unwrap();
        assert!((small.backing_btc() - 0.1).abs() < f64::EPSILON);
        assert!((large.backing_btc() - 1.0).abs() < f64::EPSILON);
        assert_eq!(small.production_limit, 100);
        assert_eq!(large.production_limit, 21);
        assert_eq!(large.limit_text(), "Limited to 21 pieces");
    }
}
