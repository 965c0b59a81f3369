//! The rings on offer. Static for the life of the page.

use crate::domain::{RingVariant, VariantCatalog};

const RINGS: &[RingVariant] = &[
    RingVariant {
        key: "10M",
        label: "10M Sats",
        name: "10M Sats Ring",
        showcase_title: "10M Sats Elite Ring",
        backing_sats: 10_000_000,
        backing_text: "0.1 BTC",
        description: "Securely stores 10 million satoshis (0.1 BTC) within an elegant design.",
        presale_blurb: "0.1 BTC secured in an elegant design",
        production_limit: 100,
    },
    RingVariant {
        key: "100M",
        label: "100M Sats",
        name: "100M Sats Ring (1 BTC)",
        showcase_title: "100M Sats Premium Ring (1 BTC)",
        backing_sats: 100_000_000,
        backing_text: "1 BTC",
        description: "Luxuriously secures a full Bitcoin (100 million satoshis) in our premium design.",
        presale_blurb: "Full Bitcoin in our premium design",
        production_limit: 21,
    },
];

/// First entry is the default selection.
pub const RING_CATALOG: VariantCatalog = VariantCatalog::new(RINGS);
