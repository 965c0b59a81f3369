use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// Blocks of the page in document order.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, EnumIter, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PageSection {
    Hero,
    Products,
    Security,
    PreSale,
    Footer,
}

impl PageSection {
    /// Anchor id, also used as the visibility region id.
    pub fn anchor(&self) -> &str {
        self.as_ref()
    }

    /// Sections that fade in on first scroll into view.
    pub fn is_scroll_revealed(&self) -> bool {
        matches!(
            self,
            PageSection::Products | PageSection::Security | PageSection::PreSale
        )
    }

    /// Label for the header navigation, `None` for sections not linked there.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            PageSection::Products => Some("Products"),
            PageSection::Security => Some("Security"),
            PageSection::PreSale => Some("Pre-Sale"),
            PageSection::Hero | PageSection::Footer => None,
        }
    }
}
