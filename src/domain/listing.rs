use serde::{Deserialize, Serialize};

/// One property record as surfaced to the pages and the JSON endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    // Upstream MLS key, or a generated mock id
    pub id: String,
    pub mls_number: String,
    pub address: Address,

    pub list_price: u64, // CAD
    pub property_type: String,
    pub style: String,
    pub bedrooms: u32,
    pub bathrooms: u32,

    pub images: Vec<String>,
    pub listing_date: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub street_suffix: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

impl Address {
    /// "12 Queen Street W"
    pub fn street_line(&self) -> String {
        [
            self.street_number.as_str(),
            self.street_name.as_str(),
            self.street_suffix.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// "12 Queen Street W, Toronto, ON"
    pub fn full(&self) -> String {
        [self.street_line(), self.city.clone(), self.province.clone()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// JSON body of both listings endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsPage {
    pub listings: Vec<PropertyListing>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub order: i64,
    pub description: String,
    pub is_preferred: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub media: Vec<MediaItem>,
    pub property_id: String,
    pub total: usize,
}
