use serde::{Deserialize, Deserializer};
use serde_json::Value;

// OData collection envelope
//  ├── @odata.count   (only when $count=true)
//  └── value[]
//
// Property rows come in two dialects: the IDX feed
// (Id, MlsNumber, Province, Bedrooms, Media[] ...) and the RESO
// Property resource (ListingKey, StateOrProvince, BedroomsTotal ...).

#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "@odata.count")]
    pub count: Option<u64>,
}

/// Keys and street numbers arrive as strings or bare numbers depending on
/// the feed.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdxProperty {
    #[serde(alias = "id", default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub mls_number: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub street_suffix: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,

    pub list_price: Option<f64>,
    pub property_type: Option<String>,
    pub style: Option<String>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,

    pub media: Option<Vec<IdxMedia>>,
    pub creation_date: Option<String>,
    pub public_remarks: Option<String>,

    pub has_garage: Option<bool>,
    pub has_central_air: Option<bool>,
    pub has_fireplace: Option<bool>,
    pub has_pool: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct IdxMedia {
    #[serde(rename = "MediaUrl")]
    pub media_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResoProperty {
    #[serde(default, deserialize_with = "string_or_number")]
    pub listing_key: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub street_suffix: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,

    pub list_price: Option<f64>,
    pub property_sub_type: Option<String>,
    pub architectural_style: Option<Vec<String>>,
    pub bedrooms_total: Option<f64>,
    pub bathrooms_total_integer: Option<f64>,

    pub listing_contract_date: Option<String>,
    pub public_remarks: Option<String>,

    pub interior_features: Option<Vec<Option<String>>>,
    pub exterior_features: Option<Vec<Option<String>>>,
    pub property_features: Option<Vec<Option<String>>>,
}

#[derive(Debug, Deserialize)]
pub struct ResoMedia {
    #[serde(rename = "MediaKey", default)]
    pub media_key: String,
    #[serde(rename = "MediaURL")]
    pub media_url: Option<String>,
    #[serde(rename = "MediaType")]
    pub media_type: Option<String>,
    #[serde(rename = "Order")]
    pub order: Option<i64>,
    #[serde(rename = "ShortDescription")]
    pub short_description: Option<String>,
    #[serde(rename = "PreferredPhotoYN")]
    pub preferred_photo: Option<bool>,
}
