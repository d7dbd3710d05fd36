// src/domain/property.rs
//
// Anti-corruption layer between the two upstream Property dialects and
// `PropertyListing`. Missing strings become empty, missing numbers zero.

use crate::domain::{Address, MediaItem, PropertyListing};
use crate::upstream::models::{IdxProperty, ResoMedia, ResoProperty};
use chrono::{SecondsFormat, Utc};

fn count(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u32)
        .unwrap_or(0)
}

fn price(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u64)
        .unwrap_or(0)
}

impl PropertyListing {
    /// Row from the IDX `Property` query (`$expand=Media`).
    pub fn from_idx(prop: IdxProperty) -> Self {
        let mls_number = prop.mls_number.unwrap_or_default();
        let id = prop
            .id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| mls_number.clone());

        let features = [
            (prop.has_garage, "Garage"),
            (prop.has_central_air, "Central AC"),
            (prop.has_fireplace, "Fireplace"),
            (prop.has_pool, "Pool"),
        ]
        .into_iter()
        .filter(|(flag, _)| flag.unwrap_or(false))
        .map(|(_, label)| label.to_string())
        .collect();

        let images = prop
            .media
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.media_url.unwrap_or_default())
            .collect();

        PropertyListing {
            id,
            mls_number,
            address: Address {
                street_number: prop.street_number.unwrap_or_default(),
                street_name: prop.street_name.unwrap_or_default(),
                street_suffix: prop.street_suffix.unwrap_or_default(),
                city: prop.city.unwrap_or_default(),
                province: prop.province.unwrap_or_default(),
                postal_code: prop.postal_code.unwrap_or_default(),
            },
            list_price: price(prop.list_price),
            property_type: prop.property_type.unwrap_or_default().to_lowercase(),
            style: prop.style.unwrap_or_default(),
            bedrooms: count(prop.bedrooms),
            bathrooms: count(prop.bathrooms),
            images,
            listing_date: prop.creation_date.unwrap_or_default(),
            description: prop.public_remarks.unwrap_or_default(),
            features,
        }
    }

    /// Record from the RESO `Property` resource. Photos are attached later
    /// by the media step, so `images` starts empty.
    pub fn from_reso(prop: ResoProperty) -> Self {
        let key = prop.listing_key.unwrap_or_default();

        let style = prop
            .architectural_style
            .filter(|styles| !styles.is_empty())
            .map(|styles| styles.join(", "))
            .unwrap_or_else(|| "Modern".to_string());

        let features = [
            prop.interior_features,
            prop.exterior_features,
            prop.property_features,
        ]
        .into_iter()
        .flatten()
        .flatten()
        .flatten()
        .filter(|f| !f.is_empty())
        .collect();

        PropertyListing {
            id: key.clone(),
            mls_number: key,
            address: Address {
                street_number: prop.street_number.unwrap_or_default(),
                street_name: prop.street_name.unwrap_or_default(),
                street_suffix: prop.street_suffix.unwrap_or_default(),
                city: prop.city.unwrap_or_default(),
                province: prop.state_or_province.unwrap_or_default(),
                postal_code: prop.postal_code.unwrap_or_default(),
            },
            list_price: price(prop.list_price),
            property_type: prop
                .property_sub_type
                .map(|t| t.to_lowercase())
                .unwrap_or_else(|| "unknown".to_string()),
            style,
            bedrooms: count(prop.bedrooms_total),
            bathrooms: count(prop.bathrooms_total_integer),
            images: Vec::new(),
            listing_date: prop
                .listing_contract_date
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            description: prop.public_remarks.unwrap_or_default(),
            features,
        }
    }
}

impl From<ResoMedia> for MediaItem {
    fn from(row: ResoMedia) -> Self {
        MediaItem {
            id: row.media_key,
            url: row.media_url.unwrap_or_default(),
            media_type: row.media_type.unwrap_or_default(),
            order: row.order.unwrap_or(0),
            description: row.short_description.unwrap_or_default(),
            is_preferred: row.preferred_photo.unwrap_or(false),
        }
    }
}
