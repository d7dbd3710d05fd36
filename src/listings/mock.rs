// mock.rs
use crate::domain::{Address, ListingsPage, PropertyListing, SearchParams};
use crate::listings::ListingsSource;
use crate::upstream::UpstreamError;
use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Advertised result count for mock searches. Filters do not change it.
pub const MOCK_TOTAL: u64 = 120;

const CITIES: &[&str] = &[
    "Toronto",
    "Mississauga",
    "Vaughan",
    "Richmond Hill",
    "Markham",
    "Oakville",
];
const STREETS: &[&str] = &[
    "Maple Avenue",
    "Oak Street",
    "Queen Street",
    "King Road",
    "Lakeshore Boulevard",
    "Yonge Street",
];
const PROPERTY_TYPES: &[&str] = &["house", "condo", "townhouse", "duplex", "land"];
const FEATURES: &[&str] = &[
    "Garage",
    "Central AC",
    "Hardwood Floors",
    "Finished Basement",
    "Fireplace",
];
const IMAGE_POOL: usize = 3;

// Bumped once per generate call so ids never repeat across calls.
static CALLS: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Default, Clone, Copy)]
pub struct MockListings;

impl MockListings {
    /// A page shaped like the real one. Only `city` is honoured.
    pub fn page(params: &SearchParams) -> ListingsPage {
        let remaining = MOCK_TOTAL.saturating_sub(params.skip());
        let count = remaining.min(u64::from(params.limit)) as usize;

        ListingsPage {
            listings: Self::generate(count, params.city.as_deref(), params.skip()),
            total: MOCK_TOTAL,
            page: params.page,
            limit: params.limit,
        }
    }

    pub fn generate(count: usize, city: Option<&str>, offset: u64) -> Vec<PropertyListing> {
        Self::generate_with(&mut rand::thread_rng(), count, city, offset)
    }

    pub fn generate_with<R: Rng>(
        rng: &mut R,
        count: usize,
        city: Option<&str>,
        offset: u64,
    ) -> Vec<PropertyListing> {
        let call = CALLS.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();
        let stamp = now.timestamp_millis();

        (0..count)
            .map(|i| {
                let city = city
                    .map(str::to_string)
                    .unwrap_or_else(|| pick(rng, CITIES).to_string());
                let street = pick(rng, STREETS);
                let property_type = pick(rng, PROPERTY_TYPES);
                let bedrooms = rng.gen_range(1..=5);
                let bathrooms = rng.gen_range(1..=4);
                let list_price = rng.gen_range(5..=24u64) * 100_000;
                let listed = now - Duration::days(rng.gen_range(0..30));

                PropertyListing {
                    id: format!("mock-{}-{stamp}-{call}", offset + i as u64 + 1),
                    mls_number: format!("MLS{}", rng.gen_range(0..10_000_000)),
                    address: Address {
                        street_number: rng.gen_range(1..=300).to_string(),
                        street_name: street.to_string(),
                        street_suffix: String::new(),
                        city: city.clone(),
                        province: "ON".to_string(),
                        postal_code: format!(
                            "M{}N {}Z{}",
                            rng.gen_range(0..10),
                            rng.gen_range(0..10),
                            rng.gen_range(0..10)
                        ),
                    },
                    list_price,
                    property_type: property_type.to_string(),
                    style: "Modern".to_string(),
                    bedrooms,
                    bathrooms,
                    images: vec![format!("/images/luxury-home-{}.png", i % IMAGE_POOL + 1)],
                    listing_date: listed.to_rfc3339_opts(SecondsFormat::Millis, true),
                    description: format!(
                        "Beautiful {bedrooms} bedroom {property_type} in the heart of {city}. \
                         This property features modern design, open concept layout, and premium finishes."
                    ),
                    features: FEATURES.iter().map(|f| f.to_string()).collect(),
                }
            })
            .collect()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

impl ListingsSource for MockListings {
    fn fetch_page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        Ok(Self::page(params))
    }
}
