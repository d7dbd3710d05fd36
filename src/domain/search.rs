// src/domain/search.rs

use url::form_urlencoded;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Select-box values the search form sends for "no filter".
const ANY_SENTINELS: &[&str] = &["any-type", "any-bed", "any-bath", "no-min", "no-max"];

/// A transient description of one search. Nothing here is validated beyond
/// type coercion: unparsable numbers are dropped, blank strings become `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            city: None,
            min_price: None,
            max_price: None,
            property_type: None,
            bedrooms: None,
            bathrooms: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchParams {
    /// Parse from a raw (still percent-encoded) query string.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = SearchParams::default();

        let Some(raw) = raw else {
            return params;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            match key.as_ref() {
                "query" => params.query = text(value),
                "city" => params.city = text(value),
                "minPrice" => params.min_price = number(value),
                "maxPrice" => params.max_price = number(value),
                "propertyType" => params.property_type = text(value),
                "bedrooms" => params.bedrooms = number(value),
                "bathrooms" => params.bathrooms = number(value),
                "page" => {
                    params.page = number(value).filter(|p| *p >= 1).unwrap_or(1);
                }
                "limit" => {
                    params.limit = number(value).filter(|l| *l >= 1).unwrap_or(DEFAULT_PAGE_SIZE);
                }
                _ => {}
            }
        }

        params
    }

    /// Number of rows before this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Encode back into a query string, e.g. for pagination links.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(q) = &self.query {
            out.append_pair("query", q);
        }
        if let Some(city) = &self.city {
            out.append_pair("city", city);
        }
        if let Some(min) = self.min_price {
            out.append_pair("minPrice", &min.to_string());
        }
        if let Some(max) = self.max_price {
            out.append_pair("maxPrice", &max.to_string());
        }
        if let Some(kind) = &self.property_type {
            out.append_pair("propertyType", kind);
        }
        if let Some(beds) = self.bedrooms {
            out.append_pair("bedrooms", &beds.to_string());
        }
        if let Some(baths) = self.bathrooms {
            out.append_pair("bathrooms", &baths.to_string());
        }
        out.append_pair("page", &self.page.to_string());
        out.append_pair("limit", &self.limit.to_string());

        out.finish()
    }
}

fn text(value: &str) -> Option<String> {
    if value.is_empty() || ANY_SENTINELS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn number<T: std::str::FromStr>(value: &str) -> Option<T> {
    text(value).and_then(|v| v.parse().ok())
}
