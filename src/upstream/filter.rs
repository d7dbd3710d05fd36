// filter.rs
//
// Builds the `$filter` expression for the IDX Property query.

use crate::domain::SearchParams;

/// Quote a value as an OData string literal. Embedded quotes are doubled.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Conjunctive filter for the given search, or `None` when nothing is set.
pub fn build_filter(params: &SearchParams) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(city) = &params.city {
        clauses.push(format!("contains(City, {})", quote(city)));
    }
    if let Some(min) = params.min_price {
        clauses.push(format!("ListPrice ge {min}"));
    }
    if let Some(max) = params.max_price {
        clauses.push(format!("ListPrice le {max}"));
    }
    if let Some(kind) = &params.property_type {
        clauses.push(format!("PropertyType eq {}", quote(kind)));
    }
    if let Some(beds) = params.bedrooms {
        clauses.push(format!("Bedrooms ge {beds}"));
    }
    if let Some(baths) = params.bathrooms {
        clauses.push(format!("Bathrooms ge {baths}"));
    }

    // Free text goes against address, MLS number and neighbourhood.
    if let Some(q) = &params.query {
        let q = quote(q);
        clauses.push(format!(
            "(contains(UnparsedAddress, {q}) or contains(MlsNumber, {q}) or contains(Neighbourhood, {q}))"
        ));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

/// Filter selecting every photo row attached to one listing.
pub fn media_filter(listing_id: &str) -> String {
    format!(
        "ResourceRecordKey eq {} and ResourceName eq 'Property'",
        quote(listing_id)
    )
}

/// Key segment for a single-record lookup, e.g. `Property('W123')`.
pub fn keyed(resource: &str, key: &str) -> String {
    format!("{resource}({})", quote(key))
}
