use crate::domain::PropertyListing;
use crate::templates::{
    components::{format_price, PLACEHOLDER_IMAGE},
    desktop_layout,
};
use chrono::{DateTime, NaiveDate};
use maud::{html, Markup};

/// `2024-03-02` or an RFC 3339 timestamp as `March 2, 2024`. Anything else
/// is shown as given.
pub fn format_listing_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn property_page(listing: &PropertyListing) -> Markup {
    let address = listing.address.full();

    desktop_layout(
        &address,
        html! {
            article class="property-detail" {
                div class="gallery" {
                    @if listing.images.is_empty() {
                        img src=(PLACEHOLDER_IMAGE) alt=(address);
                    } @else {
                        @for (i, url) in listing.images.iter().enumerate() {
                            img src=(url) alt={ (address) " photo " (i + 1) } loading=[(i > 0).then_some("lazy")];
                        }
                    }
                }

                header {
                    p class="price" { (format_price(listing.list_price)) }
                    h1 { (listing.address.street_line()) }
                    p { (listing.address.city) ", " (listing.address.province) " " (listing.address.postal_code) }
                    @if !listing.mls_number.is_empty() {
                        p class="text-sm" { "MLS® " (listing.mls_number) }
                    }
                }

                dl class="facts grid grid-cols-4 gap-4" {
                    div { dt { "Bedrooms" } dd { (listing.bedrooms) } }
                    div { dt { "Bathrooms" } dd { (listing.bathrooms) } }
                    div { dt { "Property Type" } dd { (listing.property_type) } }
                    div { dt { "Listed Date" } dd { (format_listing_date(&listing.listing_date)) } }
                }

                @if !listing.style.is_empty() {
                    p { "Style: " (listing.style) }
                }

                section {
                    h2 { "Description" }
                    p class="whitespace-pre-line" { (listing.description) }
                }

                @if !listing.features.is_empty() {
                    section {
                        h2 { "Features & Amenities" }
                        ul class="features" {
                            @for feature in &listing.features {
                                li { (feature) }
                            }
                        }
                    }
                }

                p { a href="/search" { "← Back to search" } }
            }
        },
    )
}

pub fn property_not_found_page(message: &str) -> Markup {
    desktop_layout(
        "Property Not Found",
        html! {
            section class="not-found" {
                h1 { "Property Not Found" }
                p { (message) }
                a href="/" { "Back to Home" }
            }
        },
    )
}
