use crate::domain::PropertyListing;
use maud::{html, Markup};

pub const PLACEHOLDER_IMAGE: &str = "/images/property-placeholder.svg";

/// Whole Canadian dollars with thousands separators, e.g. `$1,250,000`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn property_card(listing: &PropertyListing) -> Markup {
    let image = listing
        .images
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        a class="property-card" href={ "/property/" (listing.id) } {
            div class="property-card-image" {
                img src=(image) alt=(listing.address.street_line()) loading="lazy";
                span class="badge" { (listing.property_type) }
            }
            div class="property-card-body" {
                p class="price" { (format_price(listing.list_price)) }
                h3 { (listing.address.street_line()) }
                p class="text-sm" { (listing.address.city) ", " (listing.address.province) }
                ul class="facts" {
                    li { (listing.bedrooms) " Beds" }
                    li { (listing.bathrooms) " Baths" }
                    @if !listing.mls_number.is_empty() {
                        li { "MLS® " (listing.mls_number) }
                    }
                }
            }
        }
    }
}
