use crate::domain::SearchParams;
use crate::templates::components::format_price;
use maud::{html, Markup};

const CITIES: &[&str] = &[
    "Toronto",
    "Mississauga",
    "Vaughan",
    "Richmond Hill",
    "Markham",
    "Oakville",
    "Burlington",
    "Milton",
    "Brampton",
];

const PRICES: &[u64] = &[
    500_000, 750_000, 1_000_000, 1_500_000, 2_000_000, 3_000_000, 5_000_000, 10_000_000,
];

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("house", "House"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
    ("multiplex", "Multiplex"),
    ("land", "Land"),
];

/// GET form targeting `/search`. The compact variant (results page) hides
/// the advanced filters but carries their current values along.
pub fn search_form(params: &SearchParams, compact: bool) -> Markup {
    let class = if compact {
        "search-form compact"
    } else {
        "search-form"
    };

    html! {
        form class=(class) method="get" action="/search" {
            div class="flex gap-2" {
                input
                    type="text"
                    name="query"
                    placeholder="Search by address, neighborhood, or MLS#"
                    value=[params.query.as_deref()];
                select name="city" {
                    option value="" { "City" }
                    @for city in CITIES {
                        option value=(city) selected[params.city.as_deref() == Some(*city)] { (city) }
                    }
                }
                button type="submit" { "Search" }
            }

            @if compact {
                (hidden_filters(params))
            } @else {
                details class="advanced-filters" {
                    summary { "Advanced Filters" }
                    div class="grid grid-cols-4 gap-4" {
                        (advanced_filters(params))
                    }
                }
            }
        }
    }
}

fn advanced_filters(params: &SearchParams) -> Markup {
    html! {
        label {
            "Property Type"
            select name="propertyType" {
                option value="any-type" { "Any Type" }
                @for (value, label) in PROPERTY_TYPES {
                    option value=(value) selected[params.property_type.as_deref() == Some(*value)] { (label) }
                }
            }
        }
        label {
            "Bedrooms"
            (minimum_select("bedrooms", "any-bed", params.bedrooms))
        }
        label {
            "Bathrooms"
            (minimum_select("bathrooms", "any-bath", params.bathrooms))
        }
        label {
            "Price Range"
            (price_select("minPrice", "no-min", "No Min", params.min_price))
            (price_select("maxPrice", "no-max", "No Max", params.max_price))
        }
    }
}

fn minimum_select(name: &str, any: &str, current: Option<u32>) -> Markup {
    html! {
        select name=(name) {
            option value=(any) { "Any" }
            @for n in 1..=5u32 {
                option value=(n) selected[current == Some(n)] { (n) "+" }
            }
        }
    }
}

fn price_select(name: &str, none_value: &str, none_label: &str, current: Option<u64>) -> Markup {
    html! {
        select name=(name) {
            option value=(none_value) { (none_label) }
            @for price in PRICES {
                option value=(price) selected[current == Some(*price)] { (format_price(*price)) }
            }
        }
    }
}

fn hidden_filters(params: &SearchParams) -> Markup {
    html! {
        @if let Some(kind) = &params.property_type {
            input type="hidden" name="propertyType" value=(kind);
        }
        @if let Some(beds) = params.bedrooms {
            input type="hidden" name="bedrooms" value=(beds);
        }
        @if let Some(baths) = params.bathrooms {
            input type="hidden" name="bathrooms" value=(baths);
        }
        @if let Some(min) = params.min_price {
            input type="hidden" name="minPrice" value=(min);
        }
        @if let Some(max) = params.max_price {
            input type="hidden" name="maxPrice" value=(max);
        }
    }
}
