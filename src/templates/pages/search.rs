use crate::domain::SearchParams;
use crate::search::{SearchSnapshot, SearchState};
use crate::templates::{
    components::{pagination, property_card, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub fn search_page(snapshot: &SearchSnapshot, params: &SearchParams) -> Markup {
    desktop_layout(
        "Search Properties",
        html! {
            section class="search-bar" {
                (search_form(params, true))
            }
            section class="results" {
                (results(snapshot, params))
            }
        },
    )
}

fn results(snapshot: &SearchSnapshot, params: &SearchParams) -> Markup {
    match &snapshot.state {
        SearchState::Idle | SearchState::Loading => html! {
            p class="loading" { "Finding your perfect home..." }
        },
        SearchState::Error(message) => html! {
            div class="error" {
                h2 { "Something went wrong" }
                p { (message) }
            }
        },
        SearchState::Success if snapshot.results.is_empty() => html! {
            div class="empty" {
                h2 { "No properties found" }
                p { "Try adjusting your search criteria." }
            }
        },
        SearchState::Success => {
            let first = u64::from(snapshot.current_page.saturating_sub(1)) * u64::from(snapshot.limit) + 1;
            let last = first + snapshot.results.len() as u64 - 1;

            html! {
                div class="grid grid-cols-3 gap-4" {
                    @for listing in &snapshot.results {
                        (property_card(listing))
                    }
                }
                (pagination(snapshot.current_page, snapshot.total_pages(), params))
                p class="text-sm" {
                    "Showing " (first) " to " (last) " of " (snapshot.total) " properties"
                }
            }
        }
    }
}
