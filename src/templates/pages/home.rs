// templates/pages/home.rs

use crate::domain::SearchParams;
use crate::templates::{
    components::{card, search_form},
    desktop_layout,
};
use maud::{html, Markup};

const SERVICES: &[(&str, &str)] = &[
    (
        "Purchase Property",
        "Finding the property that fits your goals and negotiating the best possible terms.",
    ),
    (
        "Build Property",
        "Connecting you with trusted professionals to renovate or develop and maximize value.",
    ),
    (
        "Sell the New Property",
        "Marketing to the right audience so your investment sells at top dollar.",
    ),
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Luxury Homes in the Greater Toronto Area" }
                p { "Specializing in luxury properties and investment opportunities in the Greater Toronto Area." }
                (search_form(&SearchParams::default(), false))
            }

            section class="services grid grid-cols-3 gap-4" {
                @for (title, body) in SERVICES {
                    (card(title, html! { p { (body) } }))
                }
            }
        },
    )
}
