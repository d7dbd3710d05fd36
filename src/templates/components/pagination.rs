use crate::domain::SearchParams;
use maud::{html, Markup};

const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page links to show around `current`. First and last are always present;
/// the middle window holds up to three pages, with an ellipsis on each side
/// that skips pages.
pub fn page_numbers(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total_pages - 1);

    if current <= 3 {
        end = (total_pages - 1).min(4);
    } else if current >= total_pages - 2 {
        start = (total_pages - 3).max(2);
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

fn page_href(params: &SearchParams, page: u32) -> String {
    format!("/search?{}", params.with_page(page).to_query_string())
}

/// Prev / numbered / next links. Renders nothing for a single page.
pub fn pagination(current: u32, total_pages: u32, params: &SearchParams) -> Markup {
    html! {
        @if total_pages > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if current > 1 {
                    a href=(page_href(params, current - 1)) rel="prev" { "Previous" }
                } @else {
                    span class="disabled" { "Previous" }
                }

                @for item in page_numbers(current, total_pages) {
                    @match item {
                        PageItem::Page(n) if n == current => {
                            span class="current" aria-current="page" { (n) }
                        }
                        PageItem::Page(n) => {
                            a href=(page_href(params, n)) { (n) }
                        }
                        PageItem::Ellipsis => {
                            span class="ellipsis" { "…" }
                        }
                    }
                }

                @if current < total_pages {
                    a href=(page_href(params, current + 1)) rel="next" { "Next" }
                } @else {
                    span class="disabled" { "Next" }
                }
            }
        }
    }
}
