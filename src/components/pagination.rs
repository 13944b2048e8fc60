// ============================================================================
// PAGINATION - Prev / page links / Next
// ============================================================================

use yew::prelude::*;

/// Pages on each side of the current one before links collapse.
const NEIGHBOURS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// Links shown for `current` (1-based) out of `total` pages. The first and
/// last pages are always shown.
pub fn page_links(current: u32, total: u32) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut last_shown = 0;
    for page in 1..=total {
        let near = page.abs_diff(current) <= NEIGHBOURS;
        if page == 1 || page == total || near {
            if last_shown != 0 && page > last_shown + 1 {
                links.push(PageLink::Gap);
            }
            links.push(PageLink::Page(page));
            last_shown = page;
        }
    }
    links
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based.
    pub current: u32,
    pub total_pages: u32,
    /// Receives the 0-based index of the selected page.
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let select = |page: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page as usize - 1))
    };

    let has_prev = props.current > 1;
    let has_next = props.current < props.total_pages;

    html! {
        <nav class="pagination" aria-label="pagination">
            <button class="page-prev" disabled={!has_prev} onclick={select(props.current.saturating_sub(1).max(1))}>
                {"Prev"}
            </button>
            { for page_links(props.current, props.total_pages).into_iter().map(|link| match link {
                PageLink::Page(page) => html! {
                    <button
                        class={classes!("page-link", (page == props.current).then_some("active"))}
                        onclick={select(page)}
                    >
                        {page.to_string()}
                    </button>
                },
                PageLink::Gap => html! { <span class="page-gap">{"..."}</span> },
            }) }
            <button class="page-next" disabled={!has_next} onclick={select((props.current + 1).min(props.total_pages.max(1)))}>
                {"Next"}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(page_links(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn long_ranges_collapse_around_current_page() {
        assert_eq!(
            page_links(6, 12),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(12)]
        );
        assert_eq!(page_links(1, 12), vec![Page(1), Page(2), Page(3), Gap, Page(12)]);
    }
}
