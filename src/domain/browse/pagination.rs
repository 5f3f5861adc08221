//! Pagination window — which page links to show.

/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Most page links shown before collapsing into ellipses.
pub const MAX_PAGE_LINKS: u32 = 5;

/// Page links for `current` out of `total` pages.
///
/// All pages when `total <= 5`. Otherwise the first and last page are always
/// shown: near the start `1 2 3 4 … N`, near the end `1 … N-3 N-2 N-1 N`,
/// in the middle `1 … p-1 p p+1 … N`.
pub fn page_links(current: u32, total: u32) -> Vec<PageLink> {
    if total <= MAX_PAGE_LINKS {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(7);
    if current <= 3 {
        links.extend((1..=4).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    } else if current >= total - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total - 3..=total).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    }
    links
}
