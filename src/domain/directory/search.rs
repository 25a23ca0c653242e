//! Substring search over cached pages and re-pagination of the matches

use crate::domain::user::{PageInfo, PageResponse, UserRecord};

/// Lowercased free-text query
///
/// Only the emptiness check trims; surrounding spaces in a non-blank query
/// are part of what gets matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        Some(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Matches against "first last", email, or username, ignoring case
    pub fn matches(&self, user: &UserRecord) -> bool {
        user.full_name().to_lowercase().contains(&self.0)
            || user.email.to_lowercase().contains(&self.0)
            || user.username().to_lowercase().contains(&self.0)
    }

    /// Collects matches across pages, keeping page order then result order
    pub fn filter_pages<'a, I>(&self, pages: I) -> Vec<UserRecord>
    where
        I: IntoIterator<Item = &'a PageResponse>,
    {
        pages
            .into_iter()
            .flat_map(|page| page.results.iter())
            .filter(|user| self.matches(user))
            .cloned()
            .collect()
    }
}

/// Slices `matches` into the requested page
///
/// The returned info is `template` with `results` set to the total number of
/// matches and `page` set to the requested page. With no matches the
/// results are empty and `info.results` is 0; the page is left as the
/// template has it.
pub fn paginate(
    matches: Vec<UserRecord>,
    page: u32,
    page_size: u32,
    template: &PageInfo,
) -> PageResponse {
    if matches.is_empty() {
        return PageResponse::new(
            Vec::new(),
            PageInfo {
                results: 0,
                ..template.clone()
            },
        );
    }

    let total = matches.len();
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);

    let results: Vec<UserRecord> = matches
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    PageResponse::new(
        results,
        PageInfo {
            results: total as u32,
            page,
            ..template.clone()
        },
    )
}
