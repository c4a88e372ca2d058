//! Profile table controller.
//!
//! Holds the fetched profiles plus the user's search, sort and paging
//! choices. Every render derives a fresh [`TableView`]; the profile list
//! itself only changes when a fetch completes.

use std::fmt;
use std::str::FromStr;

use octo_client::Profile;

use crate::display::status_label;
use crate::sort::{SortDirection, SortField, SortSpec};

/// Rows per page offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
}

impl PageSize {
    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }

    pub fn variants() -> &'static [PageSize] {
        &[PageSize::Five, PageSize::Ten, PageSize::Twenty]
    }

    pub fn from_value(value: usize) -> Option<Self> {
        Self::variants().iter().copied().find(|s| s.get() == value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| format!("unsupported page size: {s}"))
    }
}

/// Which block the profile page renders. Exactly one applies at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBranch {
    Loading,
    Error(String),
    Rows,
    Empty,
}

/// Derived, read-only view of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Profile>,
    /// Zero-based page actually shown, clamped into range.
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl TableView<'_> {
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages.max(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: Vec<Profile>,
    loading: bool,
    error: Option<String>,
    current_page: usize,
    page_size: PageSize,
    search: String,
    sort: Option<SortSpec>,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileTable {
    /// Empty table in the loading state, as it is right before the mount
    /// fetch starts.
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            loading: true,
            error: None,
            current_page: 0,
            page_size: PageSize::default(),
            search: String::new(),
            sort: None,
        }
    }

    /// Table already holding `profiles`.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let mut table = Self::new();
        table.finish_fetch::<String>(Ok(profiles));
        table
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a completed fetch. Loading ends whatever the outcome; a failure
    /// leaves the table empty with the error message set.
    pub fn finish_fetch<E: fmt::Display>(&mut self, result: Result<Vec<Profile>, E>) {
        match result {
            Ok(profiles) => {
                tracing::debug!(count = profiles.len(), "Profile table loaded");
                self.profiles = profiles;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load profiles");
                self.profiles.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 0;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 0;
    }

    /// Same field flips direction; a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec {
                field,
                direction: SortDirection::Asc,
            },
        });
    }

    /// Direction for `field` if it is the active sort column.
    pub fn sort_direction_for(&self, field: SortField) -> Option<SortDirection> {
        self.sort
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        self.current_page = (self.current_page + 1).min(last);
    }

    pub fn has_previous(&self) -> bool {
        self.shown_page() > 0
    }

    pub fn has_next(&self) -> bool {
        self.shown_page() + 1 < self.total_pages()
    }

    /// `current_page` clamped into the filtered page range.
    fn shown_page(&self) -> usize {
        self.current_page.min(self.total_pages().saturating_sub(1))
    }

    pub fn total_pages(&self) -> usize {
        let count = self.profiles.iter().filter(|p| self.matches(p)).count();
        count.div_ceil(self.page_size.get())
    }

    fn matches(&self, profile: &Profile) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        profile.title.to_lowercase().contains(&needle)
            || profile
                .status
                .and_then(status_label)
                .is_some_and(|label| label.contains(&needle))
    }

    /// Profiles passing the search, in display order.
    pub fn filtered(&self) -> Vec<&Profile> {
        let mut rows: Vec<&Profile> = self.profiles.iter().filter(|p| self.matches(p)).collect();
        if let Some(spec) = self.sort {
            rows.sort_by(|a, b| spec.compare(a, b));
        }
        rows
    }

    pub fn view(&self) -> TableView<'_> {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let size = self.page_size.get();
        let total_pages = filtered_count.div_ceil(size);
        let page = self.current_page.min(total_pages.saturating_sub(1));

        let start = page * size;
        let end = (start + size).min(filtered_count);
        let rows = filtered[start..end].to_vec();

        TableView {
            rows,
            page,
            total_pages,
            filtered_count,
            has_previous: page > 0,
            has_next: page + 1 < total_pages,
        }
    }

    pub fn branch(&self) -> TableBranch {
        if self.loading {
            return TableBranch::Loading;
        }
        if let Some(error) = &self.error {
            return TableBranch::Error(error.clone());
        }
        if self.view().rows.is_empty() {
            TableBranch::Empty
        } else {
            TableBranch::Rows
        }
    }
}
