//! Column ordering for the profile table.

use std::cmp::Ordering;

use octo_client::Profile;

use crate::display::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Title,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "\u{2191}",  // ↑
            SortDirection::Desc => "\u{2193}", // ↓
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ordering of `a` relative to `b` under this spec. Descending is the
    /// exact reverse of ascending, so equal keys keep their input order.
    pub fn compare(&self, a: &Profile, b: &Profile) -> Ordering {
        let ord = compare_by(self.field, a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

fn compare_by(field: SortField, a: &Profile, b: &Profile) -> Ordering {
    match field {
        SortField::Title => compare_text(&a.title, &b.title),
        SortField::Description => compare_text(
            a.description.as_deref().unwrap_or(""),
            b.description.as_deref().unwrap_or(""),
        ),
        // Records without a status order first.
        SortField::Status => a.status.cmp(&b.status),
        SortField::CreatedAt => compare_instant(&a.created_at, &b.created_at),
        SortField::UpdatedAt => compare_instant(&a.updated_at, &b.updated_at),
    }
}

/// Case-folded comparison with the raw text as tie-break, so "alpha" and
/// "Beta" order the way a reader expects.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Unparseable timestamps order before every parseable one.
fn compare_instant(a: &str, b: &str) -> Ordering {
    parse_timestamp(a).cmp(&parse_timestamp(b))
}
