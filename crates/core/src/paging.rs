//! Paging and sorting rules for catalog listings.
//!
//! Query parameters arrive as loose strings and integers; this module turns
//! them into a validated [`PageRequest`] whose sort column comes from a fixed
//! whitelist, so the repository never interpolates caller-controlled text
//! into SQL.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Direction keyword that selects ascending order. Anything else is descending.
pub const ASCENDING_KEYWORD: &str = "asc";

// ---------------------------------------------------------------------------
// Sort field
// ---------------------------------------------------------------------------

/// Movie attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieSortField {
    Id,
    Title,
    Director,
    Studio,
    ReleaseYear,
    Poster,
}

impl MovieSortField {
    /// Parse a field name as it appears on the wire (`releaseYear`) or as the
    /// column is named (`release_year`).
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name.trim() {
            "movieId" | "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "director" => Ok(Self::Director),
            "studio" => Ok(Self::Studio),
            "releaseYear" | "release_year" => Ok(Self::ReleaseYear),
            "poster" => Ok(Self::Poster),
            other => Err(CoreError::InvalidQuery(format!(
                "No property '{other}' found for type 'Movie'"
            ))),
        }
    }

    /// Column in the `movies` table backing this field.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Director => "director",
            Self::Studio => "studio",
            Self::ReleaseYear => "release_year",
            Self::Poster => "poster",
        }
    }
}

// ---------------------------------------------------------------------------
// Sort direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` in any case is ascending; every other keyword is descending.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.trim().eq_ignore_ascii_case(ASCENDING_KEYWORD) {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieSort {
    pub field: MovieSortField,
    pub direction: SortDirection,
}

impl MovieSort {
    pub fn parse(field: &str, direction: &str) -> Result<Self, CoreError> {
        Ok(Self {
            field: MovieSortField::parse(field)?,
            direction: SortDirection::from_keyword(direction),
        })
    }
}

// ---------------------------------------------------------------------------
// Page request / page metadata
// ---------------------------------------------------------------------------

/// A validated, zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
    pub sort: Option<MovieSort>,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64, sort: Option<MovieSort>) -> Result<Self, CoreError> {
        if page_number < 0 {
            return Err(CoreError::InvalidQuery(format!(
                "Page index must not be less than zero, got {page_number}"
            )));
        }
        if page_size < 1 {
            return Err(CoreError::InvalidQuery(format!(
                "Page size must not be less than one, got {page_size}"
            )));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(CoreError::InvalidQuery(format!(
                "Page size must not exceed {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        Ok(Self {
            page_number,
            page_size,
            sort,
        })
    }

    /// Number of rows to skip, saturating for absurd page numbers.
    pub fn offset(&self) -> i64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// Totals derived from a page request and the full element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_elements: i64,
    pub total_pages: i64,
    pub is_last: bool,
}

impl PageMeta {
    pub fn compute(request: &PageRequest, total_elements: i64) -> Self {
        let size = request.page_size;
        let total_pages = total_elements / size + i64::from(total_elements % size != 0);
        Self {
            total_elements,
            total_pages,
            is_last: request.page_number.saturating_add(1) >= total_pages,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn sort_field_accepts_wire_and_column_names() {
        assert_eq!(
            MovieSortField::parse("releaseYear").unwrap(),
            MovieSortField::ReleaseYear
        );
        assert_eq!(
            MovieSortField::parse("release_year").unwrap(),
            MovieSortField::ReleaseYear
        );
        assert_eq!(MovieSortField::parse("movieId").unwrap().column(), "id");
    }

    #[test]
    fn sort_field_rejects_unknown_name() {
        assert_matches!(
            MovieSortField::parse("rating; DROP TABLE movies"),
            Err(CoreError::InvalidQuery(_))
        );
    }

    #[test]
    fn direction_keyword_is_case_insensitive() {
        assert_eq!(SortDirection::from_keyword("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::from_keyword("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_keyword("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_keyword("sideways"), SortDirection::Desc);
    }

    #[test]
    fn page_request_rejects_bad_bounds() {
        assert_matches!(PageRequest::new(-1, 10, None), Err(CoreError::InvalidQuery(_)));
        assert_matches!(PageRequest::new(0, 0, None), Err(CoreError::InvalidQuery(_)));
        assert_matches!(
            PageRequest::new(0, MAX_PAGE_SIZE + 1, None),
            Err(CoreError::InvalidQuery(_))
        );
    }

    #[test]
    fn offset_is_page_times_size() {
        let req = PageRequest::new(3, 25, None).unwrap();
        assert_eq!(req.offset(), 75);
    }

    #[test]
    fn meta_for_first_of_several_pages() {
        let req = PageRequest::new(0, 2, None).unwrap();
        let meta = PageMeta::compute(&req, 5);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.is_last);
    }

    #[test]
    fn meta_for_final_partial_page() {
        let req = PageRequest::new(2, 2, None).unwrap();
        let meta = PageMeta::compute(&req, 5);
        assert_eq!(meta.total_elements, 5);
        assert!(meta.is_last);
    }

    #[test]
    fn meta_for_empty_catalog_is_last() {
        let req = PageRequest::new(0, 10, None).unwrap();
        let meta = PageMeta::compute(&req, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(meta.is_last);
    }

    #[test]
    fn meta_for_page_far_past_end_is_last() {
        let req = PageRequest::new(i64::MAX, 10, None).unwrap();
        let meta = PageMeta::compute(&req, 5);
        assert_eq!(meta.total_pages, 1);
        assert!(meta.is_last);
        assert_eq!(req.offset(), i64::MAX);
    }

    #[test]
    fn meta_for_huge_element_count_does_not_overflow() {
        let req = PageRequest::new(0, MAX_PAGE_SIZE, None).unwrap();
        let meta = PageMeta::compute(&req, i64::MAX);
        assert_eq!(meta.total_pages, i64::MAX / MAX_PAGE_SIZE + 1);
        assert!(!meta.is_last);
    }
}
