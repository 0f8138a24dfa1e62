//! Pagination types

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum items per page
pub const MAX_SIZE: u32 = 100;

/// Default items per page
pub const DEFAULT_SIZE: u32 = 20;

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (1..=100)
    pub size: u32,
}

impl PageRequest {
    /// Create a page request, rejecting out-of-range values.
    ///
    /// - `page` must be at least 1
    /// - `size` must be within 1..=100
    pub fn new(page: u32, size: u32) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::TooSmall {
                field: "page",
                min: 1,
            });
        }
        if size < 1 {
            return Err(ValidationError::TooSmall {
                field: "size",
                min: 1,
            });
        }
        if size > MAX_SIZE {
            return Err(ValidationError::TooLarge {
                field: "size",
                max: MAX_SIZE as u64,
            });
        }

        Ok(Self { page, size })
    }

    /// Build from optional query values, applying defaults first.
    pub fn from_optional(page: Option<u32>, size: Option<u32>) -> Result<Self, ValidationError> {
        Self::new(page.unwrap_or(1), size.unwrap_or(DEFAULT_SIZE))
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.size as u64
    }

    /// Zero-based index of the last row on this page (inclusive).
    pub fn range_end(&self) -> u64 {
        self.offset() + self.size as u64 - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_SIZE,
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: u64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub size: u32,
    /// Number of pages; 0 when there are no items at all
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
            total_pages: total_pages(total, request.size),
        }
    }

    /// Reshape the items, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total / size)`, or 0 for an empty result.
pub fn total_pages(total: u64, size: u32) -> u64 {
    if total == 0 || size == 0 {
        0
    } else {
        total.div_ceil(size as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = PageRequest::new(1, 10).unwrap();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.range_end(), 9);

        let p = PageRequest::new(2, 20).unwrap();
        assert_eq!(p.offset(), 20);
        assert_eq!(p.range_end(), 39);

        let p = PageRequest::new(3, 25).unwrap();
        assert_eq!(p.offset(), 50);
        assert_eq!(p.range_end(), 74);
    }

    #[test]
    fn offset_does_not_overflow_u32() {
        let p = PageRequest::new(u32::MAX, 100).unwrap();
        assert_eq!(p.offset(), (u32::MAX as u64 - 1) * 100);
    }

    #[test]
    fn rejects_page_zero() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooSmall {
                field: "page",
                min: 1
            }
        );
    }

    #[test]
    fn rejects_size_out_of_range() {
        let err = PageRequest::new(1, 0).unwrap_err();
        assert!(matches!(err, ValidationError::TooSmall { field: "size", .. }));

        let err = PageRequest::new(1, 101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { field: "size", max: 100 }));

        assert!(PageRequest::new(1, 100).is_ok());
        assert!(PageRequest::new(1, 1).is_ok());
    }

    #[test]
    fn defaults() {
        let p = PageRequest::from_optional(None, None).unwrap();
        assert_eq!(p, PageRequest::default());
        assert_eq!(p.page, 1);
        assert_eq!(p.size, 20);

        let p = PageRequest::from_optional(Some(4), None).unwrap();
        assert_eq!(p.page, 4);
        assert_eq!(p.size, 20);
    }

    #[test]
    fn total_pages_arithmetic() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(100, 20), 5);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn empty_envelope_is_valid() {
        let page: Paginated<()> = Paginated::new(vec![], 0, PageRequest::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 20);
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2], 42, PageRequest::new(3, 2).unwrap());
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 42);
        assert_eq!(mapped.page, 3);
        assert_eq!(mapped.size, 2);
        assert_eq!(mapped.total_pages, 21);
    }
}
