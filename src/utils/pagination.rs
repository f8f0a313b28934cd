use crate::api::error::SystemError;

/// Zero-based page index plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    page: i64,
    size: i64,
}

impl Pageable {
    pub fn of(page: i64, size: i64) -> Result<Self, SystemError> {
        if page < 0 {
            return Err(SystemError::bad_request("Page index must not be less than zero"));
        }
        if size < 1 {
            return Err(SystemError::bad_request("Page size must not be less than one"));
        }
        if page.checked_mul(size).is_none() {
            return Err(SystemError::bad_request("Page window is out of range"));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        // checked in `of`
        self.page * self.size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    content: Vec<T>,
    pageable: Pageable,
    total: i64,
}

// only the full-table listing builds pages; searches return a bare window
#[allow(unused)]
impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total: i64) -> Self {
        Self { content, pageable, total }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn pageable(&self) -> Pageable {
        self.pageable
    }

    pub fn total_elements(&self) -> i64 {
        self.total
    }

    pub fn total_pages(&self) -> i64 {
        (self.total + self.pageable.size - 1) / self.pageable.size
    }
}
