// SPDX-License-Identifier: MPL-2.0
//! PDF page navigation
//!
//! The page count is unknown until the renderer has parsed the document;
//! until then only page 1 is addressable.

/// One-based page cursor over a PDF preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfPager {
    page: u32,
    page_count: Option<u32>,
}

impl Default for PdfPager {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: None,
        }
    }
}

impl PdfPager {
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    fn last_page(&self) -> u32 {
        self.page_count.unwrap_or(1).max(1)
    }

    /// Records the page count reported by the renderer.
    pub fn set_page_count(&mut self, count: u32) {
        self.page_count = Some(count.max(1));
        self.page = self.page.min(self.last_page());
    }

    /// Jumps to `page`, clamped into the document.
    pub fn go_to(&mut self, page: u32) -> u32 {
        self.page = page.clamp(1, self.last_page());
        self.page
    }

    pub fn next_page(&mut self) -> u32 {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> u32 {
        self.go_to(self.page.saturating_sub(1))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Back to page 1 with an unknown page count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// "page/count" label once the count is known.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.page_count.map(|count| format!("{}/{}", self.page, count))
    }
}
