/// Cursor over the result images. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCarousel {
    current_index: usize,
    total: usize,
}

impl ImageCarousel {
    /// `None` for an empty image list, which has nothing to show.
    pub fn build_for(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }

        Some(Self {
            current_index: 0,
            total,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn has_multiple(&self) -> bool {
        self.total > 1
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.total;
    }

    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.total - 1) % self.total;
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total {
            log::debug!("[CAROUSEL] index {} out of range ({})", index, self.total);
            return false;
        }

        self.current_index = index;
        true
    }

    pub fn position_label(&self) -> String {
        format!("{} of {}", self.current_index + 1, self.total)
    }
}
