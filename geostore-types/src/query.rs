use serde::{Deserialize, Serialize};

/// Skip/limit pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    pub fn first(limit: usize) -> Self {
        Self { offset: 0, limit }
    }

    /// Apply the page to an already ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(10)
    }
}

/// A location found near a query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nearby {
    pub id: u32,
    /// Great-circle distance from the query point.
    pub distance_km: f64,
}

/// Outcome of a containment lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WithinMatch {
    /// The point lies inside the stored boundary of `id`.
    Contained { id: u32 },
    /// No boundary contains the point; `id` is the nearest eligible location.
    Nearest { id: u32, distance_km: f64 },
}

impl WithinMatch {
    pub fn id(&self) -> u32 {
        match self {
            WithinMatch::Contained { id } | WithinMatch::Nearest { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_apply() {
        let page = Page::new(2, 3);
        assert_eq!(page.apply(0..10), vec![2, 3, 4]);
        assert!(Page::new(20, 3).apply(0..10).is_empty());
    }
}
