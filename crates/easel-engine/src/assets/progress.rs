/// Tracks which manifest entries the host has finished loading.
#[derive(Debug, Clone, Default)]
pub struct LoadProgress {
    loaded: Vec<bool>,
    count: usize,
    last_key: String,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: vec![false; total],
            count: 0,
            last_key: String::new(),
        }
    }

    /// Mark one entry as loaded. Repeats and out-of-range indices are ignored.
    pub fn mark(&mut self, index: usize, key: &str) {
        if let Some(slot) = self.loaded.get_mut(index) {
            if !*slot {
                *slot = true;
                self.count += 1;
            }
            self.last_key.clear();
            self.last_key.push_str(key);
        }
    }

    pub fn total(&self) -> usize {
        self.loaded.len()
    }

    pub fn loaded(&self) -> usize {
        self.count
    }

    /// Completed fraction in `[0, 1]`. An empty manifest counts as done.
    pub fn fraction(&self) -> f32 {
        if self.loaded.is_empty() {
            1.0
        } else {
            self.count as f32 / self.loaded.len() as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.count == self.loaded.len()
    }

    /// Key of the most recently loaded asset.
    pub fn last_key(&self) -> &str {
        &self.last_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_index_once() {
        let mut p = LoadProgress::new(4);
        p.mark(1, "a");
        p.mark(1, "a");
        p.mark(9, "z");
        assert_eq!(p.loaded(), 1);
        assert_eq!(p.fraction(), 0.25);
        assert_eq!(p.last_key(), "a");
    }

    #[test]
    fn empty_is_complete() {
        let p = LoadProgress::new(0);
        assert!(p.is_complete());
        assert_eq!(p.fraction(), 1.0);
    }
}
