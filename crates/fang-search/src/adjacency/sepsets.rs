use rustc_hash::FxHashMap;

/// Separating sets keyed by the unordered variable pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SepsetMap {
    sets: FxHashMap<(String, String), Vec<String>>,
}

fn key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl SepsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: &str, b: &str, sepset: Vec<String>) {
        self.sets.insert(key(a, b), sepset);
    }

    pub fn get(&self, a: &str, b: &str) -> Option<&[String]> {
        self.sets.get(&key(a, b)).map(Vec::as_slice)
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.sets.contains_key(&key(a, b))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_pair_order() {
        let mut map = SepsetMap::new();
        map.insert("C", "A", vec!["B".into()]);
        assert_eq!(map.get("A", "C"), Some(&["B".to_string()][..]));
        assert!(map.contains("C", "A"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_sepset_is_distinct_from_missing() {
        let mut map = SepsetMap::new();
        map.insert("X", "Y", Vec::new());
        assert_eq!(map.get("Y", "X"), Some(&[][..]));
        assert_eq!(map.get("X", "Z"), None);
    }
}
