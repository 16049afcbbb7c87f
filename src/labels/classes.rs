//! String label to integer class mapping.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Sorted unique labels; a label's class is its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    classes: Vec<String>,
}

impl ClassMap {
    /// Build the map from every label that occurs.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let unique: BTreeSet<&str> = labels.iter().map(|l| l.as_ref()).collect();
        Self {
            classes: unique.into_iter().map(String::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names, ordered by class index.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .ok()
    }

    /// Map each label to its class index.
    pub fn encode<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                self.index_of(label)
                    .ok_or_else(|| Error::UnknownLabel(label.to_string()))
            })
            .collect()
    }
}

/// Build the class map of `labels` and encode them in one call.
pub fn labels_to_classes<S: AsRef<str>>(labels: &[S]) -> (ClassMap, Vec<usize>) {
    let map = ClassMap::from_labels(labels);
    let indices = labels
        .iter()
        .filter_map(|label| map.index_of(label.as_ref()))
        .collect();
    (map, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_sorted_unique() {
        let map = ClassMap::from_labels(&["rip", "calm", "rip", "boat"]);
        assert_eq!(map.classes(), &["boat", "calm", "rip"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.index_of("calm"), Some(1));
        assert_eq!(map.index_of("shark"), None);
    }

    #[test]
    fn test_labels_to_classes() {
        let (map, indices) = labels_to_classes(&["rip", "calm", "rip", "boat"]);
        assert_eq!(indices, vec![2, 1, 2, 0]);
        assert_eq!(indices.len(), 4);
        assert_eq!(map.classes()[indices[0]], "rip");
    }

    #[test]
    fn test_encode_unknown_label() {
        let map = ClassMap::from_labels(&["rip"]);
        assert_eq!(map.encode(&["rip", "rip"]).unwrap(), vec![0, 0]);
        assert!(matches!(map.encode(&["calm"]), Err(Error::UnknownLabel(_))));
    }

    #[test]
    fn test_empty_labels() {
        let none: [&str; 0] = [];
        let (map, indices) = labels_to_classes(&none);
        assert!(map.is_empty());
        assert!(indices.is_empty());
    }
}
