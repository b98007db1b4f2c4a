use ahash::HashMap;
use tracing::debug;

use super::params::SortOrder;

/// Fitted vocabulary: the token index plus the ordered feature names.
///
/// `index` assigns each token the position at which it was first seen and is
/// never rebuilt, even when `feature_names` is sorted alphabetically. Column
/// order comes from `feature_names` alone; counting looks tokens up by string,
/// so the two orders may disagree.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    feature_names: Vec<String>,
}

impl Vocabulary {
    pub fn build(tokenized_texts: &[Vec<String>], sort_order: SortOrder) -> Self {
        debug!(
            num_texts = tokenized_texts.len(),
            %sort_order,
            "Building vocabulary from tokenized texts"
        );
        let mut index = HashMap::default();
        let mut feature_names = Vec::new();

        for token in tokenized_texts.iter().flatten() {
            if !index.contains_key(token) {
                index.insert(token.clone(), index.len());
                feature_names.push(token.clone());
            }
        }

        if sort_order == SortOrder::Alphabetical {
            feature_names.sort_unstable();
        }

        debug!(vocab_size = feature_names.len(), "Vocabulary built");
        Self {
            index,
            feature_names,
        }
    }

    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Token to first-seen index.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.index
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }
}
