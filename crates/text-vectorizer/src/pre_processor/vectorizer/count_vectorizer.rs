use ahash::HashMap;
use ndarray::Array2;
use tracing::debug;

use super::{params::VectorizerParams, tokenizer, vocabulary::Vocabulary};

/// Fitted bag-of-words stage: params plus the vocabulary learned from a corpus.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct CountVectorizer {
    params: VectorizerParams,
    vocab: Vocabulary,
}

impl CountVectorizer {
    pub fn fit<T: AsRef<str>>(texts: &[T], params: VectorizerParams) -> Self {
        debug!(num_texts = texts.len(), "Fitting CountVectorizer");
        let tokenized_texts = tokenizer::tokenize_corpus(texts, &params);
        Self::fit_from_tokenized(&tokenized_texts, params)
    }

    /// Used by `fit_transform` to avoid tokenizing twice.
    fn fit_from_tokenized(tokenized_texts: &[Vec<String>], params: VectorizerParams) -> Self {
        let vocab = Vocabulary::build(tokenized_texts, params.sort_order());
        debug!(
            vocab_size = vocab.num_features(),
            "CountVectorizer fitting complete"
        );
        Self { params, vocab }
    }

    /// Count matrix with one row per text and one column per feature name.
    ///
    /// Tokens outside the fitted vocabulary are dropped.
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> Array2<usize> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using CountVectorizer"
        );
        let tokenized_texts = tokenizer::tokenize_corpus(texts, &self.params);
        self.transform_from_tokenized(&tokenized_texts)
    }

    fn transform_from_tokenized(&self, tokenized_texts: &[Vec<String>]) -> Array2<usize> {
        let mut counts = Array2::zeros((tokenized_texts.len(), self.num_features()));

        for (mut row, tokens) in counts.outer_iter_mut().zip(tokenized_texts) {
            let mut frequencies: HashMap<&str, usize> = HashMap::default();
            for token in tokens {
                *frequencies.entry(token.as_str()).or_insert(0) += 1;
            }
            for (cell, feature) in row.iter_mut().zip(self.vocab.feature_names()) {
                *cell = frequencies.get(feature.as_str()).copied().unwrap_or(0);
            }
        }

        debug!(
            num_rows = counts.nrows(),
            num_features = counts.ncols(),
            "Text transformation complete"
        );
        counts
    }

    /// Tokenizes once and reuses the tokens for both fitting and counting.
    pub fn fit_transform<T: AsRef<str>>(
        texts: &[T],
        params: VectorizerParams,
    ) -> (Self, Array2<usize>) {
        debug!(
            num_texts = texts.len(),
            "fit_transform: tokenizing once for fit and transform"
        );
        let tokenized_texts = tokenizer::tokenize_corpus(texts, &params);
        let vectorizer = Self::fit_from_tokenized(&tokenized_texts, params);
        let counts = vectorizer.transform_from_tokenized(&tokenized_texts);
        (vectorizer, counts)
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.vocab.num_features()
    }

    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        self.vocab.feature_names()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    #[must_use]
    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }
}
