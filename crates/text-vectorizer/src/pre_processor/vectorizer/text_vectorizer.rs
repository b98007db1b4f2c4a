use ahash::HashMap;
use ndarray::{Array1, Array2};
use tracing::debug;

use super::{
    count_vectorizer::CountVectorizer,
    error::{Result, VectorizerError},
    params::VectorizerParams,
    tfidf_transformer::TfidfTransformer,
};

/// What `transform` produces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VectorizerMode {
    /// Raw token counts.
    #[default]
    CountOnly,
    /// Counts weighted by term frequency and smoothed inverse document frequency.
    TfIdf,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
struct Fitted {
    counts: CountVectorizer,
    /// Present only in [`VectorizerMode::TfIdf`].
    tfidf: Option<TfidfTransformer>,
}

impl Fitted {
    fn weigh(&self, counts: &Array2<usize>) -> Result<Array2<f64>> {
        match &self.tfidf {
            Some(tfidf) => tfidf.transform(counts),
            None => Ok(counts.mapv(|count| count as f64)),
        }
    }
}

/// Fit/transform facade over the tokenizer, vocabulary, count and TF-IDF
/// stages.
///
/// A vectorizer starts unfitted. [`fit`](Self::fit) learns the feature names
/// (and, in [`VectorizerMode::TfIdf`], the IDF weights) from a corpus;
/// calling it again discards everything learned before.
/// [`transform`](Self::transform) can then be applied to any corpus without
/// changing that state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct Vectorizer {
    params: VectorizerParams,
    mode: VectorizerMode,
    fitted: Option<Fitted>,
}

impl Vectorizer {
    #[must_use]
    pub fn new(params: VectorizerParams, mode: VectorizerMode) -> Self {
        Self {
            params,
            mode,
            fitted: None,
        }
    }

    #[must_use]
    pub fn count(params: VectorizerParams) -> Self {
        Self::new(params, VectorizerMode::CountOnly)
    }

    #[must_use]
    pub fn tfidf(params: VectorizerParams) -> Self {
        Self::new(params, VectorizerMode::TfIdf)
    }

    /// Learn the vocabulary from `texts`, replacing any previous fit.
    pub fn fit<T: AsRef<str>>(&mut self, texts: &[T]) -> Result<()> {
        let (fitted, _) = self.build_fitted(texts)?;
        self.fitted = Some(fitted);
        Ok(())
    }

    /// Fitted state learned from `texts`, plus their count matrix.
    fn build_fitted<T: AsRef<str>>(&self, texts: &[T]) -> Result<(Fitted, Array2<usize>)> {
        debug!(num_texts = texts.len(), mode = ?self.mode, "Fitting Vectorizer");

        let (counts, matrix) = CountVectorizer::fit_transform(texts, self.params.clone());
        let tfidf = match self.mode {
            VectorizerMode::CountOnly => None,
            VectorizerMode::TfIdf => Some(TfidfTransformer::fit(&matrix, counts.feature_names())?),
        };

        debug!(
            num_features = counts.num_features(),
            "Vectorizer fitting complete"
        );
        Ok((Fitted { counts, tfidf }, matrix))
    }

    /// Vectorize `texts` against the fitted vocabulary.
    ///
    /// Each row has one cell per feature name. In `CountOnly` mode the cells
    /// are counts; in `TfIdf` mode they are weights, and a text with no
    /// in-vocabulary tokens is an [`VectorizerError::EmptyDocument`] error.
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> Result<Array2<f64>> {
        let fitted = self.fitted("transform")?;
        debug!(num_texts = texts.len(), mode = ?self.mode, "Transforming texts");
        let counts = fitted.counts.transform(texts);
        fitted.weigh(&counts)
    }

    /// Same result as `fit` followed by `transform` on the same texts, but
    /// tokenizes only once.
    ///
    /// On error (an [`VectorizerError::EmptyDocument`] in `TfIdf` mode) the
    /// vectorizer keeps whatever state it had before the call.
    pub fn fit_transform<T: AsRef<str>>(&mut self, texts: &[T]) -> Result<Array2<f64>> {
        let (fitted, counts) = self.build_fitted(texts)?;
        let weights = fitted.weigh(&counts)?;
        self.fitted = Some(fitted);
        Ok(weights)
    }

    pub fn get_feature_names(&self) -> Result<&[String]> {
        self.fitted("get_feature_names")
            .map(|fitted| fitted.counts.feature_names())
    }

    /// Token to first-seen index, independent of the column order.
    pub fn vocabulary(&self) -> Result<&HashMap<String, usize>> {
        self.fitted("vocabulary")
            .map(|fitted| fitted.counts.vocabulary().vocabulary())
    }

    /// IDF weights per feature; `Ok(None)` in `CountOnly` mode.
    pub fn idf(&self) -> Result<Option<&Array1<f64>>> {
        self.fitted("idf")
            .map(|fitted| fitted.tfidf.as_ref().map(TfidfTransformer::idf))
    }

    pub fn num_features(&self) -> Result<usize> {
        self.fitted("num_features")
            .map(|fitted| fitted.counts.num_features())
    }

    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    #[must_use]
    pub fn mode(&self) -> VectorizerMode {
        self.mode
    }

    #[must_use]
    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }

    fn fitted(&self, operation: &'static str) -> Result<&Fitted> {
        self.fitted
            .as_ref()
            .ok_or(VectorizerError::NotFitted { operation })
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(VectorizerParams::default(), VectorizerMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pre_processor::{ErrorKind, SortOrder, StopWords};

    const CORPUS: [&str; 2] = [
        "Crock Pot Pasta Never boil pasta again",
        "Pasta Pomodoro Fresh ingredients Parmesan to taste",
    ];

    #[test]
    fn test_unfitted_operations_are_state_errors() {
        let vectorizer = Vectorizer::default();
        assert!(!vectorizer.is_fitted());

        let errors = [
            vectorizer.transform(&CORPUS).unwrap_err(),
            vectorizer.get_feature_names().unwrap_err(),
            vectorizer.vocabulary().unwrap_err(),
            vectorizer.idf().unwrap_err(),
            vectorizer.num_features().unwrap_err(),
        ];
        for error in errors {
            assert_eq!(error.kind(), ErrorKind::State, "{error}");
        }
    }

    #[test]
    fn test_count_fit_transform() {
        let mut vectorizer = Vectorizer::count(VectorizerParams::default());
        let matrix = vectorizer.fit_transform(&CORPUS).unwrap();

        assert!(vectorizer.is_fitted());
        assert_eq!(vectorizer.num_features().unwrap(), 12);
        assert_eq!(
            matrix.row(0).to_vec(),
            vec![1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            matrix.row(1).to_vec(),
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        );
        assert!(vectorizer.idf().unwrap().is_none());
    }

    #[test]
    fn test_tfidf_fit_transform() {
        let mut vectorizer = Vectorizer::tfidf(VectorizerParams::default());
        let matrix = vectorizer.fit_transform(&CORPUS).unwrap();

        let pasta = vectorizer
            .get_feature_names()
            .unwrap()
            .iter()
            .position(|name| name == "pasta")
            .unwrap();
        assert_eq!(vectorizer.idf().unwrap().unwrap()[pasta], 1.0);
        assert_eq!(matrix[[0, pasta]], 0.286);
        assert_eq!(matrix[[1, pasta]], 0.143);
    }

    #[test]
    fn test_tfidf_fit_then_transform_matches_fit_transform() {
        let params = VectorizerParams::default();
        let expected = Vectorizer::tfidf(params.clone())
            .fit_transform(&CORPUS)
            .unwrap();

        let mut vectorizer = Vectorizer::tfidf(params);
        vectorizer.fit(&CORPUS).unwrap();
        assert_eq!(vectorizer.transform(&CORPUS).unwrap(), expected);
    }

    #[test]
    fn test_tfidf_honours_configuration() {
        let params = VectorizerParams::new(
            true,
            StopWords::from(vec!["to"]),
            SortOrder::Alphabetical,
        )
        .unwrap();
        let mut vectorizer = Vectorizer::tfidf(params);
        vectorizer.fit(&CORPUS).unwrap();

        let names = vectorizer.get_feature_names().unwrap();
        assert_eq!(names.first().map(String::as_str), Some("again"));
        assert!(!names.iter().any(|name| name == "to"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_tfidf_empty_document_is_computation_error() {
        let mut vectorizer = Vectorizer::tfidf(VectorizerParams::default());
        vectorizer.fit(&CORPUS).unwrap();

        let error = vectorizer
            .transform(&["pasta", "nothing here matches"])
            .unwrap_err();
        assert!(matches!(error, VectorizerError::EmptyDocument { row: 1 }));
    }

    #[test]
    fn test_failed_fit_transform_keeps_previous_fit() {
        let mut vectorizer = Vectorizer::tfidf(VectorizerParams::default());
        vectorizer.fit(&CORPUS).unwrap();

        let error = vectorizer.fit_transform(&["pasta", "!!!"]).unwrap_err();
        assert!(matches!(error, VectorizerError::EmptyDocument { row: 1 }));
        assert_eq!(vectorizer.num_features().unwrap(), 12);
        assert!(vectorizer.get_feature_names().unwrap().contains(&"crock".to_owned()));
    }

    #[test]
    fn test_failed_fit_transform_leaves_unfitted() {
        let mut vectorizer = Vectorizer::tfidf(VectorizerParams::default());
        assert!(vectorizer.fit_transform(&["salt", ""]).is_err());
        assert!(!vectorizer.is_fitted());
    }

    #[test]
    fn test_count_empty_document_is_zero_row() {
        let mut vectorizer = Vectorizer::count(VectorizerParams::default());
        vectorizer.fit(&CORPUS).unwrap();

        let matrix = vectorizer.transform(&["!!!"]).unwrap();
        assert_eq!(matrix.dim(), (1, 12));
        assert!(matrix.iter().all(|&cell| cell == 0.0));
    }

    #[test]
    fn test_refit_replaces_state() {
        let mut vectorizer = Vectorizer::count(VectorizerParams::default());
        vectorizer.fit(&CORPUS).unwrap();
        vectorizer.fit(&["salt pepper", "pepper"]).unwrap();

        assert_eq!(vectorizer.get_feature_names().unwrap(), ["salt", "pepper"]);
        assert_eq!(vectorizer.vocabulary().unwrap().len(), 2);
    }

    #[test]
    fn test_accessors() {
        let vectorizer = Vectorizer::tfidf(VectorizerParams::default());
        assert_eq!(vectorizer.mode(), VectorizerMode::TfIdf);
        assert!(vectorizer.params().lowercase());
    }

    #[test]
    fn test_vectorizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vectorizer>();
    }
}
