//! # text-vectorizer
//!
//! Bag-of-words text vectorization with a scikit-learn style fit/transform
//! API: whitespace tokenization, first-seen or alphabetical vocabularies,
//! document-term count matrices and TF-IDF weighting.
//!
//! ```rust
//! use text_vectorizer::{Vectorizer, VectorizerParams};
//!
//! let corpus = [
//!     "Crock Pot Pasta Never boil pasta again",
//!     "Pasta Pomodoro Fresh ingredients Parmesan to taste",
//! ];
//!
//! let mut vectorizer = Vectorizer::count(VectorizerParams::default());
//! let counts = vectorizer.fit_transform(&corpus)?;
//!
//! assert_eq!(&vectorizer.get_feature_names()?[..3], ["crock", "pot", "pasta"]);
//! assert_eq!(counts[[0, 2]], 2.0);
//! # Ok::<(), text_vectorizer::VectorizerError>(())
//! ```
//!
//! ## TF-IDF with stop words
//!
//! ```rust
//! use text_vectorizer::{SortOrder, StopWords, Vectorizer, VectorizerParams};
//!
//! let params = VectorizerParams::new(true, StopWords::from(vec!["to"]), SortOrder::Alphabetical)?;
//! let mut vectorizer = Vectorizer::tfidf(params);
//! let weights = vectorizer.fit_transform(&["Salt to taste", "salt and PEPPER"])?;
//!
//! assert_eq!(vectorizer.get_feature_names()?, ["and", "pepper", "salt", "taste"]);
//! assert_eq!(weights.ncols(), 4);
//! # Ok::<(), text_vectorizer::VectorizerError>(())
//! ```

pub mod pre_processor;

pub use pre_processor::{
    CountVectorizer, EnglishStopWords, ErrorKind, SortOrder, StopWordFile, StopWordSource,
    StopWords, TfidfTransformer, Vectorizer, VectorizerError, VectorizerMode, VectorizerParams,
    Vocabulary,
};
