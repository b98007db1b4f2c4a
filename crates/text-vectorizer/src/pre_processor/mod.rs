//! Text pre-processing: tokenization, vocabulary fitting, and count / TF-IDF
//! vectorization.

mod vectorizer;

pub use vectorizer::{
    CountVectorizer, EnglishStopWords, ErrorKind, Result, SortOrder, StopWordFile, StopWordSource,
    StopWords, TfidfTransformer, Vectorizer, VectorizerError, VectorizerMode, VectorizerParams,
    Vocabulary, tokenize, tokenize_corpus,
};
