mod count_vectorizer;
mod error;
mod params;
mod stop_words;
mod text_vectorizer;
mod tfidf_transformer;
mod tokenizer;
mod vocabulary;

pub use count_vectorizer::CountVectorizer;
pub use error::{ErrorKind, Result, VectorizerError};
pub use params::{SortOrder, VectorizerParams};
pub use stop_words::{EnglishStopWords, StopWordFile, StopWordSource, StopWords};
pub use text_vectorizer::{Vectorizer, VectorizerMode};
pub use tfidf_transformer::TfidfTransformer;
pub use tokenizer::{tokenize, tokenize_corpus};
pub use vocabulary::Vocabulary;
