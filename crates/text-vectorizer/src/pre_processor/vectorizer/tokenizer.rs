use std::borrow::Cow;

use tracing::debug;

use super::params::VectorizerParams;

fn strip_non_alphanumeric(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Split one document into tokens.
///
/// Words are whitespace-delimited. A word is dropped if it is a stop word or
/// has no alphanumeric character at all; every other word keeps only its
/// alphanumeric characters, so no token is ever empty. Order and duplicates
/// are preserved.
pub fn tokenize(text: &str, params: &VectorizerParams) -> Vec<String> {
    let text = if params.lowercase() {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    };

    text.split_whitespace()
        .filter(|word| !params.is_stop_word(word))
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .map(strip_non_alphanumeric)
        .collect()
}

pub fn tokenize_corpus<T: AsRef<str>>(texts: &[T], params: &VectorizerParams) -> Vec<Vec<String>> {
    debug!(
        num_texts = texts.len(),
        lowercase = params.lowercase(),
        "Tokenizing texts"
    );
    let tokenized = texts
        .iter()
        .map(|text| tokenize(text.as_ref(), params))
        .collect::<Vec<_>>();
    debug!(
        num_tokens = tokenized.iter().map(Vec::len).sum::<usize>(),
        "Tokenization complete"
    );
    tokenized
}
