use std::{fmt, str::FromStr};

use ahash::HashSet;

use super::{
    error::{Result, VectorizerError},
    stop_words::{StopWordSource, StopWords},
};

/// Column order of the fitted feature names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Order of first appearance in the fit corpus.
    #[default]
    Original,
    /// Lexicographic by code point.
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = VectorizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "original" => Ok(Self::Original),
            "alphabetical" => Ok(Self::Alphabetical),
            other => Err(VectorizerError::invalid_configuration(format!(
                "sort order must be `original` or `alphabetical`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// Validated, immutable tokenizer and vocabulary options.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ParamsRecord", into = "ParamsRecord")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorizerParams {
    lowercase: bool,
    /// Already lowercased when `lowercase` is set, so they compare against
    /// lowercased text directly.
    stop_words: Option<HashSet<String>>,
    sort_order: SortOrder,
}

impl VectorizerParams {
    /// Build params, loading stop words from whichever source `stop_words`
    /// names.
    ///
    /// Fails with a configuration error if a stop-word file cannot be read.
    /// Entries that are blank or contain whitespace can never equal a token
    /// and are dropped.
    pub fn new(lowercase: bool, stop_words: StopWords, sort_order: SortOrder) -> Result<Self> {
        Self::from_parts(lowercase, stop_words.resolve()?, sort_order)
    }

    /// Build params with stop words taken from an injected source.
    pub fn with_source<S: StopWordSource + ?Sized>(
        lowercase: bool,
        source: &S,
        sort_order: SortOrder,
    ) -> Result<Self> {
        Self::from_parts(lowercase, Some(source.load()?), sort_order)
    }

    fn from_parts(
        lowercase: bool,
        stop_words: Option<Vec<String>>,
        sort_order: SortOrder,
    ) -> Result<Self> {
        let stop_words = stop_words
            .map(|words| {
                words
                    .into_iter()
                    .filter_map(|word| normalize_stop_word(word, lowercase))
                    .collect::<HashSet<_>>()
            })
            .filter(|words| !words.is_empty());

        Ok(Self {
            lowercase,
            stop_words,
            sort_order,
        })
    }

    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub fn stop_words(&self) -> Option<&HashSet<String>> {
        self.stop_words.as_ref()
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Exact match against the stop list. `word` is expected to be cased the
    /// way the tokenizer sees it.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words
            .as_ref()
            .is_some_and(|words| words.contains(word))
    }
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            stop_words: None,
            sort_order: SortOrder::Original,
        }
    }
}

impl TryFrom<(bool, StopWords, SortOrder)> for VectorizerParams {
    type Error = VectorizerError;

    fn try_from(value: (bool, StopWords, SortOrder)) -> Result<Self> {
        Self::new(value.0, value.1, value.2)
    }
}

/// `None` for entries the whitespace tokenizer can never produce.
fn normalize_stop_word(word: String, lowercase: bool) -> Option<String> {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return None;
    }
    Some(if lowercase { word.to_lowercase() } else { word })
}

/// Serialized shape of [`VectorizerParams`]. Deserializing goes back through
/// stop-word normalization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ParamsRecord {
    lowercase: bool,
    #[serde(default)]
    stop_words: Option<Vec<String>>,
    #[serde(default)]
    sort_order: SortOrder,
}

#[cfg(feature = "serde")]
impl TryFrom<ParamsRecord> for VectorizerParams {
    type Error = VectorizerError;

    fn try_from(record: ParamsRecord) -> Result<Self> {
        Self::from_parts(record.lowercase, record.stop_words, record.sort_order)
    }
}

#[cfg(feature = "serde")]
impl From<VectorizerParams> for ParamsRecord {
    fn from(params: VectorizerParams) -> Self {
        let stop_words = params.stop_words.map(|words| {
            let mut words = words.into_iter().collect::<Vec<_>>();
            words.sort_unstable();
            words
        });
        Self {
            lowercase: params.lowercase,
            stop_words,
            sort_order: params.sort_order,
        }
    }
}
