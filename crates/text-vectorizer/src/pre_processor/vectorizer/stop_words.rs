use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::debug;

use super::error::{Result, VectorizerError};

/// Newline-delimited English stop words, selected by the `english` keyword.
const ENGLISH_STOP_WORDS: &str = include_str!("english_stop_words.txt");

/// Anything that can hand over a list of stop words synchronously.
///
/// The vectorizer never reads stop words on its own; it asks a source once,
/// while the [`VectorizerParams`](super::VectorizerParams) are being built.
pub trait StopWordSource {
    fn load(&self) -> Result<Vec<String>>;
}

impl<S: AsRef<str>> StopWordSource for [S] {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.iter().map(|word| word.as_ref().to_owned()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> StopWordSource for [S; N] {
    fn load(&self) -> Result<Vec<String>> {
        self.as_slice().load()
    }
}

impl<S: AsRef<str>> StopWordSource for Vec<S> {
    fn load(&self) -> Result<Vec<String>> {
        self.as_slice().load()
    }
}

/// Stop words stored one per line in a text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopWordFile {
    path: PathBuf,
}

impl StopWordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StopWordSource for StopWordFile {
    fn load(&self) -> Result<Vec<String>> {
        debug!(path = %self.path.display(), "Reading stop words file");
        let contents =
            fs::read_to_string(&self.path).map_err(|source| VectorizerError::StopWordsUnreadable {
                path: self.path.clone(),
                source,
            })?;
        let words = parse_lines(&contents);
        debug!(num_stop_words = words.len(), "Stop words loaded");
        Ok(words)
    }
}

/// The bundled English list.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishStopWords;

impl StopWordSource for EnglishStopWords {
    fn load(&self) -> Result<Vec<String>> {
        Ok(parse_lines(ENGLISH_STOP_WORDS))
    }
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// How stop words are chosen for a vectorizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StopWords {
    #[default]
    None,
    /// The bundled English list.
    English,
    List(Vec<String>),
    /// A newline-delimited file, read once when the params are built.
    File(PathBuf),
}

impl StopWords {
    /// Resolve to the raw word list, or `None` when filtering is off.
    pub(crate) fn resolve(&self) -> Result<Option<Vec<String>>> {
        match self {
            Self::None => Ok(None),
            Self::English => EnglishStopWords.load().map(Some),
            Self::List(words) => words.load().map(Some),
            Self::File(path) => StopWordFile::new(path.clone()).load().map(Some),
        }
    }
}

impl FromStr for StopWords {
    type Err = VectorizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "english" => Ok(Self::English),
            other => Err(VectorizerError::invalid_configuration(format!(
                "unrecognised stop words keyword `{other}`, expected `english` or a list of words"
            ))),
        }
    }
}

impl<S: AsRef<str>> From<Vec<S>> for StopWords {
    fn from(words: Vec<S>) -> Self {
        Self::List(words.iter().map(|word| word.as_ref().to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::pre_processor::ErrorKind;

    #[test]
    fn test_parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("the\n  and \n\n\tof\r\n");
        assert_eq!(words, vec!["the", "and", "of"]);
    }

    #[test]
    fn test_english_list_is_bundled() {
        let words = EnglishStopWords.load().unwrap();
        assert!(words.iter().any(|word| word == "the"));
        assert!(words.iter().any(|word| word == "to"));
        assert!(words.iter().all(|word| !word.trim().is_empty()));
    }

    #[test]
    fn test_in_memory_sources() {
        assert_eq!(["to", "a"].load().unwrap(), vec!["to", "a"]);
        assert_eq!(
            vec![String::from("of")].load().unwrap(),
            vec![String::from("of")]
        );
        let slice: &[&str] = &[];
        assert!(slice.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "to").unwrap();
        writeln!(file, "the").unwrap();
        writeln!(file).unwrap();

        let source = StopWordFile::new(file.path());
        assert_eq!(source.path(), file.path());
        assert_eq!(source.load().unwrap(), vec!["to", "the"]);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = StopWordFile::new(dir.path().join("stopwords.txt"))
            .load()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(matches!(error, VectorizerError::StopWordsUnreadable { .. }));
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("english".parse::<StopWords>().unwrap(), StopWords::English);

        let error = "french".parse::<StopWords>().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(error.to_string().contains("french"));
    }

    #[test]
    fn test_resolve() {
        assert!(StopWords::None.resolve().unwrap().is_none());
        assert_eq!(
            StopWords::from(vec!["to"]).resolve().unwrap(),
            Some(vec![String::from("to")])
        );
        assert!(StopWords::English.resolve().unwrap().is_some());
    }
}
