//! Annotation types produced by the linguistic annotation step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tag.
///
/// The seventeen universal dependency tags are modelled explicitly; any
/// other value produced by an annotator is kept verbatim in [`UposTag::Other`]
/// so unrecognized tags never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UposTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Other(String),
}

impl UposTag {
    /// Tag as written in CoNLL-U and in exported tables.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Other(tag) => tag,
        }
    }

    /// Structurally non-lexical categories that never count toward frequency.
    pub fn is_non_lexical(&self) -> bool {
        matches!(self, Self::Punct | Self::Sym | Self::Num | Self::X)
    }
}

impl FromStr for UposTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "X" => Self::X,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for UposTag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for UposTag {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<UposTag> for String {
    fn from(tag: UposTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for UposTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single annotated word, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Dictionary form assigned by the annotator, if any
    #[serde(default)]
    pub lemma: Option<String>,

    /// Universal part-of-speech tag
    pub upos: UposTag,
}

impl Annotation {
    /// Create an annotation with a lemma.
    pub fn new(lemma: impl Into<String>, upos: impl Into<UposTag>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            upos: upos.into(),
        }
    }

    /// Create an annotation the annotator could not lemmatize.
    pub fn without_lemma(upos: impl Into<UposTag>) -> Self {
        Self {
            lemma: None,
            upos: upos.into(),
        }
    }
}

/// A sentence as returned by an annotator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSentence {
    pub words: Vec<Annotation>,
}

impl AnnotatedSentence {
    pub fn new(words: Vec<Annotation>) -> Self {
        Self { words }
    }
}

/// A `(lemma, pos)` pair that survived token filtering; the lemma is lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilteredToken {
    pub lemma: String,
    pub pos: UposTag,
}
