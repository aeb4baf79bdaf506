//! JSON description of a universe.
//!
//! Type expressions are either a bare name or a single-key object naming the
//! constructor, e.g. `{"slice": "byte"}`.

use serde::Deserialize;

use super::builder::Builder;
use super::scope::Universe;

/// Error while loading a universe.
#[derive(Debug, thiserror::Error)]
pub enum UniverseError {
    #[error("invalid universe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    #[error("`{name}` is declared more than once")]
    DuplicateName { name: String },

    #[error("invalid recursive type `{name}`")]
    InvalidRecursiveType { name: String },

    /// A type parameter used directly as an underlying type or as a term.
    #[error("cannot use type parameter `{name}` here")]
    MisplacedParam { name: String },
}

impl Universe {
    /// Build a universe from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, UniverseError> {
        let raw: RawUniverse = serde_json::from_str(json)?;
        Builder::default().build(raw)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawUniverse {
    #[serde(default)]
    pub(super) named: Vec<RawNamed>,
    #[serde(default)]
    pub(super) params: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawNamed {
    pub(super) name: String,
    pub(super) underlying: RawType,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawParam {
    pub(super) name: String,
    /// `None` (absent or `null`) admits every type.
    #[serde(default)]
    pub(super) terms: Option<Vec<RawTerm>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawType {
    Name(String),
    Composite(RawComposite),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum RawComposite {
    Slice(Box<RawType>),
    Array {
        len: u64,
        elem: Box<RawType>,
    },
    Pointer(Box<RawType>),
    Map {
        key: Box<RawType>,
        value: Box<RawType>,
    },
    Chan {
        elem: Box<RawType>,
        #[serde(default)]
        dir: RawChanDir,
    },
    Struct(Vec<RawField>),
    Func {
        #[serde(default)]
        params: Vec<RawType>,
        #[serde(default)]
        results: Vec<RawType>,
        /// The last parameter is written as its element type, as in `...T`.
        #[serde(default)]
        variadic: bool,
    },
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum RawChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawField {
    pub(super) name: String,
    #[serde(rename = "type")]
    pub(super) ty: RawType,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawTerm {
    Tilde(RawTilde),
    Exact(RawType),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawTilde {
    pub(super) tilde: RawType,
}
