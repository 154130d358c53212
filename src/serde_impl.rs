//! Serde support for outcomes (feature-gated)
//!
//! An outcome is written as a tagged record naming its channel:
//!
//! ```text
//! {"tag":"success","success":<S>}
//! {"tag":"failure","failure":<F>}
//! ```
//!
//! # Example
//!
//! ```rust
//! use twotrack::Outcome;
//!
//! let ok: Outcome<u32, String> = Outcome::success(7);
//! let json = serde_json::to_string(&ok).unwrap();
//! assert_eq!(json, r#"{"tag":"success","success":7}"#);
//!
//! let back: Outcome<u32, String> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, ok);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::outcome::Outcome;

#[derive(Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum TaggedRef<'a, S, F> {
    Success { success: &'a S },
    Failure { failure: &'a F },
}

#[derive(Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum Tagged<S, F> {
    Success { success: S },
    Failure { failure: F },
}

impl<S, F> Serialize for Outcome<S, F>
where
    S: Serialize,
    F: Serialize,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let tagged = match self {
            Outcome::Success(success) => TaggedRef::Success { success },
            Outcome::Failure(failure) => TaggedRef::Failure { failure },
        };
        tagged.serialize(serializer)
    }
}

impl<'de, S, F> Deserialize<'de> for Outcome<S, F>
where
    S: Deserialize<'de>,
    F: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Tagged::deserialize(deserializer)? {
            Tagged::Success { success } => Outcome::Success(success),
            Tagged::Failure { failure } => Outcome::Failure(failure),
        })
    }
}
