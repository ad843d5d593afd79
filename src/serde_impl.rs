//! Serde support for [`Resource`] (feature-gated)
//!
//! A resource is written as an object with a `tag` field naming the state,
//! plus `value` for `Success` and `error` for `Failure`:
//!
//! ```text
//! {"tag":"initial"}
//! {"tag":"loading"}
//! {"tag":"success","value":42}
//! {"tag":"failure","error":"boom"}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use tidewater::Resource;
//!
//! let r: Resource<i32, String> = Resource::success(42);
//! let json = serde_json::to_string(&r).unwrap();
//! assert_eq!(json, r#"{"tag":"success","value":42}"#);
//!
//! let back: Resource<i32, String> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, r);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Resource;

#[derive(Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum Borrowed<'a, D, E> {
    Initial,
    Loading,
    Success { value: &'a D },
    Failure { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
enum Owned<D, E> {
    Initial,
    Loading,
    Success { value: D },
    Failure { error: E },
}

impl<D, E> Serialize for Resource<D, E>
where
    D: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let borrowed = match self {
            Resource::Initial => Borrowed::Initial,
            Resource::Loading => Borrowed::Loading,
            Resource::Success(value) => Borrowed::Success { value },
            Resource::Failure(error) => Borrowed::Failure { error },
        };
        borrowed.serialize(serializer)
    }
}

impl<'de, D, E> Deserialize<'de> for Resource<D, E>
where
    D: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        Ok(match Owned::deserialize(deserializer)? {
            Owned::Initial => Resource::Initial,
            Owned::Loading => Resource::Loading,
            Owned::Success { value } => Resource::Success(value),
            Owned::Failure { error } => Resource::Failure(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    type R = Resource<i32, String>;

    #[test]
    fn serialize_each_state() {
        let json: Vec<String> = [
            R::initial(),
            R::loading(),
            R::success(42),
            R::failure("boom".into()),
        ]
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();

        assert_eq!(
            json,
            vec![
                r#"{"tag":"initial"}"#,
                r#"{"tag":"loading"}"#,
                r#"{"tag":"success","value":42}"#,
                r#"{"tag":"failure","error":"boom"}"#,
            ]
        );
    }

    #[test]
    fn deserialize_each_state() {
        let parse = |s: &str| serde_json::from_str::<R>(s).unwrap();

        assert_eq!(parse(r#"{"tag":"initial"}"#), R::initial());
        assert_eq!(parse(r#"{"tag":"loading"}"#), R::loading());
        assert_eq!(parse(r#"{"value":7,"tag":"success"}"#), R::success(7));
        assert_eq!(
            parse(r#"{"tag":"failure","error":"nope"}"#),
            R::failure("nope".into())
        );
    }

    #[test]
    fn deserialize_nested_payload() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Show {
            title: String,
        }

        let r: Resource<Show, String> =
            serde_json::from_str(r#"{"tag":"success","value":{"title":"Peaky Blinders"}}"#)
                .unwrap();
        assert_eq!(
            r,
            Resource::success(Show {
                title: "Peaky Blinders".into()
            })
        );
    }

    #[test]
    fn deserialize_rejects_unknown_tag() {
        assert!(serde_json::from_str::<R>(r#"{"tag":"reloading"}"#).is_err());
    }

    #[test]
    fn deserialize_rejects_missing_payload() {
        assert!(serde_json::from_str::<R>(r#"{"tag":"success"}"#).is_err());
    }

    #[test]
    fn tag_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tag::Loading).unwrap(), r#""loading""#);
        assert_eq!(
            serde_json::from_str::<Tag>(r#""failure""#).unwrap(),
            Tag::Failure
        );
    }
}
