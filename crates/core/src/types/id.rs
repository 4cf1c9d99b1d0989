//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog ids are opaque
//! strings (remote APIs hand out Mongo-style object ids, the seed dataset uses
//! slugs), and an empty id is a valid, degraded value.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Default`
/// - Conversion methods: `new()`, `as_str()`, `is_empty()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use cosmo_core::define_id;
/// define_id!(SkuId);
/// define_id!(WarehouseId);
///
/// let sku = SkuId::new("lip-001");
/// let warehouse = WarehouseId::new("lip-001");
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = warehouse;
/// assert_eq!(sku.as_str(), warehouse.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);

impl ProductId {
    /// Pick the canonical product id from the two names a record may use.
    ///
    /// Priority is `id`, then `_id`. Empty strings are skipped; when neither
    /// is usable the result is the empty id.
    #[must_use]
    pub fn canonical(id: Option<&str>, object_id: Option<&str>) -> Self {
        [id, object_id]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .map(Self::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_prefers_id() {
        let id = ProductId::canonical(Some("p-1"), Some("65f0c0ffee"));
        assert_eq!(id.as_str(), "p-1");
    }

    #[test]
    fn test_canonical_falls_back_to_object_id() {
        assert_eq!(ProductId::canonical(None, Some("65f0")).as_str(), "65f0");
        assert_eq!(ProductId::canonical(Some(""), Some("65f0")).as_str(), "65f0");
    }

    #[test]
    fn test_canonical_empty_when_missing() {
        let id = ProductId::canonical(None, None);
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: CategoryId = serde_json::from_str("\"lipstick\"").unwrap();
        assert_eq!(id, CategoryId::new("lipstick"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"lipstick\"");
    }
}
