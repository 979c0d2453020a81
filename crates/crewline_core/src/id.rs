//! Type-safe entity identifiers
//!
//! Every persistent Crewline entity gets its own ID type: a UUID tagged
//! with a stable per-entity prefix. The prefixed string ("proj_<uuid>")
//! is the only wire representation.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A typed identifier with a consistent prefix and UUID
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    /// The unique identifier
    uuid: Uuid,
    /// Phantom data to make each ID type unique
    _marker: PhantomData<T>,
}

impl<T: IdType> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", T::PREFIX, self.uuid)
    }
}

/// Trait for types that can be used as ID markers
pub trait IdType: Send + Sync + 'static {
    /// The prefix for this ID type (e.g., "proj" for projects)
    const PREFIX: &'static str;
}

/// Errors that can occur when working with IDs
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum IdError {
    #[error("Invalid ID prefix: expected '{expected}', got '{actual}'")]
    #[diagnostic(help("IDs carry the prefix of the entity type they name"))]
    InvalidPrefix { expected: String, actual: String },

    #[error("Invalid UUID: {0}")]
    #[diagnostic(help("The part after the prefix must be a valid UUID"))]
    InvalidUuid(#[from] uuid::Error),

    #[error("Invalid ID format: {0}")]
    #[diagnostic(help("IDs are written as 'prefix_uuid'"))]
    InvalidFormat(String),
}

impl<T: IdType> Id<T> {
    /// Create a new ID with a generated UUID
    pub fn generate() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create an ID from a specific UUID (useful for tests or imports)
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: PhantomData,
        }
    }

    /// Parse an ID from its string form
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let (prefix, uuid_str) = s
            .split_once('_')
            .ok_or_else(|| IdError::InvalidFormat("ID must be in format 'prefix_uuid'".into()))?;

        if prefix != T::PREFIX {
            return Err(IdError::InvalidPrefix {
                expected: T::PREFIX.to_string(),
                actual: prefix.to_string(),
            });
        }

        Ok(Self::from_uuid(Uuid::parse_str(uuid_str)?))
    }

    /// Get the UUID part
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Get the prefix for this ID type
    pub fn prefix(&self) -> &'static str {
        T::PREFIX
    }

    /// Create a nil/empty ID (all zeros)
    pub fn nil() -> Self {
        Self::from_uuid(Uuid::nil())
    }

    /// Check if this is a nil/empty ID
    pub fn is_nil(&self) -> bool {
        self.uuid.is_nil()
    }
}

impl<T: IdType> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", T::PREFIX, self.uuid)
    }
}

impl<T: IdType> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: IdType> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.to_string()
    }
}

impl<T: IdType> AsRef<Uuid> for Id<T> {
    fn as_ref(&self) -> &Uuid {
        &self.uuid
    }
}

impl<T: IdType> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, T: IdType> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl<T: IdType> JsonSchema for Id<T> {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Owned(format!("{}Id", T::PREFIX))
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        // Serialized as a plain string
        String::json_schema(generator)
    }
}

/// Macro to define new ID types with minimal boilerplate
#[macro_export]
macro_rules! define_id_type {
    ($type_name:ident, $prefix:expr) => {
        /// Marker type for the ID
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        pub struct $type_name;

        impl $crate::id::IdType for $type_name {
            const PREFIX: &'static str = $prefix;
        }
    };
}

define_id_type!(UserIdType, "user");
define_id_type!(ProjectIdType, "proj");
define_id_type!(TaskIdType, "task");
define_id_type!(NotificationIdType, "notif");
define_id_type!(SubscriptionIdType, "sub");

/// Type alias for User IDs
pub type UserId = Id<UserIdType>;

/// Type alias for Project IDs
pub type ProjectId = Id<ProjectIdType>;

/// Type alias for Task IDs
pub type TaskId = Id<TaskIdType>;

/// Type alias for Notification IDs
pub type NotificationId = Id<NotificationIdType>;

/// Type alias for Subscription IDs
pub type SubscriptionId = Id<SubscriptionIdType>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation() {
        let id1 = ProjectId::generate();
        let id2 = ProjectId::generate();

        // IDs should be unique
        assert_ne!(id1, id2);

        // IDs should have correct prefix
        assert_eq!(id1.prefix(), "proj");
        assert!(id2.to_string().starts_with("proj_"));
    }

    #[test]
    fn test_id_parsing() {
        let id = ProjectId::generate();
        let id_str = id.to_string();

        // Should be able to parse back
        let parsed = ProjectId::parse(&id_str).unwrap();
        assert_eq!(id, parsed);

        // Should fail with wrong prefix
        assert!(UserId::parse(&id_str).is_err());

        // Should fail with invalid format
        assert!(ProjectId::parse("invalid").is_err());
        assert!(ProjectId::parse("proj_").is_err());
        assert!(ProjectId::parse("proj_not-a-uuid").is_err());

        // Should succeed with valid format
        let uuid = Uuid::new_v4();
        assert!(ProjectId::parse(&format!("proj_{}", uuid)).is_ok());
    }

    #[test]
    fn test_id_serialization() {
        let id = UserId::generate();

        let json = serde_json::to_string(&id).unwrap();
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        // Should serialize as "prefix_uuid"
        assert!(json.contains("user_"));

        // Deserializing the wrong prefix should fail
        assert!(serde_json::from_str::<ProjectId>(&json).is_err());
    }

    #[test]
    fn test_nil_id() {
        let nil_id = TaskId::nil();
        assert!(nil_id.is_nil());
        assert_eq!(
            nil_id.to_string(),
            "task_00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_debug_matches_display() {
        let id = NotificationId::generate();

        let debug = format!("{:?}", id);
        assert!(debug.starts_with("notif_"));
        assert!(!debug.contains("PhantomData"));
        assert_eq!(debug, id.to_string());
    }
}
