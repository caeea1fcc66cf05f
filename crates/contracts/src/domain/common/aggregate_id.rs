use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types that travel through URLs and storage as strings
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for a URL segment
    fn as_string(&self) -> String;

    /// Parse the id back from a URL segment
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}
