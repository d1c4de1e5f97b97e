use serde::{Deserialize, Serialize};

/// Envelope used by the collection endpoints: `{"payload": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<T> {
    pub payload: T,
}

impl<T> Payload<T> {
    pub fn new(payload: T) -> Self {
        Self { payload }
    }
}
