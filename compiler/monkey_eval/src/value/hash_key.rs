//! Hash keys for `Value::Hash`.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use super::Value;

/// Which hashable variant a key came from. Keeps `1` and `true` apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    Integer,
    Boolean,
    String,
}

/// Type-tagged 64-bit hash of a hashable value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: HashKind,
    pub value: u64,
}

impl Value {
    /// The key this value hashes to, or `None` if it cannot be a hash key.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey {
                kind: HashKind::Integer,
                value: u64::from_ne_bytes(n.to_ne_bytes()),
            }),
            Value::Boolean(b) => Some(HashKey {
                kind: HashKind::Boolean,
                value: u64::from(*b),
            }),
            Value::String(s) => {
                let mut hasher = FxHasher::default();
                hasher.write(s.as_bytes());
                Some(HashKey {
                    kind: HashKind::String,
                    value: hasher.finish(),
                })
            }
            Value::Null
            | Value::Array(_)
            | Value::Hash(_)
            | Value::Function(_)
            | Value::Builtin(_)
            | Value::Error(_)
            | Value::Quote(_)
            | Value::Macro(_) => None,
        }
    }
}
