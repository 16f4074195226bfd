use crate::Value;
use crate::board::Key;
use crate::board::Move;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Learned action values: state key -> move -> value.
///
/// This is all an agent remembers between runs. Entries are only ever
/// added or overwritten, never removed, so the table grows with every
/// new position visited.
///
/// Persisted as a JSON object of objects:
/// `{ "<key>": { "<row>,<col>": value, .. }, .. }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(BTreeMap<Key, BTreeMap<Move, Value>>);

impl Table {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// stored value, 0 when never seen
    pub fn get(&self, key: &Key, m: &Move) -> Value {
        self.0
            .get(key)
            .and_then(|moves| moves.get(m))
            .copied()
            .unwrap_or_default()
    }
    pub fn set(&mut self, key: Key, m: Move, value: Value) {
        self.0.entry(key).or_default().insert(m, value);
    }
    /// highest stored value for a state, 0 when the state is unseen or empty
    pub fn max(&self, key: &Key) -> Value {
        self.0
            .get(key)
            .and_then(|moves| moves.values().copied().reduce(Value::max))
            .unwrap_or_default()
    }
    /// greedy move for a state.
    /// ties go to the lowest row-major move.
    pub fn best(&self, key: &Key) -> Option<Move> {
        self.0.get(key).and_then(|moves| {
            moves
                .iter()
                .fold(None::<(&Move, &Value)>, |best, (m, v)| match best {
                    Some((_, b)) if *v <= *b => best,
                    _ => Some((m, v)),
                })
                .map(|(m, _)| *m)
        })
    }
}

impl From<BTreeMap<Key, BTreeMap<Move, Value>>> for Table {
    fn from(inner: BTreeMap<Key, BTreeMap<Move, Value>>) -> Self {
        Self(inner)
    }
}
