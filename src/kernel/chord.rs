//! Window chords: `Ctrl+W` followed by a direction key.
//!
//! Only the prefix is claimed while idle, so ordinary keys keep reaching the
//! focused widget. Once the prefix is pending every key is consumed until the
//! sequence matches, turns invalid, or is cancelled with `Esc`.

use rustc_hash::FxHashMap;

use crate::core::event::Key;
use crate::core::KeyCode;
use crate::kernel::nav::NavDirection;
use crate::kernel::services::adapters::parse_key_sequence;
use crate::kernel::services::ports::settings::{default_chord_rules, ChordRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordOutcome {
    /// Not ours; let the key through.
    PassThrough,
    Pending,
    Matched(NavDirection),
    /// `Esc` dropped a pending sequence.
    Cancelled,
    /// The buffer no longer prefixes any sequence; it has been cleared.
    Invalid,
}

impl ChordOutcome {
    pub fn consumed(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

pub struct ChordDispatcher {
    mappings: FxHashMap<Vec<Key>, NavDirection>,
    pending: Vec<Key>,
}

impl ChordDispatcher {
    /// Rules whose keys fail to parse or do not start with `Ctrl+W` are skipped.
    pub fn new(rules: &[ChordRule]) -> Self {
        let mut mappings = FxHashMap::default();
        mappings.reserve(rules.len());
        for rule in rules {
            let Some(keys) = parse_key_sequence(&rule.keys) else {
                tracing::warn!(keys = %rule.keys, "unparsable chord ignored");
                continue;
            };
            if keys.len() < 2 || keys[0] != Self::prefix() {
                tracing::warn!(keys = %rule.keys, "chord must start with <C-W>, ignored");
                continue;
            }
            mappings.insert(keys, rule.direction);
        }
        Self {
            mappings,
            pending: Vec::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&default_chord_rules())
    }

    pub fn prefix() -> Key {
        Key::ctrl(KeyCode::Char('w'))
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn resolve(&self, keys: &[Key]) -> Option<NavDirection> {
        self.mappings.get(keys).copied()
    }

    /// Whether `key` would be consumed, without changing state.
    pub fn accepts(&self, key: Key) -> bool {
        let key = key.normalized();
        if key.code == KeyCode::Esc {
            return self.is_pending();
        }
        self.is_pending() || key == Self::prefix()
    }

    pub fn reset(&mut self) {
        self.pending.clear();
    }

    pub fn handle_key(&mut self, key: Key) -> ChordOutcome {
        let key = key.normalized();
        if key.code == KeyCode::Esc {
            if self.pending.is_empty() {
                return ChordOutcome::PassThrough;
            }
            self.pending.clear();
            return ChordOutcome::Cancelled;
        }
        if self.pending.is_empty() && key != Self::prefix() {
            return ChordOutcome::PassThrough;
        }

        self.pending.push(key);
        if let Some(direction) = self.mappings.get(&self.pending).copied() {
            self.pending.clear();
            return ChordOutcome::Matched(direction);
        }
        if self
            .mappings
            .keys()
            .any(|keys| keys.starts_with(&self.pending))
        {
            return ChordOutcome::Pending;
        }

        tracing::debug!(len = self.pending.len(), "invalid window chord");
        self.pending.clear();
        ChordOutcome::Invalid
    }
}

impl Default for ChordDispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/chord.rs"]
mod tests;
