use serde::{Deserialize, Serialize};

use crate::kernel::nav::NavDirection;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub navigation: NavigationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationSettings {
    /// Let directional moves reach docked panels as well as editor splits.
    #[serde(default)]
    pub extended: bool,
    #[serde(default = "default_chord_rules")]
    pub chords: Vec<ChordRule>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            extended: false,
            chords: default_chord_rules(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRule {
    /// Key sequence in vim notation, e.g. `<C-W>h`.
    pub keys: String,
    pub direction: NavDirection,
}

impl ChordRule {
    pub fn new(keys: impl Into<String>, direction: NavDirection) -> Self {
        Self {
            keys: keys.into(),
            direction,
        }
    }
}

pub fn default_chord_rules() -> Vec<ChordRule> {
    let mut rules = Vec::with_capacity(12);
    let groups = [
        (NavDirection::Left, ["<C-W>h", "<C-W><C-H>", "<C-W><Left>"]),
        (NavDirection::Down, ["<C-W>j", "<C-W><C-J>", "<C-W><Down>"]),
        (NavDirection::Up, ["<C-W>k", "<C-W><C-K>", "<C-W><Up>"]),
        (NavDirection::Right, ["<C-W>l", "<C-W><C-L>", "<C-W><Right>"]),
    ];
    for (direction, keys) in groups {
        for key in keys {
            rules.push(ChordRule::new(key, direction));
        }
    }
    rules
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
