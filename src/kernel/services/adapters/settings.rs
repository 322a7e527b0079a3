use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::event::Key;
use crate::core::{KeyCode, KeyModifiers};
use crate::kernel::services::ports::settings::Settings;

use super::paths::get_cache_dir;

const SETTINGS_DIR: &str = ".panenav";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "settings parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    write_default_settings(&path)?;
    Ok(path)
}

/// Creates `path` with default settings unless it already exists.
pub fn write_default_settings(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    match load_settings_from(&path) {
        Ok(settings) => Some(settings),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "load settings failed");
            None
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Parses vim key notation: `<C-W>h`, `<C-W><Left>`, `gg`, `<lt>`.
pub fn parse_key_sequence(value: &str) -> Option<Vec<Key>> {
    let mut keys = Vec::new();
    let mut rest = value.trim();
    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            if let Some(end) = rest.find('>') {
                if end > 1 {
                    keys.push(parse_key(&rest[1..end])?);
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        keys.push(Key::simple(KeyCode::Char(ch)).normalized());
        rest = &rest[ch.len_utf8()..];
    }
    if keys.is_empty() {
        return None;
    }
    Some(keys)
}

/// Parses the inside of one `<...>` group, e.g. `C-W`, `S-Left`, `F5`.
pub fn parse_key(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut name = value.trim();
    while name.len() > 2 && name.as_bytes()[1] == b'-' {
        match name.as_bytes()[0].to_ascii_lowercase() {
            b'c' => modifiers |= KeyModifiers::CONTROL,
            b's' => modifiers |= KeyModifiers::SHIFT,
            b'a' | b'm' => modifiers |= KeyModifiers::ALT,
            b'd' => modifiers |= KeyModifiers::SUPER,
            _ => return None,
        }
        name = &name[2..];
    }
    let code = parse_key_code(name)?;
    Some(Key::new(code, modifiers).normalized())
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "lt" => KeyCode::Char('<'),
        "bar" => KeyCode::Char('|'),
        "bslash" => KeyCode::Char('\\'),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
