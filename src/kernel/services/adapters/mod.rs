//! Service adapters: OS specific implementations (paths, settings IO) and the
//! in-memory snapshot host.

pub mod config;
pub mod paths;
pub mod settings;
pub mod snapshot;

pub use config::ConfigService;
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_key,
    parse_key_sequence, write_default_settings, SettingsError,
};
pub use snapshot::{
    Focus, LayoutSnapshot, PanelRef, PanelSnapshot, SnapshotCaret, SnapshotWorkspace,
    SplitRef, SplitSnapshot,
};
