use super::settings::NavigationSettings;

/// Effective navigation options, passed explicitly into dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Docked panels join split panes in directional moves.
    pub extended: bool,
}

impl NavigationConfig {
    pub fn with_extended(extended: bool) -> Self {
        Self { extended }
    }

    pub fn from_settings(settings: &NavigationSettings) -> Self {
        Self {
            extended: settings.extended,
        }
    }
}
