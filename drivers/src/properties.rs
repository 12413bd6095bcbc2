use crate::configuration;

#[derive(Debug, serde::Serialize)]
pub struct Scanner<Configuration> {
    pub name: &'static str,

    /// Bed width in 600 dpi pixels.
    pub max_width: u16,

    /// Bed height in 600 dpi pixels.
    pub max_height: u16,

    pub resolutions: &'static [configuration::Resolution],
    pub default_configuration: Configuration,
}
