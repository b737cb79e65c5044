//! Process-wide defaults for generator, style, and random mode.

use crate::{GeneratorKind, RandomMode, Style};
use std::sync::RwLock;

/// The crate's mutable global settings.
///
/// Defaults: hex-short style, the ascending generator, auto random mode.
/// The random mode is consulted once, when the shared generator is first
/// built; changing it later does not rebuild the generator.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Style used by [`crate::Uuid::format_default`].
    pub default_style: Style,
    /// Generator used by [`crate::new_uuid`].
    pub default_generator: GeneratorKind,
    /// Random source mode for the shared generator.
    pub random_mode: RandomMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: Style::default(),
            default_generator: GeneratorKind::Ascending,
            random_mode: RandomMode::Auto,
        }
    }
}

static CONFIG: RwLock<Config> = RwLock::new(Config {
    default_style: Style {
        format: crate::Format::HexShort,
        uppercase: false,
    },
    default_generator: GeneratorKind::Ascending,
    random_mode: RandomMode::Auto,
});

/// Returns a snapshot of the current settings.
pub fn get() -> Config {
    *CONFIG.read().expect("uuid4asc: could not lock config")
}

/// Replaces the settings wholesale.
pub fn set(config: Config) {
    *CONFIG.write().expect("uuid4asc: could not lock config") = config;
}

/// Sets the default rendering style.
pub fn set_default_style(style: Style) {
    CONFIG
        .write()
        .expect("uuid4asc: could not lock config")
        .default_style = style;
}

/// Sets the default generator kind.
pub fn set_default_generator(kind: GeneratorKind) {
    CONFIG
        .write()
        .expect("uuid4asc: could not lock config")
        .default_generator = kind;
}

/// Sets the random mode used when the shared generator is first built.
pub fn set_random_mode(mode: RandomMode) {
    CONFIG
        .write()
        .expect("uuid4asc: could not lock config")
        .random_mode = mode;
}
