//! crates/cconsole/src/config.rs
//! Console configuration assembled from the environment and explicit overrides.

use std::ffi::OsString;

use console_sink::ColorChoice;

/// Environment variable naming the initial log level.
pub const LOG_LEVEL_ENV: &str = "CCONSOLE_LOG_LEVEL";

/// Environment variable that disables styling when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings used to build a [`LeveledConsole`](crate::LeveledConsole) and its terminal sink.
///
/// The level is kept as the raw name so that an invalid value reaches the
/// console constructor, which reports it instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    level: Option<String>,
    color: ColorChoice,
}

impl ConsoleConfig {
    /// Reads `CCONSOLE_LOG_LEVEL` and `NO_COLOR` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. A non-empty `NO_COLOR` forces
    /// [`ColorChoice::Never`].
    ///
    /// ```
    /// use cconsole::ConsoleConfig;
    /// use console_sink::ColorChoice;
    ///
    /// let config = ConsoleConfig::from_lookup(|key| match key {
    ///     "CCONSOLE_LOG_LEVEL" => Some("WARN".into()),
    ///     "NO_COLOR" => Some("1".into()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level(), Some("WARN"));
    /// assert_eq!(config.color(), ColorChoice::Never);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let level = non_empty(LOG_LEVEL_ENV).map(|value| value.to_string_lossy().into_owned());
        let color = if non_empty(NO_COLOR_ENV).is_some() {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };

        Self { level, color }
    }

    /// Overrides the level name.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Overrides the color choice.
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Applies the overrides that are present, leaving other settings as they are.
    #[must_use]
    pub fn merge(mut self, level: Option<String>, color: Option<ColorChoice>) -> Self {
        if level.is_some() {
            self.level = level;
        }
        if let Some(color) = color {
            self.color = color;
        }
        self
    }

    /// The configured level name, if any.
    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    /// The configured color choice.
    #[must_use]
    pub const fn color(&self) -> ColorChoice {
        self.color
    }
}
