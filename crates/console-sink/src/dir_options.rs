//! crates/console-sink/src/dir_options.rs
//! Options accepted by object dumps.

/// Rendering hints accepted by [`ConsoleSink::dir`](crate::ConsoleSink::dir).
///
/// All fields are optional; sinks apply their own defaults for anything left
/// unset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DirOptions {
    /// Maximum nesting depth to expand.
    pub depth: Option<u32>,
    /// Whether the dump may use colors.
    pub colors: Option<bool>,
    /// Whether hidden members are included.
    pub show_hidden: Option<bool>,
}

impl DirOptions {
    /// Returns options limited to `depth` levels of nesting.
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Returns options with colors enabled or disabled.
    #[must_use]
    pub const fn with_colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Returns options that include or hide hidden members.
    #[must_use]
    pub const fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = Some(show_hidden);
        self
    }

    /// Reports whether a dump should span multiple lines.
    ///
    /// A depth of zero asks for the compact single-line form.
    #[must_use]
    pub const fn expanded(&self) -> bool {
        !matches!(self.depth, Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::DirOptions;

    #[test]
    fn default_options_expand() {
        assert!(DirOptions::default().expanded());
        assert!(DirOptions::default().with_depth(2).expanded());
    }

    #[test]
    fn zero_depth_is_compact() {
        assert!(!DirOptions::default().with_depth(0).expanded());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_console_style_keys() {
        let options: DirOptions =
            serde_json::from_str(r#"{"depth": 1, "showHidden": true}"#).expect("valid options");
        assert_eq!(
            options,
            DirOptions::default().with_depth(1).with_show_hidden(true)
        );
    }
}
