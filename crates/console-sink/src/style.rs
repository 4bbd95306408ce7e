//! crates/console-sink/src/style.rs
//! Color hints and `%c` style directive rendering.

use std::fmt;
use std::str::FromStr;

use is_terminal::IsTerminal;

/// Display colors understood by style directives.
///
/// Values travel between the facade and its sink as CSS declarations such as
/// `color:green`; terminal sinks translate them into ANSI SGR escapes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// `black`
    Black,
    /// `red`
    Red,
    /// `green`
    Green,
    /// `yellow`
    Yellow,
    /// `blue`
    Blue,
    /// `magenta`
    Magenta,
    /// `cyan`
    Cyan,
    /// `white`
    White,
}

impl Color {
    /// Escape sequence that restores the terminal's default rendition.
    pub const RESET: &'static str = "\x1b[0m";

    /// Returns the CSS color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Returns the ANSI foreground escape for this color.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Returns the CSS declaration carried as a style argument, e.g. `color:green`.
    #[must_use]
    pub fn css(self) -> String {
        format!("color:{}", self.name())
    }

    /// Extracts the color from a CSS declaration list such as `color: red; font-weight: bold`.
    pub fn from_css(style: &str) -> Result<Self, ColorParseError> {
        style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .find(|(property, _)| property.trim().eq_ignore_ascii_case("color"))
            .ok_or_else(|| ColorParseError::MissingColor(style.to_owned()))
            .and_then(|(_, value)| value.trim().parse())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            _ => Err(ColorParseError::UnknownColor(name.to_owned())),
        }
    }
}

/// Errors produced while interpreting color names and style values.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    /// The value names no known color.
    #[error("unknown color \"{0}\"")]
    UnknownColor(String),
    /// The style value has no `color` declaration.
    #[error("style \"{0}\" does not declare a color")]
    MissingColor(String),
    /// The value is not `auto`, `always` or `never`.
    #[error("unknown color choice \"{0}\" (expected auto, always or never)")]
    UnknownChoice(String),
}

/// Whether a terminal sink renders style directives.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorChoice {
    /// Style when standard output is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always emit ANSI escapes.
    Always,
    /// Never emit ANSI escapes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against explicit terminal and `NO_COLOR` facts.
    #[must_use]
    pub const fn resolve(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && !no_color,
        }
    }

    /// Resolves the choice for the current process's standard output.
    #[must_use]
    pub fn should_style(self) -> bool {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        self.resolve(std::io::stdout().is_terminal(), no_color)
    }
}

impl FromStr for ColorChoice {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ColorParseError::UnknownChoice(value.to_owned())),
        }
    }
}

/// Renders console arguments as one line, honouring `%c` style directives.
///
/// The first argument is treated as a format string. Each `%c` in it consumes
/// the next argument as a CSS declaration. When styling is enabled and the
/// declaration names a known color, the directive becomes the color's ANSI
/// escape and a reset follows the format string; otherwise the directive and
/// its argument vanish. Remaining arguments are appended, separated by single
/// spaces.
///
/// ```
/// use console_sink::StyledArgs;
///
/// let args: [&dyn std::fmt::Display; 3] = [&"%c[INFO]", &"color:blue", &"ready"];
/// assert_eq!(StyledArgs::new(&args, false).to_string(), "[INFO] ready");
/// assert_eq!(
///     StyledArgs::new(&args, true).to_string(),
///     "\x1b[34m[INFO]\x1b[0m ready"
/// );
/// ```
pub struct StyledArgs<'a> {
    args: &'a [&'a dyn fmt::Display],
    styled: bool,
}

impl<'a> StyledArgs<'a> {
    /// Wraps `args` for rendering.
    #[must_use]
    pub const fn new(args: &'a [&'a dyn fmt::Display], styled: bool) -> Self {
        Self { args, styled }
    }
}

impl fmt::Display for StyledArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.args.split_first() else {
            return Ok(());
        };

        let head = first.to_string();
        let mut rest = rest.iter();
        let mut pieces = head.split("%c");
        if let Some(lead) = pieces.next() {
            f.write_str(lead)?;
        }

        let mut painted = false;
        for piece in pieces {
            let style = rest.next().map(ToString::to_string);
            if self.styled {
                if let Some(color) = style.as_deref().and_then(|css| Color::from_css(css).ok()) {
                    f.write_str(color.ansi_code())?;
                    painted = true;
                }
            }
            f.write_str(piece)?;
        }
        if painted {
            f.write_str(Color::RESET)?;
        }

        for arg in rest {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
