//! crates/cconsole/src/decorate.rs
//! Tags and style directives placed in front of forwarded messages.

use std::fmt;

use crate::levels::LogLevel;

/// Plain tag that leads every `log` call. It carries no style directive.
pub const LOG_TAG: &str = "[LOG]";

/// Lead-in of the message emitted when an assertion fails.
pub const ASSERTION_FAILED: &str = "Assertion failed";

/// Returns the `%c`-prefixed tag that opens a decorated message at `level`.
///
/// ```
/// use cconsole::{LogLevel, style_directive};
///
/// assert_eq!(style_directive(LogLevel::Warn), "%c[WARN]");
/// ```
#[must_use]
pub const fn style_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "%c[DEBUG]",
        LogLevel::Info => "%c[INFO]",
        LogLevel::Warn => "%c[WARN]",
        LogLevel::Error => "%c[ERROR]",
    }
}

/// Returns the CSS color value consumed by the directive's `%c`.
///
/// ```
/// use cconsole::{LogLevel, color_value};
///
/// assert_eq!(color_value(LogLevel::Debug), "color:green");
/// ```
#[must_use]
pub const fn color_value(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "color:green",
        LogLevel::Info => "color:blue",
        LogLevel::Warn => "color:yellow",
        LogLevel::Error => "color:red",
    }
}

/// Builds the forwarded argument list: `head` followed by `args`.
pub(crate) fn prepend<'a>(
    head: &[&'a dyn fmt::Display],
    args: &[&'a dyn fmt::Display],
) -> Vec<&'a dyn fmt::Display> {
    let mut line = Vec::with_capacity(head.len() + args.len());
    line.extend_from_slice(head);
    line.extend_from_slice(args);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_embed_level_tags() {
        for level in LogLevel::ALL {
            let directive = style_directive(level);
            assert!(directive.starts_with("%c"));
            assert_eq!(&directive[2..], level.tag());
        }
    }

    #[test]
    fn color_values_match_level_colors() {
        for level in LogLevel::ALL {
            assert_eq!(color_value(level), level.color().css());
        }
    }

    #[test]
    fn prepend_keeps_argument_order() {
        let rendered: Vec<String> = prepend(&[&"a", &"b"], &[&1, &"c"])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["a", "b", "1", "c"]);
    }
}
