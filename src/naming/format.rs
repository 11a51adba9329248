//! Base-name patterns.
//!
//! Two dialects:
//! - date-pattern letters (`yyyyMMdd_HHmmss`), used when the pattern has no `%`;
//! - strftime (`%Y%m%d_%H%M%S`), used as soon as a `%` appears.
//!
//! Both are compiled once into a strftime string and validated against chrono's parser,
//! so rendering a validated format never fails.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::errors::ExifSortError;

/// Pattern used when neither CLI nor config supplies one.
pub const DEFAULT_NAME_FORMAT: &str = "yyyyMMdd_HHmmss";
const DEFAULT_STRFTIME: &str = "%Y%m%d_%H%M%S";

/// A validated timestamp-to-filename pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFormat {
    pattern: String,
    strftime: String,
}

impl Default for NameFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_NAME_FORMAT.to_string(),
            strftime: DEFAULT_STRFTIME.to_string(),
        }
    }
}

impl NameFormat {
    /// Compile and validate `pattern`.
    pub fn parse(pattern: &str) -> Result<Self, ExifSortError> {
        let invalid = |reason: String| ExifSortError::InvalidFormat {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.trim().is_empty() {
            return Err(invalid("pattern is empty".into()));
        }

        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            translate_letters(pattern).map_err(invalid)?
        };

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(invalid("unrecognized strftime specifier".into()));
        }

        let sample = Local
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .earliest()
            .unwrap_or_else(|| DateTime::<Local>::from(std::time::SystemTime::UNIX_EPOCH));
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&strftime))
            .map_err(|_| invalid("pattern cannot be rendered".into()))?;
        if rendered.is_empty() {
            return Err(invalid("pattern renders an empty name".into()));
        }
        if rendered.chars().any(std::path::is_separator) {
            return Err(invalid("pattern renders a path separator".into()));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            strftime,
        })
    }

    /// The pattern as supplied by the user.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled strftime equivalent.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Render the base filename for `time`.
    pub fn render(&self, time: &DateTime<Local>) -> String {
        time.format(&self.strftime).to_string()
    }
}

impl FromStr for NameFormat {
    type Err = ExifSortError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// strftime equivalent of a run of `count` identical pattern letters.
fn letter_specifier(letter: char, count: usize) -> Option<&'static str> {
    let conv = match letter {
        'y' => if count == 2 { "%y" } else { "%Y" },
        'Y' => if count == 2 { "%g" } else { "%G" },
        'M' | 'L' => match count {
            1 => "%-m",
            2 => "%m",
            3 => "%b",
            _ => "%B",
        },
        'd' => if count == 1 { "%-d" } else { "%d" },
        'D' => if count == 1 { "%-j" } else { "%j" },
        'E' => if count <= 3 { "%a" } else { "%A" },
        'u' => "%u",
        'w' => if count == 1 { "%-V" } else { "%V" },
        'a' => "%p",
        'H' => if count == 1 { "%-H" } else { "%H" },
        'h' => if count == 1 { "%-I" } else { "%I" },
        'm' => if count == 1 { "%-M" } else { "%M" },
        's' => if count == 1 { "%-S" } else { "%S" },
        'S' => "%3f",
        'z' => "%Z",
        'Z' => "%z",
        'X' => "%:z",
        _ => return None,
    };
    Some(conv)
}

/// Compile a date-pattern-letter format into strftime.
fn translate_letters(pattern: &str) -> Result<String, String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }
            let mut j = i + 1;
            loop {
                match chars.get(j) {
                    None => return Err("unterminated quote".into()),
                    Some('\'') if chars.get(j + 1) == Some(&'\'') => {
                        out.push('\'');
                        j += 2;
                    }
                    Some('\'') => break,
                    Some(&lit) => {
                        push_literal(&mut out, lit);
                        j += 1;
                    }
                }
            }
            i = j + 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut count = 1;
            while chars.get(i + count) == Some(&c) {
                count += 1;
            }
            let conv = letter_specifier(c, count)
                .ok_or_else(|| format!("illegal pattern character '{c}'"))?;
            out.push_str(conv);
            i += count;
            continue;
        }

        push_literal(&mut out, c);
        i += 1;
    }

    Ok(out)
}
