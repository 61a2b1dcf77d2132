//! Unicode date pattern translation
//!
//! Screens describe date formats with Unicode (LDML) patterns such as
//! `"dd MMMM yyyy, EE"`. chrono renders strftime specifiers, so patterns are
//! translated field by field. Quoted text (`'at'`) and `''` are literals.
//! Letters without a mapping are copied through unchanged.

/// Translate a Unicode date pattern into a chrono strftime string
///
/// The output only contains specifiers chrono understands, and a literal `%`
/// is escaped, so rendering it never fails.
///
/// ```rust
/// use app_core::pattern::to_strftime;
///
/// assert_eq!(to_strftime("dd MMMM yyyy, EE"), "%d %B %Y, %a");
/// assert_eq!(to_strftime("h:mm a"), "%-I:%M %p");
/// ```
pub fn to_strftime(pattern: &str) -> String {
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
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        out.push('\'');
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.get(i + width) == Some(&c) {
                width += 1;
            }
            match field(c, width) {
                Some(spec) => out.push_str(spec),
                None => {
                    tracing::debug!("Unsupported date pattern field '{}' x{}", c, width);
                    for _ in 0..width {
                        out.push(c);
                    }
                }
            }
            i += width;
            continue;
        }

        push_literal(&mut out, c);
        i += 1;
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// strftime specifier for a pattern letter repeated `width` times
fn field(letter: char, width: usize) -> Option<&'static str> {
    let spec = match (letter, width) {
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('a', _) => "%p",
        _ => return None,
    };
    Some(spec)
}
