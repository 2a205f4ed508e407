//! Template formatting against document records
//!
//! Templates interpolate record fields with `{doc[key]}` (or `{doc.key}`).
//! `{{` and `}}` produce literal braces. Referencing a field the record does
//! not have is an error, as is any malformed replacement field.
//!
//! A field may carry the `!s` conversion and a text format spec of the form
//! `[[fill]align][0][width][.precision][s]`:
//!
//! - `align` is one of `<`, `>` or `^`; text aligns left and numbers right
//!   unless told otherwise
//! - `width` pads to at least that many characters
//! - `.precision` truncates to that many characters and is only accepted for
//!   text, so `{doc[year]!s:.2}` works where `{doc[year]:.2}` does not
//!
//! Other conversions, signs, grouping and presentation types are rejected.

use serde_yaml::Value;

use crate::document::Document;
use crate::error::{BibnotesError, Result};

/// Name templates use to refer to the record
const DOC_NAME: &str = "doc";

/// Render `template` against `doc`
pub fn format(template: &str, doc: &Document) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut expr = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => {
                            return Err(BibnotesError::format(
                                template,
                                "nested replacement fields are not supported",
                            ))
                        }
                        _ => expr.push(c),
                    }
                }
                if !closed {
                    return Err(BibnotesError::format(
                        template,
                        "unterminated replacement field",
                    ));
                }
                let rendered =
                    render_field(&expr, doc).map_err(|reason| BibnotesError::format(template, reason))?;
                out.push_str(&rendered);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => {
                return Err(BibnotesError::format(
                    template,
                    "single '}' encountered",
                ))
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Render a single `doc[key]` / `doc.key` expression
fn render_field(expr: &str, doc: &Document) -> std::result::Result<String, String> {
    let field = parse_field(expr)?;
    let value = doc
        .get(field.key)
        .ok_or_else(|| format!("document has no field '{}'", field.key))?;
    let text = value_to_string(&value)
        .ok_or_else(|| format!("field '{}' cannot be rendered as text", field.key))?;

    let numeric = !field.as_str && matches!(value, Value::Number(_));
    FormatSpec::parse(field.spec)?.apply(&text, numeric)
}

/// A parsed replacement field
struct Field<'a> {
    key: &'a str,
    /// `!s` was given
    as_str: bool,
    spec: &'a str,
}

fn parse_field(expr: &str) -> std::result::Result<Field<'_>, String> {
    let rest = expr
        .strip_prefix(DOC_NAME)
        .ok_or_else(|| format!("unknown name in replacement field '{{{}}}'", expr))?;

    let (key, trailing) = if let Some(inner) = rest.strip_prefix('[') {
        let end = inner
            .find(']')
            .ok_or_else(|| format!("missing ']' in replacement field '{{{}}}'", expr))?;
        (&inner[..end], &inner[end + 1..])
    } else if let Some(inner) = rest.strip_prefix('.') {
        let end = inner.find(['!', ':']).unwrap_or(inner.len());
        (&inner[..end], &inner[end..])
    } else {
        return Err(format!(
            "unknown name in replacement field '{{{}}}'",
            expr
        ));
    };

    if key.is_empty() {
        return Err(format!("empty field name in '{{{}}}'", expr));
    }

    let (as_str, spec) = match trailing.strip_prefix('!') {
        Some(conversion) => {
            let end = conversion.find(':').unwrap_or(conversion.len());
            let (name, spec) = conversion.split_at(end);
            if name != "s" {
                return Err(format!("unsupported conversion '!{}'", name));
            }
            (true, spec)
        }
        None => (false, trailing),
    };

    let spec = match spec.strip_prefix(':') {
        Some(spec) => spec,
        None if spec.is_empty() => spec,
        None => {
            return Err(format!(
                "unexpected '{}' in replacement field '{{{}}}'",
                spec, expr
            ))
        }
    };

    Ok(Field { key, as_str, spec })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

/// Text format spec: `[[fill]align][0][width][.precision][s]`
#[derive(Debug, Default, PartialEq, Eq)]
struct FormatSpec {
    fill: Option<char>,
    align: Option<Align>,
    width: usize,
    precision: Option<usize>,
}

impl FormatSpec {
    fn parse(spec: &str) -> std::result::Result<Self, String> {
        let unsupported = || format!("unsupported format spec '{}'", spec);
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = FormatSpec::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            parsed.fill = Some(chars[0]);
            parsed.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            parsed.align = Some(align);
            i = 1;
        }

        if chars.get(i) == Some(&'0') && parsed.fill.is_none() {
            parsed.fill = Some('0');
        }

        let digits = |from: usize| {
            chars[from..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count()
        };

        let width_len = digits(i);
        if width_len > 0 {
            let width: String = chars[i..i + width_len].iter().collect();
            parsed.width = width.parse().map_err(|_| unsupported())?;
            i += width_len;
        }

        if chars.get(i) == Some(&'.') {
            let precision_len = digits(i + 1);
            if precision_len == 0 {
                return Err(unsupported());
            }
            let precision: String = chars[i + 1..i + 1 + precision_len].iter().collect();
            parsed.precision = Some(precision.parse().map_err(|_| unsupported())?);
            i += 1 + precision_len;
        }

        if chars.get(i) == Some(&'s') {
            i += 1;
        }

        if i != chars.len() {
            return Err(unsupported());
        }
        Ok(parsed)
    }

    fn apply(&self, text: &str, numeric: bool) -> std::result::Result<String, String> {
        let mut out: String = match self.precision {
            Some(_) if numeric => {
                return Err("precision is not allowed for numbers; use '!s' first".to_string())
            }
            Some(precision) => text.chars().take(precision).collect(),
            None => text.to_string(),
        };

        let len = out.chars().count();
        if len >= self.width {
            return Ok(out);
        }

        let pad = self.width - len;
        let fill = self.fill.unwrap_or(' ');
        let align = self
            .align
            .unwrap_or(if numeric { Align::Right } else { Align::Left });
        let (before, after) = match align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };

        let fill = fill.to_string();
        out = format!("{}{}{}", fill.repeat(before), out, fill.repeat(after));
        Ok(out)
    }
}

/// Plain-text rendering of a YAML value; `None` for mappings
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(", ")),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        Value::Mapping(_) => None,
    }
}
