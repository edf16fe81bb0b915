//! printf-style message formatting.
//!
//! Follows the conventions of general purpose printf-family formatters found in
//! dynamic runtimes: `%s`, `%d`, `%i`, `%f`, `%j`, `%o`, `%O`, `%c` and `%%`.
//! Specifiers without a matching argument are left in place, unknown specifiers
//! are emitted verbatim and unused arguments are appended separated by spaces.

use alloc::{
    format,
    string::{String, ToString as _},
    vec::Vec,
};

use crate::Arg;

const DEFAULT_DEPTH: usize = 2;
const EXTENDED_DEPTH: usize = 4;

/// Substitutes `args` into `template` in order.
#[must_use]
pub fn format(template: &str, args: &[Arg]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut args_iter = args.iter();
    let mut last = 0;
    let mut idx = 0;

    while idx + 1 < bytes.len() {
        if bytes[idx] != b'%' {
            idx += 1;
            continue;
        }

        let spec = bytes[idx + 1];
        if spec == b'%' {
            out.push_str(&template[last..=idx]);
            idx += 2;
            last = idx;
            continue;
        }

        if let Some(piece) = args_iter.as_slice().first().and_then(|arg| convert(spec, arg)) {
            args_iter.next();
            out.push_str(&template[last..idx]);
            out.push_str(&piece);
            last = idx + 2;
        }
        idx += 2;
    }
    out.push_str(&template[last..]);

    for arg in args_iter {
        out.push(' ');
        match arg.as_str() {
            Some(value) => out.push_str(value),
            None => out.push_str(&inspect(arg, Inspect::depth(DEFAULT_DEPTH))),
        }
    }

    out
}

fn convert(spec: u8, arg: &Arg) -> Option<String> {
    let piece = match spec {
        b's' => arg.to_string(),
        b'd' => match arg {
            Arg::Int(value) => value.to_string(),
            arg => format_number(to_number(arg)),
        },
        b'i' => format_number(parse_int(&to_js_string(arg))),
        b'f' => format_number(parse_float(&to_js_string(arg))),
        b'j' => to_json(arg),
        b'o' => inspect(arg, Inspect::extended()),
        b'O' => inspect(arg, Inspect::depth(DEFAULT_DEPTH)),
        b'c' => String::new(),
        _ => return None,
    };
    Some(piece)
}

/// Renders a number the way dynamic runtimes print it: no trailing `.0`,
/// `NaN`/`Infinity` spelled out, exponent notation for very large or small values.
#[must_use]
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        return "-0".into();
    }
    to_number_string(value)
}

fn to_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if value == 0.0 {
        return "0".into();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

fn to_js_string(arg: &Arg) -> String {
    match arg {
        Arg::Float(value) => to_number_string(*value),
        Arg::Json(serde_json::Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                serde_json::Value::Null => String::new(),
                value => to_js_string(&Arg::Json(value.clone())),
            })
            .collect::<Vec<_>>()
            .join(","),
        Arg::Json(serde_json::Value::Object(_)) => "[object Object]".into(),
        arg => arg.to_string(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_number(arg: &Arg) -> f64 {
    match arg {
        Arg::Str(value) => string_to_number(value),
        Arg::Int(value) => *value as f64,
        Arg::Float(value) => *value,
        Arg::Bool(value) => f64::from(u8::from(*value)),
        Arg::Null => 0.0,
        Arg::Json(value) => match value {
            serde_json::Value::Null => 0.0,
            serde_json::Value::Bool(value) => f64::from(u8::from(*value)),
            serde_json::Value::Number(value) => value.as_f64().unwrap_or(f64::NAN),
            serde_json::Value::String(value) => string_to_number(value),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => string_to_number(&to_js_string(arg)),
        },
    }
}

fn string_to_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = match value.as_bytes()[0] {
        b'-' => (-1.0, &value[1..]),
        b'+' => (1.0, &value[1..]),
        _ => (1.0, value),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = value.strip_prefix(prefix) {
            if digits.len() != count_radix_digits(digits, radix) {
                return f64::NAN;
            }
            return parse_radix(digits, radix).unwrap_or(f64::NAN);
        }
    }

    let valid = unsigned
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !valid {
        return f64::NAN;
    }
    value.parse().unwrap_or(f64::NAN)
}

fn count_radix_digits(value: &str, radix: u32) -> usize {
    value.chars().take_while(|ch| ch.is_digit(radix)).count()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    let len = count_radix_digits(digits, radix);
    if len == 0 {
        return None;
    }
    Some(
        digits[..len]
            .chars()
            .filter_map(|ch| ch.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit)),
    )
}

fn parse_int(value: &str) -> f64 {
    let value = value.trim_start();
    let (sign, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };

    let parsed = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(digits) => parse_radix(digits, 16),
        None => parse_radix(unsigned, 10),
    };
    parsed.map_or(f64::NAN, |parsed| sign * parsed)
}

fn parse_float(value: &str) -> f64 {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    if value[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    value[..end].trim_end_matches('.').parse().unwrap_or(f64::NAN)
}

fn to_json(arg: &Arg) -> String {
    match arg {
        Arg::Str(value) => serde_json::Value::String(value.clone()).to_string(),
        Arg::Int(value) => value.to_string(),
        Arg::Float(value) if !value.is_finite() => "null".into(),
        Arg::Float(value) => to_number_string(*value),
        Arg::Bool(value) => value.to_string(),
        Arg::Null => "null".into(),
        Arg::Json(value) => value.to_string(),
    }
}

/// How deep nested values are printed and whether array lengths are shown
#[derive(Clone, Copy)]
pub(crate) struct Inspect {
    depth: usize,
    show_hidden: bool,
}

impl Inspect {
    pub(crate) const fn depth(depth: usize) -> Self {
        Self { depth, show_hidden: false }
    }

    /// `%o` prints hidden properties too, for JSON values this is the `[length]` of arrays
    const fn extended() -> Self {
        Self {
            depth: EXTENDED_DEPTH,
            show_hidden: true,
        }
    }
}

/// Debug representation of an argument, as printed by `%o`, `%O` and for
/// trailing non-string arguments.
#[must_use]
pub(crate) fn inspect(arg: &Arg, options: Inspect) -> String {
    match arg {
        Arg::Str(value) => quote(value),
        Arg::Json(value) => inspect_json_at(value, 0, options),
        arg => arg.to_string(),
    }
}

#[must_use]
pub(crate) fn inspect_json(value: &serde_json::Value, depth: usize) -> String {
    inspect_json_at(value, 0, Inspect::depth(depth))
}

fn inspect_json_at(value: &serde_json::Value, level: usize, options: Inspect) -> String {
    match value {
        serde_json::Value::Null => "null".into(),
        serde_json::Value::Bool(value) => value.to_string(),
        serde_json::Value::Number(value) => {
            if value.is_f64() {
                format_number(value.as_f64().unwrap_or(f64::NAN))
            } else {
                value.to_string()
            }
        }
        serde_json::Value::String(value) => quote(value),
        serde_json::Value::Array(values) if values.is_empty() && options.show_hidden => "[ [length]: 0 ]".into(),
        serde_json::Value::Array(values) if values.is_empty() => "[]".into(),
        serde_json::Value::Array(_) if level > options.depth => "[Array]".into(),
        serde_json::Value::Array(values) => {
            let mut items: Vec<_> = values
                .iter()
                .map(|value| inspect_json_at(value, level + 1, options))
                .collect();
            if options.show_hidden {
                items.push(format!("[length]: {}", values.len()));
            }
            format!("[ {} ]", items.join(", "))
        }
        serde_json::Value::Object(map) if map.is_empty() => "{}".into(),
        serde_json::Value::Object(_) if level > options.depth => "[Object]".into(),
        serde_json::Value::Object(map) => {
            let items: Vec<_> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", object_key(key), inspect_json_at(value, level + 1, options)))
                .collect();
            format!("{{ {} }}", items.join(", "))
        }
    }
}

fn object_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if is_ident {
        key.into()
    } else {
        quote(key)
    }
}

fn quote(value: &str) -> String {
    let quote = if !value.contains('\'') {
        '\''
    } else if !value.contains('"') {
        '"'
    } else if !value.contains('`') && !value.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            ch if ch == quote => {
                out.push('\\');
                out.push(ch);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 || ch as u32 == 0x7f => out.push_str(&format!("\\x{:02X}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out.push(quote);
    out
}
