use num_traits::ToPrimitive;

/// The slice of script values the media list bindings exchange with callers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Number(i64),
    Float(f64),
    Null,
    Undefined,
}

impl Value {
    pub fn as_string(&self) -> String {
        match self {
            Self::String(v) => v.clone(),
            Self::Bool(v) => {
                if *v {
                    "true".into()
                } else {
                    "false".into()
                }
            }
            Self::Number(v) => v.to_string(),
            Self::Float(v) => format_float(*v),
            Self::Null => "null".into(),
            Self::Undefined => "undefined".into(),
        }
    }

    fn numeric_value(&self) -> f64 {
        match self {
            Self::Number(v) => *v as f64,
            Self::Float(v) => *v,
            Self::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
            Self::String(v) => parse_js_number_from_string(v),
        }
    }

    /// ECMAScript `ToInt32`: NaN and infinities become 0, everything else wraps mod 2^32.
    pub fn to_int32(&self) -> i32 {
        let numeric = self.numeric_value();
        if !numeric.is_finite() {
            return 0;
        }
        let unsigned = numeric.trunc().rem_euclid(4_294_967_296.0);
        unsigned.to_u32().map_or(0, |bits| bits as i32)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::String)
    }
}

/// `ToNumber` for strings: decimal literals, `Infinity`, and unsigned `0x`/`0o`/`0b` forms.
pub(crate) fn parse_js_number_from_string(src: &str) -> f64 {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if trimmed == "Infinity" || trimmed == "+Infinity" {
        return f64::INFINITY;
    }
    if trimmed == "-Infinity" {
        return f64::NEG_INFINITY;
    }

    if let Some(rest) = trimmed.strip_prefix('+').or_else(|| trimmed.strip_prefix('-')) {
        if radix_of_prefix(rest).is_some() {
            return f64::NAN;
        }
    }
    if let Some(radix) = radix_of_prefix(trimmed) {
        return parse_prefixed_radix_to_f64(&trimmed[2..], radix);
    }

    // Rust also accepts `inf`, `nan` and `infinity`; script numbers do not.
    if trimmed
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_of_prefix(src: &str) -> Option<u32> {
    match src.get(..2)? {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_prefixed_radix_to_f64(src: &str, radix: u32) -> f64 {
    if src.is_empty() {
        return f64::NAN;
    }
    let mut out = 0.0f64;
    for ch in src.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        out = out * (radix as f64) + (digit as f64);
    }
    out
}

/// `Number.prototype.toString()` for finite and non-finite values.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        };
    }
    if value == 0.0 {
        return "0".into();
    }

    // `{:e}` yields the shortest round-trip digits; only the exponent layout differs from JS.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent = exponent.parse::<i32>().unwrap_or(0);
    if (-6..21).contains(&exponent) {
        return format!("{value}");
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{}", exponent.abs())
}

/// The type hint a script context passes when it forces an object to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveHint {
    Default,
    String,
    Number,
}

/// A host object reachable from script.
pub trait ScriptObject {
    fn class_name(&self) -> &'static str;

    /// Object-to-primitive conversion. Host objects without `valueOf`
    /// overrides land on `toString`, whatever the hint.
    fn default_value(&self, _hint: PrimitiveHint) -> String {
        generic_default_value(self.class_name())
    }
}

pub fn generic_default_value(class_name: &str) -> String {
    format!("[object {class_name}]")
}
