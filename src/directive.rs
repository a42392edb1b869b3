//! printf-compatible rendering of a single canonical value.
//!
//! A [`Directive`] is the Rust form of one `%...` conversion: flags, width and
//! precision from the marker, the size modifier and conversion code from the
//! registry. Rendering follows C99/glibc output for the supported codes.
//! Widths and string precisions count bytes, as printf does; a string is
//! only ever cut on a `char` boundary.

use std::fmt::{self, Write};

use crate::conversion::{Canonical, ConversionTraits, Length};

/// printf flag characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `-`
    pub left: bool,
    /// `+`
    pub plus: bool,
    /// ` `
    pub space: bool,
    /// `#`
    pub alternate: bool,
    /// `0`
    pub zero: bool,
}

/// Largest width or precision a marker may carry.
pub const MAX_FIELD: usize = 0x7fff;

/// Flags, width and precision carried by a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spec {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl Spec {
    /// Parses `[-+ #0]* width? ('.' precision?)?`. An empty precision means 0,
    /// as in printf. Widths and precisions above [`MAX_FIELD`] are rejected.
    pub fn parse(s: &str) -> Option<Spec> {
        let mut spec = Spec::default();
        let mut rest = s;

        while let Some(c) = rest.chars().next() {
            match c {
                '-' => spec.flags.left = true,
                '+' => spec.flags.plus = true,
                ' ' => spec.flags.space = true,
                '#' => spec.flags.alternate = true,
                '0' => spec.flags.zero = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, tail) = split_digits(rest);
        if !width.is_empty() {
            spec.width = Some(parse_field(width)?);
        }
        rest = tail;

        if let Some(tail) = rest.strip_prefix('.') {
            let (precision, tail) = split_digits(tail);
            spec.precision = Some(if precision.is_empty() {
                0
            } else {
                parse_field(precision)?
            });
            rest = tail;
        }

        rest.is_empty().then_some(spec)
    }
}

fn parse_field(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|value| *value <= MAX_FIELD)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// One complete conversion directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub spec: Spec,
    pub length: Length,
    pub code: char,
}

impl Directive {
    pub const fn new(length: Length, code: char) -> Self {
        Self {
            spec: Spec {
                flags: Flags {
                    left: false,
                    plus: false,
                    space: false,
                    alternate: false,
                    zero: false,
                },
                width: None,
                precision: None,
            },
            length,
            code,
        }
    }

    /// The directive the registry assigns to `T`.
    pub const fn of<T: ConversionTraits + ?Sized>() -> Self {
        Self::new(T::SIZE_SPEC, T::FMT_SPEC)
    }

    pub const fn with_spec(self, spec: Spec) -> Self {
        Self { spec, ..self }
    }

    /// Appends the rendering of `value` to `out`.
    pub fn render(&self, value: Canonical<'_>, out: &mut String) {
        let code = match (value, self.code) {
            (Canonical::Str(_), _) => 's',
            (_, 's') => natural_code(value),
            (_, code) => code,
        };

        match code {
            'd' | 'i' => self.render_signed(value, out),
            'u' | 'x' | 'X' | 'o' => self.render_unsigned(value, code, out),
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => self.render_float(value, code, out),
            'p' => self.render_pointer(value, out),
            's' => self.render_str(value, out),
            _ => self.render_unsigned(value, 'u', out),
        }
    }

    fn truncated_bits(&self, value: Canonical<'_>) -> u64 {
        let bits = raw_bits(value);
        match self.length.bits() {
            64 => bits,
            width => bits & ((1u64 << width) - 1),
        }
    }

    fn render_signed(&self, value: Canonical<'_>, out: &mut String) {
        let shift = 64 - self.length.bits();
        let signed = ((self.truncated_bits(value) << shift) as i64) >> shift;
        let sign = if signed < 0 {
            "-"
        } else {
            self.positive_sign()
        };
        let digits = self.integer_precision(signed.unsigned_abs().to_string());
        self.pad(out, sign, &digits, self.spec.precision.is_none());
    }

    fn render_unsigned(&self, value: Canonical<'_>, code: char, out: &mut String) {
        let bits = self.truncated_bits(value);
        let mut digits = self.integer_precision(match code {
            'x' => format!("{bits:x}"),
            'X' => format!("{bits:X}"),
            'o' => format!("{bits:o}"),
            _ => bits.to_string(),
        });
        let mut prefix = "";
        if self.spec.flags.alternate {
            match code {
                'x' if bits != 0 => prefix = "0x",
                'X' if bits != 0 => prefix = "0X",
                'o' if !digits.starts_with('0') => digits.insert(0, '0'),
                _ => {}
            }
        }
        self.pad(out, prefix, &digits, self.spec.precision.is_none());
    }

    fn render_float(&self, value: Canonical<'_>, code: char, out: &mut String) {
        let v = match value {
            Canonical::Float(v) => v,
            Canonical::Signed(v) => v as f64,
            Canonical::Unsigned(v) => v as f64,
            Canonical::Address(v) => v as f64,
            Canonical::Str(_) => 0.0,
        };
        let upper = code.is_ascii_uppercase();
        let sign = if v.is_sign_negative() && !v.is_nan() {
            "-"
        } else {
            self.positive_sign()
        };

        if !v.is_finite() {
            let body = match (v.is_nan(), upper) {
                (true, false) => "nan",
                (true, true) => "NAN",
                (false, false) => "inf",
                (false, true) => "INF",
            };
            self.pad(out, sign, body, false);
            return;
        }

        let magnitude = v.abs();
        let precision = self.spec.precision.unwrap_or(6);
        let alternate = self.spec.flags.alternate;
        let body = match code.to_ascii_lowercase() {
            'e' => exponential(magnitude, precision, upper, alternate),
            'g' => general(magnitude, precision, upper, alternate),
            _ => {
                let mut body = format!("{magnitude:.precision$}");
                if alternate && precision == 0 {
                    body.push('.');
                }
                body
            }
        };
        self.pad(out, sign, &body, true);
    }

    fn render_pointer(&self, value: Canonical<'_>, out: &mut String) {
        match raw_bits(value) {
            0 => self.pad(out, "", "(nil)", false),
            address => self.pad(out, "0x", &format!("{address:x}"), false),
        }
    }

    fn render_str(&self, value: Canonical<'_>, out: &mut String) {
        let text = match value {
            Canonical::Str(s) => s,
            _ => "",
        };
        match self.spec.precision {
            Some(max) => {
                let mut end = max.min(text.len());
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                self.pad(out, "", &text[..end], false);
            }
            None => self.pad(out, "", text, false),
        }
    }

    fn positive_sign(&self) -> &'static str {
        if self.spec.flags.plus {
            "+"
        } else if self.spec.flags.space {
            " "
        } else {
            ""
        }
    }

    // Integer precision is a minimum digit count; `.0` renders zero as nothing.
    fn integer_precision(&self, digits: String) -> String {
        match self.spec.precision {
            Some(0) if digits == "0" => String::new(),
            Some(min) if digits.len() < min => {
                let mut padded = "0".repeat(min - digits.len());
                padded.push_str(&digits);
                padded
            }
            _ => digits,
        }
    }

    fn pad(&self, out: &mut String, prefix: &str, body: &str, zero_allowed: bool) {
        let len = prefix.len() + body.len();
        let fill = self.spec.width.unwrap_or(0).saturating_sub(len);
        if fill == 0 {
            out.push_str(prefix);
            out.push_str(body);
        } else if self.spec.flags.left {
            out.push_str(prefix);
            out.push_str(body);
            out.extend(std::iter::repeat(' ').take(fill));
        } else if self.spec.flags.zero && zero_allowed {
            out.push_str(prefix);
            out.extend(std::iter::repeat('0').take(fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat(' ').take(fill));
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = self.spec.flags;
        f.write_char('%')?;
        for (set, c) in [
            (flags.left, '-'),
            (flags.plus, '+'),
            (flags.space, ' '),
            (flags.alternate, '#'),
            (flags.zero, '0'),
        ] {
            if set {
                f.write_char(c)?;
            }
        }
        if let Some(width) = self.spec.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.spec.precision {
            write!(f, ".{precision}")?;
        }
        write!(f, "{}{}", self.length.as_str(), self.code)
    }
}

fn raw_bits(value: Canonical<'_>) -> u64 {
    match value {
        Canonical::Signed(v) => v as u64,
        Canonical::Unsigned(v) => v,
        Canonical::Float(v) => v as i64 as u64,
        Canonical::Address(v) => v as u64,
        Canonical::Str(_) => 0,
    }
}

fn natural_code(value: Canonical<'_>) -> char {
    match value {
        Canonical::Signed(_) => 'd',
        Canonical::Unsigned(_) => 'u',
        Canonical::Float(_) => 'f',
        Canonical::Address(_) => 'p',
        Canonical::Str(_) => 's',
    }
}

/// `%e` body for a non-negative finite value: exponent signed, at least two digits.
fn exponential(magnitude: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let rust = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = rust.split_once('e').unwrap_or((rust.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut body = String::with_capacity(mantissa.len() + 5);
    body.push_str(mantissa);
    if alternate && precision == 0 {
        body.push('.');
    }
    body.push(if upper { 'E' } else { 'e' });
    body.push(if exponent < 0 { '-' } else { '+' });
    let _ = write!(body, "{:02}", exponent.unsigned_abs());
    body
}

/// `%g` body: `%e` or `%f` depending on the decimal exponent, trailing zeros
/// removed unless `#` is set.
fn general(magnitude: f64, precision: usize, upper: bool, alternate: bool) -> String {
    let precision = precision.max(1);
    let exponent = if magnitude == 0.0 {
        0
    } else {
        let probe = format!("{:.*e}", precision - 1, magnitude);
        probe
            .split_once('e')
            .and_then(|(_, exp)| exp.parse::<i64>().ok())
            .unwrap_or(0)
    };

    let body = if exponent >= -4 && exponent < precision as i64 {
        let decimals = (precision as i64 - 1 - exponent) as usize;
        format!("{magnitude:.decimals$}")
    } else {
        exponential(magnitude, precision - 1, upper, false)
    };

    if alternate {
        return body;
    }
    strip_trailing_zeros(body)
}

fn strip_trailing_zeros(body: String) -> String {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    if !mantissa.contains('.') {
        return body;
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exponent}")
}
