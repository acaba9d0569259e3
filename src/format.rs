//! Bounded text formatting
//!
//! Every formatted string the widgets draw goes through a `FormatBuffer`. The
//! buffer grows on demand up to a fixed capacity and refuses anything longer
//! with `FormatOverflow`; nothing is ever written past the limit.
//!
//! Counter readouts use a printf-style spec chosen at runtime (`"%d"`,
//! `"%.2f"`, `"x=%+05d px"`), parsed by [`FormatSpec`]. Conversions follow C:
//! `%u`, `%x` and `%X` print the 64-bit two's complement of negative values
//! and ignore the `+` and space flags, and an integer conversion with a
//! precision ignores the `0` flag.

use crate::error::{Result, UiError};
use std::fmt::{self, Write};

/// Default limit, in bytes, for one formatted string.
pub const DEFAULT_FORMAT_CAPACITY: usize = 1024;

/// Reusable, capacity-checked string builder
#[derive(Debug)]
pub struct FormatBuffer {
    buf: String,
    capacity: usize,
}

impl FormatBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
        }
    }

    /// Format `args`, replacing the previous contents.
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<&str> {
        self.buf.clear();
        let mut writer = BoundedWriter {
            buf: &mut self.buf,
            capacity: self.capacity,
            needed: 0,
        };
        // BoundedWriter never fails; only a Display impl can
        if writer.write_fmt(args).is_err() {
            self.buf.clear();
            return Err(UiError::InvalidFormat {
                spec: String::new(),
                reason: "a formatting trait implementation returned an error",
            });
        }
        let needed = writer.needed;
        if needed > self.capacity {
            self.buf.clear();
            return Err(UiError::FormatOverflow {
                needed,
                capacity: self.capacity,
            });
        }
        Ok(&self.buf)
    }

    /// Render a single value through a printf-style spec.
    pub fn format_value(&mut self, spec: &FormatSpec, arg: FormatArg) -> Result<&str> {
        // width and precision are lower bounds on the rendered length
        let least = spec.prefix.len()
            + spec.width.max(spec.precision.unwrap_or(0))
            + spec.suffix.len();
        if least > self.capacity {
            self.buf.clear();
            return Err(UiError::FormatOverflow {
                needed: least,
                capacity: self.capacity,
            });
        }
        let body = spec.render(arg)?;
        self.format(format_args!("{}{}{}", spec.prefix, body, spec.suffix))
    }
}

/// Counts every byte offered and keeps only those that fit.
struct BoundedWriter<'a> {
    buf: &'a mut String,
    capacity: usize,
    needed: usize,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.needed += s.len();
        if self.needed <= self.capacity {
            self.buf.push_str(s);
        }
        Ok(())
    }
}

/// Value handed to a [`FormatSpec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`, `%i`
    Decimal,
    /// `%u`
    Unsigned,
    /// `%x`
    HexLower,
    /// `%X`
    HexUpper,
    /// `%f`, `%F`
    Fixed,
    /// `%e`
    Exp,
    /// `%E`
    ExpUpper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub left: bool,
    pub plus: bool,
    pub space: bool,
    pub zero: bool,
}

/// One parsed printf conversion with its surrounding literal text.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    pub prefix: String,
    pub suffix: String,
    pub flags: Flags,
    pub width: usize,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason| UiError::InvalidFormat {
            spec: spec.to_string(),
            reason,
        };

        let mut prefix = String::new();
        let mut chars = spec.chars().peekable();
        let mut found = None;

        while let Some(c) = chars.next() {
            if c != '%' {
                prefix.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                prefix.push('%');
                continue;
            }

            let mut flags = Flags::default();
            while let Some(&f) = chars.peek() {
                match f {
                    '-' => flags.left = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    '0' => flags.zero = true,
                    _ => break,
                }
                chars.next();
            }

            let width = parse_count(&mut chars).ok_or_else(|| invalid("width out of range"))?;

            let mut precision = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let p = parse_count(&mut chars).ok_or_else(|| invalid("precision out of range"))?;
                precision = Some(p);
            }

            // length modifiers carry no meaning here
            while matches!(chars.peek(), Some('l' | 'h' | 'L' | 'z')) {
                chars.next();
            }

            let conversion = match chars.next() {
                Some('d' | 'i') => Conversion::Decimal,
                Some('u') => Conversion::Unsigned,
                Some('x') => Conversion::HexLower,
                Some('X') => Conversion::HexUpper,
                Some('f' | 'F') => Conversion::Fixed,
                Some('e') => Conversion::Exp,
                Some('E') => Conversion::ExpUpper,
                Some(_) => return Err(invalid("unsupported conversion")),
                None => return Err(invalid("spec ends inside a conversion")),
            };
            found = Some((flags, width, precision, conversion));
            break;
        }

        let (flags, width, precision, conversion) =
            found.ok_or_else(|| invalid("no conversion in spec"))?;

        let mut suffix = String::new();
        while let Some(c) = chars.next() {
            if c == '%' {
                if chars.next() != Some('%') {
                    return Err(invalid("more than one conversion in spec"));
                }
            }
            suffix.push(c);
        }

        Ok(Self {
            prefix,
            suffix,
            flags,
            width,
            precision,
            conversion,
        })
    }

    /// Render the conversion alone, without prefix or suffix.
    pub fn render(&self, arg: FormatArg) -> Result<String> {
        let (negative, digits, finite) = match (self.conversion, arg) {
            (Conversion::Decimal, FormatArg::Int(v)) => {
                (v < 0, self.min_digits(v.unsigned_abs().to_string()), true)
            }
            (Conversion::Unsigned, FormatArg::Int(v)) => {
                (false, self.min_digits((v as u64).to_string()), true)
            }
            (Conversion::HexLower, FormatArg::Int(v)) => {
                (false, self.min_digits(format!("{:x}", v as u64)), true)
            }
            (Conversion::HexUpper, FormatArg::Int(v)) => {
                (false, self.min_digits(format!("{:X}", v as u64)), true)
            }
            (
                Conversion::Decimal | Conversion::Unsigned | Conversion::HexLower | Conversion::HexUpper,
                FormatArg::Float(_),
            ) => {
                return Err(UiError::InvalidFormat {
                    spec: self.to_string(),
                    reason: "integer conversion applied to a floating-point value",
                });
            }
            (conv, arg) => {
                let v = match arg {
                    FormatArg::Int(i) => i as f64,
                    FormatArg::Float(f) => f,
                };
                let precision = self.precision.unwrap_or(6);
                let magnitude = v.abs();
                let digits = if !v.is_finite() {
                    if v.is_nan() { "nan".to_string() } else { "inf".to_string() }
                } else {
                    match conv {
                        Conversion::Exp => exp_notation(magnitude, precision),
                        Conversion::ExpUpper => exp_notation(magnitude, precision).to_uppercase(),
                        _ => format!("{:.*}", precision, magnitude),
                    }
                };
                (v.is_sign_negative() && !v.is_nan(), digits, v.is_finite())
            }
        };

        let unsigned = matches!(
            self.conversion,
            Conversion::Unsigned | Conversion::HexLower | Conversion::HexUpper
        );
        let sign = if negative {
            "-"
        } else if unsigned {
            ""
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };

        let len = sign.len() + digits.len();
        if len >= self.width {
            return Ok(format!("{sign}{digits}"));
        }
        let pad = self.width - len;
        Ok(if self.flags.left {
            format!("{sign}{digits}{}", " ".repeat(pad))
        } else if self.flags.zero && finite && !(self.is_integer() && self.precision.is_some()) {
            format!("{sign}{}{digits}", "0".repeat(pad))
        } else {
            format!("{}{sign}{digits}", " ".repeat(pad))
        })
    }

    fn is_integer(&self) -> bool {
        !matches!(
            self.conversion,
            Conversion::Fixed | Conversion::Exp | Conversion::ExpUpper
        )
    }

    fn min_digits(&self, digits: String) -> String {
        match self.precision {
            Some(p) if digits.len() < p => format!("{}{digits}", "0".repeat(p - digits.len())),
            _ => digits,
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix.replace('%', "%%"))?;
        f.write_char('%')?;
        if self.flags.left {
            f.write_char('-')?;
        }
        if self.flags.plus {
            f.write_char('+')?;
        }
        if self.flags.space {
            f.write_char(' ')?;
        }
        if self.flags.zero {
            f.write_char('0')?;
        }
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        if let Some(p) = self.precision {
            write!(f, ".{}", p)?;
        }
        f.write_char(match self.conversion {
            Conversion::Decimal => 'd',
            Conversion::Unsigned => 'u',
            Conversion::HexLower => 'x',
            Conversion::HexUpper => 'X',
            Conversion::Fixed => 'f',
            Conversion::Exp => 'e',
            Conversion::ExpUpper => 'E',
        })?;
        f.write_str(&self.suffix.replace('%', "%%"))
    }
}

/// Decimal run for a width or precision; `None` when it does not fit a `usize`.
fn parse_count(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut n = 0usize;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = n.checked_mul(10)?.checked_add(d as usize)?;
        chars.next();
    }
    Some(n)
}

/// `1.500000e+02` style: at least two exponent digits, always signed.
fn exp_notation(magnitude: f64, precision: usize) -> String {
    let rust = format!("{:.*e}", precision, magnitude);
    match rust.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rust,
    }
}
