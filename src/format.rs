//! Formatted-allocate helper
//!
//! Renders a printf-style template and a list of typed arguments into a
//! freshly owned string. Both formatted setters (`set_opaquef`, `set_textf`)
//! go through [`render`], and render before touching the node, so a bad
//! template or argument list never corrupts the existing payload.
//!
//! # Supported directives
//!
//! `%[flags][width][.precision][length]conversion`
//!
//! - flags: `-` `+` space `0` `#`
//! - width / precision: decimal digits or `*` (taken from the argument list)
//! - length modifiers: `hh` and `h` narrow integers to 8 and 16 bits, no
//!   modifier treats a negative argument as a 32-bit `int`, and
//!   `l ll j z t L q` keep the full 64 bits
//! - conversions: `d i u o x X c s f F e E g G %`
//!
//! Width and precision are limited to [`MAX_FIELD`]; larger values are
//! rejected with [`FormatError::FieldTooLarge`].

use std::iter::Peekable;
use std::str::CharIndices;

use compact_str::{CompactString, ToCompactString, format_compact};
use thiserror::Error;

/// Largest width or precision a directive may request
pub const MAX_FIELD: usize = 4096;

// =============================================================================
// Arguments
// =============================================================================

/// A typed argument for a formatted value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Single character
    Char(char),
    /// Borrowed string
    Str(&'a str),
}

impl FormatArg<'_> {
    /// Argument type name used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::UInt(_) => "unsigned",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
        }
    }
}

macro_rules! impl_format_arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg<'_> {
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_format_arg_from!(Int as i64: i8, i16, i32, i64, isize);
impl_format_arg_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_format_arg_from!(Float as f64: f32, f64);

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a CompactString> for FormatArg<'a> {
    fn from(value: &'a CompactString) -> Self {
        Self::Str(value)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Errors produced while rendering a formatted value.
///
/// Argument indices are zero-based positions in the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A directive needs more arguments than were supplied
    #[error("missing argument #{index}")]
    MissingArgument {
        /// Position of the missing argument
        index: usize,
    },

    /// An argument cannot be rendered by its directive
    #[error("argument #{index} is {found}, expected {expected} for %{conversion}")]
    TypeMismatch {
        /// Position of the offending argument
        index: usize,
        /// Conversion character of the directive
        conversion: char,
        /// Argument type the directive accepts
        expected: &'static str,
        /// Argument type that was supplied
        found: &'static str,
    },

    /// Unknown conversion character
    #[error("unsupported conversion %{0}")]
    UnsupportedConversion(char),

    /// Template ends inside a directive
    #[error("incomplete directive at end of format")]
    Incomplete,

    /// Arguments left over after the template was consumed
    #[error("{unused} unused argument(s)")]
    UnusedArguments {
        /// Number of arguments never consumed
        unused: usize,
    },

    /// Width or precision exceeds [`MAX_FIELD`]
    #[error("{field} exceeds the limit of {limit}", limit = MAX_FIELD)]
    FieldTooLarge {
        /// `"width"` or `"precision"`
        field: &'static str,
    },
}

// =============================================================================
// render
// =============================================================================

/// Render a printf-style template into an owned string.
pub fn render(format: &str, args: &[FormatArg<'_>]) -> Result<CompactString, FormatError> {
    let mut out = CompactString::with_capacity(format.len());
    let mut args = Args { args, next: 0 };
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let (spec, tail) = Spec::parse(&rest[pos + 1..], &mut args)?;
        spec.write(&mut out, &mut args)?;
        rest = tail;
    }
    out.push_str(rest);

    args.finish()?;
    Ok(out)
}

// =============================================================================
// Argument cursor
// =============================================================================

struct Args<'a, 'b> {
    args: &'b [FormatArg<'a>],
    next: usize,
}

impl<'a> Args<'a, '_> {
    fn next(&mut self) -> Result<(usize, FormatArg<'a>), FormatError> {
        let index = self.next;
        let arg = *self
            .args
            .get(index)
            .ok_or(FormatError::MissingArgument { index })?;
        self.next += 1;
        Ok((index, arg))
    }

    fn mismatch(index: usize, conversion: char, expected: &'static str, arg: FormatArg<'_>) -> FormatError {
        FormatError::TypeMismatch {
            index,
            conversion,
            expected,
            found: arg.type_name(),
        }
    }

    fn next_int(&mut self, conversion: char) -> Result<i64, FormatError> {
        match self.next()? {
            (_, FormatArg::Int(v)) => Ok(v),
            (_, FormatArg::UInt(v)) => Ok(v as i64),
            (_, FormatArg::Char(c)) => Ok(i64::from(u32::from(c))),
            (index, arg) => Err(Self::mismatch(index, conversion, "int", arg)),
        }
    }

    /// Unsigned bits of the next argument, and whether it was a negative int
    fn next_uint(&mut self, conversion: char) -> Result<(u64, bool), FormatError> {
        match self.next()? {
            (_, FormatArg::Int(v)) => Ok((v as u64, v < 0)),
            (_, FormatArg::UInt(v)) => Ok((v, false)),
            (_, FormatArg::Char(c)) => Ok((u64::from(u32::from(c)), false)),
            (index, arg) => Err(Self::mismatch(index, conversion, "unsigned", arg)),
        }
    }

    fn next_float(&mut self, conversion: char) -> Result<f64, FormatError> {
        match self.next()? {
            (_, FormatArg::Float(v)) => Ok(v),
            (_, FormatArg::Int(v)) => Ok(v as f64),
            (_, FormatArg::UInt(v)) => Ok(v as f64),
            (index, arg) => Err(Self::mismatch(index, conversion, "float", arg)),
        }
    }

    fn next_char(&mut self, conversion: char) -> Result<char, FormatError> {
        let (index, arg) = self.next()?;
        let c = match arg {
            FormatArg::Char(c) => Some(c),
            FormatArg::Int(v) => u32::try_from(v).ok().and_then(char::from_u32),
            FormatArg::UInt(v) => u32::try_from(v).ok().and_then(char::from_u32),
            _ => None,
        };
        c.ok_or_else(|| Self::mismatch(index, conversion, "char", arg))
    }

    fn next_str(&mut self, conversion: char) -> Result<&'a str, FormatError> {
        match self.next()? {
            (_, FormatArg::Str(s)) => Ok(s),
            (index, arg) => Err(Self::mismatch(index, conversion, "string", arg)),
        }
    }

    fn finish(&self) -> Result<(), FormatError> {
        match self.args.len() - self.next {
            0 => Ok(()),
            unused => Err(FormatError::UnusedArguments { unused }),
        }
    }
}

// =============================================================================
// Directive
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
}

/// Integer width selected by the length modifier
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Length {
    /// `hh`
    Char,
    /// `h`
    Short,
    /// No modifier: C `int`
    #[default]
    Int,
    /// `l`, `ll` and the other 64-bit modifiers
    Long,
}

impl Length {
    /// Narrow a signed argument to this width.
    fn signed(self, v: i64) -> i64 {
        match self {
            Self::Char => i64::from(v as i8),
            Self::Short => i64::from(v as i16),
            Self::Int | Self::Long => v,
        }
    }

    /// Reinterpret an argument as unsigned at this width.
    ///
    /// Without a modifier only negative values that fit an `int` wrap at 32
    /// bits; larger values keep their full width.
    fn unsigned(self, v: u64, negative: bool) -> u64 {
        match self {
            Self::Char => u64::from(v as u8),
            Self::Short => u64::from(v as u16),
            Self::Int if negative && (v as i64) >= i64::from(i32::MIN) => u64::from(v as u32),
            Self::Int | Self::Long => v,
        }
    }
}

#[derive(Debug)]
struct Spec {
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    length: Length,
    conversion: char,
}

/// Check a width or precision against [`MAX_FIELD`].
fn bounded(value: usize, field: &'static str) -> Result<usize, FormatError> {
    if value > MAX_FIELD {
        return Err(FormatError::FieldTooLarge { field });
    }
    Ok(value)
}

impl Spec {
    /// Parse the directive following a `%`, returning it and the rest of the template.
    fn parse<'f>(input: &'f str, args: &mut Args<'_, '_>) -> Result<(Self, &'f str), FormatError> {
        let mut chars = input.char_indices().peekable();

        let mut flags = Flags::default();
        while let Some(&(_, c)) = chars.peek() {
            match c {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '0' => flags.zero = true,
                '#' => flags.alt = true,
                _ => break,
            }
            chars.next();
        }

        let width = if chars.next_if(|&(_, c)| c == '*').is_some() {
            let width = args.next_int('*')?;
            if width < 0 {
                flags.left = true;
            }
            let width = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
            bounded(width, "width")?
        } else {
            bounded(digits(&mut chars).unwrap_or(0), "width")?
        };

        let precision = if chars.next_if(|&(_, c)| c == '.').is_some() {
            if chars.next_if(|&(_, c)| c == '*').is_some() {
                // A negative precision is taken as if it were omitted
                usize::try_from(args.next_int('*')?)
                    .ok()
                    .map(|p| bounded(p, "precision"))
                    .transpose()?
            } else {
                Some(bounded(digits(&mut chars).unwrap_or(0), "precision")?)
            }
        } else {
            None
        };

        let mut length = Length::Int;
        while let Some((_, c)) = chars.next_if(|&(_, c)| matches!(c, 'h' | 'l' | 'j' | 'z' | 't' | 'L' | 'q')) {
            length = match (c, length) {
                ('h', Length::Short) => Length::Char,
                ('h', Length::Int) => Length::Short,
                ('h', narrowed) => narrowed,
                _ => Length::Long,
            };
        }

        let (index, conversion) = chars.next().ok_or(FormatError::Incomplete)?;
        let spec = Self {
            flags,
            width,
            precision,
            length,
            conversion,
        };
        Ok((spec, &input[index + conversion.len_utf8()..]))
    }

    fn write(&self, out: &mut CompactString, args: &mut Args<'_, '_>) -> Result<(), FormatError> {
        let c = self.conversion;
        match c {
            '%' => out.push('%'),
            'd' | 'i' => {
                let v = self.length.signed(args.next_int(c)?);
                self.write_integer(out, v < 0, v.unsigned_abs());
            }
            'u' | 'o' | 'x' | 'X' => {
                let (v, negative) = args.next_uint(c)?;
                self.write_integer(out, false, self.length.unsigned(v, negative));
            }
            'c' => {
                let v = args.next_char(c)?;
                self.pad(out, "", v.encode_utf8(&mut [0; 4]), false);
            }
            's' => {
                let v = args.next_str(c)?;
                let v = match self.precision {
                    Some(max) => v.char_indices().nth(max).map_or(v, |(end, _)| &v[..end]),
                    None => v,
                };
                self.pad(out, "", v, false);
            }
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
                let v = args.next_float(c)?;
                self.write_float(out, v);
            }
            other => return Err(FormatError::UnsupportedConversion(other)),
        }
        Ok(())
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        }
    }

    fn write_integer(&self, out: &mut CompactString, negative: bool, magnitude: u64) {
        let mut digits = match self.conversion {
            'o' => format_compact!("{magnitude:o}"),
            'x' => format_compact!("{magnitude:x}"),
            'X' => format_compact!("{magnitude:X}"),
            _ => magnitude.to_compact_string(),
        };

        match self.precision {
            Some(0) if magnitude == 0 => digits.clear(),
            Some(p) if digits.len() < p => {
                digits.insert_str(0, &"0".repeat(p - digits.len()));
            }
            _ => {}
        }
        if self.flags.alt && self.conversion == 'o' && !digits.starts_with('0') {
            digits.insert(0, '0');
        }

        let prefix = match self.conversion {
            'd' | 'i' => self.sign(negative),
            'x' if self.flags.alt && magnitude != 0 => "0x",
            'X' if self.flags.alt && magnitude != 0 => "0X",
            _ => "",
        };
        let zero_pad = self.flags.zero && !self.flags.left && self.precision.is_none();
        self.pad(out, prefix, &digits, zero_pad);
    }

    fn write_float(&self, out: &mut CompactString, v: f64) {
        let upper = self.conversion.is_ascii_uppercase();
        let prefix = self.sign(v.is_sign_negative() && !v.is_nan());
        let magnitude = v.abs();

        if !magnitude.is_finite() {
            let body = match (v.is_nan(), upper) {
                (true, false) => "nan",
                (true, true) => "NAN",
                (false, false) => "inf",
                (false, true) => "INF",
            };
            self.pad(out, prefix, body, false);
            return;
        }

        let precision = self.precision.unwrap_or(6);
        let alt = self.flags.alt;
        let body = match self.conversion.to_ascii_lowercase() {
            'f' => fixed(magnitude, precision, alt),
            'e' => exponential(magnitude, precision, alt, upper),
            _ => general(magnitude, precision, alt, upper),
        };
        self.pad(out, prefix, &body, self.flags.zero && !self.flags.left);
    }

    fn pad(&self, out: &mut CompactString, prefix: &str, body: &str, zero_pad: bool) {
        let len = prefix.chars().count() + body.chars().count();
        let fill = self.width.saturating_sub(len);

        if self.flags.left {
            out.push_str(prefix);
            out.push_str(body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if zero_pad {
            out.push_str(prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}

fn digits(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = (c as usize) - ('0' as usize);
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    value
}

// =============================================================================
// Floating point bodies (sign handled by the caller)
// =============================================================================

fn fixed(v: f64, precision: usize, alt: bool) -> String {
    let mut s = format!("{v:.precision$}");
    if alt && precision == 0 {
        s.push('.');
    }
    s
}

/// Decimal exponent `v` has once rounded to `precision` fractional digits in `%e` form
fn decimal_exponent(v: f64, precision: usize) -> i32 {
    let s = format!("{v:.precision$e}");
    s.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn exponential(v: f64, precision: usize, alt: bool, upper: bool) -> String {
    let s = format!("{v:.precision$e}");
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    let mut body = String::with_capacity(mantissa.len() + 5);
    body.push_str(mantissa);
    if alt && precision == 0 {
        body.push('.');
    }
    body.push(if upper { 'E' } else { 'e' });
    body.push(if exp < 0 { '-' } else { '+' });
    body.push_str(&format!("{:02}", exp.unsigned_abs()));
    body
}

fn general(v: f64, precision: usize, alt: bool, upper: bool) -> String {
    let p = precision.max(1);
    let x = if v == 0.0 { 0 } else { decimal_exponent(v, p - 1) };

    let body = match usize::try_from(x) {
        Ok(x) if x < p => fixed(v, p - 1 - x, alt),
        Err(_) if x >= -4 => fixed(v, p - 1 + x.unsigned_abs() as usize, alt),
        _ => exponential(v, p - 1, alt, upper),
    };

    if alt { body } else { strip_trailing_zeros(&body) }
}

fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, exp) = s.split_at(s.find(['e', 'E']).unwrap_or(s.len()));
    if !mantissa.contains('.') {
        return s.to_string();
    }
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{mantissa}{exp}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(format: &str, args: &[FormatArg<'_>]) -> String {
        render(format, args).unwrap().to_string()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(fmt("hello", &[]), "hello");
        assert_eq!(fmt("", &[]), "");
        assert_eq!(fmt("100%%", &[]), "100%");
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt("%d-%s", &printf_args![3, "x"]), "3-x");
        assert_eq!(fmt("%i", &printf_args![-42]), "-42");
        assert_eq!(fmt("[%5d]", &printf_args![42]), "[   42]");
        assert_eq!(fmt("[%-5d]", &printf_args![42]), "[42   ]");
        assert_eq!(fmt("[%05d]", &printf_args![-42]), "[-0042]");
        assert_eq!(fmt("%+d % d", &printf_args![5, 5]), "+5  5");
        assert_eq!(fmt("%.3d", &printf_args![7]), "007");
        assert_eq!(fmt("[%.0d]", &printf_args![0]), "[]");
        assert_eq!(fmt("%ld %lld %zu", &printf_args![1i64, 2i64, 3usize]), "1 2 3");
    }

    #[test]
    fn test_unsigned_radix() {
        assert_eq!(fmt("%u", &printf_args![42u32]), "42");
        assert_eq!(fmt("%x %X", &printf_args![255, 255]), "ff FF");
        assert_eq!(fmt("%#x %#X %#x", &printf_args![255, 255, 0]), "0xff 0XFF 0");
        assert_eq!(fmt("%o %#o", &printf_args![8, 8]), "10 010");
        assert_eq!(fmt("%08x", &printf_args![0xbeefu32]), "0000beef");
    }

    #[test]
    fn test_length_modifiers() {
        assert_eq!(fmt("%x", &printf_args![-1i32]), "ffffffff");
        assert_eq!(fmt("%u", &printf_args![-1]), "4294967295");
        assert_eq!(fmt("%lx", &printf_args![-1i64]), "ffffffffffffffff");
        assert_eq!(fmt("%llu", &printf_args![-2i64]), "18446744073709551614");
        assert_eq!(fmt("%hx %hhx", &printf_args![-1, -1]), "ffff ff");
        assert_eq!(fmt("%hhd %hd", &printf_args![255, 65535]), "-1 -1");
        assert_eq!(fmt("%x", &printf_args![0x1_0000_0000u64]), "100000000");
        assert_eq!(fmt("%x", &printf_args![i64::MIN]), "8000000000000000");
    }

    #[test]
    fn test_field_limits() {
        let width = FormatError::FieldTooLarge { field: "width" };
        let precision = FormatError::FieldTooLarge { field: "precision" };

        assert_eq!(render("%*d", &printf_args![i64::MAX, 1]), Err(width.clone()));
        assert_eq!(render("%*d", &printf_args![i64::MIN, 1]), Err(width.clone()));
        assert_eq!(render("%99999999999999999999d", &printf_args![1]), Err(width.clone()));
        assert_eq!(render("%4097s", &printf_args!["x"]), Err(width));
        assert_eq!(render("%.100000f", &printf_args![1.0]), Err(precision.clone()));
        assert_eq!(render("%.99999999999999999999d", &printf_args![1]), Err(precision.clone()));
        assert_eq!(render("%.*g", &printf_args![i64::MAX, 1.0]), Err(precision));

        // At the limit
        assert_eq!(render("%4096d", &printf_args![1]).unwrap().len(), MAX_FIELD);
        assert_eq!(render("%.4096f", &printf_args![1.0]).unwrap().len(), MAX_FIELD + 2);
        assert_eq!(render("%.4096g", &printf_args![0.0009765625]).unwrap(), "0.0009765625");
        assert_eq!(render("%.4096d", &printf_args![1]).unwrap().len(), MAX_FIELD);
    }

    #[test]
    fn test_chars_and_strings() {
        assert_eq!(fmt("%c%c", &printf_args!['o', 107]), "ok");
        assert_eq!(fmt("[%6s]", &printf_args!["abc"]), "[   abc]");
        assert_eq!(fmt("[%-6s]", &printf_args!["abc"]), "[abc   ]");
        assert_eq!(fmt("%.2s", &printf_args!["héllo"]), "hé");
        assert_eq!(fmt("%.10s", &printf_args!["abc"]), "abc");

        let owned = String::from("owned");
        assert_eq!(fmt("%s", &printf_args![&owned]), "owned");
    }

    #[test]
    fn test_star_width_and_precision() {
        assert_eq!(fmt("[%*d]", &printf_args![4, 7]), "[   7]");
        assert_eq!(fmt("[%*d]", &printf_args![-4, 7]), "[7   ]");
        assert_eq!(fmt("%.*f", &printf_args![2, 3.14159]), "3.14");
        assert_eq!(fmt("%.*f", &printf_args![-1, 1.5]), "1.500000");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fmt("%f", &printf_args![1.5]), "1.500000");
        assert_eq!(fmt("%.2f", &printf_args![2.0f32]), "2.00");
        assert_eq!(fmt("%.0f", &printf_args![2.0]), "2");
        assert_eq!(fmt("%#.0f", &printf_args![2.0]), "2.");
        assert_eq!(fmt("%8.3f|", &printf_args![-1.25]), "  -1.250|");
        assert_eq!(fmt("%08.3f", &printf_args![-1.25]), "-001.250");
        assert_eq!(fmt("%f", &printf_args![3]), "3.000000");
    }

    #[test]
    fn test_exponential() {
        assert_eq!(fmt("%e", &printf_args![1234.5]), "1.234500e+03");
        assert_eq!(fmt("%.2E", &printf_args![0.00012]), "1.20E-04");
        assert_eq!(fmt("%e", &printf_args![0.0]), "0.000000e+00");
        assert_eq!(fmt("%.0e", &printf_args![5.0]), "5e+00");
    }

    #[test]
    fn test_general() {
        assert_eq!(fmt("%g", &printf_args![1.5]), "1.5");
        assert_eq!(fmt("%g", &printf_args![100000.0]), "100000");
        assert_eq!(fmt("%g", &printf_args![1000000.0]), "1e+06");
        assert_eq!(fmt("%g", &printf_args![0.0001]), "0.0001");
        assert_eq!(fmt("%g", &printf_args![0.00001]), "1e-05");
        assert_eq!(fmt("%g", &printf_args![0.0]), "0");
        assert_eq!(fmt("%G", &printf_args![1e-10]), "1E-10");
        assert_eq!(fmt("%.3g", &printf_args![3.14159]), "3.14");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt("%f", &printf_args![f64::INFINITY]), "inf");
        assert_eq!(fmt("%F", &printf_args![f64::NEG_INFINITY]), "-INF");
        assert_eq!(fmt("%e", &printf_args![f64::NAN]), "nan");
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            render("%d %d", &printf_args![1]),
            Err(FormatError::MissingArgument { index: 1 })
        );
        assert_eq!(
            render("%d", &printf_args!["x"]),
            Err(FormatError::TypeMismatch {
                index: 0,
                conversion: 'd',
                expected: "int",
                found: "string",
            })
        );
        assert_eq!(
            render("%s", &printf_args![1]),
            Err(FormatError::TypeMismatch {
                index: 0,
                conversion: 's',
                expected: "string",
                found: "int",
            })
        );
        assert_eq!(render("%n", &printf_args![]), Err(FormatError::UnsupportedConversion('n')));
        assert_eq!(render("50%", &printf_args![]), Err(FormatError::Incomplete));
        assert_eq!(render("%5", &printf_args![]), Err(FormatError::Incomplete));
        assert_eq!(
            render("%d", &printf_args![1, 2, 3]),
            Err(FormatError::UnusedArguments { unused: 2 })
        );
    }

    #[test]
    fn test_error_display() {
        let err = FormatError::TypeMismatch {
            index: 2,
            conversion: 'd',
            expected: "int",
            found: "float",
        };
        assert_eq!(err.to_string(), "argument #2 is float, expected int for %d");
        assert_eq!(FormatError::UnsupportedConversion('p').to_string(), "unsupported conversion %p");
        assert_eq!(
            FormatError::FieldTooLarge { field: "width" }.to_string(),
            "width exceeds the limit of 4096"
        );
    }
}
