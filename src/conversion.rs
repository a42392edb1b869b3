//! Compile-time registry mapping argument types to printf conversion metadata.
//!
//! Every type that can be handed to a [`Formatter`](crate::Formatter)
//! implements [`ConversionTraits`]. The trait's associated constants carry the
//! size modifier and conversion code, so the directive for a call site is
//! fixed at monomorphization time and no type tag exists at runtime.
//!
//! | Rust type            | size | code      |
//! |----------------------|------|-----------|
//! | `bool`               |      | `u`       |
//! | `i8` / `u8`          | `h`  | `d` / `u` |
//! | `i16` / `u16`        | `h`  | `d` / `u` |
//! | `i32` / `u32`        |      | `d` / `u` |
//! | `isize` / `usize`    | `l`  | `d` / `u` |
//! | `i64` / `u64`        | `ll` | `d` / `u` |
//! | `f32` / `f64`        |      | `f`       |
//! | `str`, `String`      |      | `s`       |
//! | `*const T`, `*mut T` |      | `p`       |
//!
//! # Fallback
//!
//! The trait's defaults (no size modifier, `u`, unsigned) are the record for
//! any type that only supplies [`ConversionTraits::cast`]. Such types render
//! as unsigned decimal without complaint; a type that needs a different
//! rendering must override the constants. `char` is registered this way and
//! prints its scalar value.

use std::borrow::Cow;

/// printf length modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// No modifier: `int` sized.
    Default,
    /// `h`
    Short,
    /// `l`
    Long,
    /// `ll`
    LongLong,
}

impl Length {
    pub const fn as_str(self) -> &'static str {
        match self {
            Length::Default => "",
            Length::Short => "h",
            Length::Long => "l",
            Length::LongLong => "ll",
        }
    }

    /// Width in bits an integer is truncated to before rendering (LP64).
    pub const fn bits(self) -> u32 {
        match self {
            Length::Short => 16,
            Length::Default => 32,
            Length::Long | Length::LongLong => 64,
        }
    }
}

/// The renderable form of an argument, standing in for one variadic slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Canonical<'a> {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Str(&'a str),
    Address(usize),
}

/// Conversion metadata for one argument type.
///
/// # Examples
///
/// ```
/// use typed_logger::{Canonical, ConversionTraits, Formatter, Length};
///
/// // Only `cast` is required; the rest falls back to `%u`.
/// struct PortId(u16);
///
/// impl ConversionTraits for PortId {
///     fn cast(&self) -> Canonical<'_> {
///         Canonical::Unsigned(u64::from(self.0))
///     }
/// }
///
/// assert_eq!(PortId::SIZE_SPEC, Length::Default);
/// assert_eq!(PortId::FMT_SPEC, 'u');
/// assert_eq!(Formatter::new("port {}").arg(PortId(8080)).finish(), "port 8080");
/// ```
pub trait ConversionTraits {
    const SIZE_SPEC: Length = Length::Default;
    const FMT_SPEC: char = 'u';
    const IS_SIGNED: bool = false;

    /// Converts the value into its canonical renderable form.
    fn cast(&self) -> Canonical<'_>;
}

/// Types that may be rendered with the `x` and `o` overrides.
pub trait Integral: ConversionTraits {}

/// Types that may be rendered with the `e` and `g` overrides.
pub trait Floating: ConversionTraits {
    fn widen(&self) -> f64;
}

macro_rules! integral_traits {
    ($($t:ty => $size:expr, $code:literal, $variant:ident($wide:ty));* $(;)?) => {$(
        impl ConversionTraits for $t {
            const SIZE_SPEC: Length = $size;
            const FMT_SPEC: char = $code;
            const IS_SIGNED: bool = $code == 'd';

            #[inline(always)]
            fn cast(&self) -> Canonical<'_> {
                Canonical::$variant(*self as $wide)
            }
        }

        impl Integral for $t {}
    )*};
}

integral_traits! {
    i8 => Length::Short, 'd', Signed(i64);
    u8 => Length::Short, 'u', Unsigned(u64);
    i16 => Length::Short, 'd', Signed(i64);
    u16 => Length::Short, 'u', Unsigned(u64);
    i32 => Length::Default, 'd', Signed(i64);
    u32 => Length::Default, 'u', Unsigned(u64);
    isize => Length::Long, 'd', Signed(i64);
    usize => Length::Long, 'u', Unsigned(u64);
    i64 => Length::LongLong, 'd', Signed(i64);
    u64 => Length::LongLong, 'u', Unsigned(u64);
}

impl ConversionTraits for bool {
    #[inline(always)]
    fn cast(&self) -> Canonical<'_> {
        Canonical::Unsigned(u64::from(*self))
    }
}

impl Integral for bool {}

impl ConversionTraits for char {
    fn cast(&self) -> Canonical<'_> {
        Canonical::Unsigned(u64::from(u32::from(*self)))
    }
}

impl Integral for char {}

impl ConversionTraits for f32 {
    const FMT_SPEC: char = 'f';
    const IS_SIGNED: bool = true;

    #[inline(always)]
    fn cast(&self) -> Canonical<'_> {
        Canonical::Float(f64::from(*self))
    }
}

impl Floating for f32 {
    fn widen(&self) -> f64 {
        f64::from(*self)
    }
}

impl ConversionTraits for f64 {
    const FMT_SPEC: char = 'f';
    const IS_SIGNED: bool = true;

    #[inline(always)]
    fn cast(&self) -> Canonical<'_> {
        Canonical::Float(*self)
    }
}

impl Floating for f64 {
    fn widen(&self) -> f64 {
        *self
    }
}

impl ConversionTraits for str {
    const FMT_SPEC: char = 's';

    fn cast(&self) -> Canonical<'_> {
        Canonical::Str(self)
    }
}

impl ConversionTraits for String {
    const FMT_SPEC: char = 's';

    fn cast(&self) -> Canonical<'_> {
        Canonical::Str(self.as_str())
    }
}

impl ConversionTraits for Cow<'_, str> {
    const FMT_SPEC: char = 's';

    fn cast(&self) -> Canonical<'_> {
        Canonical::Str(self.as_ref())
    }
}

// Raw pointers resolve to the pointer itself, never the pointee.
impl<T: ?Sized> ConversionTraits for *const T {
    const FMT_SPEC: char = 'p';

    fn cast(&self) -> Canonical<'_> {
        Canonical::Address((*self).cast::<()>() as usize)
    }
}

impl<T: ?Sized> ConversionTraits for *mut T {
    const FMT_SPEC: char = 'p';

    fn cast(&self) -> Canonical<'_> {
        Canonical::Address((*self).cast::<()>() as usize)
    }
}

impl<T: ConversionTraits + ?Sized> ConversionTraits for &T {
    const SIZE_SPEC: Length = T::SIZE_SPEC;
    const FMT_SPEC: char = T::FMT_SPEC;
    const IS_SIGNED: bool = T::IS_SIGNED;

    #[inline(always)]
    fn cast(&self) -> Canonical<'_> {
        T::cast(*self)
    }
}

impl<T: Integral + ?Sized> Integral for &T {}

impl<T: Floating + ?Sized> Floating for &T {
    fn widen(&self) -> f64 {
        T::widen(*self)
    }
}

/// Renders the wrapped value with `x`, keeping its size modifier.
#[derive(Debug, Clone, Copy)]
pub struct Hex<T>(pub T);

/// Renders the wrapped value with `o`, keeping its size modifier.
#[derive(Debug, Clone, Copy)]
pub struct Octal<T>(pub T);

/// Renders the wrapped value with `e`, widened to `f64`.
#[derive(Debug, Clone, Copy)]
pub struct Scientific<T>(pub T);

/// Renders the wrapped value with `g`, widened to `f64`.
#[derive(Debug, Clone, Copy)]
pub struct General<T>(pub T);

impl<T: Integral> ConversionTraits for Hex<T> {
    const SIZE_SPEC: Length = T::SIZE_SPEC;
    const FMT_SPEC: char = 'x';

    fn cast(&self) -> Canonical<'_> {
        self.0.cast()
    }
}

impl<T: Integral> ConversionTraits for Octal<T> {
    const SIZE_SPEC: Length = T::SIZE_SPEC;
    const FMT_SPEC: char = 'o';

    fn cast(&self) -> Canonical<'_> {
        self.0.cast()
    }
}

impl<T: Floating> ConversionTraits for Scientific<T> {
    const FMT_SPEC: char = 'e';
    const IS_SIGNED: bool = true;

    fn cast(&self) -> Canonical<'_> {
        Canonical::Float(self.0.widen())
    }
}

impl<T: Floating> ConversionTraits for General<T> {
    const FMT_SPEC: char = 'g';
    const IS_SIGNED: bool = true;

    fn cast(&self) -> Canonical<'_> {
        Canonical::Float(self.0.widen())
    }
}
