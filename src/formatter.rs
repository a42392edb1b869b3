//! Chainable, type-inferring formatter.
//!
//! A [`Formatter`] walks a format string marker by marker. Each chained call
//! renders one argument into the next marker using the directive the
//! registry assigns to the argument's type, so call sites never spell out
//! conversion codes.
//!
//! # Caller obligations
//!
//! The number of chained calls must match the number of markers. The
//! formatter does not enforce this: markers left over at [`Formatter::finish`]
//! are copied verbatim and arguments with no marker are dropped. Debug builds
//! emit a `tracing` event for either mismatch.
//!
//! # Examples
//!
//! ```
//! use typed_logger::Formatter;
//!
//! let line = Formatter::new("{} of {} at {:.1}%")
//!     .arg(3u32)
//!     .arg("widgets")
//!     .arg(99.26f64)
//!     .finish();
//! assert_eq!(line, "3 of widgets at 99.3%");
//!
//! let line = Formatter::new("flags={:#} mode={}").hex(0x1fu16).octal(0o755u32).finish();
//! assert_eq!(line, "flags=0x1f mode=755");
//! ```

use crate::conversion::{
    Canonical, ConversionTraits, Floating, General, Hex, Integral, Octal, Scientific,
};
use crate::directive::Directive;
use crate::marker::next_marker;

/// In-progress rendering of one format string.
///
/// Owned by the call chain that created it and consumed by each call, so
/// exactly one accumulator is ever live per line.
#[derive(Debug)]
#[must_use = "a formatter does nothing until it is finished"]
pub struct Formatter<'a> {
    out: String,
    rest: &'a str,
    arg: usize,
}

impl<'a> Formatter<'a> {
    pub fn new(fmt: &'a str) -> Self {
        Self {
            out: String::with_capacity(fmt.len() + 16),
            rest: fmt,
            arg: 0,
        }
    }

    /// Renders `value` into the next marker with its registry directive.
    #[inline]
    pub fn arg<T: ConversionTraits>(self, value: T) -> Self {
        self.element(Directive::of::<T>(), value.cast())
    }

    /// Renders the address of `ptr` with `p`.
    pub fn pointer<T: ?Sized>(self, ptr: *const T) -> Self {
        self.arg(ptr)
    }

    /// Renders `value` with `x`, keeping its size modifier.
    pub fn hex<T: Integral>(self, value: T) -> Self {
        self.arg(Hex(value))
    }

    /// Renders `value` with `o`, keeping its size modifier.
    pub fn octal<T: Integral>(self, value: T) -> Self {
        self.arg(Octal(value))
    }

    /// Renders `value` with `e`.
    pub fn scientific<T: Floating>(self, value: T) -> Self {
        self.arg(Scientific(value))
    }

    /// Renders `value` with `g`.
    pub fn general<T: Floating>(self, value: T) -> Self {
        self.arg(General(value))
    }

    /// Number of arguments consumed so far.
    pub fn arg_index(&self) -> usize {
        self.arg
    }

    /// Appends the remaining literal text and returns the rendered line.
    pub fn finish(mut self) -> String {
        let mut leftover = 0usize;
        while let Some(marker) = next_marker(self.rest, &mut self.out) {
            self.out.push_str(marker.text);
            self.rest = marker.rest;
            leftover += 1;
        }
        if cfg!(debug_assertions) && leftover > 0 {
            tracing::debug!(
                target: "typed_logger::formatter",
                consumed = self.arg,
                leftover,
                "format string has more markers than arguments"
            );
        }
        self.out
    }

    fn element(mut self, directive: Directive, value: Canonical<'_>) -> Self {
        match next_marker(self.rest, &mut self.out) {
            Some(marker) => {
                directive.with_spec(marker.spec).render(value, &mut self.out);
                self.rest = marker.rest;
            }
            None => {
                self.rest = "";
                if cfg!(debug_assertions) {
                    tracing::debug!(
                        target: "typed_logger::formatter",
                        index = self.arg,
                        "argument has no matching marker"
                    );
                }
            }
        }
        self.arg += 1;
        self
    }
}

impl From<Formatter<'_>> for String {
    fn from(formatter: Formatter<'_>) -> Self {
        formatter.finish()
    }
}

/// An ordered argument list that can be fed through a [`Formatter`].
///
/// Implemented for `()` and for tuples of up to twelve [`ConversionTraits`]
/// values; elements are consumed left to right.
pub trait FormatArgs {
    fn apply<'a>(self, formatter: Formatter<'a>) -> Formatter<'a>;
}

impl FormatArgs for () {
    fn apply<'a>(self, formatter: Formatter<'a>) -> Formatter<'a> {
        formatter
    }
}

macro_rules! tuple_format_args {
    ($($name:ident)+) => {
        impl<$($name: ConversionTraits),+> FormatArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn apply<'a>(self, formatter: Formatter<'a>) -> Formatter<'a> {
                let ($($name,)+) = self;
                formatter$(.arg($name))+
            }
        }
    };
}

tuple_format_args!(A);
tuple_format_args!(A B);
tuple_format_args!(A B C);
tuple_format_args!(A B C D);
tuple_format_args!(A B C D E);
tuple_format_args!(A B C D E F);
tuple_format_args!(A B C D E F G);
tuple_format_args!(A B C D E F G H);
tuple_format_args!(A B C D E F G H I);
tuple_format_args!(A B C D E F G H I J);
tuple_format_args!(A B C D E F G H I J K);
tuple_format_args!(A B C D E F G H I J K L);
