use std::borrow::Cow;
use std::fs;

use tempfile::tempdir;
use tracing_subscriber::EnvFilter;
use typed_logger::subscriber::file_subscriber;
use typed_logger::{count_markers, FormatArgs, Formatter, Hex, Octal, Scientific};

fn one<T: typed_logger::ConversionTraits>(value: T) -> String {
    Formatter::new("{}").arg(value).finish()
}

#[test]
fn test_two_markers_in_call_order() {
    let line = Formatter::new("{} of {}").arg(3u32).arg("widgets").finish();
    assert_eq!(line, "3 of widgets");
}

#[test]
fn test_order_dependence() {
    let forward = Formatter::new("{}-{}").arg(1u8).arg(2u8).finish();
    let reversed = Formatter::new("{}-{}").arg(2u8).arg(1u8).finish();
    assert_eq!(forward, "1-2");
    assert_eq!(reversed, "2-1");
}

#[test]
fn test_registered_integer_types() {
    assert_eq!(one(-5i32), "-5");
    assert_eq!(one(-5i16), "-5");
    assert_eq!(one(-1i8), "-1");
    assert_eq!(one(200u8), "200");
    assert_eq!(one(65535u16), "65535");
    assert_eq!(one(u32::MAX), "4294967295");
    assert_eq!(one(-42isize), "-42");
    assert_eq!(one(usize::MAX), usize::MAX.to_string());
    assert_eq!(one(i64::MIN), "-9223372036854775808");
    assert_eq!(one(u64::MAX), "18446744073709551615");
}

#[test]
fn test_bool_renders_as_unsigned() {
    assert_eq!(one(true), "1");
    assert_eq!(one(false), "0");
}

#[test]
fn test_floats_render_fixed() {
    assert_eq!(one(3.5f64), "3.500000");
    assert_eq!(one(0.1f32), "0.100000");
    assert_eq!(one(-2.25f64), "-2.250000");
    assert_eq!(one(f64::INFINITY), "inf");
    assert_eq!(one(f64::NAN), "nan");
}

#[test]
fn test_string_types() {
    let owned = String::from("owned");
    assert_eq!(one("borrowed"), "borrowed");
    assert_eq!(one(&owned), "owned");
    assert_eq!(one(owned.clone()), "owned");
    assert_eq!(one(Cow::Borrowed("cow")), "cow");
}

#[test]
fn test_fallback_type_renders_unsigned() {
    assert_eq!(one('A'), "65");
    assert_eq!(Formatter::new("{}").hex('A').finish(), "41");
}

#[test]
fn test_overrides_beat_inferred_code() {
    assert_eq!(Formatter::new("{}").hex(255u8).finish(), "ff");
    assert_eq!(Formatter::new("{}").hex(-1i16).finish(), "ffff");
    assert_eq!(Formatter::new("{}").hex(-1i32).finish(), "ffffffff");
    assert_eq!(Formatter::new("{}").hex(-1i64).finish(), "ffffffffffffffff");
    assert_eq!(Formatter::new("{}").hex(true).finish(), "1");
    assert_eq!(Formatter::new("{}").octal(8u32).finish(), "10");
    assert_eq!(Formatter::new("{}").octal(-1i16).finish(), "177777");
    assert_eq!(Formatter::new("{}").scientific(1234.5f64).finish(), "1.234500e+03");
    assert_eq!(Formatter::new("{}").scientific(0.00012f32).finish(), "1.200000e-04");
    assert_eq!(Formatter::new("{}").general(0.0001f64).finish(), "0.0001");
    assert_eq!(Formatter::new("{}").general(1234567.0f64).finish(), "1.23457e+06");
    assert_eq!(Formatter::new("{}").general(100.0f32).finish(), "100");
}

#[test]
fn test_pointers_render_addresses() {
    let value = 7u32;
    let ptr: *const u32 = &value;
    assert_eq!(Formatter::new("{}").pointer(ptr).finish(), format!("{ptr:p}"));
    assert_eq!(one(std::ptr::null::<u8>()), "(nil)");

    let mut slot = 0u8;
    let raw: *mut u8 = &mut slot;
    assert!(one(raw).starts_with("0x"));
}

#[test]
fn test_marker_specs() {
    assert_eq!(Formatter::new("[{:5}]").arg(42i32).finish(), "[   42]");
    assert_eq!(Formatter::new("[{:-5}]").arg(42i32).finish(), "[42   ]");
    assert_eq!(Formatter::new("{:05}").arg(-42i32).finish(), "-0042");
    assert_eq!(Formatter::new("{:+}").arg(5u8 as i8).finish(), "+5");
    assert_eq!(Formatter::new("{:.2}").arg(3.14159f64).finish(), "3.14");
    assert_eq!(Formatter::new("{:08.3}").arg(3.14159f64).finish(), "0003.142");
    assert_eq!(Formatter::new("{:#}").hex(255u32).finish(), "0xff");
    assert_eq!(Formatter::new("{:#06}").hex(255u16).finish(), "0x00ff");
    assert_eq!(Formatter::new("{:.3}").arg("abcdef").finish(), "abc");
    assert_eq!(Formatter::new("{:>5}").arg(1u8).finish(), "{:>5}");
}

#[test]
fn test_escaped_braces() {
    assert_eq!(Formatter::new("{{}} {}").arg(1u8).finish(), "{} 1");
    assert_eq!(Formatter::new("{{{}}}").arg(7u8).finish(), "{7}");
}

#[test]
fn test_substituted_text_is_not_rescanned() {
    let line = Formatter::new("{} {}").arg("{}").arg(2u8).finish();
    assert_eq!(line, "{} 2");
}

#[test]
fn test_argument_count_mismatch() {
    // Missing arguments leave their markers in place.
    assert_eq!(Formatter::new("{} and {:4}").arg(1u8).finish(), "1 and {:4}");
    // Surplus arguments are dropped.
    assert_eq!(Formatter::new("x={}").arg(1u8).arg(2u8).finish(), "x=1");
}

#[test]
fn test_arg_index_counts_calls() {
    let formatter = Formatter::new("{} {} {}").arg(1u8).arg(2u8);
    assert_eq!(formatter.arg_index(), 2);
    assert_eq!(formatter.arg(3u8).finish(), "1 2 3");
}

#[test]
fn test_into_string() {
    let line: String = Formatter::new("n={}").arg(9u64).into();
    assert_eq!(line, "n=9");
}

#[test]
fn test_literal_only_format() {
    assert_eq!(Formatter::new("plain text").finish(), "plain text");
    assert_eq!(Formatter::new("").finish(), "");
}

#[test]
fn test_tuple_arguments() {
    let args = (3u32, "widgets", Hex(0xffu8), Octal(8u16), Scientific(2.5f64));
    let line = args.apply(Formatter::new("{} {} {} {} {}")).finish();
    assert_eq!(line, "3 widgets ff 10 2.500000e+00");
    assert_eq!(().apply(Formatter::new("none")).finish(), "none");
}

#[test]
fn test_count_markers_matches_consumption() {
    let fmt = "{} of {:5} ({{literal}})";
    assert_eq!(count_markers(fmt), 2);
    let line = Formatter::new(fmt).arg(1u8).arg(2u8).finish();
    assert_eq!(line, "1 of     2 ({literal})");
}

#[test]
fn test_oversized_fields_stay_literal() {
    assert_eq!(Formatter::new("{:.70000}").arg(1.0f64).finish(), "{:.70000}");
    assert_eq!(Formatter::new("{:.70000}").scientific(1.0f64).finish(), "{:.70000}");
    assert_eq!(
        Formatter::new("[{:18446744073709551615}]").arg(1u8).finish(),
        "[{:18446744073709551615}]"
    );
    assert_eq!(Formatter::new("{:.99999}").arg(7u32).finish(), "{:.99999}");
    assert_eq!(count_markers("{:40000} {:.5}"), 1);
}

#[test]
fn test_width_counts_bytes() {
    assert_eq!(Formatter::new("[{:6}]").arg("温度").finish(), "[温度]");
    assert_eq!(Formatter::new("[{:-8}]").arg("温度").finish(), "[温度  ]");
    assert_eq!(Formatter::new("[{:.5}]").arg("温度").finish(), "[温]");
}

#[test]
fn test_mismatch_diagnostics_in_debug_builds() {
    let dir = tempdir().unwrap();
    let subscriber = file_subscriber(
        dir.path(),
        "diagnostics.log",
        EnvFilter::new("typed_logger::formatter=debug"),
    );

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(Formatter::new("{} and {}").arg(1u8).finish(), "1 and {}");
        assert_eq!(Formatter::new("x={}").arg(1u8).arg(2u8).finish(), "x=1");
        assert_eq!(Formatter::new("{} {}").arg(1u8).arg(2u8).finish(), "1 2");
    });

    let contents = fs::read_to_string(dir.path().join("diagnostics.log")).unwrap_or_default();
    if cfg!(debug_assertions) {
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("format string has more markers than arguments"));
        assert!(lines[0].contains("consumed=1") && lines[0].contains("leftover=1"));
        assert!(lines[1].contains("argument has no matching marker"));
        assert!(lines[1].contains("index=1"));
    } else {
        assert!(contents.is_empty());
    }
}
