//! Turn raw read results into printable tables.
//!
//! Every table has a header line followed by exactly `count` rows, whatever
//! the transport actually returned: elements missing from a short response
//! show up as `n/a`.

use std::fmt::Write;

use crate::session::DisplayConfig;
use crate::transport::TransportError;

const NA: &str = "n/a";

pub fn bit_table(address: u16, count: u16, values: &[bool]) -> Vec<String> {
    let mut lines = Vec::with_capacity(count as usize + 1);
    lines.push(format!("{:<4} {:<17} {}", "#", "address", "bool"));
    for idx in 0..count as usize {
        let value = match values.get(idx) {
            Some(bit) => bit.to_string(),
            None => NA.to_string(),
        };
        lines.push(format!("{} {}", row_prefix(address, idx), value));
    }
    lines
}

pub fn word_table(address: u16, count: u16, values: &[u16], display: &DisplayConfig) -> Vec<String> {
    // extra registers in the response never pair with the last requested one
    let values = &values[..values.len().min(count as usize)];
    let mut lines = Vec::with_capacity(count as usize + 1);
    if display.dump_32b {
        lines.push(format!(
            "{:<4} {:<17} {:<6} {:<11} {:<11} {}",
            "#", "address", "raw", "u32", "i32", "f32"
        ));
    } else {
        lines.push(format!(
            "{:<4} {:<17} {:<6} {:<7} {:<7} {}",
            "#", "address", "raw", "u16", "i16", "bytes"
        ));
    }

    for idx in 0..count as usize {
        let raw = values.get(idx).copied();
        let cells = if display.dump_32b {
            let next = values.get(idx + 1).copied();
            let (u32_cell, i32_cell, f32_cell) = match (raw, next) {
                (Some(a), Some(b)) => {
                    let bits = combine_words(
                        prepare(a, display),
                        prepare(b, display),
                        display.swap_words,
                    );
                    (
                        fmt_unsigned(bits.into(), display.dump_hex, 8),
                        fmt_signed((bits as i32).into(), display.dump_hex, 8),
                        fmt_float(f32::from_bits(bits)),
                    )
                }
                _ => (NA.to_string(), NA.to_string(), NA.to_string()),
            };
            format!(
                "{:<6} {:<11} {:<11} {}",
                fmt_raw(raw),
                u32_cell,
                i32_cell,
                f32_cell
            )
        } else {
            let (u16_cell, i16_cell, bytes_cell) = match raw {
                Some(raw) => {
                    let value = prepare(raw, display);
                    (
                        fmt_unsigned(value.into(), display.dump_hex, 4),
                        fmt_signed((value as i16).into(), display.dump_hex, 4),
                        fmt_bytes(value, display.dump_hex),
                    )
                }
                None => (NA.to_string(), NA.to_string(), NA.to_string()),
            };
            format!(
                "{:<6} {:<7} {:<7} {}",
                fmt_raw(raw),
                u16_cell,
                i16_cell,
                bytes_cell
            )
        };
        lines.push(format!("{} {}", row_prefix(address, idx), cells));
    }
    lines
}

/// The line printed instead of a table when a read came back empty.
/// In debug mode the transport has already logged the failure, so nothing is
/// printed.
pub fn failure_line(err: &TransportError, debug: bool) -> Option<String> {
    if debug {
        None
    } else {
        Some(err.to_string())
    }
}

/// Value as it should be interpreted, after the optional byte swap.
pub fn prepare(raw: u16, display: &DisplayConfig) -> u16 {
    if display.swap_bytes {
        raw.swap_bytes()
    } else {
        raw
    }
}

/// `first` is the register at the lower address.
pub fn combine_words(first: u16, second: u16, swap_words: bool) -> u32 {
    let (high, low) = if swap_words {
        (second, first)
    } else {
        (first, second)
    };
    (u32::from(high) << 16) | u32::from(low)
}

fn row_prefix(address: u16, idx: usize) -> String {
    // computed wide so the last rows of a read near 0xffff don't wrap
    let addr = address as usize + idx;
    format!("{:04} @{:>5} [0x{:04x}] =", idx, addr, addr)
}

fn fmt_raw(raw: Option<u16>) -> String {
    match raw {
        Some(raw) => format!("0x{:04x}", raw),
        None => NA.to_string(),
    }
}

fn fmt_unsigned(value: u64, hex: bool, digits: usize) -> String {
    if hex {
        format!("0x{:0width$x}", value, width = digits)
    } else {
        value.to_string()
    }
}

fn fmt_signed(value: i64, hex: bool, digits: usize) -> String {
    let magnitude = fmt_unsigned(value.unsigned_abs(), hex, digits);
    if value < 0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

fn fmt_bytes(value: u16, hex: bool) -> String {
    let [hi, lo] = value.to_be_bytes();
    if hex {
        return format!("{:02x} {:02x}", hi, lo);
    }
    let mut out = String::from("\"");
    for byte in [hi, lo] {
        match byte {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            b' ' => out.push(' '),
            b if b.is_ascii_graphic() => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push('"');
    out
}

fn fmt_float(value: f32) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-4..1e7).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}
