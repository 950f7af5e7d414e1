/// Rewrite every token that is a hexadecimal literal (`0x1f`, `-0X10`) into its
/// decimal form. Anything else is passed through untouched.
pub fn preprocess<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            match parse_hex_literal(token) {
                Some(value) => value.to_string(),
                None => token.to_string(),
            }
        })
        .collect()
}

/// Split a command line on whitespace, then preprocess it.
pub fn preprocess_line(line: &str) -> Vec<String> {
    preprocess(line.split_whitespace())
}

fn parse_hex_literal(token: &str) -> Option<i64> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // too wide for i64: keep the token so the int conversion reports it
    let magnitude = i64::from_str_radix(digits, 16).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
