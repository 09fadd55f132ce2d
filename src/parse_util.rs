use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input, expected '{exp}'")]
    UnexpectedEof { exp: char },

    #[error("Expected '{exp}', but got '{got}'")]
    UnexpectedToken { exp: char, got: char },
}

/// Takes the next character from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the token
pub fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Expects the next character in `bytes` to be `b`. Otherwise leaves `bytes` unchanged.
pub fn expect(b: u8, bytes: &[u8]) -> ParseResult<&[u8]> {
    let (Some(a), rest) = take_1(bytes) else {
        return Err(ParseError::UnexpectedEof { exp: b as char });
    };

    if a != b {
        return Err(ParseError::UnexpectedToken {
            exp: b as char,
            got: a as char,
        });
    }

    Ok(rest)
}

/// Consumes `b` if it is the next character, otherwise leaves `bytes` as-is.
pub fn skip(b: u8, bytes: &[u8]) -> &[u8] {
    expect(b, bytes).unwrap_or(bytes)
}

/// Advance the slice until `P` is satisfied, without consuming the matching byte.
///
/// Unlike a plain split, an empty prefix is reported as `None`. If `P` is never satisfied, the
/// whole slice is taken.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    let i = bytes.iter().position(|&a| p(a)).unwrap_or(bytes.len());

    if i == 0 {
        (None, bytes)
    } else {
        let (res, bytes) = bytes.split_at(i);

        (Some(res), bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::ParseError;

    #[test]
    fn take_1_empty() {
        let (b, rest) = super::take_1(b"");

        assert_eq!(b, None);
        assert_eq!(rest, b"");
    }

    #[test]
    fn expect_mismatch_leaves_input() {
        let res = super::expect(b'B', b"S23");

        assert_eq!(res, Err(ParseError::UnexpectedToken { exp: 'B', got: 'S' }));
    }

    #[test]
    fn expect_eof() {
        let res = super::expect(b'S', b"");

        assert_eq!(res, Err(ParseError::UnexpectedEof { exp: 'S' }));
    }

    #[test]
    fn skip_optional_separator() {
        assert_eq!(super::skip(b'/', b"/S23"), b"S23");
        assert_eq!(super::skip(b'/', b"S23"), b"S23");
    }

    #[test]
    fn take_until_digits() {
        let (res, rest) = super::take_until_fn(|b| !b.is_ascii_digit(), b"36/S23");

        assert_eq!(res, Some(b"36".as_slice()));
        assert_eq!(rest, b"/S23");
    }

    #[test]
    fn take_until_whole_slice() {
        let (res, rest) = super::take_until_fn(|b| !b.is_ascii_digit(), b"23");

        assert_eq!(res, Some(b"23".as_slice()));
        assert_eq!(rest, b"");
    }

    #[test]
    fn take_until_nothing() {
        let (res, rest) = super::take_until_fn(|b| !b.is_ascii_digit(), b"/S");

        assert_eq!(res, None);
        assert_eq!(rest, b"/S");
    }
}
