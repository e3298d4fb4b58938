use std::io::{BufWriter, Read, Stdout};
use std::str::FromStr;

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self) -> Result<T> {
        let expected = std::any::type_name::<T>();
        let token = self.token().ok_or(Error::UnexpectedEof { expected })?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::BadToken {
                token: String::from_utf8_lossy(token).into_owned(),
                expected,
            })
    }

    fn word(&mut self) -> Result<String> {
        let token = self.token().ok_or(Error::UnexpectedEof { expected: "word" })?;
        Ok(String::from_utf8_lossy(token).into_owned())
    }

    fn vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }
}

// cheap whitespace check, treats every control byte as a separator
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(token)
    }
}

pub fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut input_buf: Vec<u8> = vec![];
    reader.read_to_end(&mut input_buf)?;
    Ok(input_buf)
}

pub fn stdout() -> BufWriter<Stdout> {
    BufWriter::new(std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream() {
        let source = " 2 4 \r\n\n\n-19235 3\nQ -0.12e+5\n123\r\n";
        let mut input = source.as_bytes();
        let (n, k): (usize, usize) = (input.value().unwrap(), input.value().unwrap());
        assert_eq!((n, k), (2, 4));
        let v: Vec<i32> = input.vec(2).unwrap();
        assert_eq!(v, [-19235, 3]);
        assert_eq!(input.word().unwrap(), "Q");
        assert_eq!(input.value::<f64>().unwrap(), -0.12e+5);
        assert_eq!(input.token(), Some("123".as_bytes()));
        assert!(input.token().is_none());
    }

    #[test]
    fn reports_bad_and_missing_tokens() {
        let mut input = "12 x".as_bytes();
        assert_eq!(input.value::<u32>().unwrap(), 12);
        assert!(matches!(
            input.value::<u32>(),
            Err(Error::BadToken { ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            input.value::<u32>(),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
