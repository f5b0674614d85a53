/// Counter that displays with `'` between groups of three digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(u64);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let lead = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        f.write_str(&digits[..lead])?;
        for group in digits.as_bytes()[lead..].chunks(3) {
            write!(f, "'{}", String::from_utf8_lossy(group))?;
        }
        Ok(())
    }
}
