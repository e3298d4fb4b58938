use std::fmt;

type U = u64;

fn gcd(mut a: U, mut b: U) -> U {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

// Non-negative fraction kept in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frac(U, U);

impl Frac {
    pub fn new(n: U, d: U) -> Self {
        assert!(d > 0, "Denominator must be always positive");
        Self(n, d).normalized()
    }

    pub fn zero() -> Self {
        Self(0, 1)
    }

    pub fn numer(&self) -> U {
        self.0
    }

    pub fn denom(&self) -> U {
        self.1
    }

    pub fn normalized(self) -> Self {
        let Self(n, d) = self;
        if n == 0 {
            return Self::zero();
        }
        let g = gcd(n, d);
        Self(n / g, d / g)
    }
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_lowest_terms() {
        assert_eq!(Frac::new(6, 15).to_string(), "2/5");
        assert_eq!(Frac::new(0, 7).to_string(), "0/1");
        assert_eq!(Frac::new(4, 4), Frac::new(1, 1));
        assert_eq!((Frac::new(3, 9).numer(), Frac::new(3, 9).denom()), (1, 3));
    }
}
