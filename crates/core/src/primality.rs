//! Trial-division helpers used to check hand-entered lesson data.

/// Whether a number is prime or composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Prime,
    Composite,
}

impl NumberKind {
    #[must_use]
    pub fn from_is_prime(is_prime: bool) -> Self {
        if is_prime {
            NumberKind::Prime
        } else {
            NumberKind::Composite
        }
    }
}

/// Classify `n`, or `None` for 0 and 1 which are neither prime nor composite.
#[must_use]
pub fn classify(n: u32) -> Option<NumberKind> {
    if n < 2 {
        return None;
    }
    Some(NumberKind::from_is_prime(is_prime(n)))
}

#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 2_u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Every positive divisor of `n`, ascending. Empty for 0.
#[must_use]
pub fn divisors(n: u32) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut d = 1_u32;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            low.push(d);
            if d != n / d {
                high.push(n / d);
            }
        }
        d += 1;
    }
    low.extend(high.into_iter().rev());
    low
}
