use std::fmt::Display;
use crate::util::format::fmt_mono;

// `BiDeg(m, n)` : the exponent pair of a bivariate term x^m y^n.
// Ordered lexicographically by (m, n).

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(derive_more::Display, derive_more::Debug)]
#[display("({_0}, {_1})")]
#[debug("({_0}, {_1})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiDeg(pub i32, pub i32);

impl BiDeg { 
    pub const fn new(m: i32, n: i32) -> Self { 
        Self(m, n)
    }

    pub fn m(&self) -> i32 { 
        self.0
    }

    pub fn n(&self) -> i32 { 
        self.1
    }

    pub fn checked_shift(&self, dm: i32, dn: i32) -> Option<Self> { 
        let m = self.0.checked_add(dm)?;
        let n = self.1.checked_add(dn)?;
        Some(Self(m, n))
    }

    /// Panics if an exponent leaves the `i32` range, in every build profile.
    pub fn shift(&self, dm: i32, dn: i32) -> Self { 
        self.checked_shift(dm, dn).unwrap_or_else(|| 
            panic!("exponent overflow: {self} shifted by ({dm}, {dn})")
        )
    }

    pub fn total(&self) -> i64 { 
        i64::from(self.0) + i64::from(self.1)
    }

    pub fn mono<X, Y>(&self, x: X, y: Y) -> String
    where X: Display, Y: Display { 
        let x = fmt_mono(&x.to_string(), self.0, true);
        let y = fmt_mono(&y.to_string(), self.1, true);

        match (x.as_str(), y.as_str()) {
            ("1", "1") => "1".to_string(),
            ( _ , "1") => x,
            ("1",  _ ) => y,
            _          => format!("{x}{y}")
        }
    }
}

impl From<(i32, i32)> for BiDeg {
    fn from(d: (i32, i32)) -> Self {
        Self(d.0, d.1)
    }
}

impl From<BiDeg> for (i32, i32) {
    fn from(d: BiDeg) -> Self {
        (d.0, d.1)
    }
}
