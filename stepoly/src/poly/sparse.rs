use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use super::{BiDeg, Coeff};

// `SparsePoly<R>` : a bivariate polynomial stored as { (m, n) => coeff }.
//
// Terms are kept in (m, n) order. A term stays in the map once it has been 
// written, even if its coefficient is zero; call `prune` to drop those.

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SparsePoly<R> { 
    data: BTreeMap<BiDeg, R>,
    r_zero: R
}

impl<R> SparsePoly<R>
where R: Coeff { 
    pub fn new() -> Self { 
        Self { data: BTreeMap::new(), r_zero: R::zero() }
    }

    /// The starting polynomial `{(-1, 1): 1}`.
    pub fn seed() -> Self { 
        Self::from((BiDeg(-1, 1), R::from(1i64)))
    }

    /// The coefficient at `d`, zero if `d` was never written.
    pub fn coeff(&self, d: &BiDeg) -> &R { 
        self.data.get(d).unwrap_or(&self.r_zero)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BiDeg, &R)> { 
        self.data.iter()
    }

    pub fn degs(&self) -> impl Iterator<Item = &BiDeg> { 
        self.data.keys()
    }

    // get-or-insert-zero.
    fn entry(&mut self, d: BiDeg) -> &mut R { 
        self.data.entry(d).or_insert_with(R::zero)
    }

    pub fn add_term(&mut self, d: BiDeg, r: &R) { 
        self.entry(d).add_assign(r)
    }

    pub fn sub_term(&mut self, d: BiDeg, r: &R) { 
        self.entry(d).sub_assign(r)
    }

    pub fn prune(&mut self) { 
        self.data.retain(|_, r| !r.is_zero())
    }

    pub fn pruned(mut self) -> Self { 
        self.prune();
        self
    }

    /// True if every stored coefficient is zero (in particular if empty).
    pub fn is_zero(&self) -> bool { 
        self.data.values().all(|r| r.is_zero())
    }

    pub fn coeff_sum(&self) -> R { 
        self.data.values().fold(R::zero(), |mut res, r| { 
            res += r;
            res
        })
    }

    pub fn map_coeffs<S, F>(&self, f: F) -> SparsePoly<S>
    where S: Coeff, F: Fn(&R) -> S { 
        self.iter().map(|(d, r)| (*d, f(r))).collect()
    }

    /// Renders as a polynomial in `x, y`, omitting zero terms.
    pub fn fmt_poly<X, Y>(&self, x: X, y: Y) -> String
    where X: Display, Y: Display { 
        use crate::util::format::lc;

        let terms = self.iter()
            .filter(|(_, r)| !r.is_zero())
            .map(|(d, r)| (d.mono(&x, &y), r));

        lc(terms)
    }
}

impl<R> SparsePoly<R> { 
    delegate! { 
        to self.data { 
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            #[call(contains_key)]
            pub fn contains(&self, d: &BiDeg) -> bool;
        }
    }
}

impl<R> From<(BiDeg, R)> for SparsePoly<R>
where R: Coeff { 
    fn from(term: (BiDeg, R)) -> Self {
        Self::from_iter([term])
    }
}

// repeated degrees are summed.
impl<R> FromIterator<(BiDeg, R)> for SparsePoly<R>
where R: Coeff { 
    fn from_iter<T: IntoIterator<Item = (BiDeg, R)>>(iter: T) -> Self {
        let mut res = Self::new();
        for (d, r) in iter { 
            res.add_term(d, &r);
        }
        res
    }
}

impl<R> IntoIterator for SparsePoly<R> { 
    type Item = (BiDeg, R);
    type IntoIter = std::collections::btree_map::IntoIter<BiDeg, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a SparsePoly<R> { 
    type Item = (&'a BiDeg, &'a R);
    type IntoIter = std::collections::btree_map::Iter<'a, BiDeg, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<R> Display for SparsePoly<R>
where R: Display { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.data.iter().map(|(d, r)| format!("{d}: {r}")).join(", ");
        write!(f, "{{{terms}}}")
    }
}

impl<R> Debug for SparsePoly<R>
where R: Display { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Neg for SparsePoly<R>
where R: Coeff { 
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.into_iter().map(|(d, r)| (d, -r)).collect()
    }
}

#[auto_ops]
impl<R> AddAssign<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff { 
    fn add_assign(&mut self, rhs: &SparsePoly<R>) {
        for (d, r) in rhs.iter() { 
            self.add_term(*d, r);
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&SparsePoly<R>> for SparsePoly<R>
where R: Coeff { 
    fn sub_assign(&mut self, rhs: &SparsePoly<R>) {
        for (d, r) in rhs.iter() { 
            self.sub_term(*d, r);
        }
    }
}

// Serialized as `[[m, n, coeff], ...]`. Coefficients are written as JSON numbers 
// of any size, through their decimal form, so every `Coeff` type reads back the 
// same text.

#[cfg(feature = "serde")]
impl<R> serde::Serialize for SparsePoly<R>
where R: Coeff { 
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        use std::str::FromStr;
        use serde::ser::{Error, SerializeSeq};
        use serde_json::Number;

        let mut seq = serializer.serialize_seq(Some(self.nterms()))?;
        for (d, r) in self.iter() { 
            let c = Number::from_str(&r.to_string()).map_err(S::Error::custom)?;
            seq.serialize_element(&(d.0, d.1, c))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for SparsePoly<R>
where R: Coeff { 
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        use serde::Deserialize;
        use serde::de::Error;
        use serde_json::Number;

        let terms = Vec::<(i32, i32, Number)>::deserialize(deserializer)?;
        terms.into_iter().map(|(m, n, c)| { 
            let c = c.to_string();
            match R::from_str(&c) { 
                Ok(r) => Ok((BiDeg(m, n), r)),
                Err(_) => Err(D::Error::custom(format!("invalid coefficient: {c}")))
            }
        }).collect()
    }
}

#[cfg(feature = "serde")]
impl<R> SparsePoly<R>
where R: Coeff { 
    /// Parses a JSON list of `[m, n, coeff]` triples.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> { 
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> { 
        serde_json::to_string(self)
    }
}
