//! Emits a C++ program that keeps `1, 2, ..., N` both as a constant array and 
//! as a local array, and prints their dot product `1² + 2² + ... + N²`.

use std::fmt::Display;
use std::num::ParseIntError;
use itertools::Itertools;
use log::warn;
use num_bigint::BigInt;
use regex::Regex;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct ConstArray { 
    n: usize
}

impl ConstArray { 
    pub fn new(n: usize) -> Self { 
        Self { n }
    }

    /// Reads the leading integer of `s`, in the way a shell script would 
    /// coerce its argument:
    ///
    /// - leading whitespace and an optional sign are accepted, and digits 
    ///   may be separated by single underscores;
    /// - anything after the leading digits is ignored;
    /// - no leading digits reads as `0`, and a negative value is taken as `0`.
    ///
    /// Fails only if the value does not fit in `usize`.
    pub fn parse_lenient(s: &str) -> Result<Self, ParseIntError> { 
        let r = Regex::new(r"^\s*([+-]?)(\d+(?:_\d+)*)").unwrap();

        let Some(c) = r.captures(s) else { 
            warn!("no leading integer in '{s}', read as 0.");
            return Ok(Self::new(0))
        };

        let digits = c[2].replace('_', "");

        if &c[1] == "-" { 
            if digits.chars().any(|d| d != '0') { 
                warn!("negative length '{s}', read as 0.");
            }
            return Ok(Self::new(0))
        }

        let n = digits.parse::<usize>()?;
        Ok(Self::new(n))
    }

    pub fn len(&self) -> usize { 
        self.n
    }

    pub fn is_empty(&self) -> bool { 
        self.n == 0
    }

    pub fn values(&self) -> impl Iterator<Item = usize> { 
        1..=self.n
    }

    /// `{1,2,...,N}`, or `{}` when empty.
    pub fn literal(&self) -> String { 
        format!("{{{}}}", self.values().join(","))
    }

    /// The value printed by the generated program.
    pub fn expected_sum(&self) -> BigInt { 
        self.values().map(|k| { 
            let k = BigInt::from(k);
            &k * &k
        }).sum()
    }

    pub fn source(&self) -> String { 
        let n = self.n;
        let s = self.literal();

        format!(
r#"#include <cstdio>
const int N = {n};
const int a[] = {s};

int func(int b[N]) {{
  int sum = 0;
  for (int i = 0; i < N; i++) {{
    sum += a[i] * b[i];
  }}
  return sum;
}}

int main() {{
  int b[] = {s};
  printf("%d\n", func(b));
}}
"#)
    }
}

impl Display for ConstArray { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source())
    }
}
