pub trait IntoDigits: Sized { 
    type Digit;

    // most significant digit first.
    fn into_digits(self) -> Vec<Self::Digit> { 
        let mut ds = self.into_rev_digits();
        ds.reverse();
        ds
    }

    fn into_rev_digits(self) -> Vec<Self::Digit>;
}

macro_rules! impl_into_digits {
    ($t: ty) => {
        impl IntoDigits for $t { 
            type Digit = u8;

            fn into_rev_digits(self) -> Vec<u8> {
                if self == 0 { return vec![0] }

                let mut num = self;
                let mut res = vec![];
                while num > 0 { 
                    res.push((num % 10) as u8);
                    num /= 10;
                }
                res
            }
        }
    };
}

impl_into_digits!(usize);
impl_into_digits!(u64);

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn zero() { 
        assert_eq!(0usize.into_digits(), vec![0]);
        assert_eq!(0u64.into_rev_digits(), vec![0]);
    }

    #[test]
    fn digits() { 
        let a: usize = 90210;
        assert_eq!(a.into_digits(), vec![9,0,2,1,0]);
        assert_eq!(a.into_rev_digits(), vec![0,1,2,0,9]);
    }
}
