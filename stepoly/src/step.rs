use log::trace;
use crate::{BiDeg, Coeff, SparsePoly};

/// Variant of the rewrite applied by [`step`].
///
/// Each term `v x^m y^n` sends
///
/// - `+ v n` to `(m - 1, n + 1)`, and
/// - `- v m` to `(m + 1, n - 1)`.
///
/// `Guarded` performs the first only when `m != 0` and the second only when 
/// `n != 0`. `Unguarded` always performs both, so it also writes (possibly 
/// zero) terms that `Guarded` never creates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Rule { 
    #[default]
    Guarded,
    Unguarded,
}

impl Rule { 
    fn lowers(&self, d: &BiDeg) -> bool { 
        match self { 
            Rule::Guarded   => d.m() != 0,
            Rule::Unguarded => true
        }
    }

    fn raises(&self, d: &BiDeg) -> bool { 
        match self { 
            Rule::Guarded   => d.n() != 0,
            Rule::Unguarded => true
        }
    }

    pub fn step<R>(&self, p: &SparsePoly<R>) -> SparsePoly<R>
    where R: Coeff { 
        step(p, *self)
    }
}

/// Applies `rule` to every term of `p` and sums the contributions into a new 
/// polynomial. `p` itself is left untouched.
pub fn step<R>(p: &SparsePoly<R>, rule: Rule) -> SparsePoly<R>
where R: Coeff { 
    let mut res = SparsePoly::new();

    for (d, v) in p.iter() { 
        if rule.lowers(d) { 
            let n = R::from(i64::from(d.n()));
            res.add_term(d.shift(-1, 1), &(v.clone() * &n));
        }
        if rule.raises(d) { 
            let m = R::from(i64::from(d.m()));
            res.sub_term(d.shift(1, -1), &(v.clone() * &m));
        }
    }

    trace!("step ({rule:?}): {} terms -> {} terms", p.nterms(), res.nterms());

    res
}

/// Iterates [`step`] from an initial polynomial, yielding the polynomial 
/// after each application. Never exhausts; bound it with `take`.
#[derive(Clone)]
pub struct Stepper<R> { 
    current: SparsePoly<R>,
    rule: Rule,
    prune: bool,
    taken: usize,
}

impl<R> Stepper<R>
where R: Coeff { 
    pub fn new(init: SparsePoly<R>, rule: Rule) -> Self { 
        Self { current: init, rule, prune: false, taken: 0 }
    }

    /// Starts from `{(-1, 1): 1}`.
    pub fn seeded(rule: Rule) -> Self { 
        Self::new(SparsePoly::seed(), rule)
    }

    /// Drop zero terms from each yielded polynomial.
    pub fn pruning(mut self, prune: bool) -> Self { 
        self.prune = prune;
        self
    }

    pub fn rule(&self) -> Rule { 
        self.rule
    }

    /// Number of steps taken so far.
    pub fn steps_taken(&self) -> usize { 
        self.taken
    }

    pub fn current(&self) -> &SparsePoly<R> { 
        &self.current
    }
}

impl<R> Iterator for Stepper<R>
where R: Coeff { 
    type Item = SparsePoly<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = step(&self.current, self.rule);
        if self.prune { 
            next.prune();
        }

        self.taken += 1;
        self.current = next.clone();

        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use super::*;

    type P = SparsePoly<i64>;

    fn poly<const N: usize>(terms: [(i32, i32, i64); N]) -> P { 
        terms.into_iter().map(|(m, n, r)| (BiDeg(m, n), r)).collect()
    }

    #[test]
    fn first_step() { 
        let p = P::seed();
        let q = poly([(-2, 2, 1), (0, 0, 1)]);

        assert_eq!(step(&p, Rule::Unguarded), q);
        assert_eq!(step(&p, Rule::Guarded), q);
        assert_eq!(p, P::seed());
    }

    #[test]
    fn empty() { 
        let p = P::new();
        assert!(step(&p, Rule::Guarded).is_empty());
        assert!(step(&p, Rule::Unguarded).is_empty());
    }

    #[test]
    fn guard_on_m() { 
        let p = poly([(0, 2, 3)]);

        let q = step(&p, Rule::Unguarded);
        assert_eq!(q, poly([(-1, 3, 6), (1, 1, 0)]));

        let q = step(&p, Rule::Guarded);
        assert_eq!(q, poly([(1, 1, 0)]));
    }

    #[test]
    fn guard_on_n() { 
        let p = poly([(2, 0, 3)]);

        let q = step(&p, Rule::Unguarded);
        assert_eq!(q, poly([(1, 1, 0), (3, -1, -6)]));

        let q = step(&p, Rule::Guarded);
        assert_eq!(q, poly([(1, 1, 0)]));
    }

    #[test]
    fn constant_term() { 
        let p = poly([(0, 0, 5)]);
        assert_eq!(step(&p, Rule::Unguarded), poly([(-1, 1, 0), (1, -1, 0)]));
        assert!(step(&p, Rule::Guarded).is_empty());
    }

    #[test]
    fn contributions_are_summed() { 
        // both (-1, 1) and (1, -1) land on (0, 0).
        let p = poly([(1, -1, 2), (-1, 1, 3)]);
        let q = step(&p, Rule::Guarded);

        assert_eq!(q.coeff(&BiDeg(0, 0)), &(2 * -1 + 3));
        assert_eq!(q.coeff(&BiDeg(-2, 2)), &3);
        assert_eq!(q.coeff(&BiDeg(2, -2)), &-2);
        assert_eq!(q.nterms(), 3);
    }

    #[test]
    fn linear() { 
        let p = poly([(-1, 1, 2), (0, 3, -1), (4, 0, 7)]);
        let q = poly([(2, 2, 1), (0, 3, 5), (0, 0, 3)]);

        for rule in [Rule::Guarded, Rule::Unguarded] { 
            let lhs = step(&(&p + &q), rule).pruned();
            let rhs = (step(&p, rule) + step(&q, rule)).pruned();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn rule_step() { 
        let p = P::seed();
        assert_eq!(Rule::Unguarded.step(&p), step(&p, Rule::Unguarded));
        assert_eq!(Rule::default(), Rule::Guarded);
    }

    #[test]
    fn golden_unguarded() { 
        let ps = Stepper::<i64>::seeded(Rule::Unguarded).take(5).collect::<Vec<_>>();

        assert_eq!(ps[0], poly([(-2, 2, 1), (0, 0, 1)]));
        assert_eq!(ps[1], poly([(-3, 3, 2), (-1, 1, 2), (1, -1, 0)]));
        assert_eq!(ps[2], poly([(-4, 4, 6), (-2, 2, 8), (0, 0, 2), (2, -2, 0)]));
        assert_eq!(ps[3], poly([(-5, 5, 24), (-3, 3, 40), (-1, 1, 16), (1, -1, 0), (3, -3, 0)]));
        assert_eq!(ps[4], poly([(-6, 6, 120), (-4, 4, 240), (-2, 2, 136), (0, 0, 16), (2, -2, 0), (4, -4, 0)]));
    }

    #[test]
    fn golden_guarded() { 
        let ps = Stepper::<i64>::seeded(Rule::Guarded).take(5).collect::<Vec<_>>();

        assert_eq!(ps[0], poly([(-2, 2, 1), (0, 0, 1)]));
        assert_eq!(ps[1], poly([(-3, 3, 2), (-1, 1, 2)]));
        assert_eq!(ps[2], poly([(-4, 4, 6), (-2, 2, 8), (0, 0, 2)]));
        assert_eq!(ps[3], poly([(-5, 5, 24), (-3, 3, 40), (-1, 1, 16)]));
        assert_eq!(ps[4], poly([(-6, 6, 120), (-4, 4, 240), (-2, 2, 136), (0, 0, 16)]));
    }

    #[test]
    fn golden_sums() { 
        let sums: [i64; 5] = [2, 4, 16, 80, 512];

        for rule in [Rule::Guarded, Rule::Unguarded] { 
            let res = Stepper::<i64>::seeded(rule).take(5).map(|p| p.coeff_sum()).collect::<Vec<_>>();
            assert_eq!(res, sums);
        }
    }

    #[test]
    fn variants_agree_after_pruning() { 
        let a = Stepper::<i64>::seeded(Rule::Guarded).pruning(true);
        let b = Stepper::<i64>::seeded(Rule::Unguarded).pruning(true);

        for (p, q) in a.zip(b).take(8) { 
            assert_eq!(p, q);
        }
    }

    #[test]
    fn stepper_state() { 
        let mut s = Stepper::<i64>::seeded(Rule::Unguarded);
        assert_eq!(s.steps_taken(), 0);
        assert_eq!(s.current(), &P::seed());

        let p = s.next().unwrap();
        assert_eq!(s.steps_taken(), 1);
        assert_eq!(s.current(), &p);
        assert_eq!(s.rule(), Rule::Unguarded);

        let q = s.by_ref().take(3).last().unwrap();
        assert_eq!(s.steps_taken(), 4);
        assert_eq!(s.current(), &q);
    }

    #[test]
    #[should_panic(expected = "exponent overflow")]
    fn exponent_overflow() { 
        let p = poly([(i32::MAX, 1, 1)]);
        step(&p, Rule::Unguarded);
    }

    #[test]
    fn bigint_agrees() { 
        let a = Stepper::<i64>::seeded(Rule::Unguarded).take(12);
        let b = Stepper::<BigInt>::seeded(Rule::Unguarded).take(12);

        for (p, q) in a.zip(b) { 
            assert_eq!(p.to_string(), q.to_string());
        }
    }

    #[test]
    fn bigint_beyond_i64() { 
        // the leading coefficient of step k is k!.
        let p = Stepper::<BigInt>::seeded(Rule::Guarded).nth(29).unwrap();
        let f30: BigInt = (1..=30).map(BigInt::from).product();

        assert_eq!(p.coeff(&BiDeg(-31, 31)), &f30);
    }
}
