// Runs `$app::<R>` with `R` chosen by `$args.int_type`.
macro_rules! dispatch_int {
    ($app:ident, $args:expr) => {{
        type Big = num_bigint::BigInt;

        match $args.int_type { 
            IntType::I64    => $app::<i64>::new($args.clone()).run(),
            IntType::I128   => $app::<i128>::new($args.clone()).run(),
            IntType::BigInt => $app::<Big>::new($args.clone()).run(),
        }
    }};
}

pub(crate) use dispatch_int;
