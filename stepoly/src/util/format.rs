use std::fmt::Display;
use itertools::Itertools;
use num_traits::ToPrimitive;
use super::digits::IntoDigits;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// Renders `r0 x0 + r1 x1 + ...`, folding unit coefficients and the monomial "1".
pub fn lc<X, R, S>(terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: IntoIterator<Item = (X, R)>
{ 
    let mut res = String::new();

    for (k, (x, r)) in terms.into_iter().enumerate() {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = match r.strip_prefix('-') { 
            Some(r) => ("-", r.to_owned()),
            None    => ("+", r)
        };

        let term = if x == "1" {
            r
        } else if r == "1" {
            x
        } else {
            format!("{r}{x}")
        };

        if k == 0 { 
            if op == "-" { res.push('-') }
        } else { 
            res.push_str(&format!(" {op} "));
        }
        res.push_str(&term);
    }

    if res.is_empty() { 
        "0".to_string()
    } else { 
        res
    }
}

pub fn superscript<I>(i: I) -> String 
where I: ToPrimitive {
    let i = i.to_i64().unwrap_or_default();

    let (init, i) = if i >= 0 { 
        (String::new(), i as u64)
    } else { 
        ('\u{207B}'.into(), i.unsigned_abs())
    };

    i.into_digits().into_iter().fold(init, |mut res, d| {
        let c = match d { 
            1 => '\u{00B9}',
            2 => '\u{00B2}',
            3 => '\u{00B3}',
            _ => char::from_u32(('\u{2070}' as u32) + (d as u32)).unwrap_or('?')
        };
        res.push(c);
        res
    })
}

pub fn fmt_mono<I>(x: &str, d: I, unicode: bool) -> String
where I: ToPrimitive {
    let d = d.to_i64().unwrap_or_default();
    match d { 
        0 => "1".to_string(),
        1 => x.to_string(),
        _ if unicode => format!("{x}{}", superscript(d)),
        _ => format!("{x}^{d}")
    }
}

pub fn table<S, I, J, I1, I2, D, F>(head: S, rows: I1, cols: I2, entry: F) -> String
where 
    S: Display,
    I: Display,
    J: Display,
    I1: IntoIterator<Item = I>,
    I2: IntoIterator<Item = J>,
    D: Display,
    F: Fn(&I, &J) -> D
{
    use prettytable::*;

    let rows = rows.into_iter().collect_vec();
    let cols = cols.into_iter().collect_vec();

    fn row<I>(head: String, cols: I) -> Row
    where I: Iterator<Item = String> { 
        let mut cells = vec![Cell::new(head.as_str())];
        cells.extend(cols.map(|str| Cell::new(str.as_str())));
        Row::new(cells)
    }

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row(
        head.to_string(),
        cols.iter().map(|j| j.to_string())
    ));

    for i in rows.iter() { 
        table.add_row(row(
            i.to_string(),
            cols.iter().map(|j| entry(i, j).to_string())
        ));
    }

    table.to_string()
}
