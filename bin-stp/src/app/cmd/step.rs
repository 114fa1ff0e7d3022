use std::marker::PhantomData;
use itertools::Itertools;
use log::{debug, info};
use stepoly::{Coeff, Rule, SparsePoly, Stepper};
use stepoly::util::format::table;
use super::super::err::*;
use super::super::utils::*;
use super::super::utils::dispatch::dispatch_int;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_int!(App, args)
}

#[derive(Clone, Debug, clap::Args)]
pub struct Args { 
    #[arg(short, long, default_value = "guarded")]
    pub rule: RuleType,

    #[arg(short, long, default_value = "5")]
    pub steps: usize,

    /// Initial polynomial as JSON `[[m, n, coeff], ...]`. Defaults to `[[-1, 1, 1]]`.
    #[arg(short, long)]
    pub init: Option<String>,

    #[arg(short = 't', long, default_value = "i64")]
    pub int_type: IntType,

    #[arg(short, long, default_value = "map")]
    pub format: Format,

    /// Drop zero coefficients after each step.
    #[arg(short, long)]
    pub prune: bool,

    #[arg(long)]
    pub show_sum: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Default for Args { 
    fn default() -> Self {
        Self { 
            rule: RuleType::Guarded,
            steps: 5,
            init: None,
            int_type: IntType::I64,
            format: Format::Map,
            prune: false,
            show_sum: false,
            log: 0,
        }
    }
}

pub struct App<R>
where R: Coeff {
    args: Args,
    buff: String,
    _int: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff, _int: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        ensure!(self.args.steps > 0, "`steps` must be positive.");

        let init = self.init_poly()?;
        let rule: Rule = self.args.rule.into();

        info!("init: {init}");
        info!("rule: {rule:?}");

        let polys = Stepper::new(init, rule)
            .pruning(self.args.prune)
            .take(self.args.steps)
            .collect_vec();

        for (k, p) in polys.iter().enumerate() { 
            debug!("step {}: {} terms", k + 1, p.nterms());
        }

        match self.args.format { 
            Format::Map => for p in polys.iter() { 
                self.out(&p.to_string())
            },
            Format::Poly => for p in polys.iter() { 
                self.out(&p.fmt_poly('x', 'y'))
            },
            Format::Json => for p in polys.iter() { 
                let json = p.to_json()?;
                self.out(&json)
            },
            Format::Table => { 
                let t = self.table(&polys);
                self.out(&t)
            }
        }

        if self.args.show_sum { 
            let sums = polys.iter().map(|p| p.coeff_sum()).join(", ");
            self.out(&format!("sum: {sums}"));
        }

        Ok(self.flush())
    }

    fn init_poly(&self) -> Result<SparsePoly<R>, Box<dyn std::error::Error>> { 
        let Some(input) = &self.args.init else { 
            return Ok(SparsePoly::seed())
        };

        match SparsePoly::<R>::from_json(input) { 
            Ok(p) => Ok(p),
            Err(e) => err!("invalid initial polynomial '{input}': {e}")
        }
    }

    // rows: step number, cols: every degree that occurs in some step.
    fn table(&self, polys: &[SparsePoly<R>]) -> String { 
        let cols = polys.iter()
            .flat_map(|p| p.degs().cloned())
            .sorted()
            .dedup()
            .collect_vec();

        table("k", 1..=polys.len(), cols, |k, d| { 
            let p = &polys[k - 1];
            if p.contains(d) { 
                p.coeff(d).to_string()
            } else { 
                String::new()
            }
        })
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim_end().to_string()
    }
}
