use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{gen, step};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Iterate the rewrite step from an initial polynomial.
    Step(step::Args),
    /// Print the const-array dot product program for N.
    Gen(gen::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Step(args) => args.log,
            Cmd::Gen(args)  => args.log,
        };
        stepoly::util::log::level_of(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        Self::new_with(args)
    }

    pub fn new_with(args: CliArgs) -> Self { 
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> Result<(), Box<dyn std::error::Error>> {
        let l = self.args.log_level();
        if l != log::LevelFilter::Off { 
            stepoly::util::log::init_simple_logger(l)?;
        }
        Ok(())
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Step(args) => step::dispatch(args),
                Cmd::Gen(args)  => gen::dispatch(args),
            }
        )
    }
}
