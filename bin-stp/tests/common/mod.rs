#![allow(unused)]
#[path = "../../src/app/mod.rs"]
pub mod app;

use app::{App, CliArgs, Cmd};
use app::cmd::{gen, step};

pub fn run_step(args: step::Args) -> Result<String, Box<dyn std::error::Error>> { 
    let args = CliArgs { command: Cmd::Step(args) };
    App::new_with(args).run()
}

pub fn run_gen(args: gen::Args) -> Result<String, Box<dyn std::error::Error>> { 
    let args = CliArgs { command: Cmd::Gen(args) };
    App::new_with(args).run()
}
