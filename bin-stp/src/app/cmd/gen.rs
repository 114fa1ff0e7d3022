use std::path::PathBuf;
use log::info;
use stepoly::codegen::ConstArray;
use super::super::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let prog = match ConstArray::parse_lenient(&args.n) { 
        Ok(prog) => prog,
        Err(e) => return err!("cannot read '{}' as an array length: {e}", args.n)
    };

    info!("N = {}, expected output: {}", prog.len(), prog.expected_sum());

    let src = prog.source();

    if let Some(path) = &args.output { 
        std::fs::write(path, &src)?;
        info!("wrote: {}", path.display());
        Ok(String::new())
    } else { 
        Ok(src.trim_end().to_string())
    }
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    /// Array length. Read leniently: non-numeric input is taken as 0, and a
    /// negative value is clamped to 0, emitting `const int N = 0;` with `{}`.
    #[arg(allow_hyphen_values = true)]
    pub n: String,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
