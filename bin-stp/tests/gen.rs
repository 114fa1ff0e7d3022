mod common;

use common::*;
use common::app::cmd::gen::Args;

type Res = Result<(), Box<dyn std::error::Error>>;

fn args(n: &str) -> Args { 
    Args { 
        n: n.to_string(),
        ..Default::default()
    }
}

#[test]
fn n3() -> Res { 
    let src = run_gen(args("3"))?;

    assert!(src.contains("const int N = 3;"));
    assert!(src.contains("const int a[] = {1,2,3};"));
    assert!(src.contains("int b[] = {1,2,3};"));
    assert!(src.contains("sum += a[i] * b[i];"));
    Ok(())
}

#[test]
fn n0() -> Res { 
    let src = run_gen(args("0"))?;

    assert!(src.contains("const int N = 0;"));
    assert!(src.contains("const int a[] = {};"));
    assert!(src.contains("int b[] = {};"));
    Ok(())
}

#[test]
fn lenient() -> Res { 
    assert_eq!(run_gen(args("abc"))?, run_gen(args("0"))?);
    assert_eq!(run_gen(args("-4"))?, run_gen(args("0"))?);
    assert_eq!(run_gen(args("12xyz"))?, run_gen(args("12"))?);
    Ok(())
}

#[test]
fn output_file() -> Res { 
    let path = std::env::temp_dir().join(format!("stp-gen-{}.cpp", std::process::id()));
    let res = run_gen(Args { 
        n: "4".to_string(),
        output: Some(path.clone()),
        ..Default::default()
    })?;

    assert!(res.is_empty());

    let src = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;

    assert!(src.contains("const int a[] = {1,2,3,4};"));
    assert!(src.ends_with("}\n"));
    Ok(())
}
