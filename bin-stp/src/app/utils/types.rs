use clap::ValueEnum;
use derive_more::Display;
use stepoly::Rule;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum RuleType { 
    #[default] Guarded, 
    Unguarded
}

impl From<RuleType> for Rule { 
    fn from(r: RuleType) -> Self {
        match r { 
            RuleType::Guarded   => Rule::Guarded,
            RuleType::Unguarded => Rule::Unguarded,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum IntType { 
    #[default] I64, 
    I128, 
    BigInt
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format { 
    #[default] Map, 
    Poly,
    Json,
    Table
}
