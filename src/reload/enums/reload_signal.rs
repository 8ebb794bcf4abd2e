use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReloadSignal {
    #[default]
    hangup,
    user_defined1,
    user_defined2,
}
