use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiMatchStats {
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
}
