use serde::{Deserialize, Serialize};

use crate::models::Team;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiTeam {
    pub code: String,
    pub theme_class: String,
}

impl From<&Team> for ApiTeam {
    fn from(v: &Team) -> Self {
        ApiTeam { code: v.to_string(), theme_class: v.theme_class().to_string() }
    }
}
