use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Team {
    RCB,
    KKR,
    KXP,
    CSK,
    RR,
    MI,
    SH,
    DC,
}

impl Team {
    pub fn get_all() -> Vec<Team> {
        vec![Team::RCB, Team::KKR, Team::KXP, Team::CSK, Team::RR, Team::MI, Team::SH, Team::DC]
    }

    pub fn theme_class(&self) -> &'static str {
        match self {
            Team::RCB => "rcb",
            Team::KKR => "kkr",
            Team::KXP => "kxp",
            Team::CSK => "csk",
            Team::RR => "rr",
            Team::MI => "mi",
            Team::SH => "srh",
            Team::DC => "dc",
        }
    }

    /// Total over arbitrary codes, unrecognized ones get the empty class.
    pub fn theme_class_for(code: &str) -> String {
        code.parse::<Team>()
            .map(|e| e.theme_class().to_string())
            .unwrap_or_default()
    }
}

impl FromStr for Team {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RCB" => Ok(Team::RCB),
            "KKR" => Ok(Team::KKR),
            "KXP" => Ok(Team::KXP),
            "CSK" => Ok(Team::CSK),
            "RR" => Ok(Team::RR),
            "MI" => Ok(Team::MI),
            "SH" => Ok(Team::SH),
            "DC" => Ok(Team::DC),
            _ => Err(ParseStringError)
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;
