use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Translations;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub platform: Platform,
    pub strategy: Strategy,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new robot record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RobotCreate {
    pub user_id: Uuid,
    pub name: String,
    pub platform: Platform,
    pub strategy: Strategy,
}

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
pub enum Platform {
    #[default]
    #[serde(rename = "MT4")]
    Mt4,
    #[serde(rename = "MT5")]
    Mt5,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Mt4, Platform::Mt5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mt4 => "MT4",
            Self::Mt5 => "MT5",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MT4" => Ok(Self::Mt4),
            "MT5" => Ok(Self::Mt5),
            _ => Err(format!("invalid platform: {}", s)),
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    TrendFollowing,
    Breakout,
    Range,
    Custom,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::TrendFollowing,
        Strategy::Breakout,
        Strategy::Range,
        Strategy::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrendFollowing => "trend_following",
            Self::Breakout => "breakout",
            Self::Range => "range",
            Self::Custom => "custom",
        }
    }

    pub fn label(&self, t: &Translations) -> &'static str {
        match self {
            Self::TrendFollowing => t.dashboard.strategy_trend_following,
            Self::Breakout => t.dashboard.strategy_breakout,
            Self::Range => t.dashboard.strategy_range,
            Self::Custom => t.dashboard.strategy_custom,
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trend_following" => Ok(Self::TrendFollowing),
            "breakout" => Ok(Self::Breakout),
            "range" => Ok(Self::Range),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("invalid strategy: {}", s)),
        }
    }
}
