//! Core type definitions used throughout the codebase

use std::fmt;

/// Identifier of a gun, a short run of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GunId(pub String);

impl GunId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GunId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Gun model enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GunModel {
    Elite,
    Echo,
    Mythic,
    Commander,
    Agility,
}

impl GunModel {
    pub const ALL: [GunModel; 5] = [
        GunModel::Elite,
        GunModel::Echo,
        GunModel::Mythic,
        GunModel::Commander,
        GunModel::Agility,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GunModel::Elite => "Elite",
            GunModel::Echo => "Echo",
            GunModel::Mythic => "Mythic",
            GunModel::Commander => "Commander",
            GunModel::Agility => "Agility",
        }
    }
}

impl fmt::Display for GunModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
