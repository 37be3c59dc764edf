use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the visual behaviours the engine can run on the two channel layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectKind {
    #[default]
    None,
    Breathe,
    FollowMouse,
    Glitch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown effect name `{0}` (expected none, breathe, followMouse or glitch)")]
pub struct ParseEffectError(pub String);

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        EffectKind::None,
        EffectKind::Breathe,
        EffectKind::FollowMouse,
        EffectKind::Glitch,
    ];

    #[inline]
    pub fn is_active(self) -> bool {
        self != EffectKind::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::None => "none",
            EffectKind::Breathe => "breathe",
            EffectKind::FollowMouse => "followMouse",
            EffectKind::Glitch => "glitch",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = ParseEffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(EffectKind::None),
            "breathe" => Ok(EffectKind::Breathe),
            "followMouse" | "follow-mouse" | "follow_mouse" => Ok(EffectKind::FollowMouse),
            "glitch" => Ok(EffectKind::Glitch),
            other => Err(ParseEffectError(other.to_string())),
        }
    }
}
