//! Team input shapes

use super::ValidationError;

const MAX_TEAM_NAME_LEN: usize = 256;
const MAX_HEADQUARTERS_LEN: usize = 256;

/// Validated team name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_TEAM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_TEAM_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated headquarters location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headquarters(String);

impl Headquarters {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "headquarters",
            });
        }

        if trimmed.len() > MAX_HEADQUARTERS_LEN {
            return Err(ValidationError::TooLong {
                field: "headquarters",
                max: MAX_HEADQUARTERS_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Fully validated create shape, id not yet assigned
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: TeamName,
    pub headquarters: Headquarters,
}

/// Partial update for a team; both columns are required, so a single
/// `Option` layer is enough.
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub name: Option<TeamName>,
    pub headquarters: Option<Headquarters>,
}

impl TeamPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.headquarters.is_none()
    }
}
