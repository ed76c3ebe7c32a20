//! Hero input shapes - validated names, create draft, partial update

use super::ValidationError;

/// Maximum length for hero names (public and secret)
const MAX_NAME_LEN: usize = 256;

/// Validated hero name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroName(String);

impl HeroName {
    /// Create a hero name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validated(s, "name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated secret identity, same rules as [`HeroName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretName(String);

impl SecretName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validated(s, "secret_name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn validated(s: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

/// Fully validated create shape, id not yet assigned
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: HeroName,
    pub secret_name: SecretName,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

/// Partial update: only fields present here overwrite stored values.
///
/// Nullable columns carry a second `Option` layer so that "set to null"
/// and "leave untouched" stay distinguishable.
#[derive(Debug, Clone, Default)]
pub struct HeroPatch {
    pub name: Option<HeroName>,
    pub secret_name: Option<SecretName>,
    pub age: Option<Option<i32>>,
    pub team_id: Option<Option<i64>>,
}

impl HeroPatch {
    /// True when the patch carries no fields (an empty PATCH body is a no-op).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.secret_name.is_none()
            && self.age.is_none()
            && self.team_id.is_none()
    }
}
