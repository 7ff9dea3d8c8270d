use serde::{Deserialize, Serialize};

use crate::{types::is_blank, Error, ThemeId, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThemeFields")]
pub struct Theme {
    id: ThemeId,
    name: String,
    description: String,
    thumbnail: String,
}

#[derive(Deserialize)]
struct ThemeFields {
    id: ThemeId,
    name: String,
    description: String,
    thumbnail: String,
}

impl TryFrom<ThemeFields> for Theme {
    type Error = Error;

    fn try_from(f: ThemeFields) -> Result<Self, Self::Error> {
        Theme::with_id(f.id, f.name, f.description, f.thumbnail)
    }
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_id(0, name, description, thumbnail)
    }

    pub fn with_id(
        id: ThemeId,
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Result<Self, Error> {
        let theme = Self {
            id,
            name: name.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
        };
        theme.validate()?;
        Ok(theme)
    }

    pub fn id(&self) -> ThemeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl Validator for Theme {
    fn validate(&self) -> Result<(), Error> {
        if is_blank(&self.name) {
            return Err(Error::InvalidThemeName);
        }
        Ok(())
    }
}
