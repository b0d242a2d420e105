//! Registration data model

use std::fmt;

use teloxide::types::{User, UserId};

use crate::core::config::limits::MAX_PHOTOS;

/// Who filled in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub id: UserId,
    pub username: Option<String>,
}

impl Submitter {
    pub fn new(id: UserId, username: Option<String>) -> Self {
        Self { id, username }
    }

    pub fn from_user(user: &User) -> Self {
        Self::new(user.id, user.username.clone())
    }
}

/// Prefers the `@handle`, falls back to the numeric id
impl fmt::Display for Submitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.username.as_deref().filter(|u| !u.is_empty()) {
            Some(username) => write!(f, "@{}", username),
            None => write!(f, "{}", self.id.0),
        }
    }
}

/// Opaque reference to a photo already stored by the gateway (a Telegram file id)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoRef(pub String);

impl From<&str> for PhotoRef {
    fn from(id: &str) -> Self {
        PhotoRef(id.to_string())
    }
}

/// A text field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Phone,
    Vehicle,
}

/// Returned by [`PhotoSet::push`] when the set is already full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoLimitReached;

/// Ordered photos of one submission, never more than [`MAX_PHOTOS`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSet(Vec<PhotoRef>);

impl PhotoSet {
    /// Appends a photo and returns the new count, or refuses without mutating when full
    pub fn push(&mut self, photo: PhotoRef) -> Result<usize, PhotoLimitReached> {
        if self.0.len() >= MAX_PHOTOS {
            return Err(PhotoLimitReached);
        }
        self.0.push(photo);
        Ok(self.0.len())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[PhotoRef] {
        &self.0
    }
}

/// Text fields collected before the photo step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub full_name: String,
    pub phone: String,
    pub vehicle_description: String,
}

/// A complete registration: all text fields set and at least one photo.
///
/// The submission time is not part of it; the forwarder stamps it when sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub phone: String,
    pub vehicle_description: String,
    photos: Vec<PhotoRef>,
    pub submitter: Submitter,
}

impl Submission {
    /// Returns `None` when `photos` is empty
    pub fn new(details: Details, photos: PhotoSet, submitter: Submitter) -> Option<Self> {
        if photos.is_empty() {
            return None;
        }
        Some(Self {
            full_name: details.full_name,
            phone: details.phone,
            vehicle_description: details.vehicle_description,
            photos: photos.0,
            submitter,
        })
    }

    /// Photos in capture order; never empty
    pub fn photos(&self) -> &[PhotoRef] {
        &self.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn details() -> Details {
        Details {
            full_name: "Ivan Petrov".to_string(),
            phone: "+79991234567".to_string(),
            vehicle_description: "Lada Niva 1988".to_string(),
        }
    }

    #[test]
    fn test_photo_set_refuses_fourth_photo() {
        let mut photos = PhotoSet::default();
        assert_eq!(photos.push("a".into()), Ok(1));
        assert_eq!(photos.push("b".into()), Ok(2));
        assert_eq!(photos.push("c".into()), Ok(3));
        assert_eq!(photos.push("d".into()), Err(PhotoLimitReached));
        assert_eq!(photos.len(), 3);
        assert_eq!(photos.as_slice().last(), Some(&PhotoRef::from("c")));
    }

    #[test]
    fn test_submission_requires_a_photo() {
        let submitter = Submitter::new(UserId(7), None);
        assert_eq!(Submission::new(details(), PhotoSet::default(), submitter.clone()), None);

        let mut photos = PhotoSet::default();
        photos.push("first".into()).unwrap();
        photos.push("second".into()).unwrap();
        let submission = Submission::new(details(), photos, submitter).unwrap();
        assert_eq!(submission.photos(), [PhotoRef::from("first"), PhotoRef::from("second")]);
        assert_eq!(submission.full_name, "Ivan Petrov");
    }

    #[test]
    fn test_submitter_display_prefers_username() {
        assert_eq!(Submitter::new(UserId(42), Some("ivan".into())).to_string(), "@ivan");
        assert_eq!(Submitter::new(UserId(42), None).to_string(), "42");
        assert_eq!(Submitter::new(UserId(42), Some(String::new())).to_string(), "42");
    }
}
