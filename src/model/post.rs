use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Post {
    pub fn new(id: String, title: String, description: String) -> Self {
        Self::new_at(id, title, description, Utc::now())
    }

    pub fn new_at(
        id: String,
        title: String,
        description: String,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_at: at,
            updated_at: at,
        }
    }

    /// Apply the fields present in `patch` and refresh `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.touch();
    }

    /// Refresh `updated_at`. The new value is always strictly later than the old one.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}
