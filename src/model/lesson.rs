use serde::{Deserialize, Serialize};

/// A lesson as served by the lessons API.
///
/// `spaces` is the remaining purchasable capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub location: String,
    pub price: f64,
    pub spaces: u32,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Lesson {
    /// Creates a new Lesson instance.
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier
    /// * `subject` - Subject name shown to the user
    /// * `location` - Where the lesson takes place
    /// * `price` - Price per space
    /// * `spaces` - Remaining capacity
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        location: impl Into<String>,
        price: f64,
        spaces: u32,
    ) -> Self {
        let id = id.into();
        Self {
            image: format!("{id}.jpg"),
            id,
            subject: subject.into(),
            location: location.into(),
            price,
            spaces,
            icon: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_uses_mongo_style_id() {
        let json = r#"{"_id":"l1","subject":"Music","location":"Hendon","price":80,"spaces":5,"image":"music.png"}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.id, "l1");
        assert_eq!(lesson.price, 80.0);
        assert_eq!(lesson.icon, None);

        let back = serde_json::to_value(&lesson).unwrap();
        assert_eq!(back["_id"], "l1");
        assert!(back.get("icon").is_none());
    }
}
