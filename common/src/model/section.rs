use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::image::Image;

/// One bilingual paragraph unit. No identity; display order is the order
/// within [`Section::contents`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub content_tr: String,
    pub content_en: String,
}

impl ContentBlock {
    pub fn content(&self, locale: Locale) -> &str {
        locale.pick(&self.content_tr, &self.content_en)
    }
}

/// An About/Mission/Vision content entity. The list endpoints may return
/// several, the site only renders the first one.
///
/// `contents` is an ordered sequence in display order; it is sliced for
/// distribution across images, never reordered. `images` may be embedded in
/// the payload or omitted, in which case they are fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title_tr: String,
    pub title_en: String,
    pub contents: Vec<ContentBlock>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Section {
    pub fn title(&self, locale: Locale) -> &str {
        locale.pick(&self.title_tr, &self.title_en)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_api_payload_shape() {
        let json = r#"{
            "id": "a1",
            "title_tr": "Hikayemiz",
            "title_en": "Our Story",
            "contents": [
                { "content_tr": "Merhaba", "content_en": "Hello" }
            ],
            "images": [
                {
                    "id": "i1",
                    "originalName": "candle.jpg",
                    "filePath": "uploads/about/candle.jpg",
                    "createdAt": "2025-01-01T00:00:00.000Z"
                }
            ],
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-02T00:00:00.000Z"
        }"#;

        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.title(Locale::Tr), "Hikayemiz");
        assert_eq!(section.title(Locale::En), "Our Story");
        assert_eq!(section.contents.len(), 1);
        assert_eq!(section.contents[0].content(Locale::En), "Hello");

        let images = section.images.unwrap();
        assert_eq!(images[0].original_name, "candle.jpg");
        assert_eq!(images[0].file_path, "uploads/about/candle.jpg");
    }

    #[test]
    fn embedded_images_are_optional() {
        let json = r#"{
            "id": "a1",
            "title_tr": "t",
            "title_en": "t",
            "contents": [],
            "createdAt": "c",
            "updatedAt": "u"
        }"#;

        let section: Section = serde_json::from_str(json).unwrap();
        assert!(section.images.is_none());
    }
}
