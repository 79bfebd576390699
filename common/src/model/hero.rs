use serde::{Deserialize, Serialize};

use crate::model::image::Image;
use crate::paths::clean_file_path;

/// The landing banner entity. At most one hero is active at a time; the site
/// only ever fetches the active one.
///
/// `models` holds 3D asset records the admin side can attach. They are parsed
/// for payload compatibility but the site does not render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: String,
    pub is_active: bool,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub models: Option<Vec<Image>>,
    pub created_at: String,
    pub updated_at: String,
}

impl Hero {
    /// Normalizes every attached file path (backslashes and leading slashes
    /// show up in hero uploads) so they join cleanly with the API origin.
    pub fn normalized(mut self) -> Hero {
        for asset in self.images.iter_mut().chain(self.models.iter_mut()).flatten() {
            asset.file_path = clean_file_path(&asset.file_path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(file_path: &str) -> Image {
        Image {
            id: "i".into(),
            original_name: "o".into(),
            file_path: file_path.into(),
            created_at: "c".into(),
        }
    }

    #[test]
    fn normalization_cleans_images_and_models() {
        let hero = Hero {
            id: "h".into(),
            is_active: true,
            images: Some(vec![asset(r"\uploads\hero\a.png")]),
            models: Some(vec![asset("/uploads/hero/b.obj")]),
            created_at: "c".into(),
            updated_at: "u".into(),
        }
        .normalized();

        assert_eq!(hero.images.unwrap()[0].file_path, "uploads/hero/a.png");
        assert_eq!(hero.models.unwrap()[0].file_path, "uploads/hero/b.obj");
    }

    #[test]
    fn deserializes_without_attachments() {
        let json = r#"{
            "id": "h1",
            "isActive": true,
            "createdAt": "c",
            "updatedAt": "u"
        }"#;

        let hero: Hero = serde_json::from_str(json).unwrap();
        assert!(hero.is_active);
        assert!(hero.images.is_none());
        assert!(hero.models.is_none());
    }
}
