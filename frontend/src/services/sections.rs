//! Fetch client for the About / Mission / Vision content sections.
//!
//! The three domains are structurally identical, only the endpoint slug
//! differs, so one service covers all of them.

use gloo_console::error;

use common::model::image::Image;
use common::model::section::Section;

use crate::api::{ApiClient, ApiError};

/// Which content section a page shows. Drives the endpoint paths and the
/// static page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    About,
    Mission,
    Vision,
}

impl SectionKind {
    /// Wire slug; the API keeps the original `mision` spelling.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Mission => "mision",
            SectionKind::Vision => "vision",
        }
    }

    fn list_path(self) -> String {
        format!("/{}s/public", self.slug())
    }

    fn images_path(self, section_id: &str) -> String {
        format!("/{0}-images/public/{0}/{1}", self.slug(), section_id)
    }
}

pub struct SectionService {
    api: ApiClient,
    kind: SectionKind,
}

impl SectionService {
    pub fn new(api: ApiClient, kind: SectionKind) -> SectionService {
        SectionService { api, kind }
    }

    /// The first published section plus its images.
    ///
    /// Returns `Ok(None)` when nothing is published yet. Images embedded in
    /// the section payload are used directly; only when they are absent or
    /// empty is the by-parent-id image endpoint queried. A failed image
    /// fetch degrades to an empty list, the section text still renders.
    pub async fn load_first(&self) -> Result<Option<(Section, Vec<Image>)>, ApiError> {
        let mut sections: Vec<Section> = self.api.get_json(&self.kind.list_path()).await?;
        if sections.is_empty() {
            return Ok(None);
        }
        let section = sections.remove(0);

        let images = match &section.images {
            Some(images) if !images.is_empty() => images.clone(),
            _ => self
                .fetch_images(&section.id)
                .await
                .unwrap_or_else(|err| {
                    error!(format!(
                        "{} images could not be loaded: {err}",
                        self.kind.slug()
                    ));
                    Vec::new()
                }),
        };

        Ok(Some((section, images)))
    }

    async fn fetch_images(&self, section_id: &str) -> Result<Vec<Image>, ApiError> {
        self.api.get_json(&self.kind.images_path(section_id)).await
    }
}
