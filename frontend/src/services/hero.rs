use common::model::hero::Hero;

use crate::api::{ApiClient, ApiError};

pub struct HeroService {
    api: ApiClient,
}

impl HeroService {
    pub fn new(api: ApiClient) -> HeroService {
        HeroService { api }
    }

    /// The currently active hero, with all attachment paths normalized.
    pub async fn active(&self) -> Result<Hero, ApiError> {
        let hero: Hero = self.api.get_json("/heros/public/active").await?;
        Ok(hero.normalized())
    }
}
