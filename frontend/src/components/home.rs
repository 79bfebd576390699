//! Landing page: localized welcome heading over the active hero banner.
//!
//! The hero entity also carries 3D model attachments; they are ignored here,
//! only the first image becomes the banner background. A missing or failed
//! hero leaves the banner unstyled, the heading renders regardless.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::locale::Locale;
use common::model::hero::Hero;

use crate::api::ApiClient;
use crate::labels;
use crate::services::hero::HeroService;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub locale: Locale,
}

pub enum Msg {
    HeroLoaded(Hero),
}

pub struct HomePage {
    api: ApiClient,
    hero: Option<Hero>,
    loaded: bool,
    alive: Rc<Cell<bool>>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        HomePage {
            api: ApiClient::from_context(ctx),
            hero: None,
            loaded: false,
            alive: Rc::new(Cell::new(true)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HeroLoaded(hero) => {
                self.hero = Some(hero);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let banner_style = self
            .hero
            .as_ref()
            .and_then(|hero| hero.images.as_ref())
            .and_then(|images| images.first())
            .map(|image| {
                format!(
                    "background-image: url('{}');",
                    self.api.file_url(&image.file_path)
                )
            });

        html! {
            <section class="hero-section">
                <div class="hero-banner" style={banner_style}>
                    <h1 class="hero-title">{ labels::welcome(ctx.props().locale) }</h1>
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let service = HeroService::new(self.api.clone());
            let alive = self.alive.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match service.active().await {
                    Ok(hero) => {
                        if alive.get() {
                            link.send_message(Msg::HeroLoaded(hero));
                        }
                    }
                    Err(err) => {
                        error!(format!("hero could not be loaded: {err}"));
                    }
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}
