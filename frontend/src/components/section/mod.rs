//! Shared page component for the About, Mission and Vision sections: root
//! module wiring the Yew `Component` implementation with submodules for
//! props, state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SectionPageProps`, `SectionPage`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the section and its images; refetch when the
//!   page is reused for a different section kind. A fetch that fails or
//!   finds nothing published leaves the page on its loading placeholder.
//! - Drop stale async results. Each fetch captures the validity token it
//!   started with; switching section kind mid-flight or destroying the
//!   component clears that token, so a late About response can never land
//!   under a Mission header. Not covered by native tests (component
//!   lifecycles need a wasm harness, which the workspace does not carry).

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SectionPageProps;
pub use state::SectionPage;

use crate::api::ApiClient;
use crate::services::sections::SectionService;

impl Component for SectionPage {
    type Message = Msg;
    type Properties = SectionPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        SectionPage::new(ApiClient::from_context(ctx))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // A locale change re-renders with the data already held; only a
        // different section kind needs a fresh fetch.
        if ctx.props().kind != old_props.kind {
            self.reset();
            fetch_section(self, ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_section(self, ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.fetch_guard.set(false);
    }
}

fn fetch_section(component: &SectionPage, ctx: &Context<SectionPage>) {
    let kind = ctx.props().kind;
    let service = SectionService::new(component.api.clone(), kind);
    let guard = component.fetch_guard.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        match service.load_first().await {
            Ok(Some((section, images))) => {
                if guard.get() {
                    link.send_message(Msg::Loaded { section, images });
                }
            }
            // Nothing published yet; the page keeps its placeholder.
            Ok(None) => {}
            Err(err) => {
                error!(format!("{} content could not be loaded: {err}", kind.slug()));
            }
        }
    });
}
