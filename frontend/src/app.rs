use yew::{html, Component, Context, ContextProvider, Html};
use yew_router::prelude::*;

use common::locale::Locale;

use crate::api::ApiClient;
use crate::components::contact::ContactPage;
use crate::components::footer::Footer;
use crate::components::home::HomePage;
use crate::components::navbar::Navbar;
use crate::components::products::ProductsPage;
use crate::components::section::SectionPage;
use crate::labels;
use crate::services::sections::SectionKind;

/// Route tree of the site. Every page lives under a language prefix; the
/// `mision` spelling matches the live URLs of the original site.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Home { lang: String },
    #[at("/:lang/about")]
    About { lang: String },
    #[at("/:lang/mision")]
    Mission { lang: String },
    #[at("/:lang/vision")]
    Vision { lang: String },
    #[at("/:lang/products")]
    Products { lang: String },
    #[at("/:lang/contact")]
    Contact { lang: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub struct App {
    api: ApiClient,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // Fails fast when the build carried no API base URL.
        App {
            api: ApiClient::from_env(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<ApiClient> context={self.api.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ApiClient>>
        }
    }
}

/// Resolves the locale once per navigation and renders the matched page with
/// the shared navbar. Leaf components receive the locale as a plain prop and
/// never re-parse the path.
fn switch(route: Route) -> Html {
    let locale = match &route {
        Route::Root => {
            return html! {
                <Redirect<Route> to={Route::Home { lang: Locale::Tr.as_str().to_string() }} />
            };
        }
        Route::Home { lang }
        | Route::About { lang }
        | Route::Mission { lang }
        | Route::Vision { lang }
        | Route::Products { lang }
        | Route::Contact { lang } => Locale::from_segment(lang).unwrap_or(Locale::Tr),
        Route::NotFound => Locale::Tr,
    };

    let page = match &route {
        Route::Root => html! {},
        Route::Home { .. } => html! { <HomePage {locale} /> },
        Route::About { .. } => html! { <SectionPage kind={SectionKind::About} {locale} /> },
        Route::Mission { .. } => html! { <SectionPage kind={SectionKind::Mission} {locale} /> },
        Route::Vision { .. } => html! { <SectionPage kind={SectionKind::Vision} {locale} /> },
        Route::Products { .. } => html! { <ProductsPage {locale} /> },
        Route::Contact { .. } => html! { <ContactPage {locale} /> },
        Route::NotFound => html! { <p class="not-found">{ labels::not_found(locale) }</p> },
    };

    html! {
        <>
            <Navbar {locale} />
            <main>{ page }</main>
            <Footer {locale} />
        </>
    }
}
