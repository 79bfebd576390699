//! Site navigation bar with localized menu labels and the language switcher.
//!
//! The switcher rewrites only the first path segment of the current location
//! and navigates via a plain anchor, so the rest of the path survives the
//! toggle verbatim.

use yew::prelude::*;
use yew_router::components::Link;
use yew_router::scope_ext::RouterScopeExt;

use common::locale::{switch_locale_path, Locale};

use crate::app::Route;
use crate::labels;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub locale: Locale,
}

pub enum Msg {
    ToggleMenu,
}

pub struct Navbar {
    menu_open: bool,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let lang = locale.as_str().to_string();

        let current_path = ctx
            .link()
            .location()
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        let switch_href = switch_locale_path(&current_path, locale.toggled());

        let links = |class: &'static str| {
            html! {
                <>
                    <Link<Route> to={Route::About { lang: lang.clone() }} classes={class}>
                        { labels::nav_about(locale) }
                    </Link<Route>>
                    <Link<Route> to={Route::Mission { lang: lang.clone() }} classes={class}>
                        { labels::nav_mission(locale) }
                    </Link<Route>>
                    <Link<Route> to={Route::Vision { lang: lang.clone() }} classes={class}>
                        { labels::nav_vision(locale) }
                    </Link<Route>>
                    <Link<Route> to={Route::Products { lang: lang.clone() }} classes={class}>
                        { labels::nav_products(locale) }
                    </Link<Route>>
                    <Link<Route> to={Route::Contact { lang: lang.clone() }} classes={class}>
                        { labels::nav_contact(locale) }
                    </Link<Route>>
                    <a class="lang-button" href={switch_href.clone()} title="Switch Language">
                        { locale.toggled().as_str().to_uppercase() }
                    </a>
                </>
            }
        };

        html! {
            <nav class="navbar">
                <div class="nav-container">
                    <div class="logo">
                        <Link<Route> to={Route::Home { lang: lang.clone() }}>
                            { labels::brand() }
                        </Link<Route>>
                    </div>
                    <div class="menu-desktop">
                        { links("nav-link") }
                    </div>
                    <div class="menu-toggle">
                        <button onclick={ctx.link().callback(|_| Msg::ToggleMenu)}>
                            { if self.menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
                {
                    if self.menu_open {
                        html! { <div class="menu-mobile">{ links("nav-link-mobile") }</div> }
                    } else {
                        html! {}
                    }
                }
            </nav>
        }
    }
}
