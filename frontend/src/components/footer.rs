//! Site footer: copyright line and the static policy links, rendered on
//! every page below the main content.

use yew::{html, Component, Context, Html, Properties};

use common::locale::Locale;

use crate::labels;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub locale: Locale,
}

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;

        html! {
            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-left">
                        <p>{ labels::copyright(locale) }</p>
                    </div>
                    <div class="footer-right">
                        <a href="#privacy">{ labels::footer_privacy(locale) }</a>
                        <a href="#terms">{ labels::footer_terms(locale) }</a>
                        <a href="#sitemap">{ labels::footer_sitemap(locale) }</a>
                    </div>
                </div>
            </footer>
        }
    }
}
