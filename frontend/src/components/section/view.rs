//! View rendering for the section page.
//!
//! The page shows a header (static title plus the section's own title, both
//! locale-selected) followed by the distributed display sections. Sections
//! alternate orientation by index parity: even indexes put the image left,
//! odd indexes reverse the row. Until the entity resolves, a loading
//! placeholder is shown; there is no separate error visual.

use yew::prelude::*;

use common::distribute::{distribute, DisplaySection};
use common::locale::Locale;
use common::model::image::Image;

use super::state::SectionPage;
use crate::labels;

pub fn view(component: &SectionPage, ctx: &Context<SectionPage>) -> Html {
    let props = ctx.props();

    let Some(section) = &component.section else {
        return html! { <p class="loading">{ labels::loading(props.locale) }</p> };
    };

    let display_sections = distribute(&component.images, &section.contents);

    html! {
        <section class={classes!("section-page", props.kind.slug())}>
            <header class="section-header">
                <h1 class="section-title">{ labels::section_title(props.kind, props.locale) }</h1>
                <p class="section-subtitle">{ section.title(props.locale) }</p>
            </header>
            {
                for display_sections
                    .iter()
                    .enumerate()
                    .map(|(index, display)| render_display_section(component, index, display, props.locale))
            }
        </section>
    }
}

fn render_display_section(
    component: &SectionPage,
    index: usize,
    display: &DisplaySection<'_, Image>,
    locale: Locale,
) -> Html {
    let class = classes!(
        "section-content",
        (index % 2 == 1).then_some("row-reverse"),
    );

    html! {
        <div {class}>
            {
                match display.image {
                    Some(image) => html! {
                        <div class="section-image">
                            <img
                                src={component.api.file_url(&image.file_path)}
                                alt={image.original_name.clone()}
                            />
                        </div>
                    },
                    None => html! {},
                }
            }
            <div class="section-text">
                { for display.contents.iter().map(|block| html! { <p>{ block.content(locale) }</p> }) }
            </div>
        </div>
    }
}
