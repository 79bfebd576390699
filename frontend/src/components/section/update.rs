use yew::prelude::*;

use super::messages::Msg;
use super::state::SectionPage;

pub fn update(component: &mut SectionPage, _ctx: &Context<SectionPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded { section, images } => {
            component.section = Some(section);
            component.images = images;
            true
        }
    }
}
