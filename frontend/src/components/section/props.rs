use yew::prelude::*;

use common::locale::Locale;

use crate::services::sections::SectionKind;

/// Properties for the shared section page.
#[derive(Properties, PartialEq, Clone)]
pub struct SectionPageProps {
    /// Which content domain this instance renders (about, mission, vision).
    pub kind: SectionKind,
    /// Active display language, resolved from the route by the router switch.
    pub locale: Locale,
}
