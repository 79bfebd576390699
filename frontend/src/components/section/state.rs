//! State container for the section page.

use std::cell::Cell;
use std::rc::Rc;

use common::model::image::Image;
use common::model::section::Section;

use crate::api::ApiClient;

/// Runtime state of the section page.
///
/// Fields are `pub` because they are accessed by the `update` and `view`
/// modules.
pub struct SectionPage {
    /// Shared HTTP client, taken from context at creation.
    pub api: ApiClient,

    /// The fetched section entity. `None` renders the loading placeholder;
    /// failed fetches leave it `None` indefinitely.
    pub section: Option<Section>,

    /// Images paired with the section, in display order.
    pub images: Vec<Image>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// Validity token of the fetch currently in flight. A spawned fetch
    /// captures the token it started with and checks it before committing
    /// its result; `reset` (kind change) and `destroy` clear the old token,
    /// so a late response for a previous kind or a discarded view is
    /// dropped instead of rendered.
    pub fetch_guard: Rc<Cell<bool>>,
}

impl SectionPage {
    pub fn new(api: ApiClient) -> SectionPage {
        SectionPage {
            api,
            section: None,
            images: Vec::new(),
            loaded: false,
            fetch_guard: Rc::new(Cell::new(true)),
        }
    }

    /// Back to the loading state, used when the page is reused for another
    /// section kind. Invalidates any fetch still in flight and issues a
    /// fresh token for the next one.
    pub fn reset(&mut self) {
        self.section = None;
        self.images.clear();
        self.fetch_guard.set(false);
        self.fetch_guard = Rc::new(Cell::new(true));
    }
}
