use common::model::image::Image;
use common::model::section::Section;

pub enum Msg {
    /// Entity and image fetches both resolved. An image fetch that failed
    /// arrives here as an empty list.
    Loaded {
        section: Section,
        images: Vec<Image>,
    },
}
