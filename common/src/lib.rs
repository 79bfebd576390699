pub mod distribute;
pub mod locale;
pub mod model;
pub mod paths;
