pub(crate) mod constants;
pub(crate) mod palette;
pub(crate) mod render;
