pub mod form;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod slideshow;
