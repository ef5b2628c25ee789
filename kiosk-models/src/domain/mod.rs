pub mod aliases;
pub mod common;
pub mod display_screen;
pub mod media;
pub mod printer;
pub mod prelude;
pub mod slide;
pub mod slideshow;
pub mod touch_screen;
pub mod video;
