//! Data access for the kiosk customization tables.
//!
//! Every function takes the connection it runs on, so callers can pass the
//! pooled connection or an open transaction.

mod singleton;

pub mod aliases;
pub mod display_screen;
pub mod media;
pub mod printer;
pub mod slide;
pub mod slideshow;
pub mod touch_screen;
pub mod video;

pub use aliases::AliasesRepository;
pub use display_screen::DisplayScreenRepository;
pub use media::MediaRepository;
pub use printer::PrinterRepository;
pub use slide::SlideRepository;
pub use slideshow::SlideshowRepository;
pub use touch_screen::TouchScreenRepository;
pub use video::VideoRepository;
