pub mod aliases;
pub mod display_store;
pub mod media;
pub mod printer;
pub mod slides;
pub mod slides_c;
pub mod touch_store;
pub mod vid;

const INIT_MEDIA_ORDER: i32 = 0;
const INIT_SETTINGS_ORDER: i32 = INIT_MEDIA_ORDER + 1;
const INIT_SLIDES_ORDER: i32 = INIT_SETTINGS_ORDER + 1;
