pub use crate::domain::{
    aliases::{NewAliases, UpdateAliases},
    common::{MediaRef, PathId, PathKind},
    display_screen::{DisplayScreenForm, NewDisplayScreen, UpdateDisplayScreen},
    media::{sanitize_file_name, NewMedia},
    printer::{NewPrinter, PrinterIdentity, TicketCommand, TicketForm, UpdatePrinter},
    slide::{NewSlide, SlideForm, UpdateSlide},
    slideshow::{NewSlideshow, SlideshowForm, UpdateSlideshow},
    touch_screen::{NewTouchScreen, TouchScreenForm, UpdateTouchScreen},
    video::{NewVideo, UpdateVideo, VideoForm},
};
