pub mod aliases;
pub mod display_store;
pub mod media;
pub mod printer;
pub mod slides;
pub mod slides_c;
pub mod touch_store;
pub mod vid;

pub mod prelude {
    pub use super::aliases::{
        ActiveModel as AliasesActiveModel, Column as AliasesColumn, Entity as Aliases,
        Model as AliasesModel,
    };
    pub use super::display_store::{
        ActiveModel as DisplayStoreActiveModel, Column as DisplayStoreColumn,
        Entity as DisplayStore, Model as DisplayStoreModel,
    };
    pub use super::media::{
        ActiveModel as MediaActiveModel, Column as MediaColumn, Entity as Media,
        Model as MediaModel,
    };
    pub use super::printer::{
        ActiveModel as PrinterActiveModel, Column as PrinterColumn, Entity as Printer,
        Model as PrinterModel,
    };
    pub use super::slides::{
        ActiveModel as SlideActiveModel, Column as SlideColumn, Entity as Slide,
        Model as SlideModel,
    };
    pub use super::slides_c::{
        ActiveModel as SlideshowActiveModel, Column as SlideshowColumn, Entity as Slideshow,
        Model as SlideshowModel,
    };
    pub use super::touch_store::{
        ActiveModel as TouchStoreActiveModel, Column as TouchStoreColumn, Entity as TouchStore,
        Model as TouchStoreModel,
    };
    pub use super::vid::{
        ActiveModel as VideoActiveModel, Column as VideoColumn, Entity as Video,
        Model as VideoModel,
    };
}
