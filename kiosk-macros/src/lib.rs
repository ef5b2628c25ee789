mod active_value;
mod partial;
mod table;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `KioskInitializer` trait for a `DeriveIden` enum describing a table.
///
/// ```ignore
/// #[derive(DeriveIden, TableInitializer)]
/// #[table(meta(order = INIT_MEDIA_ORDER, create_table = create_media_table))]
/// pub enum Media { Table, Id, Name }
/// ```
#[proc_macro_derive(TableInitializer, attributes(table))]
pub fn derive_table_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match table::expand_derive_table_initializer(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `sea_orm::IntoActiveValue` for an enum stored through `DeriveActiveEnum`.
#[proc_macro_derive(IntoActiveValue)]
pub fn derive_into_active_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match active_value::expand_derive_into_active_value(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives `sea_orm::IntoActiveModel` for a partial-update payload.
///
/// Every field is an `Option`: `Some(v)` becomes `Set(v)` and `None` stays
/// `NotSet`. Nullable columns take `Option<Option<T>>`.
///
/// ```ignore
/// #[derive(IntoPartialActiveModel)]
/// #[partial(active_model = crate::entities::aliases::ActiveModel)]
/// pub struct UpdateAliases { pub office: Option<String> }
/// ```
#[proc_macro_derive(IntoPartialActiveModel, attributes(partial))]
pub fn derive_into_partial_active_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match partial::expand_derive_into_partial_active_model(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
