use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

/// `IntoActiveValue` for an active enum, so enum fields of a
/// `DeriveIntoActiveModel` payload become `Set`.
pub(crate) fn expand_derive_into_active_value(input: DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            &input,
            "IntoActiveValue can only be derived for active enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(Error::new_spanned(
            &input,
            "IntoActiveValue needs at least one variant",
        ));
    }

    let ident = &input.ident;
    Ok(quote! {
        impl sea_orm::IntoActiveValue<#ident> for #ident {
            #[inline]
            fn into_active_value(self) -> sea_orm::ActiveValue<#ident> {
                sea_orm::ActiveValue::Set(self)
            }
        }
    })
}
