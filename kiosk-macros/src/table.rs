use darling::{FromAttributes, FromMeta};
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

/// Attribute arguments for #[table(meta(...))]
#[derive(FromMeta, Clone, Debug)]
struct TableMeta {
    name: Option<String>,
    #[darling(default)]
    order: Option<syn::Path>,
    create_table: syn::Path,
    #[darling(default)]
    create_indexes: Option<syn::Path>,
}

/// Attribute wrapper for #[table(...)]
#[derive(FromAttributes, Debug)]
#[darling(attributes(table))]
struct TableOpts {
    meta: TableMeta,
}

pub(crate) fn expand_derive_table_initializer(input: DeriveInput) -> Result<TokenStream> {
    if !matches!(input.data, Data::Enum(_)) {
        return Err(Error::new_spanned(
            &input,
            "This derive macro can only be used with enums",
        ));
    }

    let opts = TableOpts::from_attributes(&input.attrs)
        .map_err(|e| Error::new_spanned(&input, e.to_string()))?;
    let meta = opts.meta;

    let ident = &input.ident;
    let name = meta
        .name
        .clone()
        .unwrap_or_else(|| ident.to_string().to_snake_case());
    let order = meta
        .order
        .as_ref()
        .map(|p| quote!(#p))
        .unwrap_or_else(|| quote!(0));
    let create_table_fn = &meta.create_table;
    let create_indexes_impl = match &meta.create_indexes {
        Some(create_fn) => quote! { #create_fn(backend) },
        None => quote! {
            let _ = backend;
            None
        },
    };

    Ok(quote! {
        impl KioskInitializer for #ident {
            fn order(&self) -> i32 {
                #order
            }

            fn name(&self) -> &str {
                #name
            }

            fn to_create_table_stmt(&self, backend: sea_orm::DatabaseBackend) -> sea_orm::sea_query::TableCreateStatement {
                #create_table_fn(backend)
            }

            fn to_drop_table_stmt(&self, _: sea_orm::DatabaseBackend) -> sea_orm::sea_query::TableDropStatement {
                use sea_orm_migration::prelude::*;
                Table::drop().table(Self::Table).if_exists().to_owned()
            }

            fn to_create_indexes_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> Option<Vec<sea_orm::sea_query::IndexCreateStatement>> {
                #create_indexes_impl
            }
        }
    })
}
