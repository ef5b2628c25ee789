use darling::{ast, util::Ignored, FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, GenericArgument, PathArguments, Result, Type};

#[derive(FromField, Debug)]
struct PartialField {
    ident: Option<syn::Ident>,
    ty: Type,
}

/// Options for #[partial(active_model = path)]; defaults to `ActiveModel` in scope.
#[derive(FromDeriveInput, Debug)]
#[darling(attributes(partial), supports(struct_named))]
struct PartialOpts {
    ident: syn::Ident,
    data: ast::Data<Ignored, PartialField>,
    #[darling(default)]
    active_model: Option<syn::Path>,
}

/// Inner type of `Option<T>`, or `None` when the field is not an `Option`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn expand_derive_into_partial_active_model(input: DeriveInput) -> Result<TokenStream> {
    let opts = PartialOpts::from_derive_input(&input)
        .map_err(|e| Error::new_spanned(&input, e.to_string()))?;

    let ident = &opts.ident;
    let active_model = opts
        .active_model
        .as_ref()
        .map(|p| quote!(#p))
        .unwrap_or_else(|| quote!(ActiveModel));

    let fields = opts
        .data
        .take_struct()
        .ok_or_else(|| Error::new_spanned(&input, "expected a struct with named fields"))?;

    let mut assigns = Vec::with_capacity(fields.len());
    for field in fields.fields {
        let Some(name) = field.ident else {
            return Err(Error::new_spanned(&input, "expected named fields"));
        };
        if option_inner(&field.ty).is_none() {
            return Err(Error::new_spanned(
                &field.ty,
                "partial payload fields must be `Option<T>`; use `Option<Option<T>>` for nullable columns",
            ));
        }
        assigns.push(quote! {
            if let ::std::option::Option::Some(value) = self.#name {
                active.#name = sea_orm::ActiveValue::Set(value);
            }
        });
    }

    Ok(quote! {
        impl sea_orm::IntoActiveModel<#active_model> for #ident {
            fn into_active_model(self) -> #active_model {
                let mut active = <#active_model as sea_orm::ActiveModelTrait>::default();
                #(#assigns)*
                active
            }
        }
    })
}
