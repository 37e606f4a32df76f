extern crate proc_macro;
use crate::proc_macro::TokenStream;

use case::CaseExt;
use proc_macro2::{Ident, Span};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Path};

const CORE_CRATE_NAME: &str = "hub-core";

/// Implements `Model<E>` for a struct with named fields.
///
/// The environment is given with `#[model(SomeEnv)]`. The struct must have a
/// `ctx` field implementing `Update<E>`; every other field implements
/// `UpdateWithCtx<E>` and is updated after the ctx, in declaration order.
/// A `<Name>Field` enum with one variant per field is generated next to the
/// struct.
#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(error) => TokenStream::from(error.to_compile_error()),
    }
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let core = core_crate_path();
    let env = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] requires a #[model(Env)] attribute",
            )
        })?
        .parse_args::<Path>()?;
    let named = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Model)] is only defined for structs with named fields",
            ))
        }
    };
    if !named
        .iter()
        .any(|field| field.ident.as_ref().map_or(false, |ident| ident == "ctx"))
    {
        return Err(syn::Error::new(
            input.ident.span(),
            "#[derive(Model)] requires a `ctx` field",
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let field_enum = Ident::new(&format!("{name}Field"), name.span());
    let fields = named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .filter(|ident| *ident != "ctx")
        .map(|ident| {
            let variant = Ident::new(&ident.to_string().to_camel(), ident.span());
            let effects = Ident::new(&format!("{ident}_effects"), Span::call_site());
            (ident, variant, effects)
        })
        .collect::<Vec<_>>();

    let variants = fields.iter().map(|(_, variant, _)| variant);
    let updates = fields.iter().map(|(ident, _, effects)| {
        quote! {
            let #effects = #core::runtime::UpdateWithCtx::<#env>::update(&mut self.#ident, msg, &self.ctx);
        }
    });
    let changed_fields = fields.iter().map(|(_, variant, effects)| {
        quote! {
            if #effects.has_changed {
                fields.push(#field_enum::#variant);
            }
        }
    });
    let joins = fields.iter().map(|(_, _, effects)| {
        quote! { .join(#effects) }
    });
    let field_updates = fields.iter().map(|(ident, variant, _)| {
        quote! {
            #field_enum::#variant => #core::runtime::UpdateWithCtx::<#env>::update(&mut self.#ident, msg, &self.ctx),
        }
    });

    Ok(quote! {
        #[derive(Clone, Copy, PartialEq, Eq, Debug, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        #vis enum #field_enum {
            Ctx,
            #(#variants,)*
        }

        impl #core::runtime::Model<#env> for #name {
            type Field = #field_enum;

            fn update(
                &mut self,
                msg: &#core::runtime::msg::Msg,
            ) -> (::std::vec::Vec<#core::runtime::Effect>, ::std::vec::Vec<Self::Field>) {
                let ctx_effects = #core::runtime::Update::<#env>::update(&mut self.ctx, msg);
                #(#updates)*
                let mut fields = ::std::vec::Vec::new();
                if ctx_effects.has_changed {
                    fields.push(#field_enum::Ctx);
                }
                #(#changed_fields)*
                let effects = ctx_effects #(#joins)*;
                (effects.into_iter().collect(), fields)
            }

            fn update_field(
                &mut self,
                msg: &#core::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (::std::vec::Vec<#core::runtime::Effect>, ::std::vec::Vec<Self::Field>) {
                let effects = match field {
                    #field_enum::Ctx => #core::runtime::Update::<#env>::update(&mut self.ctx, msg),
                    #(#field_updates)*
                };
                let fields = if effects.has_changed {
                    vec![*field]
                } else {
                    vec![]
                };
                (effects.into_iter().collect(), fields)
            }
        }
    })
}

fn core_crate_path() -> proc_macro2::TokenStream {
    match crate_name(CORE_CRATE_NAME) {
        Ok(FoundCrate::Itself) => quote!(crate),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::hub_core),
    }
}
