//! ToBytes derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use super::{check_variant_count, check_variant_field, has_skip_attr, positional_idents, with_bound};

/// Derive the `ToBytes` trait for a struct or enum.
pub fn derive_to_bytes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = with_bound(&input.generics, syn::parse_quote!(::bytepack::ToBytes));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (body, byte_len_body) = match &input.data {
        Data::Struct(data) => generate_struct(&data.fields)?,
        Data::Enum(data) => {
            check_variant_count(input, data)?;
            generate_enum(data)?
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "ToBytes derive is not supported for unions.",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::bytepack::ToBytes for #name #ty_generics #where_clause {
            fn to_bytes(&self, __buf: &mut ::bytepack::ByteBuffer) {
                #body
            }

            fn byte_len(&self) -> ::core::option::Option<usize> {
                #byte_len_body
            }
        }
    })
}

// =============================================================================
// Struct serialization
// =============================================================================

fn generate_struct(fields: &Fields) -> syn::Result<(TokenStream2, TokenStream2)> {
    let mut writes = Vec::new();
    let mut lens = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if has_skip_attr(field)? {
            continue;
        }
        let access = match &field.ident {
            Some(ident) => quote! { self.#ident },
            None => {
                let index = syn::Index::from(i);
                quote! { self.#index }
            }
        };
        writes.push(quote! { ::bytepack::ToBytes::to_bytes(&#access, __buf); });
        lens.push(quote! { ::bytepack::ToBytes::byte_len(&#access)? });
    }
    Ok((
        quote! { #(#writes)* },
        quote! { ::core::option::Option::Some(0usize #(+ #lens)*) },
    ))
}

// =============================================================================
// Enum serialization
// =============================================================================

fn generate_enum(data: &syn::DataEnum) -> syn::Result<(TokenStream2, TokenStream2)> {
    let mut write_arms = Vec::new();
    let mut len_arms = Vec::new();

    for (idx, variant) in data.variants.iter().enumerate() {
        let variant_name = &variant.ident;
        let index = idx as u8;
        for field in &variant.fields {
            check_variant_field(field)?;
        }

        let (pattern, names): (TokenStream2, Vec<syn::Ident>) = match &variant.fields {
            Fields::Unit => (quote! { Self::#variant_name }, Vec::new()),
            Fields::Unnamed(fields) => {
                let names = positional_idents(fields.unnamed.len());
                (quote! { Self::#variant_name(#(#names),*) }, names)
            }
            Fields::Named(fields) => {
                let names: Vec<_> = fields
                    .named
                    .iter()
                    .filter_map(|f| f.ident.clone())
                    .collect();
                (quote! { Self::#variant_name { #(#names),* } }, names)
            }
        };

        write_arms.push(quote! {
            #pattern => {
                ::bytepack::ToBytes::to_bytes(&#index, __buf);
                #( ::bytepack::ToBytes::to_bytes(#names, __buf); )*
            }
        });
        len_arms.push(quote! {
            #pattern => ::core::option::Option::Some(
                1usize #(+ ::bytepack::ToBytes::byte_len(#names)?)*
            )
        });
    }

    if write_arms.is_empty() {
        // Uninhabited: no value can reach these bodies.
        return Ok((quote! { match *self {} }, quote! { match *self {} }));
    }

    Ok((
        quote! {
            match self {
                #(#write_arms)*
            }
        },
        quote! {
            match self {
                #(#len_arms),*
            }
        },
    ))
}
