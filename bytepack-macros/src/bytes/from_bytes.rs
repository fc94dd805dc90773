//! FromBytes derive macro implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use super::{check_variant_count, check_variant_field, has_skip_attr, positional_idents, with_bound};

/// Derive the `FromBytes` trait for a struct or enum.
pub fn derive_from_bytes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = with_bound(&input.generics, syn::parse_quote!(::bytepack::FromBytes));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => {
            let (reads, constructor) = generate_fields(quote! { #name }, &data.fields, true)?;
            quote! {
                #reads
                ::core::result::Result::Ok(#constructor)
            }
        }
        Data::Enum(data) => {
            check_variant_count(input, data)?;
            generate_enum(name, data)?
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "FromBytes derive is not supported for unions.",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics ::bytepack::FromBytes for #name #ty_generics #where_clause {
            fn from_bytes(__buf: &mut ::bytepack::ByteBuffer) -> ::bytepack::Result<Self> {
                #body
            }
        }
    })
}

/// Read statements for each field plus the expression that assembles them.
///
/// `allow_skip` is false for enum variants, where `#[bytepack(skip)]` is rejected.
fn generate_fields(
    path: TokenStream2,
    fields: &Fields,
    allow_skip: bool,
) -> syn::Result<(TokenStream2, TokenStream2)> {
    let names: Vec<syn::Ident> = match fields {
        Fields::Named(named) => named.named.iter().filter_map(|f| f.ident.clone()).collect(),
        Fields::Unnamed(unnamed) => positional_idents(unnamed.unnamed.len()),
        Fields::Unit => Vec::new(),
    };

    let mut reads = Vec::with_capacity(names.len());
    for (field, var) in fields.iter().zip(&names) {
        let ty = &field.ty;
        let skip = if allow_skip {
            has_skip_attr(field)?
        } else {
            check_variant_field(field)?;
            false
        };
        if skip {
            reads.push(quote! { let #var: #ty = ::core::default::Default::default(); });
        } else {
            reads.push(quote! { let #var = <#ty as ::bytepack::FromBytes>::from_bytes(__buf)?; });
        }
    }

    let constructor = match fields {
        Fields::Named(_) => quote! { #path { #(#names),* } },
        Fields::Unnamed(_) => quote! { #path(#(#names),*) },
        Fields::Unit => quote! { #path },
    };
    Ok((quote! { #(#reads)* }, constructor))
}

fn generate_enum(name: &syn::Ident, data: &syn::DataEnum) -> syn::Result<TokenStream2> {
    let mut arms = Vec::with_capacity(data.variants.len());
    for (idx, variant) in data.variants.iter().enumerate() {
        let variant_name = &variant.ident;
        let index = idx as u8;
        let (reads, constructor) =
            generate_fields(quote! { #name::#variant_name }, &variant.fields, false)?;
        arms.push(quote! {
            #index => {
                #reads
                ::core::result::Result::Ok(#constructor)
            }
        });
    }

    Ok(quote! {
        let index = <u8 as ::bytepack::FromBytes>::from_bytes(__buf)?;
        match index {
            #(#arms)*
            _ => ::core::result::Result::Err(::bytepack::CodecError::InvalidData {
                message: "invalid enum variant index",
            }),
        }
    })
}
