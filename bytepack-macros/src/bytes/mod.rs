//! Shared helpers for the `ToBytes` and `FromBytes` derives.

mod from_bytes;
mod to_bytes;

pub use from_bytes::derive_from_bytes;
pub use to_bytes::derive_to_bytes;

use proc_macro2::Span;

/// Most variants a `u8` index can address.
pub(crate) const MAX_VARIANTS: usize = 256;

/// True for fields marked `#[bytepack(skip)]`.
pub(crate) fn has_skip_attr(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("bytepack") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported bytepack attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

/// Validate `#[bytepack(...)]` on an enum variant field, where `skip` has no
/// meaning: a skipped field could not be rebuilt on decode.
pub(crate) fn check_variant_field(field: &syn::Field) -> syn::Result<()> {
    if has_skip_attr(field)? {
        return Err(syn::Error::new_spanned(
            field,
            "`#[bytepack(skip)]` is not supported on enum variant fields",
        ));
    }
    Ok(())
}

/// Reject enums whose variant index would not fit in a `u8`.
pub(crate) fn check_variant_count(input: &syn::DeriveInput, data: &syn::DataEnum) -> syn::Result<()> {
    if data.variants.len() > MAX_VARIANTS {
        return Err(syn::Error::new_spanned(
            input,
            format!(
                "bytepack derive supports at most {MAX_VARIANTS} variants, found {}",
                data.variants.len()
            ),
        ));
    }
    Ok(())
}

/// Binding names `field_0`, `field_1`, ... for tuple fields.
pub(crate) fn positional_idents(count: usize) -> Vec<syn::Ident> {
    (0..count)
        .map(|i| syn::Ident::new(&format!("field_{i}"), Span::call_site()))
        .collect()
}

/// Require `bound` on every type parameter of the deriving type.
pub(crate) fn with_bound(generics: &syn::Generics, bound: syn::TypeParamBound) -> syn::Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(bound.clone());
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_fields(input: syn::DeriveInput) -> Vec<syn::Field> {
        match input.data {
            syn::Data::Enum(data) => data
                .variants
                .into_iter()
                .flat_map(|v| v.fields.into_iter())
                .collect(),
            _ => panic!("expected an enum"),
        }
    }

    #[test]
    fn test_variant_field_skip_rejected() {
        let fields = variant_fields(syn::parse_quote! {
            enum Reading { Sample(#[bytepack(skip)] u32, u8) }
        });
        let err = check_variant_field(&fields[0]).unwrap_err();
        assert!(err.to_string().contains("not supported on enum variant fields"));
        assert!(check_variant_field(&fields[1]).is_ok());
    }

    #[test]
    fn test_variant_field_unknown_key_rejected() {
        let fields = variant_fields(syn::parse_quote! {
            enum Reading { Sample { #[bytepack(bogus)] level: u8 } }
        });
        let err = check_variant_field(&fields[0]).unwrap_err();
        assert!(err.to_string().contains("expected `skip`"));
    }

    #[test]
    fn test_struct_field_skip_accepted() {
        let input: syn::DeriveInput = syn::parse_quote! {
            struct Cached { id: u64, #[bytepack(skip)] scratch: Vec<u8> }
        };
        let syn::Data::Struct(data) = input.data else {
            panic!("expected a struct");
        };
        let skips: Vec<bool> = data
            .fields
            .iter()
            .map(|f| has_skip_attr(f).unwrap())
            .collect();
        assert_eq!(skips, [false, true]);
    }
}
