use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, Fields};

/// Derives positional indexing for an enum:
///   - `COUNT`: number of variants
///   - `to_index(&self) -> usize`: declaration order of the variant
///   - `from_index(usize) -> Option<Self>`: inverse, generated only when every variant is a unit variant
#[proc_macro_derive(ToIndex)]
pub fn derive_to_index(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as syn::DeriveInput);
    let name = &ast.ident;
    let variants = match &ast.data {
        Data::Enum(DataEnum { variants, .. }) => variants,
        _ => {
            return syn::Error::new_spanned(&ast.ident, "ToIndex can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let count = variants.len();
    let all_unit = variants.iter().all(|v| matches!(v.fields, Fields::Unit));

    let mut to_arms = Vec::new();
    let mut from_arms = Vec::new();
    for (index, variant) in variants.iter().enumerate() {
        let variant_name = &variant.ident;
        let fields = match &variant.fields {
            Fields::Named(_) => quote! { {..} },
            Fields::Unnamed(_) => quote! { (..) },
            Fields::Unit => quote! { },
        };
        to_arms.push(quote! {
            #name::#variant_name #fields => #index,
        });
        from_arms.push(quote! {
            #index => ::core::option::Option::Some(#name::#variant_name),
        });
    }

    let from_index = if all_unit {
        quote! {
            pub const fn from_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#from_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    } else {
        quote! {}
    };

    quote! {
        impl #name {
            pub const COUNT: usize = #count;

            pub const fn to_index(&self) -> usize {
                match self {
                    #(#to_arms)*
                }
            }

            #from_index
        }
    }.into()
}
