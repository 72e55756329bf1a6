use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the boilerplate for a color model made of three components of the
/// same type: public fields, common derives, a `new` constructor and
/// conversions to and from a `[T; 3]` array.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 || !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must have exactly 3 named fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // All components share one type so the model can be viewed as an array.
    let ty = input.fields.iter().map(|f| f.ty.clone()).next().unwrap();
    if input.fields.iter().any(|f| f.ty != ty) {
        return quote! {
            compile_error!("All components of a model must have the same type.");
        }
        .into();
    }

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components in declaration order.
            pub fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }

            /// Return a new color with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(#ty) -> #ty) -> Self {
                Self::new(f(self.#field1), f(self.#field2), f(self.#field3))
            }
        }

        impl From<[#ty; 3]> for #struct_name {
            fn from([c0, c1, c2]: [#ty; 3]) -> Self {
                Self::new(c0, c1, c2)
            }
        }

        impl From<#struct_name> for [#ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
