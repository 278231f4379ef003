use proc_macro::TokenStream;
use quote::quote;

/// Generate a three component color model.
///
/// The fields of the struct are made private so that the only way to build a
/// model is through its (clamping) constructor. Each field gets a getter that
/// carries the field's documentation, and the model can be taken apart into a
/// tuple with `components()` or `From`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Model components must be named fields.");
        }
        .into();
    };

    let mut field_names = Vec::with_capacity(3);
    let mut field_types = Vec::with_capacity(3);
    let mut getters = Vec::with_capacity(3);

    for field in named.named.iter_mut() {
        // Components are only reachable through the getters.
        field.vis = syn::Visibility::Inherited;

        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let ty = field.ty.clone();

        let docs = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .collect::<Vec<_>>();
        let docs = if docs.is_empty() {
            let text = format!(" Return the {} component of the color.", ident);
            quote! { #[doc = #text] }
        } else {
            quote! { #(#docs)* }
        };

        getters.push(quote! {
            #docs
            #[inline]
            pub fn #ident(&self) -> #ty {
                self.#ident
            }
        });

        field_names.push(ident);
        field_types.push(ty);
    }
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];
    let ty1 = &field_types[0];
    let ty2 = &field_types[1];
    let ty3 = &field_types[2];

    // Add some derives.
    let attr: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    };
    input.attrs.push(attr);

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            #(#getters)*

            /// Return the three components of the color in declaration order.
            pub fn components(&self) -> (#ty1, #ty2, #ty3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for (#ty1, #ty2, #ty3) #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.components()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
