use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Attribute, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Returns true if one of the attributes is a `#[repr(C, ..)]`.
fn has_repr_c(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut is_c = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") {
                is_c = true;
            } else if meta.input.peek(syn::token::Paren) {
                // align(N), packed(N): skip the arguments
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream2 = content.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(is_c)
}

/// Derive macro for singly linked list nodes.
///
/// The struct must be `#[repr(C)]` and have exactly two named fields: `link`
/// (a `SingleLink`, declared first) and `data`. The list casts link pointers
/// back to node pointers, which is only sound with that layout.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path: TokenStream2 = quote! { ::mola_slist };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    match has_repr_c(&input.attrs) {
        Ok(true) => {}
        Ok(false) => {
            return syn::Error::new_spanned(struct_name, "Node structs must be #[repr(C)]")
                .to_compile_error()
                .into();
        }
        Err(e) => return e.to_compile_error().into(),
    }

    let traits_path = quote! { #crate_path::linked_list::traits };

    let mut link_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for (position, field) in fields.named.iter().enumerate() {
            if let Some(ident) = &field.ident {
                match ident.to_string().as_str() {
                    "link" if position == 0 => link_field = Some(field.clone()),
                    "link" => {
                        return syn::Error::new_spanned(ident, "Field 'link' must be declared first")
                            .to_compile_error()
                            .into();
                    }
                    "data" => data_field = Some(field.clone()),
                    _ => {
                        return syn::Error::new_spanned(
                            ident,
                            "Unexpected field name: expected 'link' or 'data'",
                        )
                        .to_compile_error()
                        .into();
                    }
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let data_field = match data_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'data'")
                .to_compile_error()
                .into();
        }
    };
    let link_type = &link_field.ty;
    let data_type = &data_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        match path.segments.last() {
            Some(segment) => segment.ident.clone(),
            None => {
                return syn::Error::new_spanned(link_type, "Field 'link' must be a Link type")
                    .to_compile_error()
                    .into();
            }
        }
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a Link type")
            .to_compile_error()
            .into();
    };

    if type_ident != "SingleLink" {
        return syn::Error::new_spanned(type_ident, "Field 'link' must be a 'SingleLink'")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        impl #impl_generics #traits_path::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                <#link_type as #traits_path::Link>::next(&self.link).map(|n| n.cast())
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                <#link_type as #traits_path::Link>::set_next(&mut self.link, next.map(|n| n.cast()));
            }
        }

        impl #impl_generics #traits_path::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn into_data(self) -> Self::Data {
                self.data
            }
        }
    };

    TokenStream::from(expanded)
}
