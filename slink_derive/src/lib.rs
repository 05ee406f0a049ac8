use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type,
    TypePath,
};

struct AnchorAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for AnchorAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(AnchorAttribute { crate_path: path })
    }
}

/// Derive macro binding a record type to the list engine.
///
/// For every field of the struct whose type is `Link<Self>`, the macro emits
/// a zero-sized anchor type named `{Struct}{Field}Anchor` together with an
/// `Anchor` implementation projecting a record pointer to that field. The
/// projection type-checks against `Link<Self>`, so designating a field of
/// any other type is a compile error, not a runtime failure.
#[proc_macro_derive(Anchor, attributes(anchor))]
pub fn anchor_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::slink };

    for attr in &input.attrs {
        if attr.path().is_ident("anchor") {
            match attr.parse_args::<AnchorAttribute>() {
                Ok(anchor_attr) => {
                    let path = anchor_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        &fields.named
    } else {
        return syn::Error::new_spanned(
            input,
            "Anchor derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut link_fields = Vec::new();
    for field in fields.iter() {
        if let Some(ident) = &field.ident {
            if is_link_type(&field.ty) {
                link_fields.push(ident.clone());
            }
        }
    }

    if link_fields.is_empty() {
        return syn::Error::new_spanned(struct_name, "Struct must embed at least one `Link` field")
            .to_compile_error()
            .into();
    }

    let mut expanded = TokenStream2::new();
    for field_ident in link_fields {
        let anchor_name = format_ident!(
            "{}{}Anchor",
            struct_name,
            pascal_case(&field_ident.to_string())
        );
        let doc = format!(
            "Anchor for the `{}` field of [`{}`].",
            field_ident, struct_name
        );

        expanded.extend(quote! {
            #[doc = #doc]
            #vis struct #anchor_name #impl_generics (
                ::core::marker::PhantomData<fn() -> #struct_name #ty_generics>,
            ) #where_clause;

            unsafe impl #impl_generics #crate_path::traits::Anchor
                for #anchor_name #ty_generics #where_clause
            {
                type Record = #struct_name #ty_generics;

                #[inline]
                unsafe fn link(
                    record: ::core::ptr::NonNull<Self::Record>,
                ) -> ::core::ptr::NonNull<#crate_path::link::Link<Self::Record>> {
                    unsafe {
                        ::core::ptr::NonNull::new_unchecked(
                            &raw mut (*record.as_ptr()).#field_ident,
                        )
                    }
                }
            }
        });
    }

    TokenStream::from(expanded)
}

fn is_link_type(ty: &Type) -> bool {
    if let Type::Path(TypePath { path, .. }) = ty {
        path.segments
            .last()
            .is_some_and(|segment| segment.ident == "Link")
    } else {
        false
    }
}

fn pascal_case(field: &str) -> String {
    let mut out = String::new();
    let mut upper = true;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
