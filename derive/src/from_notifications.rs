use std::collections::HashMap;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, Ident, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_notifications(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromNotifications` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromNotifications` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut methods: HashMap<Kind, TokenStream2> = HashMap::new();

    for field in fields {
        let FieldMetadata {
            name,
            ty,
            kind,
            kind_span,
            storage,
        } = field;

        let assignment = match storage {
            Storage::Option => quote! { self.#name = Some(value) },
            Storage::Vec => quote! { self.#name.push(value) },
            Storage::Handler(handler) => {
                let body = handler.body;
                let acc = &handler.inputs[0];
                let val = &handler.inputs[1];

                quote! {
                    (|#acc: &mut #ty, #val| { #body })(&mut self.#name, value)
                }
            }
        };

        let (method, value_type) = kind.signature();

        let method = quote! {
            fn #method(&mut self, value: #value_type) {
                #assignment;
            }
        };

        if methods.insert(kind, method).is_some() {
            Err(Error::new(kind_span, "Notification kinds must be unique."))?
        }
    }

    let methods = methods.into_values();
    let name = &input.ident;

    let expanded = quote! {
        impl ::posture_sense::avec::FromNotifications for #name {
            #(#methods)*
        }
    };

    Ok(expanded.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Battery,
    Posture,
    Calibration,
    Anomaly,
}

impl Kind {
    fn signature(self) -> (Ident, TokenStream2) {
        let (method, value_type) = match self {
            Self::Battery => ("add_battery_level", quote! { u8 }),
            Self::Posture => (
                "add_posture",
                quote! { ::posture_sense::sans::real_time::Posture },
            ),
            Self::Calibration => (
                "add_calibration",
                quote! { ::posture_sense::sans::calibration::Calibration },
            ),
            Self::Anomaly => (
                "add_anomaly",
                quote! { ::posture_sense::sans::anomaly::LengthAnomaly },
            ),
        };

        (Ident::new(method, proc_macro2::Span::call_site()), value_type)
    }
}

#[derive(Debug)]
enum Storage {
    Option,
    Vec,
    Handler(ExprClosure),
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    ty: Type,
    kind: Kind,
    kind_span: proc_macro2::Span,
    storage: Storage,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let Some(attr) = field
            .attrs
            .iter()
            .find(|a| a.path().is_ident("notification"))
        else {
            return Ok(None);
        };

        let NotificationAttribute {
            kind,
            kind_span,
            handler,
        } = attr.meta.require_list()?.parse_args()?;

        let storage = if let Some(handler) = handler {
            if handler.inputs.len() != 2 {
                Err(Error::new_spanned(
                    &handler,
                    "Handler closure must have two parameters.",
                ))?
            }

            Storage::Handler(handler)
        } else {
            let Type::Path(path) = &field.ty else {
                Err(Error::new_spanned(
                    &field.ty,
                    "Field must have a type annotation.",
                ))?
            };

            let Some(segment) = path.path.segments.last() else {
                Err(Error::new_spanned(
                    &path.path.segments,
                    "Field must have a type annotation.",
                ))?
            };

            if segment.ident == "Option" {
                Storage::Option
            } else if segment.ident == "Vec" {
                Storage::Vec
            } else {
                Err(Error::new_spanned(
                    &segment.ident,
                    "Field without a handler must have type `Option<T>` or `Vec<T>`.",
                ))?
            }
        };

        Ok(Some(Self {
            name,
            ty: field.ty.clone(),
            kind,
            kind_span,
            storage,
        }))
    }
}

#[derive(Debug)]
struct NotificationAttribute {
    kind: Kind,
    kind_span: proc_macro2::Span,
    handler: Option<ExprClosure>,
}

impl Parse for NotificationAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident = input.parse::<Ident>()?;

        let kind = if ident == "battery" {
            Kind::Battery
        } else if ident == "posture" {
            Kind::Posture
        } else if ident == "calibration" {
            Kind::Calibration
        } else if ident == "anomaly" {
            Kind::Anomaly
        } else {
            Err(Error::new_spanned(
                &ident,
                "Notification kind must be one of `battery`, `posture`, `calibration` or `anomaly`.",
            ))?
        };

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self {
            kind,
            kind_span: ident.span(),
            handler,
        })
    }
}
