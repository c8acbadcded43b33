use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_notifications;

#[proc_macro_derive(FromNotifications, attributes(notification))]
pub fn derive_from_notifications(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_notifications::expand_from_notifications(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
