mod derive_impl;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Fill a struct from single letter options, see `oldopt::Opts`
#[proc_macro_derive(Opts, attributes(opt))]
pub fn opts_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let span = input.ident.span();
    derive_impl::opts_derive_impl(input)
        .unwrap_or_else(|err| derive_impl::compile_error(err, span))
        .into()
}
