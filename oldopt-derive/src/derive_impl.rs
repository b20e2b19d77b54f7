use anyhow::{bail, Result};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{
    self, parse::ParseStream, Attribute, Data, DataStruct, DeriveInput, Expr, Fields, LitChar,
    LitStr, Token, Type,
};

struct OptAttribute {
    // None for `rest`
    letter: Option<char>,
    default: Option<Expr>,
    flags: Option<LitStr>,
}

enum OptKind {
    // `bool` field, set if the letter is present
    Flag(char),
    // Anything implementing `OptValue`
    Value(char),
    // `u32` mask decoded from a comma separated list
    Bits(char, LitStr),
    // Positional arguments
    Rest,
}

struct Opt {
    ident: Ident,
    kind: OptKind,
    default: Option<Expr>,
    doc: Option<String>,
}

impl Opt {
    // Left column of the help line
    fn synopsis(&self) -> String {
        match &self.kind {
            OptKind::Flag(letter) => format!("-{letter}"),
            OptKind::Value(letter) => {
                format!("-{letter} {}", self.ident.to_string().replace('_', "-"))
            }
            OptKind::Bits(letter, flags) => format!("-{letter} [no-]{{{}}}", flags.value()),
            OptKind::Rest => format!("{}...", self.ident.to_string().to_uppercase()),
        }
    }

    fn init(&self) -> TokenStream {
        let ident = &self.ident;
        let default = match &self.default {
            // Let `default = "text"` fill `String` and `PathBuf` fields
            Some(expr @ Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(_),
                ..
            })) => quote! { ::core::convert::Into::into(#expr) },
            Some(expr) => quote! { #expr },
            None => quote! { ::core::default::Default::default() },
        };
        match &self.kind {
            OptKind::Flag(letter) => quote! {
                #ident: __oldopt_usage.opt_b(#letter),
            },
            OptKind::Value(letter) => quote! {
                #ident: __oldopt_usage.opt(#letter, #default),
            },
            OptKind::Bits(letter, flags) => quote! {
                #ident: __oldopt_usage.opt_csf(#letter, #default, #flags),
            },
            OptKind::Rest => quote! {
                #ident: __oldopt_usage
                    .opt_l()
                    .iter()
                    .map(|__oldopt_arg| ::core::convert::AsRef::<str>::as_ref(__oldopt_arg).into())
                    .collect(),
            },
        }
    }
}

fn parse_opt_attribute(attr: &Attribute) -> syn::Result<OptAttribute> {
    attr.parse_args_with(|input: ParseStream| {
        let mut parsed = OptAttribute {
            letter: None,
            default: None,
            flags: None,
        };

        if input.peek(LitChar) {
            parsed.letter = Some(input.parse::<LitChar>()?.value());
        } else {
            let ident: Ident = input.parse()?;
            if ident != "rest" {
                return Err(syn::Error::new(
                    ident.span(),
                    "expected an option letter or `rest`",
                ));
            }
        }

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            if key == "default" {
                parsed.default = Some(input.parse()?);
            } else if key == "flags" {
                parsed.flags = Some(input.parse()?);
            } else {
                return Err(syn::Error::new(key.span(), "unknown argument to attribute"));
            }
        }

        Ok(parsed)
    })
}

// Doc comment lines joined, with the space after `///` removed
fn parse_doc(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
        let syn::Meta::NameValue(ref pair) = attr.meta else {
            bail!("Expected name-value pair attribute (i.e. doc comment)");
        };
        let syn::Expr::Lit(ref value) = pair.value else {
            bail!("Expected literal attribute value (i.e. doc comment)");
        };
        let syn::Lit::Str(ref value) = value.lit else {
            bail!("Expected str literal attribute value (i.e. doc comment)");
        };
        let line = value.value();
        lines.push(line.strip_prefix(' ').unwrap_or(&line).to_owned());
    }
    Ok((!lines.is_empty()).then(|| lines.join("\n")))
}

fn is_type(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name),
        _ => false,
    }
}

fn parse_field(field: &syn::Field) -> Result<Opt> {
    let Some(ident) = field.ident.clone() else {
        bail!("expected a named field");
    };

    let mut attrs = field.attrs.iter().filter(|attr| attr.path().is_ident("opt"));
    let Some(attr) = attrs.next() else {
        bail!("field `{ident}` needs an #[opt(...)] attribute");
    };
    if attrs.next().is_some() {
        bail!("Was not expecting two opt attributes on `{ident}`!");
    }
    let attr = parse_opt_attribute(attr)?;

    let kind = match (attr.letter, attr.flags) {
        (None, None) => OptKind::Rest,
        (None, Some(_)) => bail!("`flags` needs an option letter on `{ident}`"),
        (Some(letter), Some(flags)) => OptKind::Bits(letter, flags),
        (Some(letter), None) if is_type(&field.ty, "bool") => OptKind::Flag(letter),
        (Some(letter), None) => OptKind::Value(letter),
    };
    if attr.default.is_some() && matches!(kind, OptKind::Flag(_) | OptKind::Rest) {
        bail!("`{ident}` cannot have a default");
    }

    Ok(Opt {
        ident,
        kind,
        default: attr.default,
        doc: parse_doc(&field.attrs)?,
    })
}

fn usage_text(description: Option<String>, opts: &[Opt]) -> String {
    let synopses: Vec<String> = opts.iter().map(Opt::synopsis).collect();
    let indent = synopses.iter().map(String::len).max().unwrap_or(0) + 2;

    let mut lines = Vec::new();
    for (opt, synopsis) in opts.iter().zip(synopses) {
        let line = format!("  {synopsis:indent$}{}", opt.doc.as_deref().unwrap_or(""));
        lines.push(line.trim_end().to_owned());
    }

    match description {
        Some(description) if lines.is_empty() => description,
        Some(description) => format!("{description}\n\n{}", lines.join("\n")),
        None => lines.join("\n"),
    }
}

/// Report `err` at its own span if it came from `syn`, otherwise at `fallback`
pub fn compile_error(err: anyhow::Error, fallback: Span) -> TokenStream {
    match err.downcast::<syn::Error>() {
        Ok(err) => err.to_compile_error(),
        Err(err) => syn::Error::new(fallback, err).to_compile_error(),
    }
}

pub fn opts_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields,
        _ => bail!("expected a struct with named fields"),
    };

    let opts = fields
        .named
        .iter()
        .map(parse_field)
        .collect::<Result<Vec<_>>>()?;

    let usage = usage_text(parse_doc(&input.attrs)?, &opts);
    let inits = opts.iter().map(Opt::init);

    Ok(quote! {
        impl #impl_generics ::oldopt::Opts for #struct_name #ty_generics #where_clause {
            const USAGE: &'static str = #usage;

            fn from_usage<__S, __H>(__oldopt_usage: &::oldopt::Usage<'_, __S, __H>) -> Self
            where
                __S: ::core::convert::AsRef<str>,
                __H: ::oldopt::help::HelpHook,
            {
                Self {
                    #(#inits)*
                }
            }
        }
    })
}
