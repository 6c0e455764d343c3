//! Derive macro implementation used by `phy-core`.
//!
//! `phy-derive` is an implementation detail of this workspace. The `Scale` derive expands in terms of `crate::Scale`
//! and `crate::Ratio`, so it is intended to be used by `phy-core` (or by crates that expose an identical crate-root
//! API).
//!
//! Most users should depend on `phy` instead and use the predefined scales.
//!
//! # Generated impls
//!
//! For a scale marker type `MyScale`, the derive implements:
//!
//! - `crate::Scale for MyScale`, with `RATIO` built through `crate::Ratio::new`, which reduces the fraction at
//!   compile time.
//!
//! # Attributes
//!
//! The derive reads a required `#[scale(...)]` attribute:
//!
//! - `num = 1609344`: numerator of the factor relating one unit of this scale to the base unit; a literal that is
//!   zero or negative is rejected
//! - `den = 1000` (optional, defaults to `1`): denominator of that factor; a literal `0` or a negative literal is
//!   rejected
//!
//! Non-literal expressions are checked when the ratio is evaluated: `phy-core` refuses to instantiate a quantity
//! whose scale ratio is not positive.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprLit, ExprUnary, Ident, Lit, Token, UnOp,
};

/// Derive `crate::Scale` for a zero-sized marker type.
///
/// The derive must be paired with a `#[scale(...)]` attribute providing `num` and optionally `den`.
///
/// This macro is intended for use by `phy-core`.
#[proc_macro_derive(Scale, attributes(scale))]
pub fn derive_scale(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_scale_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_scale_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let scale_attr = parse_scale_attribute(&input.attrs)?;

    let num = &scale_attr.num;
    let den = match &scale_attr.den {
        Some(den) => quote! { #den },
        None => quote! { 1 },
    };

    let expanded = quote! {
        impl #impl_generics crate::Scale for #name #ty_generics #where_clause {
            const RATIO: crate::Ratio = crate::Ratio::new(#num, #den);
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[scale(...)]` attribute.
struct ScaleAttribute {
    num: Expr,
    den: Option<Expr>,
}

impl Parse for ScaleAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut num: Option<Expr> = None;
        let mut den: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "num" => {
                    let expr: Expr = input.parse()?;
                    if matches!(literal_sign(&expr), Some(Sign::Zero | Sign::Negative)) {
                        return Err(syn::Error::new(
                            ident.span(),
                            "scale numerator must be positive",
                        ));
                    }
                    num = Some(expr);
                }
                "den" => {
                    let expr: Expr = input.parse()?;
                    match literal_sign(&expr) {
                        Some(Sign::Zero) => {
                            return Err(syn::Error::new(
                                ident.span(),
                                "scale denominator must be non-zero",
                            ));
                        }
                        Some(Sign::Negative) => {
                            return Err(syn::Error::new(
                                ident.span(),
                                "scale denominator must be positive",
                            ));
                        }
                        _ => {}
                    }
                    den = Some(expr);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let num =
            num.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `num`"))?;

        Ok(ScaleAttribute { num, den })
    }
}

enum Sign {
    Zero,
    Positive,
    Negative,
}

/// Sign of an integer literal, optionally negated. `None` for any other expression; those are checked when
/// the ratio is evaluated.
fn literal_sign(expr: &Expr) -> Option<Sign> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => match int.base10_parse::<u128>().ok()? {
            0 => Some(Sign::Zero),
            _ => Some(Sign::Positive),
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match literal_sign(expr)? {
            Sign::Zero => Some(Sign::Zero),
            Sign::Positive => Some(Sign::Negative),
            Sign::Negative => Some(Sign::Positive),
        },
        Expr::Paren(paren) => literal_sign(&paren.expr),
        _ => None,
    }
}

fn parse_scale_attribute(attrs: &[Attribute]) -> syn::Result<ScaleAttribute> {
    for attr in attrs {
        if attr.path().is_ident("scale") {
            return attr.parse_args::<ScaleAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[scale(...)] attribute",
    ))
}
