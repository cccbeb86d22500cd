//! Implementation of the `variadic!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `variadic!(|a, b, rest| body)`, arity is the number of
//!    closure parameters
//! 2. Function name + arity form: `variadic!(function_name, 3)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a, b, rest| body` the macro annotates untyped parameters
//! (`Option<_>` for slots, `Vec<_>` for the last one) and generates:
//!
//! ```text
//! {
//!     let __varity_function = |a: Option<_>, b: Option<_>, rest: Vec<_>| body;
//!     move |__varity_arguments: Vec<_>| {
//!         let (__varity_required, __varity_rest) =
//!             ::varity::variadic::spread(__varity_arguments, ::varity::variadic::Arity::of::<3>())
//!                 .into_parts();
//!         let mut __varity_required = IntoIterator::into_iter(__varity_required);
//!         let __varity_slot_0 = Option::flatten(Iterator::next(&mut __varity_required));
//!         let __varity_slot_1 = Option::flatten(Iterator::next(&mut __varity_required));
//!         __varity_function(__varity_slot_0, __varity_slot_1, __varity_rest)
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Pat, PatType, Token, Type, parse_quote, spanned::Spanned};

enum VariadicInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn variadic_impl(input: TokenStream) -> TokenStream {
    let expanded = expand(input.into()).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn expand(input: TokenStream2) -> syn::Result<TokenStream2> {
    match parse_variadic_input(input)? {
        VariadicInput::Closure(closure) => {
            let arity = closure.inputs.len();
            if arity == 0 {
                return Err(syn::Error::new(
                    closure.span(),
                    "variadic! requires a closure with at least 1 parameter for the rest list",
                ));
            }
            let closure = annotate_parameters(closure);
            Ok(generate_adapter(arity, &quote! { #closure }))
        }
        VariadicInput::FunctionWithArity { function, arity } => {
            Ok(generate_adapter(arity, &quote! { #function }))
        }
    }
}

fn parse_variadic_input(input: TokenStream2) -> syn::Result<VariadicInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(VariadicInput::Closure(closure)),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "variadic! with function name requires arity: variadic!(function_name, 2)",
        )),
        (Some(Expr::Path(function)), Some(arity), None) => Ok(VariadicInput::FunctionWithArity {
            function,
            arity: parse_arity(&arity)?,
        }),
        (Some(Expr::Closure(closure)), Some(_), None) => Err(syn::Error::new(
            closure.span(),
            "variadic! reads the arity of a closure from its parameters; remove the arity argument",
        )),
        (Some(other), _, None) => Err(syn::Error::new(
            other.span(),
            "expected a closure or a function name or path",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "variadic! requires a closure or function name with arity",
        )),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    let arity = match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "variadic! expected an integer literal for arity",
            ));
        }
    };

    if arity == 0 {
        return Err(syn::Error::new(
            expression.span(),
            "variadic! requires an arity of at least 1",
        ));
    }

    Ok(arity)
}

fn annotate_parameters(mut closure: ExprClosure) -> ExprClosure {
    let last = closure.inputs.len() - 1;

    for (index, parameter) in closure.inputs.iter_mut().enumerate() {
        if matches!(parameter, Pat::Type(_)) {
            continue;
        }
        let parameter_type: Type = if index == last {
            parse_quote!(::std::vec::Vec<_>)
        } else {
            parse_quote!(::std::option::Option<_>)
        };
        let pattern = std::mem::replace(parameter, Pat::Verbatim(TokenStream2::new()));
        *parameter = Pat::Type(PatType {
            attrs: Vec::new(),
            pat: Box::new(pattern),
            colon_token: <Token![:]>::default(),
            ty: Box::new(parameter_type),
        });
    }

    closure
}

fn generate_adapter(arity: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let arity_literal = Literal::usize_unsuffixed(arity);
    let slot_identifiers: Vec<_> = (0..arity - 1)
        .map(|index| format_ident!("__varity_slot_{}", index))
        .collect();

    let spread_call = quote! {
        ::varity::variadic::spread(
            __varity_arguments,
            ::varity::variadic::Arity::of::<#arity_literal>(),
        )
        .into_parts()
    };

    let body = if slot_identifiers.is_empty() {
        quote! {
            let (_, __varity_rest) = #spread_call;
            __varity_function(__varity_rest)
        }
    } else {
        quote! {
            let (__varity_required, __varity_rest) = #spread_call;
            let mut __varity_required = ::std::iter::IntoIterator::into_iter(__varity_required);
            #(
                let #slot_identifiers = ::std::option::Option::flatten(
                    ::std::iter::Iterator::next(&mut __varity_required),
                );
            )*
            __varity_function(#(#slot_identifiers,)* __varity_rest)
        }
    };

    quote! {
        {
            let __varity_function = #function_expression;
            move |__varity_arguments: ::std::vec::Vec<_>| {
                #body
            }
        }
    }
}
