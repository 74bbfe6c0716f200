//! Derive macros for plife.
//!
//! This crate provides:
//! - [`ParticleType`] - Turns a unit-only enum into a set of particle types
//!
//! # Usage
//!
//! The macro is re-exported from the main `plife` crate. You don't need
//! to add this crate directly:
//!
//! ```ignore
//! use plife::prelude::*;
//!
//! #[derive(ParticleType, Clone, Copy, PartialEq)]
//! enum Species {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! let mut types = ParticleTypes::for_enum::<Species>();
//! types.set_attract(Species::Red, Species::Green, 0.5)?;
//! ```
//!
//! # The ParticleType Macro
//!
//! `#[derive(ParticleType)]` lets an enum address rows and columns of a
//! `ParticleTypes` table and be stored in `Particle::typ`.
//!
//! It generates:
//! - `From<EnumName> for u32` and `From<EnumName> for u8`
//! - `From<u32> for EnumName` - Convert back (defaults to first variant)
//! - `EnumName::count() -> u32` - Number of variants
//! - `impl plife::TypeIndex` and `impl plife::TypeCount`

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive macro for particle type enums.
///
/// Variants are assigned sequential type indices starting from 0, matching
/// the row/column order of a `ParticleTypes` table sized with
/// `ParticleTypes::for_enum`.
///
/// # Example
///
/// ```ignore
/// #[derive(ParticleType, Clone, Copy, PartialEq)]
/// enum Species {
///     Prey,      // = 0
///     Predator,  // = 1
/// }
///
/// let predator: u32 = Species::Predator.into();  // 1
/// let particle = Particle::new(Vec2::ZERO, Vec2::ZERO, Species::Prey.into());
/// types.set_max_r(Species::Predator, Species::Prey, 30.0)?;
/// ```
///
/// # Panics
///
/// The macro panics at compile time if:
/// - Applied to a struct instead of an enum
/// - Any variant has fields (tuple or struct variants)
/// - Enum has zero variants
/// - Enum has more than 256 variants (type indices are stored as `u8`)
#[proc_macro_derive(ParticleType)]
pub fn derive_particle_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => panic!("ParticleType derive only supports enums"),
    };

    for variant in variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            panic!(
                "ParticleType enum variants must be unit variants (no fields). \
                 Found fields on variant '{}'",
                variant.ident
            );
        }
    }

    if variants.len() > 256 {
        panic!(
            "ParticleType enums are limited to 256 variants, '{}' has {}",
            name,
            variants.len()
        );
    }

    let into_arms: Vec<TokenStream2> = variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let variant_name = &variant.ident;
            let idx = i as u32;
            quote! { #name::#variant_name => #idx }
        })
        .collect();

    let from_arms: Vec<TokenStream2> = variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let variant_name = &variant.ident;
            let idx = i as u32;
            quote! { #idx => #name::#variant_name }
        })
        .collect();

    let first_variant = match variants.first() {
        Some(variant) => &variant.ident,
        None => panic!("ParticleType enum '{}' must have at least one variant", name),
    };
    let variant_count = variants.len() as u32;
    let variant_count_usize = variants.len();

    let expanded = quote! {
        impl From<#name> for u32 {
            fn from(value: #name) -> u32 {
                match value {
                    #(#into_arms),*
                }
            }
        }

        impl From<#name> for u8 {
            fn from(value: #name) -> u8 {
                u32::from(value) as u8
            }
        }

        impl From<u32> for #name {
            fn from(value: u32) -> #name {
                match value {
                    #(#from_arms,)*
                    _ => #name::#first_variant,
                }
            }
        }

        impl #name {
            /// Returns the number of variants in this particle type enum.
            pub const fn count() -> u32 {
                #variant_count
            }
        }

        impl ::plife::TypeIndex for #name {
            #[inline]
            fn type_index(self) -> usize {
                u32::from(self) as usize
            }
        }

        impl ::plife::TypeCount for #name {
            const COUNT: usize = #variant_count_usize;
        }
    };

    TokenStream::from(expanded)
}
