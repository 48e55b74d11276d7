#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_imports)]
#![deny(unused_extern_crates, renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![deny(unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

pub mod bls12_381;

#[cfg(test)]
pub(crate) mod tests;
