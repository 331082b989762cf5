pub mod abbreviations;
pub mod lexicon;
pub mod normalization;
pub mod numbers;
pub mod script_filter;
pub mod semantic_normalization;
