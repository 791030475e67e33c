//! Application use cases

pub mod quote_service;

pub use quote_service::{
    load_results, save_results, ProgressCallback, QuoteOptions, QuoteService, QuotedForm,
};
