//! Token filters applied after tokenization, in the order an analyzer lists
//! them.
//!
//! - [`LowercaseFilter`] folds case
//! - [`StopFilter`] drops function words

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
