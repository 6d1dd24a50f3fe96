//! rmdex
//!
//! Terminal browser for the Rick and Morty character collection.
//!
//! The character list is fetched once at startup (paged, capped at 250
//! records); searching, filtering, sorting and paging then run entirely
//! client-side. Follows the Pure Core / Impure Shell architecture: `query`
//! and `state` are pure, `source` and `view` own the network and terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
