//! # gdp-components
//!
//! Leptos UI components for the GDP bar chart page.

pub mod notice;
pub mod page;

pub use notice::*;
pub use page::*;
