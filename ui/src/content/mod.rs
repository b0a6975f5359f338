//! Static page content that is data rather than translated prose.

pub mod exam;
