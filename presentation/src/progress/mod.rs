//! Progress display while the quote list loads

pub mod reporter;
