//! Command implementations for pkgver CLI

pub mod resolve;
