// Copyright @yucwang 2026

pub mod image;
pub mod sweep;
