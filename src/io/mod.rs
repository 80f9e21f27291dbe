// Copyright @yucwang 2026

pub mod tga_utils;
