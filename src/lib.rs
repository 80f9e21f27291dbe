// Copyright @yucwang 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod lut;
pub mod math;
