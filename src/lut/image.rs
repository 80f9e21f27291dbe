// Copyright @yucwang 2026

use std::ops;
use std::vec::Vec;

/// Row-major 24-bit grayscale pixel buffer, top row first, 3 bytes per pixel.
#[derive(Debug, Clone)]
pub struct LutImage {
    data: Vec<u8>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for LutImage {
    type Output = [u8];

    fn index(&self, index: (usize, usize)) -> &[u8] {
        let offset = (index.0 + self.width * index.1) * 3;
        &self.data[offset..offset + 3]
    }
}

impl ops::IndexMut<(usize, usize)> for LutImage {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        let offset = (index.0 + self.width * index.1) * 3;
        &mut self.data[offset..offset + 3]
    }
}

impl LutImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0u8; width * height * 3],
            width: width,
            height: height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes the same value to all three channels of pixel `(x, y)`.
    pub fn put_gray(&mut self, x: usize, y: usize, value: u8) {
        let pixel = &mut self[(x, y)];
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
    }

    /// The packed bytes, ready to hand to the image writer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/* Test for LutImage */
