//! Canvas dimensions and the frame buffer handed to presentation.
//!
//! Pixels are addressed from the canvas center with y pointing up, so
//! `x` ranges over `[-width/2, width/2)` and `y` over `[-height/2, height/2)`.
//! The frame stores them row-major from the top-left corner, which is the
//! layout image encoders and display surfaces expect.

use image::{Rgb, RgbImage};
use log::trace;

use crate::color::Color;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas { width, height }
    }

    /// Like `new`, but rejects a canvas without pixels.
    pub fn checked(width: u32, height: u32) -> Result<Canvas> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        Ok(Canvas::new(width, height))
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Every centered coordinate, column by column.
    pub fn coordinates(&self) -> impl Iterator<Item = (i32, i32)> {
        let half_width = (self.width / 2) as i32;
        let half_height = (self.height / 2) as i32;
        (-half_width..half_width)
            .flat_map(move |x| (-half_height..half_height).map(move |y| (x, y)))
    }

    /// Buffer index of a centered coordinate, if it lies on the canvas.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let column = (self.width / 2) as i64 + x as i64;
        let row = (self.height / 2) as i64 - y as i64 - 1;
        if column < 0 || column >= self.width as i64 || row < 0 || row >= self.height as i64 {
            return None;
        }
        Some(row as usize * self.width as usize + column as usize)
    }
}

/// One rendered frame.
#[derive(Debug, Clone)]
pub struct Frame {
    canvas: Canvas,
    pixels: Vec<Color>,
}

impl Frame {
    /// A frame filled with `fill`.
    pub fn new(canvas: Canvas, fill: Color) -> Frame {
        Frame {
            canvas,
            pixels: vec![fill; canvas.width as usize * canvas.height as usize],
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Writes a pixel at a centered coordinate; writes off the canvas are
    /// dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        match self.canvas.index(x, y) {
            Some(index) => self.pixels[index] = color,
            None => trace!("pixel ({}, {}) lies outside the canvas", x, y),
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.canvas.index(x, y).map(|index| self.pixels[index])
    }

    /// `(x, y, color)` for every pixel, in centered coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        self.canvas
            .coordinates()
            .filter_map(move |(x, y)| self.get(x, y).map(|color| (x, y, color)))
    }

    /// Converts to 8-bit RGB, top-left origin.
    pub fn to_image(&self) -> RgbImage {
        let mut imgbuf = RgbImage::new(self.canvas.width, self.canvas.height);
        for (x, y, pixel) in imgbuf.enumerate_pixels_mut() {
            let array_index = x as usize + (y as usize * self.canvas.width as usize);
            *pixel = Rgb(self.pixels[array_index].to_rgb8());
        }
        imgbuf
    }
}
