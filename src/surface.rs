use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }
}

// Same form a canvas `fillStyle` takes.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface: Send + 'static {
    fn set_size(&mut self, width: u32, height: u32);
    fn size(&self) -> (u32, u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

pub const CIRCLE_STRIDE: usize = 7;

/// Headless surface: every frame is a flat `[x, y, r, red, green, blue, alpha]` list,
/// ready to be handed to whatever actually rasterizes it.
#[derive(Debug, Default, Clone)]
pub struct DrawBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
    clears: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

impl DrawBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn circle_count(&self) -> usize {
        self.data.len() / CIRCLE_STRIDE
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.data.chunks_exact(CIRCLE_STRIDE).map(|c| Circle {
            x: c[0],
            y: c[1],
            radius: c[2],
            color: Rgba {
                r: c[3] as u8,
                g: c[4] as u8,
                b: c[5] as u8,
                a: c[6],
            },
        })
    }
}

impl Surface for DrawBuffer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.data.clear();
        self.clears += 1;
    }

    #[inline]
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.data.extend_from_slice(&[
            x,
            y,
            radius,
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a,
        ]);
    }
}
