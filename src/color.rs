/// An 8 bit per channel RGB color without alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const MAGENTA: Color = Color::new(0xFF, 0x00, 0xFF);
    pub const GREEN: Color = Color::new(0x00, 0xFF, 0x00);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Decomposes `0xRRGGBB`. Bits above the lower 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Color {
            red: (packed >> 16) as u8,
            green: (packed >> 8) as u8,
            blue: packed as u8,
        }
    }

    pub const fn packed(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels in the order they appear in a PPM raster.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_packed(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.packed()
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::new(value[0], value[1], value[2])
    }
}
