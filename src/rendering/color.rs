use crate::error::LifeError;

/// 8-bit RGBA colour as stored in the pixel buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Colour of live cells
    pub const LIFE: Self = Self::opaque(0x33, 0xFF, 0x33);
    /// Background and dead cells
    pub const BACKGROUND: Self = Self::opaque(0, 0, 0);
    /// Default paint colour for the cursor marker
    pub const PAINT: Self = Self::opaque(0xFF, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse `#RRGGBB` or the short `#RGB` form
    pub fn parse_hex(input: &str) -> Result<Self, LifeError> {
        let invalid = |reason| LifeError::InvalidColor { input: input.to_owned(), reason };

        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| invalid("missing leading '#'"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex digit"));
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match digits.len() {
            6 => {
                let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::opaque(r, g, b)),
                    _ => Err(invalid("non-hex digit")),
                }
            }
            3 => {
                // Double each digit: #3F3 -> #33FF33
                let (r, g, b) = (channel(0..1), channel(1..2), channel(2..3));
                match (r, g, b) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Self::opaque(r * 17, g * 17, b * 17)),
                    _ => Err(invalid("non-hex digit")),
                }
            }
            _ => Err(invalid("length must be 7 or 4")),
        }
    }

    /// Parse, logging failures and falling back to opaque black
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse_hex(input).unwrap_or_else(|err| {
            log::warn!("{err}; using opaque black");
            Self::BACKGROUND
        })
    }

    /// `#RRGGBB` form, alpha dropped
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
