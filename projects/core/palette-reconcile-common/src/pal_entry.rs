//! A single palette entry, which doubles as a packed 32-bit pixel.
//!
//! The packed form is `0xAARRGGBB`: blue in the lowest byte, alpha in the highest.
//! [`PalEntry`] stores its channels in that same byte order, so on little-endian targets a
//! `[PalEntry]` has exactly the memory layout of the equivalent `[u32]`.
//!
//! ```text
//! byte:    0   1   2   3
//!        +---+---+---+---+
//!        | B | G | R | A |
//!        +---+---+---+---+
//! ```
//!
//! The alpha byte carries no meaning for colour matching; it is an opaque payload.

/// Number of entries in a full indexed-colour palette.
pub const PALETTE_SIZE: usize = 256;

/// A full 256 entry palette.
pub type Palette = [PalEntry; PALETTE_SIZE];

/// Represents a single BGRA palette entry / pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct PalEntry {
    /// Blue component (0-255)
    pub b: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Red component (0-255)
    pub r: u8,
    /// Alpha component (0-255). Not used for colour matching.
    pub a: u8,
}

impl PalEntry {
    /// Constructs a new [`PalEntry`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_reconcile_common::pal_entry::PalEntry;
    ///
    /// let entry = PalEntry::new(255, 0, 0, 255);
    /// assert_eq!(entry.to_u32(), 0xFFFF0000);
    /// ```
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Constructs an entry with the given colour and a zeroed alpha byte.
    #[inline(always)]
    pub const fn rgb_only(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0)
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline(always)]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            b: value as u8,
            g: (value >> 8) as u8,
            r: (value >> 16) as u8,
            a: (value >> 24) as u8,
        }
    }

    /// Packs this entry into a `0xAARRGGBB` value.
    #[inline(always)]
    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Returns the 24-bit `0xRRGGBB` colour of this entry, with the alpha byte masked off.
    ///
    /// Ordering palette entries by this value orders them by red, then green, then blue.
    #[inline(always)]
    pub const fn rgb(self) -> u32 {
        self.to_u32() & 0x00FF_FFFF
    }

    /// Returns `true` if both entries have the same colour, ignoring alpha.
    #[inline(always)]
    pub const fn same_rgb(self, other: PalEntry) -> bool {
        self.rgb() == other.rgb()
    }
}

impl From<u32> for PalEntry {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<PalEntry> for u32 {
    #[inline(always)]
    fn from(value: PalEntry) -> Self {
        value.to_u32()
    }
}

/// Converts a palette stored in the packed 32-bit wire format.
pub fn palette_from_u32(packed: &[u32; PALETTE_SIZE]) -> Palette {
    packed.map(PalEntry::from_u32)
}

/// Converts a palette back into the packed 32-bit wire format.
pub fn palette_to_u32(palette: &Palette) -> [u32; PALETTE_SIZE] {
    palette.map(PalEntry::to_u32)
}
