use std::ops::Deref;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn select<T>(&self, dark: T, light: T) -> T {
        match self {
            Color::Dark => dark,
            Color::Light => light,
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Version(u8);

impl Version {
    pub fn new(version: u8) -> Self {
        debug_assert!((1..=40).contains(&version), "Invalid version");
        Self(version)
    }

    pub fn width(&self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn has_alignment(&self) -> bool {
        self.0 > 1
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


// Global constants
//------------------------------------------------------------------------------

/// Symbol version of the fixed encoding profile. Version 2 is a 25x25 grid.
pub static VERSION: Version = Version(2);

/// Error correction codewords appended to every message.
pub static EC_LEN: usize = 10;

/// Center of the alignment pattern, drawn on versions above 1.
pub static ALIGNMENT_CENTER: (i16, i16) = (18, 18);
