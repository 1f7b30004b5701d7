use std::ops::Deref;

use crate::common::{
    metadata::{Color, Version, ALIGNMENT_CENTER},
    BitStream,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            // Cells the payload never reached read back as light
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Data(c) => c,
        }
    }
}

// Matrix type
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Matrix {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
}

impl Matrix {
    pub fn new(ver: Version) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver }
    }

    /// Assembles a full symbol: structural patterns first, then the payload
    /// filled row-major into the remaining cells.
    pub fn with_payload(ver: Version, payload: BitStream) -> Self {
        let mut matrix = Self::new(ver);
        matrix.draw_function_patterns();
        matrix.draw_payload(payload);
        matrix
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// Final 0/1 view of a cell. Dark reads 1; light and unfilled cells
    /// read 0.
    pub fn bit(&self, r: i16, c: i16) -> u8 {
        self.get(r, c).select(1, 0)
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row shouldn't exceed width");
        debug_assert!(-w <= c && c < w, "column shouldn't exceed width");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl Matrix {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // 7x7: dark border, light ring, 3x3 dark core
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        for i in -3..=3 {
            for j in -3..=3 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl Matrix {
    // 5x5 at a fixed interior spot: dark border, light ring, dark center.
    // Version 1 has none.
    fn draw_alignment_pattern(&mut self) {
        if !self.ver.has_alignment() {
            return;
        }

        let (r, c) = ALIGNMENT_CENTER;
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                );
            }
        }
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl Matrix {
    pub fn draw_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_pattern();
    }
}


// Payload placement
//------------------------------------------------------------------------------

impl Matrix {
    // Row-major scan: every payload bit claims the next empty cell, skipping
    // over structural patterns. Surplus bits are dropped once the grid runs
    // out of empty cells; a short payload leaves the tail empty.
    pub fn draw_payload(&mut self, payload: BitStream) {
        if payload.is_empty() {
            return;
        }

        let w = self.w as i16;
        let mut cells = (0..w).flat_map(|r| (0..w).map(move |c| (r, c)));
        for bit in payload {
            let module = Module::Data(if bit { Color::Dark } else { Color::Light });
            for (r, c) in cells.by_ref() {
                if matches!(self.get(r, c), Module::Empty) {
                    self.set(r, c, module);
                    break;
                }
            }
        }
    }
}
