use image::{GrayImage, Luma};

use crate::builder::Matrix;

// Render
//------------------------------------------------------------------------------

impl Matrix {
    /// Renders the symbol as a grayscale image with each module scaled to
    /// `module_sz` pixels and a quiet zone on all sides.
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        let qz_size = QUIET_ZONE as u32 * module_sz;
        let sym_size = self.width() as u32 * module_sz;
        let total_size = qz_size + sym_size + qz_size;

        let mut canvas = GrayImage::new(total_size, total_size);
        for i in 0..total_size {
            for j in 0..total_size {
                if i < qz_size
                    || i >= qz_size + sym_size
                    || j < qz_size
                    || j >= qz_size + sym_size
                {
                    canvas.put_pixel(j, i, Luma([255]));
                    continue;
                }
                let r = ((i - qz_size) / module_sz) as i16;
                let c = ((j - qz_size) / module_sz) as i16;

                let clr = *self.get(r, c);
                canvas.put_pixel(j, i, clr.select(Luma([0]), Luma([255])));
            }
        }

        canvas
    }

    /// Renders the symbol as text, one block character per light module,
    /// sized for dark terminals.
    pub fn to_str(&self, module_sz: usize) -> String {
        let qz_size = QUIET_ZONE * module_sz;
        let sym_size = self.width() * module_sz;
        let total_size = qz_size + sym_size + qz_size;

        let mut canvas = String::with_capacity(total_size * (total_size + 1));
        for i in 0..total_size {
            for j in 0..total_size {
                if i < qz_size
                    || i >= qz_size + sym_size
                    || j < qz_size
                    || j >= qz_size + sym_size
                {
                    canvas.push('█');
                    continue;
                }
                let r = ((i - qz_size) / module_sz) as i16;
                let c = ((j - qz_size) / module_sz) as i16;

                let clr = *self.get(r, c);
                canvas.push(clr.select(' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }
}

#[cfg(test)]
mod render_tests {
    use crate::QRBuilder;

    #[test]
    fn test_image_geometry() {
        let matrix = QRBuilder::new("RENDER").build().unwrap();
        let img = matrix.to_image(2);
        // 25 modules, 4 quiet zone modules per side, 2 pixels per module
        assert_eq!(img.dimensions(), (66, 66));

        // Quiet zone corner is light
        assert_eq!(img.get_pixel(0, 0).0, [255]);
        // Center of the top left finder core is dark
        assert_eq!(img.get_pixel(8 + 3 * 2, 8 + 3 * 2).0, [0]);
        // Light ring cell of the same finder
        assert_eq!(img.get_pixel(8 + 2, 8 + 2).0, [255]);
    }

    #[test]
    fn test_str_geometry() {
        let matrix = QRBuilder::new("RENDER").build().unwrap();
        let canvas = matrix.to_str(1);
        let lines: Vec<&str> = canvas.lines().collect();
        assert_eq!(lines.len(), 33);
        assert!(lines.iter().all(|l| l.chars().count() == 33));

        // Quiet zone rows are solid light blocks
        assert!(lines[0].chars().all(|c| c == '█'));
        // Dark finder border at the symbol's top left corner
        assert_eq!(lines[4].chars().nth(4), Some(' '));
    }
}

// Global constants
//------------------------------------------------------------------------------

// Quiet zone width in modules
static QUIET_ZONE: usize = 4;
