//! Native container constants
//!
//! Raw codes reported by the native decoder and the attribute names
//! this adapter publishes on the host image spec.

/// Alpha arrangement codes as stored in the low bits of a bitmap-info word
pub mod alpha_info {
    pub const NONE: u32 = 0;                 // RGB, no alpha
    pub const PREMULTIPLIED_LAST: u32 = 1;   // RGBA, color premultiplied
    pub const PREMULTIPLIED_FIRST: u32 = 2;  // ARGB, color premultiplied
    pub const LAST: u32 = 3;                 // RGBA
    pub const FIRST: u32 = 4;                // ARGB
    pub const NONE_SKIP_LAST: u32 = 5;       // RGBX, padding byte ignored
    pub const NONE_SKIP_FIRST: u32 = 6;      // XRGB, padding byte ignored
    pub const ONLY: u32 = 7;                 // alpha mask, no color
}

/// Bitmap-info flag masks
pub mod bitmap_info {
    /// Low bits holding the alpha arrangement code
    pub const ALPHA_INFO_MASK: u32 = 0x1F;
    /// Components are IEEE floats rather than integers
    pub const FLOAT_COMPONENTS: u32 = 1 << 8;
}

/// Keys of the container-level property dictionary
pub mod properties {
    /// Animation loop count
    pub const LOOP_COUNT: &str = "LoopCount";
}

/// Attribute names published on the host spec
pub mod attributes {
    /// Set to 1 when the container holds more than one page
    pub const MOVIE: &str = "oiio:Movie";
    /// Positive animation loop count
    pub const LOOP_COUNT: &str = "gif:LoopCount";
}

/// Format name the adapter registers under
pub const FORMAT_NAME: &str = "coregraphics";

/// Native library the adapter depends on
pub const DEPENDENCY_LIBRARY: &str = "CoreGraphics.framework";

/// Registration priority relative to other readers of the same extensions
pub const DEFAULT_PRIORITY: i32 = 65;
