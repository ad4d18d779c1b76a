//! Type identifier to file extension table
//!
//! Sorted by type identifier (byte-wise) so lookups can binary search.

/// Extensions registered for one type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionEntry {
    pub type_identifier: &'static str,
    /// Empty when the format is recognized but shares or lacks an extension
    pub extensions: &'static [&'static str],
}

const fn entry(type_identifier: &'static str, extensions: &'static [&'static str]) -> ExtensionEntry {
    ExtensionEntry { type_identifier, extensions }
}

pub static EXTENSION_TABLE: &[ExtensionEntry] = &[
    entry("com.adobe.pdf", &["pdf"]),
    entry("com.adobe.photoshop-image", &["psd"]),
    entry("com.adobe.raw-image", &["dng"]),
    entry("com.apple.icns", &["icns"]),
    entry("com.apple.macpaint-image", &["mac", "ptng", "pnt"]),
    entry("com.apple.pict", &["pict", "pct", "pic"]),
    entry("com.apple.quicktime-image", &["qt", "mov", "qtif", "qti"]),
    entry("com.apple.rjpeg", &["rjpeg"]),
    entry("com.canon.cr2-raw-image", &["cr2"]),
    entry("com.canon.crw-raw-image", &["crw"]),
    entry("com.canon.tif-raw-image", &[]),
    entry("com.compuserve.gif", &["gif"]),
    entry("com.dxo.raw-image", &["dxo"]),
    entry("com.epson.raw-image", &["erf"]),
    entry("com.fuji.raw-image", &["raf"]),
    entry("com.hasselblad.3fr-raw-image", &["3fr"]),
    entry("com.hasselblad.fff-raw-image", &["fff"]),
    entry("com.ilm.openexr-image", &["exr"]),
    entry("com.kodak.flashpix-image", &["fpx", "fpix"]),
    entry("com.kodak.raw-image", &["dcs", "dcr", "drf", "k25", "kdc"]),
    entry("com.konicaminolta.raw-image", &["mrw"]),
    entry("com.leafamerica.raw-image", &["mos"]),
    entry("com.leica.raw-image", &["dng"]),
    entry("com.leica.rwl-raw-image", &["rwl"]),
    entry("com.microsoft.bmp", &["bmp", "BMPf"]),
    entry("com.microsoft.cur", &["cur"]),
    entry("com.microsoft.ico", &["ico"]),
    entry("com.nikon.nrw-raw-image", &["nrw"]),
    entry("com.nikon.raw-image", &["nef"]),
    entry("com.olympus.or-raw-image", &["orf"]),
    entry("com.olympus.raw-image", &[]),
    entry("com.olympus.sr-raw-image", &["srw"]),
    entry("com.panasonic.raw-image", &["raw"]),
    entry("com.panasonic.rw2-raw-image", &["rw2"]),
    entry("com.pentax.raw-image", &["pef", "ptx"]),
    entry("com.samsung.raw-image", &["srw"]),
    entry("com.sgi.sgi-image", &["sgi"]),
    entry("com.sony.arw-raw-image", &["arw"]),
    entry("com.sony.raw-image", &["srf"]),
    entry("com.sony.sr2-raw-image", &["sr2"]),
    entry("com.truevision.tga-image", &["tga", "targa"]),
    entry("public.jpeg", &["jpg", "jpe", "jpeg"]),
    entry("public.jpeg-2000", &["jp2", "j2k", "jpf", "jpx", "jpm", "mj2"]),
    entry("public.mpo-image", &["mpo"]),
    entry("public.pbm", &["pbm"]),
    entry("public.png", &["png"]),
    entry("public.pvr", &["pvr"]),
    entry("public.radiance", &["hdr"]),
    entry("public.tiff", &["tif", "tiff"]),
];

/// Encapsulated PostScript has no system type identifier
pub const EPS_EXTENSIONS: &[&str] = &["eps", "epi", "epsf", "epsi", "ps"];

/// X bitmaps and cursors have no system type identifier
pub const BITMAP_CURSOR_EXTENSIONS: &[&str] = &["xbm", "cur"];

/// Looks up the entry for `type_identifier`
pub fn find_entry(type_identifier: &str) -> Option<&'static ExtensionEntry> {
    EXTENSION_TABLE
        .binary_search_by(|entry| entry.type_identifier.cmp(type_identifier))
        .ok()
        .map(|index| &EXTENSION_TABLE[index])
}
