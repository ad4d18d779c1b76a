//! Image container inspection command
//!
//! Opens a file through the native-container reader, prints the spec of
//! each page and optionally reads every scanline back.

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::backend::ImageCrateSource;
use crate::commands::command_traits::Command;
use crate::coregraphics::errors::{ImageIoError, ImageIoResult};
use crate::coregraphics::input::CoreGraphicsInput;
use crate::coregraphics::spec::ImageSpec;
use crate::plugin::ImageInput;
use crate::utils::progress::ProgressTracker;

/// Rows fetched per read while verifying
const VERIFY_CHUNK_ROWS: i32 = 64;

/// Command for inspecting the pages of an image container
pub struct InspectCommand {
    /// Path to the input file
    input_file: String,
    /// Only inspect this page
    subimage: Option<i32>,
    /// Read back every scanline
    verify: bool,
    /// Hide the progress bar
    quiet: bool,
}

impl InspectCommand {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches) -> ImageIoResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ImageIoError::InvalidArgument("Missing input file".to_string()))?
            .clone();

        let subimage = match args.get_one::<String>("subimage") {
            Some(value) => Some(
                value
                    .parse::<i32>()
                    .map_err(|_| ImageIoError::InvalidArgument(format!("Invalid subimage index: {}", value)))?,
            ),
            None => None,
        };

        Ok(InspectCommand {
            input_file,
            subimage,
            verify: args.get_flag("verify"),
            quiet: !args.get_flag("verbose"),
        })
    }

    /// Reads every scanline of the current page in chunks
    ///
    /// # Returns
    /// Number of bytes read
    fn verify_page(&self, input: &mut dyn ImageInput, spec: &ImageSpec, page: i32) -> ImageIoResult<usize> {
        let stride = spec.scanline_bytes();
        let height = spec.height as i32;
        let mut buffer = vec![0u8; stride * VERIFY_CHUNK_ROWS as usize];
        let progress = if self.quiet {
            ProgressTracker::hidden()
        } else {
            ProgressTracker::new(spec.height as u64, page as usize)
        };

        let mut total = 0;
        let mut y = 0;
        while y < height {
            let y_end = (y + VERIFY_CHUNK_ROWS).min(height);
            if let Err(e) = input.read_native_scanlines(y, y_end, &mut buffer) {
                progress.abandon("read failed");
                return Err(e);
            }
            total += (y_end - y) as usize * stride;
            progress.increment((y_end - y) as u64);
            y = y_end;
        }

        progress.finish();
        debug!("Read {} bytes from page {}", total, page);
        Ok(total)
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> ImageIoResult<()> {
        let mut input = CoreGraphicsInput::new(ImageCrateSource::new());
        input.open(Path::new(&self.input_file))?;
        let page_count = input.page_count()?;

        info!("Inspecting {} ({} pages)", self.input_file, page_count);
        println!("{}: {} page(s), format '{}'", self.input_file, page_count, input.format_name());

        let pages: Vec<i32> = match self.subimage {
            Some(page) => vec![page],
            None => (0..page_count as i32).collect(),
        };

        for page in pages {
            let spec = input.seek_subimage(page, 0)?;
            println!("\nPage {}:", page);
            print!("{}", spec);

            if self.verify {
                let bytes = self.verify_page(&mut input, &spec, page)?;
                println!("  Verified: {} bytes", bytes);
            }
        }

        input.close()
    }
}
