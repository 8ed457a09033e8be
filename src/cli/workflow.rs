use log::{info, warn};
use plainppm::{DecodeRequest, Limits, PpmError, Unstoppable, write_file};

use crate::cli::options::CmdOptions;

/// Decode the input, apply the selected transform and write the output.
///
/// Decode and write failures abort. An invalid transform argument only
/// aborts in strict mode; otherwise the transform is skipped and the image
/// is written unchanged.
pub(crate) fn run(opts: &CmdOptions) -> Result<(), PpmError> {
    info!("Reading {}", opts.input.display());
    let data = std::fs::read(&opts.input)?;

    let limits = Limits::from_max_dimensions(opts.max_width, opts.max_height);
    let mut image = DecodeRequest::new(&data)
        .with_limits(&limits)
        .lenient(opts.lenient)
        .decode(Unstoppable)?;

    info!(
        "PPM image: width={}, height={}, max color value={}",
        image.width, image.height, image.max_value
    );

    if let Some(transform) = opts.transform {
        match transform.apply(&mut image) {
            Ok(()) => info!("Applied {}", transform.name()),
            Err(e @ PpmError::InvalidChannel(_)) if !opts.strict => {
                warn!("Skipping {}: {e}", transform.name());
            }
            Err(e) => return Err(e),
        }
    }

    write_file(&opts.output, &image)?;
    info!("Wrote {}", opts.output.display());
    Ok(())
}
