// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seamcarve::energy::{calculate_energy, energy_to_image};
use seamcarve::imageio::{load_image, save_image};
use seamcarve::visualize::FrameWriter;
use seamcarve::SeamCarver;

fn command() -> Command {
    Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image by seam carving")
        .arg(
            Arg::new("input")
                .help("The image to carve")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the carved image; the format follows the extension")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("width")
                .help("Target width (defaults to the current width)")
                .short('W')
                .long("width")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("height")
                .help("Target height (defaults to the current height)")
                .short('H')
                .long("height")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("frames")
                .help("Write every seam, painted onto the image, as a numbered PNG in this directory")
                .long("frames")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("energy-map")
                .help("Write the input's energy map as a grayscale image")
                .long("energy-map")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .help("Log every seam")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    let matches = command().get_matches();

    let log_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seamcarve={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&matches) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<PathBuf>("input")
        .context("no input image given")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .context("no output path given")?;

    let image = load_image(input)?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(image.width());
    let height = matches.get_one::<u32>("height").copied().unwrap_or(image.height());

    if let Some(path) = matches.get_one::<PathBuf>("energy-map") {
        let energy = calculate_energy(&image)?;
        energy_to_image(&energy)
            .save(path)
            .with_context(|| format!("failed to write energy map to {}", path.display()))?;
    }

    let carver = SeamCarver::new(&image);
    let carved = match matches.get_one::<PathBuf>("frames") {
        Some(directory) => {
            let mut frames = FrameWriter::new(directory)
                .with_context(|| format!("cannot write frames to {}", directory.display()))?;
            let carved = carver.carve_with(width, height, &mut frames)?;
            let written = frames.finish().context("failed while writing frames")?;
            tracing::info!(frames = written, directory = %directory.display(), "wrote seam frames");
            carved
        }
        None => carver.carve(width, height)?,
    };

    save_image(&carved, output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn zero_targets_are_refused_by_the_parser() {
        let parsed = command().try_get_matches_from(["seamcarve", "a.png", "b.png", "--width", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn targets_are_optional() {
        let matches = command()
            .try_get_matches_from(["seamcarve", "a.png", "b.png", "-H", "12"])
            .unwrap();
        assert_eq!(matches.get_one::<u32>("width"), None);
        assert_eq!(matches.get_one::<u32>("height"), Some(&12));
    }
}
