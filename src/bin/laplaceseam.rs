use laplaceseam::{
    calculate_energy, energy_to_image, luminance, CarveOptions, Carved, EnergyModel, RgbaBuffer,
    SeamCarver,
};

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::{info, warn, LevelFilter};
use std::process;
use std::time::{Duration, Instant};

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_deadline(secs: &str) -> Result<Duration, Error> {
    let secs: f64 = secs
        .parse()
        .map_err(|e| format_err!("--deadline: {}", e))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format_err!(
            "--deadline: expected a non-negative number of seconds, got {}",
            secs
        ));
    }
    Ok(Duration::from_secs_f64(secs))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let lines: u32 = matches
        .value_of("lines")
        .unwrap_or("300")
        .parse()
        .map_err(|e| format_err!("--lines: {}", e))?;
    let model: EnergyModel = matches
        .value_of("energy-model")
        .unwrap_or("saturating")
        .parse()?;
    let options = CarveOptions::new().set_energy_model(model);
    let deadline = match matches.value_of("deadline") {
        Some(secs) => Some(Instant::now() + parse_deadline(secs)?),
        None => None,
    };

    let source = RgbaBuffer::from(image::open(input)?.to_rgba());
    info!("loaded {} ({}x{})", input, source.width(), source.height());

    if let Some(path) = matches.value_of("dump-energy") {
        let energy = calculate_energy(&luminance(&source), options.energy);
        energy_to_image(&energy).save(path)?;
        info!("wrote energy map to {}", path);
    }

    let carver = SeamCarver::with_options(source, lines, options)?;
    let carved = carver.run(|| deadline.map_or(false, |d| Instant::now() >= d));
    if let Carved::Cancelled { seams_removed, .. } = carved {
        warn!(
            "deadline reached after {} of {} seams; writing partial result",
            seams_removed, lines
        );
    }

    let result: image::RgbaImage = carved.into_buffer().into();
    info!("writing {} ({}x{})", output, result.width(), result.height());
    result.save(output)?;
    Ok(())
}

fn main() {
    let matches = App::new("laplaceseam")
        .version("0.1.0")
        .about("Narrow an image by carving out its least important vertical seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("lines")
                .short("n")
                .long("lines")
                .takes_value(true)
                .help("Number of vertical seams to remove [default: 300]"),
        )
        .arg(
            Arg::with_name("energy-model")
                .long("energy-model")
                .takes_value(true)
                .possible_values(&["saturating", "magnitude"])
                .help("How Laplacian responses are stored [default: saturating]"),
        )
        .arg(
            Arg::with_name("dump-energy")
                .long("dump-energy")
                .takes_value(true)
                .value_name("PATH")
                .help("Also write the first energy map as a greyscale image"),
        )
        .arg(
            Arg::with_name("deadline")
                .long("deadline")
                .takes_value(true)
                .value_name("SECS")
                .help("Stop after this many seconds and keep the seams removed so far"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("laplaceseam: {}", err);
        process::exit(1);
    }
}
