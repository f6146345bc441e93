use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;
use tz_pbf2geojson::config::{Config, Mode};
use tz_pbf2geojson::run;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "tz_pbf2geojson",
    about = "Export a protobuf timezone catalog as GeoJSON files"
)]
struct Opt {
    /// Timezones (mode 0) or PreindexTimezones (mode 1) protobuf file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Output directory for GeoJSON files
    #[structopt(short, long, default_value = "output", parse(from_os_str))]
    output: PathBuf,

    /// Also render vector tiles with tippecanoe into this directory
    #[structopt(long, parse(from_os_str))]
    mvt: Option<PathBuf>,

    /// 0 exports boundary polygons, 1 exports tile index rectangles
    #[structopt(short, long, default_value = "0")]
    mode: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();
    let config = Config {
        input: opt.input,
        output_dir: opt.output,
        tile_dir: opt.mvt,
        mode: Mode::from_index(opt.mode),
    };
    run(&config)?;
    Ok(())
}
