use pmflow::base::{ParamBroadbridgeWhite, SampleParams};
use pmflow::material::ModelBroadbridgeWhite;
use pmflow::StrError;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pmflow_bw_curves",
    about = "Tabulates the Broadbridge-White saturation and relative permeability curves"
)]
struct Options {
    /// JSON file with the model parameters (the sample parameters are used if omitted)
    #[structopt(short, long)]
    params: Option<String>,

    /// Smallest capillary pressure in the saturation table
    #[structopt(long, default_value = "-10.0", allow_hyphen_values = true)]
    pc_min: f64,

    /// Largest capillary pressure in the saturation table
    #[structopt(long, default_value = "0.0", allow_hyphen_values = true)]
    pc_max: f64,

    /// Number of points in each table
    #[structopt(short, long, default_value = "11")]
    npoint: usize,

    /// Directory to write seff.json and krel.json
    #[structopt(short, long)]
    out_dir: Option<String>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // parameters
    let param = match &options.params {
        Some(path) => ParamBroadbridgeWhite::read_json(path)?,
        None => SampleParams::param_broadbridge_white(),
    };
    let model = ModelBroadbridgeWhite::new(&param)?;

    // tables
    let seff = model.generate_saturation_curve(options.pc_min, options.pc_max, options.npoint)?;
    let krel = model.generate_relperm_curve(options.npoint)?;
    println!("{:?}\n", param);
    println!("{}", seff.table("pc"));
    println!("{}", krel.table("sl"));

    // files
    if let Some(out_dir) = &options.out_dir {
        let path_seff = Path::new(out_dir).join("seff.json");
        let path_krel = Path::new(out_dir).join("krel.json");
        seff.write_json(&path_seff)?;
        krel.write_json(&path_krel)?;

        // message
        let path_seff = path_seff.to_string_lossy();
        let path_krel = path_krel.to_string_lossy();
        let thin_line = format!("{:─^1$}", "", usize::max(path_seff.len(), path_krel.len()));
        println!("{}", thin_line);
        println!("curve files generated:");
        println!("{}", path_seff);
        println!("{}", path_krel);
        println!("{}\n", thin_line);
    }
    Ok(())
}
