use plotpy::{Curve, Plot};
use pmflow::base::DEFAULT_OUT_DIR;
use pmflow::prelude::*;
use pmflow::StrError;
use std::path::Path;

fn main() -> Result<(), StrError> {
    // models
    let bw_a = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white())?;
    let bw_b = ModelBroadbridgeWhite::new(&SampleParams::param_broadbridge_white_partial())?;

    // generate curve data
    let npoint = 101;
    let seff_a = bw_a.generate_saturation_curve(-10.0, 1.0, npoint)?;
    let seff_b = bw_b.generate_saturation_curve(-10.0, 1.0, npoint)?;
    let krel_a = bw_a.generate_relperm_curve(npoint)?;
    let krel_b = bw_b.generate_relperm_curve(npoint)?;

    // curves
    let mut curve_seff_a = Curve::new();
    let mut curve_seff_b = Curve::new();
    let mut curve_krel_a = Curve::new();
    let mut curve_krel_b = Curve::new();
    curve_seff_a.set_label("BW (C = 1.5)").draw(&seff_a.x, &seff_a.y);
    curve_seff_b
        .set_label("BW (C = 3.0)")
        .set_line_style("--")
        .draw(&seff_b.x, &seff_b.y);
    curve_krel_a.set_label("BW (C = 1.5)").draw(&krel_a.x, &krel_a.y);
    curve_krel_b
        .set_label("BW (C = 3.0)")
        .set_line_style("--")
        .draw(&krel_b.x, &krel_b.y);

    // saturation plot
    let mut plot = Plot::new();
    plot.add(&curve_seff_a)
        .add(&curve_seff_b)
        .grid_and_labels("pc", "seff")
        .legend();
    let path = Path::new(DEFAULT_OUT_DIR).join("plot_bw_seff.svg");
    plot.save(&path)?;

    // relative permeability plot
    let mut plot = Plot::new();
    plot.add(&curve_krel_a)
        .add(&curve_krel_b)
        .grid_and_labels("sl", "krel")
        .legend();
    let path = Path::new(DEFAULT_OUT_DIR).join("plot_bw_krel.svg");
    plot.save(&path)?;
    Ok(())
}
