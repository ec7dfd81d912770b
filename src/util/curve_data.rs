use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a tabulated curve y(x) with its first and second derivatives
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurveData {
    pub name: String,       // e.g. "seff" or "relperm"
    pub x: Vec<f64>,        // abscissa (pc or sl)
    pub y: Vec<f64>,        // function value
    pub dy_dx: Vec<f64>,    // first derivative
    pub d2y_dx2: Vec<f64>,  // second derivative
}

impl CurveData {
    /// Allocates a new structure
    pub fn new(name: &str, npoint: usize) -> Self {
        CurveData {
            name: name.to_string(),
            x: vec![0.0; npoint],
            y: vec![0.0; npoint],
            dy_dx: vec![0.0; npoint],
            d2y_dx2: vec![0.0; npoint],
        }
    }

    /// Returns the number of points
    pub fn npoint(&self) -> usize {
        self.x.len()
    }

    /// Returns a formatted table with the columns x, y, dy/dx, d²y/dx²
    pub fn table(&self, x_label: &str) -> String {
        let mut buffer = format!(
            "{:>14}{:>14}{:>14}{:>14}\n",
            x_label,
            self.name,
            format!("d{}", self.name),
            format!("d2{}", self.name)
        );
        for i in 0..self.npoint() {
            buffer.push_str(&format!(
                "{:>14.6}{:>14.6}{:>14.6}{:>14.6}\n",
                self.x[i], self.y[i], self.dy_dx[i], self.d2y_dx2[i]
            ));
        }
        buffer
    }

    /// Reads a JSON file containing the curve data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data: CurveData = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        let n = data.x.len();
        if data.y.len() != n || data.dy_dx.len() != n || data.d2y_dx2.len() != n {
            return Err("curve data arrays must have the same length");
        }
        Ok(data)
    }

    /// Writes a JSON file with the curve data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
