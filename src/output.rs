// src/output.rs
use crate::error::LabResult;
use crate::paths::ForcedPoint;
use std::fmt::Display;
use std::io::Write;

pub fn write_series_csv<W: Write>(w: &mut W, x_label: &str, y_label: &str, points: &[(f64, f64)]) -> LabResult<()> {
    writeln!(w, "{},{}", x_label, y_label)?;
    for (x, y) in points {
        writeln!(w, "{},{}", x, y)?;
    }
    Ok(())
}

pub fn write_forced_path_csv<W: Write>(w: &mut W, points: &[ForcedPoint]) -> LabResult<()> {
    writeln!(w, "step,price,force")?;
    for p in points {
        writeln!(w, "{},{},{}", p.step, p.price, p.force)?;
    }
    Ok(())
}

pub fn write_summary_csv<W: Write, K: Display, V: Display>(w: &mut W, summary_data: &[(K, V)]) -> LabResult<()> {
    for (key, value) in summary_data {
        writeln!(w, "{},{}", key, value)?;
    }
    Ok(())
}
