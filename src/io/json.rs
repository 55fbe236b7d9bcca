use std::io::{self, Write};

use crate::orbital::maneuvers::{BiellipticTransfer, HohmannTransfer};

/// Write a transfer comparison as JSON to a writer.
///
/// Emits the Hohmann solution and, when supplied, the bi-elliptic
/// alternative, so downstream tooling can compare budgets directly.
pub fn write_comparison<W: Write>(
    writer: &mut W,
    hohmann: &HohmannTransfer,
    bielliptic: Option<&BiellipticTransfer>,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"orbits\": {{")?;
    writeln!(writer, "    \"r1_km\": {:.3},", hohmann.r1)?;
    writeln!(writer, "    \"r2_km\": {:.3}", hohmann.r2)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"hohmann\": {{")?;
    writeln!(writer, "    \"dv1_kms\": {:.6},", hohmann.dv1)?;
    writeln!(writer, "    \"dv2_kms\": {:.6},", hohmann.dv2)?;
    writeln!(writer, "    \"total_dv_kms\": {:.6},", hohmann.total_dv)?;
    writeln!(writer, "    \"tof_s\": {:.1}", hohmann.tof)?;
    match bielliptic {
        Some(b) => {
            writeln!(writer, "  }},")?;
            writeln!(writer, "  \"bielliptic\": {{")?;
            writeln!(writer, "    \"dv1_kms\": {:.6},", b.dv1)?;
            writeln!(writer, "    \"dv2_kms\": {:.6},", b.dv2)?;
            writeln!(writer, "    \"dv3_kms\": {:.6},", b.dv3)?;
            writeln!(writer, "    \"total_dv_kms\": {:.6},", b.total_dv)?;
            writeln!(writer, "    \"tof_s\": {:.1}", b.tof)?;
            writeln!(writer, "  }}")?;
        }
        None => writeln!(writer, "  }}")?,
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the transfer comparison JSON to a file.
pub fn write_comparison_file(
    path: &str,
    hohmann: &HohmannTransfer,
    bielliptic: Option<&BiellipticTransfer>,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_comparison(&mut file, hohmann, bielliptic)
}
