use std::io::{self, Write};

use crate::sim::event::EventRecord;
use crate::sim::propagator::Trajectory;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, y, z, vx, vy, vz
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "time,x,y,z,vx,vy,vz")?;

    for (t, y) in trajectory.iter() {
        writeln!(
            writer,
            "{:.4},{:.6},{:.6},{:.6},{:.9},{:.9},{:.9}",
            t, y[0], y[1], y[2], y[3], y[4], y[5],
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

/// Write detected events to CSV format.
///
/// Columns: time, event, x, y, z, vx, vy, vz
pub fn write_events<W: Write>(writer: &mut W, events: &[EventRecord]) -> io::Result<()> {
    writeln!(writer, "time,event,x,y,z,vx,vy,vz")?;

    for e in events {
        let y = &e.state;
        writeln!(
            writer,
            "{:.4},{},{:.6},{:.6},{:.6},{:.9},{:.9},{:.9}",
            e.time, e.name, y[0], y[1], y[2], y[3], y[4], y[5],
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector6;

    fn short_trajectory() -> Trajectory {
        Trajectory {
            times: vec![0.0, 60.0],
            states: vec![
                Vector6::new(6571.0, 0.0, 0.0, 0.0, 7.7885, 0.0),
                Vector6::new(6570.0, 467.0, 0.0, -0.55, 7.787, 0.0),
            ],
            steps: 1,
        }
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &short_trajectory()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,y,z,vx,vy,vz");
        assert_eq!(lines.len(), 3); // header + 2 samples
        assert!(lines[1].starts_with("0.0000,6571.000000,"));
    }

    #[test]
    fn event_csv_carries_names() {
        let events = vec![EventRecord {
            time: 1380.0,
            state: Vector6::new(-12.3, 6571.0, 0.0, -7.78, 0.01, 0.0),
            name: "x-plane".into(),
        }];

        let mut buf = Vec::new();
        write_events(&mut buf, &events).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.lines().nth(1).unwrap().contains("x-plane"));
    }
}
