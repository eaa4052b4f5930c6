use std::{error::Error,
          fs::File,
          io::{BufWriter, Write}};
use cos2_table::{cos2, Table};

fn main() -> Result<(), Box<dyn Error>> {
    let mut t = Table::new(cos2, 0., 10., 0.05)?;
    t.write(&mut BufWriter::new(File::create("/tmp/cos2.dat")?))?;

    // Same grid, another function.
    let mut t = Table::new(|x: f64| x.sin().powi(2), 0., 10., 0.05)?;
    t.write_file("/tmp/sin2.dat")?;

    let mut fh = File::create("/tmp/cos2.gp")?;
    write!(fh, "set terminal pngcairo\n\
                set grid\n\
                set output \"cos2.png\"\n\
                plot '/tmp/cos2.dat' with l lt 1 lw 2 title \"cos²\", \
                '/tmp/sin2.dat' with l lt 3 lw 2 title \"sin²\"\n")?;
    Ok(())
}
