use std::error::Error;
use cos2_table::{area, read_file, Table};

fn main() -> Result<(), Box<dyn Error>> {
    let path = "/tmp/cos2_output.txt";
    let n = Table::cos2().write_file(path)?;
    let samples = read_file(path)?;
    assert_eq!(samples.len(), n);
    let exact = 500. + 2000f64.sin() / 4.;
    println!("{} samples, area = {} (exact {})", n, area(&samples), exact);
    Ok(())
}
