use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_scenarios_csv(path: &Path, rows: &[(&str, &str, usize, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["group_name", "room_price", "slots", "customer"])?;
    for (group, price, slots, customer) in rows {
        let slots = slots.to_string();
        wtr.write_record([*group, *price, slots.as_str(), *customer])?;
    }

    wtr.flush()?;
    Ok(())
}
