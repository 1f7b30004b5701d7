use std::{env, error::Error};

use qrlite::{QRBuilder, EC_LEN, VERSION};

fn main() -> Result<(), Box<dyn Error>> {
    let text = env::args().nth(1).unwrap_or_else(|| "HELLO WORLD".to_string());

    let symbol = QRBuilder::new(&text).build()?;
    println!("{}", symbol.to_str(1));

    let total_modules = symbol.width() * symbol.width();
    let dark_modules = symbol.count_dark_modules();
    let light_modules = total_modules - dark_modules;

    println!("Report:");
    println!("{{ Version: {}, Width: {}, Ec len: {} }}", *VERSION, symbol.width(), EC_LEN);
    println!(
        "Dark Cells: {}, Light Cells: {}, Balance: {}%",
        dark_modules,
        light_modules,
        dark_modules * 100 / total_modules
    );

    Ok(())
}
