use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::warehouse::Warehouse;
use crate::LoadLevel;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Warehouse, Box<dyn Error>> {
        let level = read_file(self)?;
        Ok(level.parse()?)
    }
}
