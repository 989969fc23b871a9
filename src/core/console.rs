use crate::domain::model::RenderedGrid;
use crate::domain::registry::AntennaRegistry;
use std::io::{self, Write};

pub const ANTENNA_LISTING_HEADER: &str = "Lista de Antenas:";
pub const GRID_HEADER: &str = "Mapa da matriz:";

pub fn write_antenna_listing<W: Write>(out: &mut W, registry: &AntennaRegistry) -> io::Result<()> {
    writeln!(out, "{}", ANTENNA_LISTING_HEADER)?;
    for antenna in registry.iter() {
        writeln!(out, "{}", antenna)?;
    }
    Ok(())
}

pub fn write_grid<W: Write>(out: &mut W, grid: &RenderedGrid) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", GRID_HEADER)?;
    write!(out, "{}", grid)
}

pub fn write_export_confirmation<W: Write>(out: &mut W, path: &str) -> io::Result<()> {
    writeln!(out, "Lista ligada gravada com sucesso em \"{}\".", path)
}
