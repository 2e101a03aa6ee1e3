//! Demo command implementation

use std::io::Write;

use anyhow::Result;
use ownership_cell::{CellState, OwnershipCell};

pub fn run(value: i64, out: &mut impl Write) -> Result<()> {
    let mut first = OwnershipCell::from_box(Box::new(value));
    writeln!(out, "{}", first.try_get()?)?;

    let mut second = first.take();
    log::debug!("first cell after move: {}", first.state());
    writeln!(out, "{}", second.try_get()?)?;

    second.free();

    if second.state() == CellState::Released {
        writeln!(out, "second cell has been released.")?;
    }
    Ok(())
}
