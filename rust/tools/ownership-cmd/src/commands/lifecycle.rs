//! Lifecycle command implementation

use std::io::Write;

use anyhow::Result;
use ownership_cell::OwnershipCell;

fn report<T: std::fmt::Display>(
    out: &mut impl Write,
    step: &str,
    cell: &OwnershipCell<T>,
) -> Result<()> {
    match cell.get() {
        Some(value) => writeln!(out, "{step:<12} {:<9} {value}", cell.state())?,
        None => writeln!(out, "{step:<12} {}", cell.state())?,
    }
    Ok(())
}

pub fn run(value: i64, out: &mut impl Write) -> Result<()> {
    let mut cell = OwnershipCell::<i64>::default();
    report(out, "default", &cell)?;

    cell.reset(Box::new(value));
    report(out, "reset", &cell)?;

    let mut other = OwnershipCell::new(value.wrapping_add(1));
    cell.swap(&mut other);
    report(out, "swap", &cell)?;

    cell.move_from(&mut other);
    report(out, "move_from", &cell)?;
    report(out, "  source", &other)?;

    let released = cell.release();
    report(out, "release", &cell)?;

    let mut adopted = released.map(OwnershipCell::from_box).unwrap_or_default();
    report(out, "adopt", &adopted)?;

    adopted.free();
    report(out, "free", &adopted)?;
    Ok(())
}
