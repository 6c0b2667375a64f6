#![no_std]
//! This is a platform agnostic library for the Microchip 23LC serial SRAM series using [embedded-hal](https://github.com/rust-embedded/embedded-hal).
//!
//! Multiple chips are supported:
//! * [23A1024/23LC1024](https://ww1.microchip.com/downloads/en/DeviceDoc/20005142C.pdf) (128KB)
//! * [23LCV1024](https://ww1.microchip.com/downloads/en/DeviceDoc/25156A.pdf) (128KB)
//! * [23A512/23LC512](https://ww1.microchip.com/downloads/en/DeviceDoc/20005155B.pdf) (64KB)
//! * [23LCV512](https://ww1.microchip.com/downloads/en/DeviceDoc/25157A.pdf) (64KB)
//! * [23A256/23K256](http://ww1.microchip.com/downloads/en/DeviceDoc/22100F.pdf) (32KB)
//! * [23A640/23K640](http://ww1.microchip.com/downloads/en/DeviceDoc/22126E.pdf) (8KB)
//!
//! The driver speaks the family's four command protocol (READ, WRITE, RDMR,
//! WRMR) over an [`SpiDevice`](embedded_hal::spi::SpiDevice). Chips above
//! 64KB latch a 3-byte address, all others a 2-byte address; the width is
//! derived from the capacity of the chosen type alias, never configured.
//!
//! The `SpiDevice` must be set up for SPI mode 0, MSB first, at or below the
//! 20MHz family limit, with the chip select idling high. Call
//! [`blocking::Sram23lc::init`] once after power-up to put the chip in
//! sequential mode before using the block operations.

pub mod asynchronous;
pub mod blocking;
mod command;
pub mod error;
pub mod register;

use crate::error::Error;

pub(crate) fn check_range<E>(capacity: usize, offset: u32, length: usize) -> Result<(), Error<E>> {
    let capacity = capacity as u32;
    let length = length as u32;
    if length > capacity || offset > capacity - length {
        return Err(Error::OutOfBounds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_covers_the_tail() {
        assert!(check_range::<()>(0x2000, 0, 0x2000).is_ok());
        assert!(check_range::<()>(0x2000, 0x1FFF, 1).is_ok());
        assert_eq!(
            check_range::<()>(0x2000, 0x1FFF, 2),
            Err(Error::OutOfBounds)
        );
        assert_eq!(check_range::<()>(0x2000, 0x2000, 1), Err(Error::OutOfBounds));
    }
}
