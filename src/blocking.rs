use crate::{
    check_range,
    command::{frame, Command},
    error::Error,
    register::OperatingMode,
};
use embedded_hal::spi::{Operation, SpiDevice};

/// Type alias for the 23LCV1024, 128KB
pub type Sram23lcv1024<SPI> = Sram23lc<0x20000, SPI>;

/// Type alias for the 23LC1024, 128KB
pub type Sram23lc1024<SPI> = Sram23lc<0x20000, SPI>;

/// Type alias for the 23A1024, 128KB
pub type Sram23a1024<SPI> = Sram23lc<0x20000, SPI>;

/// Type alias for the 23LCV512, 64KB
pub type Sram23lcv512<SPI> = Sram23lc<0x10000, SPI>;

/// Type alias for the 23LC512, 64KB
pub type Sram23lc512<SPI> = Sram23lc<0x10000, SPI>;

/// Type alias for the 23A512, 64KB
pub type Sram23a512<SPI> = Sram23lc<0x10000, SPI>;

/// Type alias for the 23A256, 32KB
pub type Sram23a256<SPI> = Sram23lc<0x8000, SPI>;

/// Type alias for the 23K256, 32KB
pub type Sram23k256<SPI> = Sram23lc<0x8000, SPI>;

/// Type alias for the 23A640, 8KB
pub type Sram23a640<SPI> = Sram23lc<0x2000, SPI>;

/// Type alias for the 23K640, 8KB
pub type Sram23k640<SPI> = Sram23lc<0x2000, SPI>;

/// The generic 23LC serial SRAM driver
///
/// `CAPACITY` is the addressable size in bytes and selects the address
/// width on the wire: 3 bytes above 64KB, 2 bytes otherwise. Use the
/// per-chip type aliases instead of spelling the capacity out.
pub struct Sram23lc<const CAPACITY: u32, SPI>
where
    SPI: SpiDevice,
{
    spi: SPI,
}

impl<const CAPACITY: u32, SPI, E> Sram23lc<CAPACITY, SPI>
where
    SPI: SpiDevice<Error = E>,
{
    /// Addressable size of the chip in bytes
    pub const fn capacity() -> usize {
        CAPACITY as usize
    }

    /// Create a new instance. No bus traffic is performed, see [`Self::init`]
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the underlying bus device
    pub fn release(self) -> SPI {
        self.spi
    }

    fn verify_addr(addr: u32) -> Result<u32, Error<E>> {
        if addr >= CAPACITY {
            return Err(Error::OutOfBounds);
        }
        Ok(addr)
    }

    /// Put the chip in sequential mode. Call once after power-up, before
    /// any block operation: [`Self::read`] and [`Self::write`] rely on the
    /// sequential-mode address auto-increment to stream a whole buffer in
    /// one transaction
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.write_mode(OperatingMode::Sequential)
    }

    /// Read a single byte from an address
    pub fn read_byte(&mut self, addr: u32) -> Result<u8, Error<E>> {
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Read, addr, CAPACITY);
        let mut buff = [Command::Dummy as u8];
        self.spi
            .transaction(&mut [
                Operation::Write(&cmd[..len]),
                Operation::TransferInPlace(&mut buff),
            ])
            .map_err(Error::Spi)?;
        Ok(buff[0])
    }

    /// Write a single byte to an address
    pub fn write_byte(&mut self, addr: u32, byte: u8) -> Result<(), Error<E>> {
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Write, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Write(&[byte])])
            .map_err(Error::Spi)
    }

    /// Read `buff.len()` consecutive bytes starting at `addr` in one
    /// unbroken transaction. Only the start address is validated: the
    /// caller must ensure `addr + buff.len() <= capacity`, past the end the
    /// chip wraps to address zero
    pub fn read(&mut self, addr: u32, buff: &mut [u8]) -> Result<(), Error<E>> {
        if buff.is_empty() {
            return Ok(());
        }
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Read, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Read(buff)])
            .map_err(Error::Spi)
    }

    /// Write `buff` starting at `addr` in one unbroken transaction. Same
    /// start-only validation contract as [`Self::read`]
    pub fn write(&mut self, addr: u32, buff: &[u8]) -> Result<(), Error<E>> {
        if buff.is_empty() {
            return Ok(());
        }
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Write, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Write(buff)])
            .map_err(Error::Spi)
    }

    /// Read the mode register
    pub fn read_mode(&mut self) -> Result<OperatingMode, Error<E>> {
        let mut cmd: [u8; 2] = [Command::ReadMode as u8, 0];
        self.spi.transfer_in_place(&mut cmd).map_err(Error::Spi)?;
        Ok(cmd[1].into())
    }

    /// Write the mode register
    pub fn write_mode(&mut self, mode: OperatingMode) -> Result<(), Error<E>> {
        self.spi
            .write(&[Command::WriteMode as u8, mode as u8])
            .map_err(Error::Spi)
    }
}

/// Implementation of the byte-addressable `Storage` traits of the
/// `embedded_storage` crate. Unlike the inherent operations these validate
/// the whole `offset + len` range, and they expect the chip to be in
/// sequential mode, see [`Sram23lc::init`].
mod es {
    use super::*;
    use embedded_storage::{ReadStorage, Storage};

    impl<const CAPACITY: u32, SPI, E> ReadStorage for Sram23lc<CAPACITY, SPI>
    where
        SPI: SpiDevice<Error = E>,
    {
        type Error = Error<E>;

        fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            check_range(Self::capacity(), offset, bytes.len())?;
            Sram23lc::read(self, offset, bytes)
        }

        fn capacity(&self) -> usize {
            Self::capacity()
        }
    }

    impl<const CAPACITY: u32, SPI, E> Storage for Sram23lc<CAPACITY, SPI>
    where
        SPI: SpiDevice<Error = E>,
    {
        fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            check_range(Self::capacity(), offset, bytes.len())?;
            Sram23lc::write(self, offset, bytes)
        }
    }
}
