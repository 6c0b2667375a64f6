use crate::{
    check_range,
    command::{frame, Command},
    error::Error,
    register::OperatingMode,
};
use embedded_hal::spi::Operation;
use embedded_hal_async::spi::SpiDevice;

/// Type alias for the AsyncSram23lcv1024, 128KB
pub type AsyncSram23lcv1024<SPI> = AsyncSram23lc<0x20000, SPI>;

/// Type alias for the AsyncSram23lc1024, 128KB
pub type AsyncSram23lc1024<SPI> = AsyncSram23lc<0x20000, SPI>;

/// Type alias for the AsyncSram23a1024, 128KB
pub type AsyncSram23a1024<SPI> = AsyncSram23lc<0x20000, SPI>;

/// Type alias for the AsyncSram23lcv512, 64KB
pub type AsyncSram23lcv512<SPI> = AsyncSram23lc<0x10000, SPI>;

/// Type alias for the AsyncSram23lc512, 64KB
pub type AsyncSram23lc512<SPI> = AsyncSram23lc<0x10000, SPI>;

/// Type alias for the AsyncSram23a512, 64KB
pub type AsyncSram23a512<SPI> = AsyncSram23lc<0x10000, SPI>;

/// Type alias for the AsyncSram23a256, 32KB
pub type AsyncSram23a256<SPI> = AsyncSram23lc<0x8000, SPI>;

/// Type alias for the AsyncSram23k256, 32KB
pub type AsyncSram23k256<SPI> = AsyncSram23lc<0x8000, SPI>;

/// Type alias for the AsyncSram23a640, 8KB
pub type AsyncSram23a640<SPI> = AsyncSram23lc<0x2000, SPI>;

/// Type alias for the AsyncSram23k640, 8KB
pub type AsyncSram23k640<SPI> = AsyncSram23lc<0x2000, SPI>;

/// The generic async 23LC serial SRAM driver
pub struct AsyncSram23lc<const CAPACITY: u32, SPI>
where
    SPI: SpiDevice,
{
    spi: SPI,
}

impl<const CAPACITY: u32, SPI, E> AsyncSram23lc<CAPACITY, SPI>
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
    /// any block operation
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        self.write_mode(OperatingMode::Sequential).await
    }

    /// Read a single byte from an address
    pub async fn read_byte(&mut self, addr: u32) -> Result<u8, Error<E>> {
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Read, addr, CAPACITY);
        let mut buff = [Command::Dummy as u8];
        self.spi
            .transaction(&mut [
                Operation::Write(&cmd[..len]),
                Operation::TransferInPlace(&mut buff),
            ])
            .await
            .map_err(Error::Spi)?;
        Ok(buff[0])
    }

    /// Write a single byte to an address
    pub async fn write_byte(&mut self, addr: u32, byte: u8) -> Result<(), Error<E>> {
        let addr = Self::verify_addr(addr)?;
        let (cmd, len) = frame(Command::Write, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Write(&[byte])])
            .await
            .map_err(Error::Spi)
    }

    /// Read `buff.len()` consecutive bytes starting at `addr` in one
    /// unbroken transaction. Only the start address is validated: the
    /// caller must ensure `addr + buff.len() <= capacity`, past the end the
    /// chip wraps to address zero
    pub async fn read(&mut self, addr: u32, buff: &mut [u8]) -> Result<(), Error<E>> {
        if buff.is_empty() {
            return Ok(());
        }
        let addr = Self::verify_addr(addr)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("read {=u32} len {=usize}", addr, buff.len());
        let (cmd, len) = frame(Command::Read, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Read(buff)])
            .await
            .map_err(Error::Spi)
    }

    /// Write `buff` starting at `addr` in one unbroken transaction. Same
    /// start-only validation contract as [`Self::read`]
    pub async fn write(&mut self, addr: u32, buff: &[u8]) -> Result<(), Error<E>> {
        if buff.is_empty() {
            return Ok(());
        }
        let addr = Self::verify_addr(addr)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("write {=u32} len {=usize}", addr, buff.len());
        let (cmd, len) = frame(Command::Write, addr, CAPACITY);
        self.spi
            .transaction(&mut [Operation::Write(&cmd[..len]), Operation::Write(buff)])
            .await
            .map_err(Error::Spi)
    }

    /// Read the mode register
    pub async fn read_mode(&mut self) -> Result<OperatingMode, Error<E>> {
        let mut cmd: [u8; 2] = [Command::ReadMode as u8, 0];
        self.spi
            .transfer_in_place(&mut cmd)
            .await
            .map_err(Error::Spi)?;
        Ok(cmd[1].into())
    }

    /// Write the mode register
    pub async fn write_mode(&mut self, mode: OperatingMode) -> Result<(), Error<E>> {
        self.spi
            .write(&[Command::WriteMode as u8, mode as u8])
            .await
            .map_err(Error::Spi)
    }
}

/// Implementation of the byte-addressable `Storage` traits of the
/// `embedded_storage_async` crate. Unlike the inherent operations these
/// validate the whole `offset + len` range, and they expect the chip to be
/// in sequential mode, see [`AsyncSram23lc::init`].
mod es {
    use super::*;
    use embedded_storage_async::{ReadStorage, Storage};

    impl<const CAPACITY: u32, SPI, E> ReadStorage for AsyncSram23lc<CAPACITY, SPI>
    where
        SPI: SpiDevice<Error = E>,
    {
        type Error = Error<E>;

        async fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
            check_range(Self::capacity(), offset, bytes.len())?;
            AsyncSram23lc::read(self, offset, bytes).await
        }

        fn capacity(&self) -> usize {
            Self::capacity()
        }
    }

    impl<const CAPACITY: u32, SPI, E> Storage for AsyncSram23lc<CAPACITY, SPI>
    where
        SPI: SpiDevice<Error = E>,
    {
        async fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
            check_range(Self::capacity(), offset, bytes.len())?;
            AsyncSram23lc::write(self, offset, bytes).await
        }
    }
}
