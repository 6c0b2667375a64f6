/// Commands supported by every chip of the 23LC family
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write the mode register
    WriteMode = 0x01,
    /// Write data to memory
    Write = 0x02,
    /// Read data from memory
    Read = 0x03,
    /// Read the mode register
    ReadMode = 0x05,
    /// Placeholder byte clocked out while reading
    Dummy = 0xFF,
}

/// Serialize a command and its address field into a wire frame.
///
/// The address is big-endian and its width follows from the chip capacity:
/// chips above 64KB latch 3 address bytes, all others latch 2. Returns the
/// frame buffer and the number of valid bytes in it.
pub fn frame(cmd: Command, addr: u32, capacity: u32) -> ([u8; 4], usize) {
    let mut frame = [0; 4];
    frame[0] = cmd as u8;
    if capacity > 0x10000 {
        frame[1] = (addr >> 16) as u8;
        frame[2] = (addr >> 8) as u8;
        frame[3] = addr as u8;
        (frame, 4)
    } else {
        frame[1] = (addr >> 8) as u8;
        frame[2] = addr as u8;
        (frame, 3)
    }
}
