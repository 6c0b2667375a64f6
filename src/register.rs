use bit::BitIndex;

/// Access mode of the chip, held in bits 7:6 of the mode register.
///
/// The chip powers up in [`OperatingMode::Byte`]. Block transfers rely on
/// [`OperatingMode::Sequential`], where the internal address pointer
/// increments automatically for every byte clocked within one transaction,
/// wrapping at the end of the array.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperatingMode {
    /// Read/write operations are limited to a single byte
    Byte = 0b0000_0000,
    /// The entire array is accessible through one transaction
    Sequential = 0b0100_0000,
    /// Read/write operations are limited to the addressed 32-byte page
    Page = 0b1000_0000,
    /// Reserved, do not select
    Reserved = 0b1100_0000,
}

impl From<u8> for OperatingMode {
    fn from(val: u8) -> OperatingMode {
        match val.bit_range(6..8) {
            0b00 => OperatingMode::Byte,
            0b01 => OperatingMode::Sequential,
            0b10 => OperatingMode::Page,
            _ => OperatingMode::Reserved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_register_value() {
        assert_eq!(OperatingMode::from(0b0000_0000), OperatingMode::Byte);
        assert_eq!(OperatingMode::from(0b0100_0000), OperatingMode::Sequential);
        assert_eq!(OperatingMode::from(0b1000_0000), OperatingMode::Page);
        assert_eq!(OperatingMode::from(0b1100_0000), OperatingMode::Reserved);
    }

    #[test]
    fn low_bits_are_ignored() {
        assert_eq!(OperatingMode::from(0b0111_1111), OperatingMode::Sequential);
    }
}
