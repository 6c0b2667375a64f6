//! In-memory stand-in for a 23LC chip behind an `SpiDevice`.
//!
//! Records every byte shifted out per transaction so tests can assert on
//! the exact wire framing, and simulates the chip's command decoding,
//! address latching and sequential-mode auto-increment against a backing
//! array.

#![allow(dead_code)]

use core::convert::Infallible;
use embedded_hal::spi::{ErrorType, Operation};

const WRMR: u8 = 0x01;
const WRITE: u8 = 0x02;
const READ: u8 = 0x03;
const RDMR: u8 = 0x05;

pub struct FakeSram {
    pub mem: Vec<u8>,
    /// Address bytes the simulated chip latches after READ/WRITE, 2 or 3
    pub addr_bytes: usize,
    pub mode: u8,
    /// Bytes shifted out by the driver, one entry per transaction
    pub written: Vec<Vec<u8>>,
}

#[derive(Default)]
struct Frame {
    cmd: Option<u8>,
    pos: usize,
    addr: usize,
}

impl FakeSram {
    pub fn new(capacity: usize, addr_bytes: usize) -> Self {
        Self {
            mem: vec![0; capacity],
            addr_bytes,
            mode: 0,
            written: Vec::new(),
        }
    }

    pub fn transactions(&self) -> usize {
        self.written.len()
    }

    /// Clock one byte out and one byte in
    fn exchange(&mut self, frame: &mut Frame, out: u8) -> u8 {
        let pos = frame.pos;
        frame.pos += 1;
        if pos == 0 {
            frame.cmd = Some(out);
            return 0xFF;
        }
        match frame.cmd {
            Some(WRMR) => {
                self.mode = out;
                0xFF
            }
            Some(RDMR) => self.mode,
            Some(cmd @ (READ | WRITE)) => {
                if pos <= self.addr_bytes {
                    frame.addr = (frame.addr << 8) | out as usize;
                    0xFF
                } else {
                    let addr = frame.addr % self.mem.len();
                    frame.addr += 1;
                    if cmd == WRITE {
                        self.mem[addr] = out;
                        0xFF
                    } else {
                        self.mem[addr]
                    }
                }
            }
            _ => 0xFF,
        }
    }

    fn run(&mut self, operations: &mut [Operation<'_, u8>]) {
        let mut frame = Frame::default();
        let mut log = Vec::new();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    for &out in bytes.iter() {
                        log.push(out);
                        self.exchange(&mut frame, out);
                    }
                }
                Operation::Read(bytes) => {
                    for slot in bytes.iter_mut() {
                        log.push(0x00);
                        *slot = self.exchange(&mut frame, 0x00);
                    }
                }
                Operation::TransferInPlace(bytes) => {
                    for slot in bytes.iter_mut() {
                        let out = *slot;
                        log.push(out);
                        *slot = self.exchange(&mut frame, out);
                    }
                }
                Operation::Transfer(read, write) => {
                    for i in 0..read.len().max(write.len()) {
                        let out = write.get(i).copied().unwrap_or(0x00);
                        log.push(out);
                        let val = self.exchange(&mut frame, out);
                        if let Some(slot) = read.get_mut(i) {
                            *slot = val;
                        }
                    }
                }
                Operation::DelayNs(_) => {}
            }
        }
        self.written.push(log);
    }
}

impl ErrorType for FakeSram {
    type Error = Infallible;
}

impl embedded_hal::spi::SpiDevice for FakeSram {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.run(operations);
        Ok(())
    }
}

impl embedded_hal_async::spi::SpiDevice for FakeSram {
    async fn transaction(
        &mut self,
        operations: &mut [Operation<'_, u8>],
    ) -> Result<(), Self::Error> {
        self.run(operations);
        Ok(())
    }
}
