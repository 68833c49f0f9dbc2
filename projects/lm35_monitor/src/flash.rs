//! Log sink backed by the top of the Pico's 2 MB on-board flash.
//!
//! Every record occupies one 256-byte flash page (line bytes, a newline, 0xFF
//! padding), so a line is fully programmed before the next one starts and a
//! reset never leaves a torn line behind. The whole region is erased on boot.

use rp_pico::hal::rom_data;

use crate::logger::{LogError, LogSink};

/// Offset of the log region from the start of flash. 64 KiB-aligned so the
/// block-erase ROM routine can be used.
pub const LOG_OFFSET: u32 = 0x001F_0000;
/// Size of the log region in bytes.
pub const LOG_SIZE: usize = 64 * 1024;

const PAGE_SIZE: usize = 256;
const BLOCK_SIZE: u32 = 65536;
const BLOCK_ERASE_CMD: u8 = 0xd8;

/// Append-only line log in a reserved flash region.
pub struct FlashSink {
    cursor: usize,
}

impl FlashSink {
    pub fn new() -> Self {
        FlashSink { cursor: 0 }
    }

    /// Lines recorded since the last `initialize`.
    pub fn lines_written(&self) -> usize {
        self.cursor / PAGE_SIZE
    }
}

impl Default for FlashSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for FlashSink {
    fn initialize(&mut self) -> Result<(), LogError> {
        cortex_m::interrupt::free(|_| unsafe { erase_region(LOG_OFFSET, LOG_SIZE) });
        self.cursor = 0;
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<(), LogError> {
        if line.len() + 1 > PAGE_SIZE {
            return Err(LogError::LineTooLong);
        }
        if self.cursor + PAGE_SIZE > LOG_SIZE {
            return Err(LogError::Full);
        }
        let mut page = [0xffu8; PAGE_SIZE];
        page[..line.len()].copy_from_slice(line.as_bytes());
        page[line.len()] = b'\n';

        let addr = LOG_OFFSET + self.cursor as u32;
        cortex_m::interrupt::free(|_| unsafe { program_page(addr, &page) });
        self.cursor += PAGE_SIZE;
        Ok(())
    }
}

// The ROM function pointers are resolved while XIP is still enabled; from
// `flash_exit_xip` until `flash_enter_cmd_xip` only ROM code and this RAM-placed
// function may execute. Callers must hold interrupts disabled.

#[inline(never)]
#[link_section = ".data.ram_func"]
unsafe fn erase_region(addr: u32, len: usize) {
    let connect = rom_data::connect_internal_flash::ptr();
    let exit_xip = rom_data::flash_exit_xip::ptr();
    let erase = rom_data::flash_range_erase::ptr();
    let flush = rom_data::flash_flush_cache::ptr();
    let enter_xip = rom_data::flash_enter_cmd_xip::ptr();

    connect();
    exit_xip();
    erase(addr, len, BLOCK_SIZE, BLOCK_ERASE_CMD);
    flush();
    enter_xip();
}

#[inline(never)]
#[link_section = ".data.ram_func"]
unsafe fn program_page(addr: u32, page: &[u8; PAGE_SIZE]) {
    let connect = rom_data::connect_internal_flash::ptr();
    let exit_xip = rom_data::flash_exit_xip::ptr();
    let program = rom_data::flash_range_program::ptr();
    let flush = rom_data::flash_flush_cache::ptr();
    let enter_xip = rom_data::flash_enter_cmd_xip::ptr();

    connect();
    exit_xip();
    program(addr, page.as_ptr(), PAGE_SIZE);
    flush();
    enter_xip();
}
