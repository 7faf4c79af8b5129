/******************************************************************************
 * Silead publishes no datasheet for the GSL16xx family; addresses and       *
 * command values below follow the vendor reference code shipped to panel    *
 * integrators.                                                              *
 * ========================================================================== *
 *                        GSL1680 - Registers & Commands                      *
*******************************************************************************/

pub(crate) const I2C_ADDR: u8 = 0x40;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  // Touch count (1 byte), start of the 44-byte touch data block
  Data = 0x80,
  // Power command register
  Power = 0xBC,
  // Reset/start command register
  Reset = 0xE0,
  // Clock select register
  Clock = 0xE4,
  // Firmware page-select register
  Page = 0xF0,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Written to [`Reg::Reset`] to hold the controller core in reset.
pub(crate) const CMD_RESET: u8 = 0x88;
/// Written to [`Reg::Reset`] or [`Reg::Power`] to (re)start the controller core.
pub(crate) const CMD_START: u8 = 0x00;
/// Clock source selection expected by the controller.
pub(crate) const CLOCK_SELECT: u8 = 0x04;
/// Number of contacts the firmware is asked to track.
pub(crate) const TOUCH_NR_MAX: u8 = 5;
/// Length of the touch data block drained on every interrupt.
pub(crate) const TOUCH_DATA_LEN: usize = 44;
/// Finger slots decoded out of each data block. The controller tracks up to
/// [`TOUCH_NR_MAX`] contacts, but the readout covers the two fixed slots.
pub(crate) const DECODED_SLOTS: usize = 2;
/// Settling time between consecutive bring-up commands.
pub(crate) const STEP_DELAY_MS: u32 = 10;
/// Settling time after the final start command.
pub(crate) const STARTUP_DELAY_MS: u32 = 30;
