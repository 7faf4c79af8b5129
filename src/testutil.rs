//! Peripheral stubs shared by the host-side tests.

use embedded_hal::digital::ErrorType;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

/// Interrupt line that is already asserted: every wait resolves at once.
pub(crate) struct ReadyPin;

impl ErrorType for ReadyPin {
  type Error = core::convert::Infallible;
}

impl Wait for ReadyPin {
  async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// Timer that skips the bring-up settling delays.
pub(crate) struct NoDelay;

impl DelayNs for NoDelay {
  async fn delay_ns(&mut self, _ns: u32) {}
}
