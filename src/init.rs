use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::fw::FIRMWARE;
use crate::reg::{Reg, CLOCK_SELECT, CMD_RESET, CMD_START, STARTUP_DELAY_MS, STEP_DELAY_MS, TOUCH_NR_MAX};
use crate::{Error, Gsl1680};

impl<I, E, INT> Gsl1680<I, INT>
where
  I: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
{
  pub(super) async fn bring_up(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
    self.init_registers(delay).await?;
    self.reset_chip(delay).await?;
    self.load_firmware().await?;
    self.start_chip(delay).await
  }

  /// First contact with the controller: pulse reset, raise the tracked
  /// contact limit, select the clock source, and start the core once.
  async fn init_registers(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
    self.write_u8(Reg::Reset, CMD_RESET).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    self.write_u8(Reg::Data, TOUCH_NR_MAX).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    self.write_u8(Reg::Clock, CLOCK_SELECT).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    self.write_u8(Reg::Reset, CMD_START).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    Ok(())
  }

  /// Hold the core in reset so the firmware upload lands in a well-defined
  /// memory state.
  async fn reset_chip(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
    self.write_u8(Reg::Reset, CMD_RESET).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    self.write_u8(Reg::Clock, CLOCK_SELECT).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    self.write_u8(Reg::Power, CMD_START).await?;
    delay.delay_ms(STEP_DELAY_MS).await;
    Ok(())
  }

  /// Replay the vendor memory image in table order.
  ///
  /// Entries addressed at the page-select register switch the active
  /// 128-byte window; every other entry is a word offset within it. The
  /// words are opaque and must reach the controller exactly as stored.
  async fn load_firmware(&mut self) -> Result<(), Error<E>> {
    for &(addr, value) in FIRMWARE {
      self.write_u32(addr, value).await?;
    }
    Ok(())
  }

  async fn start_chip(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
    self.write_u8(Reg::Reset, CMD_START).await?;
    delay.delay_ms(STARTUP_DELAY_MS).await;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use embassy_futures::block_on;
  use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

  use crate::fw::FIRMWARE;
  use crate::reg::I2C_ADDR;
  use crate::testutil::{NoDelay, ReadyPin};
  use crate::{Config, Gsl1680};

  fn command(reg: u8, value: u8) -> Transaction {
    Transaction::write(I2C_ADDR, vec![reg, value])
  }

  /// The full bring-up, transaction for transaction: init commands, reset
  /// commands, the entire vendor image byte-for-byte, and the final start.
  #[test]
  fn bring_up_replays_the_vendor_image_verbatim() {
    let mut expected = vec![
      command(0xE0, 0x88),
      command(0x80, 0x05),
      command(0xE4, 0x04),
      command(0xE0, 0x00),
      command(0xE0, 0x88),
      command(0xE4, 0x04),
      command(0xBC, 0x00),
    ];
    for &(addr, value) in FIRMWARE {
      let v = value.to_le_bytes();
      expected.push(Transaction::write(I2C_ADDR, vec![addr, v[0], v[1], v[2], v[3]]));
    }
    expected.push(command(0xE0, 0x00));

    let i2c = Mock::new(&expected);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());
    block_on(touch.initialize(&mut NoDelay)).unwrap();

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  /// A bus failure mid-sequence aborts construction outright.
  #[test]
  fn bring_up_fails_fast_on_bus_error() {
    use embedded_hal::i2c::ErrorKind;

    let expected = [command(0xE0, 0x88), command(0x80, 0x05).with_error(ErrorKind::Other)];
    let i2c = Mock::new(&expected);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());

    assert!(block_on(touch.initialize(&mut NoDelay)).is_err());

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }
}
