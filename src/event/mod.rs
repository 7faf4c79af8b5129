use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::{Reg, DECODED_SLOTS, TOUCH_DATA_LEN};
use crate::{Error, Gsl1680};

mod touchpoint;

pub use touchpoint::Point;
pub(crate) use touchpoint::decode_slot;

impl<I, E, INT> Gsl1680<I, INT>
where
  I: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
{
  /// Await the next report cycle that carries at least one contact.
  ///
  /// Spurious interrupts (the controller asserts the line but reports a
  /// count of zero) are drained silently and waiting resumes.
  pub async fn next_touches(&mut self) -> Result<Touches, Error<E>> {
    loop {
      let touches = self.wait_for_touch().await?;
      if !touches.is_empty() {
        return Ok(touches);
      }
    }
  }

  /// Await one falling edge on the interrupt line, then drain that single
  /// report cycle.
  ///
  /// This is the per-interrupt contract: one edge, one count read, and
  /// either nothing (spurious or already-drained cycle) or both decoded
  /// finger slots.
  pub async fn wait_for_touch(&mut self) -> Result<Touches, Error<E>> {
    self.wait_for_data_ready().await?;
    self.poll_touches().await
  }

  /// Read the touch count and, when it is non-zero, the full data block.
  ///
  /// Both finger slots are decoded whenever the count is non-zero; the
  /// two-slot readout is fixed and not derived from the reported count.
  pub async fn poll_touches(&mut self) -> Result<Touches, Error<E>> {
    let reported = self.read_u8(Reg::Data).await?;
    if reported == 0 {
      return Ok(Touches::NONE);
    }

    let mut frame = [0u8; TOUCH_DATA_LEN];
    self.read_bytes(Reg::Data, &mut frame).await?;

    // Snapshot the configuration once per cycle so a racing setter cannot
    // tear a half-applied remap.
    let config = self.config;
    let primary = config.remap(decode_slot(&frame, 0)).ok_or(Error::InvalidExtents)?;
    let secondary = config.remap(decode_slot(&frame, 1)).ok_or(Error::InvalidExtents)?;

    Ok(Touches { reported, primary, secondary })
  }

  /// Wait for the controller to pull the interrupt line low, signalling a
  /// report is ready to be drained.
  async fn wait_for_data_ready(&mut self) -> Result<(), Error<E>> {
    self.int.wait_for_falling_edge().await.map_err(|_| unreachable!())
  }
}

/// Snapshot of one report cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Touches {
  /// Raw contact count from the touch count register (0..=5).
  pub reported: u8,
  /// First fixed finger slot, orientation applied.
  pub primary: Point,
  /// Second fixed finger slot, orientation applied.
  pub secondary: Point,
}

impl Touches {
  pub(crate) const NONE: Self = Self { reported: 0, primary: Point::new(0, 0), secondary: Point::new(0, 0) };

  /// `true` when the cycle carried no contacts.
  pub fn is_empty(&self) -> bool {
    self.reported == 0
  }

  /// Number of decoded points in this snapshot: zero or both slots.
  pub fn count(&self) -> usize {
    if self.is_empty() {
      0
    } else {
      DECODED_SLOTS
    }
  }

  /// Iterate the decoded points of this cycle, primary first.
  pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
    [self.primary, self.secondary].into_iter().take(self.count())
  }
}

#[cfg(test)]
mod tests {
  use embassy_futures::block_on;
  use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

  use crate::reg::{I2C_ADDR, TOUCH_DATA_LEN};
  use crate::testutil::ReadyPin;
  use crate::{Config, Error, Gsl1680, Orientation, Point};

  fn frame_with(head: &[u8]) -> Vec<u8> {
    let mut frame = vec![0u8; TOUCH_DATA_LEN];
    frame[..head.len()].copy_from_slice(head);
    frame
  }

  #[test]
  fn zero_count_ends_the_cycle() {
    // Count of zero: the data block is never read and nothing is reported.
    let i2c = Mock::new(&[Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x00])]);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());

    let touches = block_on(touch.poll_touches()).unwrap();
    assert!(touches.is_empty());
    assert_eq!(touches.count(), 0);
    assert_eq!(touches.iter().count(), 0);

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  #[test]
  fn both_slots_decode_even_for_one_contact() {
    let i2c = Mock::new(&[
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x01]),
      Transaction::write_read(I2C_ADDR, vec![0x80], frame_with(&[0x34, 0x02, 0x78, 0x06, 0x0A, 0x01, 0x0B, 0x02])),
    ]);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());

    let touches = block_on(touch.poll_touches()).unwrap();
    assert_eq!(touches.reported, 1);
    assert_eq!(touches.count(), 2);
    assert_eq!(touches.primary, Point::new(0x234, 0x678));
    assert_eq!(touches.secondary, Point::new(0x10A, 0x20B));

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  #[test]
  fn rotation_without_extents_drops_the_cycle() {
    let i2c = Mock::new(&[
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x02]),
      Transaction::write_read(I2C_ADDR, vec![0x80], frame_with(&[0x1E, 0x00, 0x28, 0x00])),
    ]);
    let config = Config::new(0, 100, Orientation::Deg90);
    let mut touch = Gsl1680::new(i2c, ReadyPin, config);

    assert!(matches!(block_on(touch.poll_touches()), Err(Error::InvalidExtents)));

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  #[test]
  fn rotation_is_applied_to_both_slots() {
    // Raw (30, 40) reflected on a 100x100 panel lands at (70, 60).
    let i2c = Mock::new(&[
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x02]),
      Transaction::write_read(I2C_ADDR, vec![0x80], frame_with(&[0x1E, 0x00, 0x28, 0x00, 0x0A, 0x00, 0x14, 0x00])),
    ]);
    let config = Config::new(100, 100, Orientation::Deg180);
    let mut touch = Gsl1680::new(i2c, ReadyPin, config);

    let touches = block_on(touch.poll_touches()).unwrap();
    assert_eq!(touches.primary, Point::new(70, 60));
    assert_eq!(touches.secondary, Point::new(90, 80));

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  #[test]
  fn wait_for_touch_drains_one_cycle_per_edge() {
    let i2c = Mock::new(&[Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x00])]);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());

    let touches = block_on(touch.wait_for_touch()).unwrap();
    assert!(touches.is_empty());

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }

  #[test]
  fn next_touches_skips_spurious_cycles() {
    let i2c = Mock::new(&[
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x00]),
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x01]),
      Transaction::write_read(I2C_ADDR, vec![0x80], frame_with(&[0x34, 0x02, 0x78, 0x06])),
    ]);
    let mut touch = Gsl1680::new(i2c, ReadyPin, Config::default());

    let touches = block_on(touch.next_touches()).unwrap();
    assert_eq!(touches.primary, Point::new(0x234, 0x678));

    let (mut i2c, _int) = touch.release();
    i2c.done();
  }
}
