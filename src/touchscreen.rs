//! Fan-out facade publishing decoded touch points to a set of subscribers.
//!
//! [`Touchscreen`] wraps a [`Gsl1680`] and delivers every decoded point of
//! every report cycle to all registered subscribers. Use it when several
//! independent consumers (cursor layer, UI hit testing, a debug overlay)
//! want the same stream without threading the driver through each of them.
//!
//! ```no_run
//! use embedded_hal_async::{digital::Wait, i2c::{I2c, SevenBitAddress}};
//! use gsl1680::{Gsl1680, Point, Touchscreen};
//!
//! async fn example<I2C, INT, E>(controller: Gsl1680<I2C, INT>) -> Result<(), gsl1680::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   INT: Wait,
//! {
//!   let cursor = |point: Point| { /* move the cursor */ };
//!   let overlay = |point: Point| { /* paint a marker */ };
//!
//!   let mut screen = Touchscreen::new(controller);
//!   screen.on_touch(&cursor)?;
//!   screen.on_touch(&overlay)?;
//!   screen.run().await
//! }
//! ```

use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};
use heapless::Vec;

use crate::event::Point;
use crate::{Error, Gsl1680};

/// Maximum number of subscribers a [`Touchscreen`] can hold.
pub const MAX_SUBSCRIBERS: usize = 4;

/// Fan-out facade on top of [`Gsl1680`].
pub struct Touchscreen<'a, I, INT> {
  controller: Gsl1680<I, INT>,
  subscribers: Vec<&'a dyn Fn(Point), MAX_SUBSCRIBERS>,
}

impl<'a, I, INT> Touchscreen<'a, I, INT> {
  /// Create a new facade wrapping the given controller.
  pub fn new(controller: Gsl1680<I, INT>) -> Self {
    Self { controller, subscribers: Vec::new() }
  }

  /// Consume the facade and return the underlying controller.
  pub fn into_inner(self) -> Gsl1680<I, INT> {
    self.controller
  }

  /// Get a mutable reference to the underlying controller, e.g. to change
  /// the orientation between dispatch cycles.
  pub fn controller(&mut self) -> &mut Gsl1680<I, INT> {
    &mut self.controller
  }
}

impl<'a, I, E, INT> Touchscreen<'a, I, INT>
where
  I: I2c<SevenBitAddress, Error = E>,
  INT: Wait,
{
  /// Register a subscriber.
  ///
  /// Subscribers are invoked synchronously, in registration order, once per
  /// decoded point of each report cycle.
  pub fn on_touch(&mut self, subscriber: &'a dyn Fn(Point)) -> Result<(), Error<E>> {
    self.subscribers.push(subscriber).map_err(|_| Error::SubscriberLimit)
  }

  /// Wait for one falling edge and publish that cycle's decoded points.
  ///
  /// A spurious edge publishes nothing. A bus or configuration error aborts
  /// the cycle before any subscriber runs, so a failed cycle delivers no
  /// points at all. Returns the number of points delivered to each
  /// subscriber.
  pub async fn dispatch_next(&mut self) -> Result<usize, Error<E>> {
    let touches = self.controller.wait_for_touch().await?;
    for point in touches.iter() {
      for subscriber in &self.subscribers {
        subscriber(point);
      }
    }
    Ok(touches.count())
  }

  /// Dispatch report cycles until the first error.
  pub async fn run(&mut self) -> Result<(), Error<E>> {
    loop {
      self.dispatch_next().await?;
    }
  }
}

#[cfg(test)]
mod tests {
  use core::cell::RefCell;

  use embassy_futures::block_on;
  use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

  use crate::reg::{I2C_ADDR, TOUCH_DATA_LEN};
  use crate::testutil::ReadyPin;
  use crate::{Config, Error, Gsl1680, Point, Touchscreen};

  fn frame_with(head: &[u8]) -> Vec<u8> {
    let mut frame = vec![0u8; TOUCH_DATA_LEN];
    frame[..head.len()].copy_from_slice(head);
    frame
  }

  #[test]
  fn publishes_each_point_to_every_subscriber_in_order() {
    let i2c = Mock::new(&[
      Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x02]),
      Transaction::write_read(I2C_ADDR, vec![0x80], frame_with(&[0x0A, 0x00, 0x14, 0x00, 0x1E, 0x00, 0x28, 0x00])),
    ]);

    let log = RefCell::new(Vec::new());
    let first = |p: Point| log.borrow_mut().push(("first", p));
    let second = |p: Point| log.borrow_mut().push(("second", p));

    let mut screen = Touchscreen::new(Gsl1680::new(i2c, ReadyPin, Config::default()));
    screen.on_touch(&first).unwrap();
    screen.on_touch(&second).unwrap();

    let delivered = block_on(screen.dispatch_next()).unwrap();
    let (mut i2c, _int) = screen.into_inner().release();
    i2c.done();

    assert_eq!(delivered, 2);
    assert_eq!(
      log.into_inner(),
      vec![
        ("first", Point::new(10, 20)),
        ("second", Point::new(10, 20)),
        ("first", Point::new(30, 40)),
        ("second", Point::new(30, 40)),
      ]
    );
  }

  #[test]
  fn spurious_cycle_publishes_nothing() {
    let i2c = Mock::new(&[Transaction::write_read(I2C_ADDR, vec![0x80], vec![0x00])]);

    let hits = RefCell::new(0usize);
    let count = |_p: Point| *hits.borrow_mut() += 1;

    let mut screen = Touchscreen::new(Gsl1680::new(i2c, ReadyPin, Config::default()));
    screen.on_touch(&count).unwrap();

    let delivered = block_on(screen.dispatch_next()).unwrap();
    let (mut i2c, _int) = screen.into_inner().release();
    i2c.done();

    assert_eq!(delivered, 0);
    assert_eq!(hits.into_inner(), 0);
  }

  #[test]
  fn registration_past_capacity_is_rejected() {
    let i2c = Mock::new(&[]);
    let noop = |_p: Point| {};

    let mut screen = Touchscreen::new(Gsl1680::new(i2c, ReadyPin, Config::default()));
    for _ in 0..super::MAX_SUBSCRIBERS {
      screen.on_touch(&noop).unwrap();
    }
    assert!(matches!(screen.on_touch(&noop), Err(Error::SubscriberLimit)));

    let (mut i2c, _int) = screen.into_inner().release();
    i2c.done();
  }
}
